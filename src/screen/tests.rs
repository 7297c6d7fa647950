use super::*;
use crate::catalog::{AppointmentRecord, Catalog};

fn seeded() -> AppointmentListScreen {
	AppointmentListScreen::new(Catalog::seed())
}

fn visible_ids(screen: &AppointmentListScreen) -> Vec<&str> {
	screen.visible_records().map(|r| r.id.as_str()).collect()
}

#[test]
fn lowercase_query_matches_titles_case_insensitively() {
	let mut screen = seeded();
	screen.set_search_query("consulta");
	assert_eq!(visible_ids(&screen), ["1", "3"]);
}

#[test]
fn query_matches_patient_names() {
	let mut screen = seeded();
	screen.set_search_query("Mariana");
	let visible: Vec<&str> = screen
		.visible_records()
		.map(|r| r.patient_name.as_str())
		.collect();
	assert_eq!(visible, ["Mariana Costa"]);
}

#[test]
fn unmatched_query_shows_placeholder() {
	let mut screen = seeded();
	screen.set_search_query("zzz");
	assert_eq!(screen.visible_len(), 0);
	assert!(screen.shows_empty_placeholder());
}

#[test]
fn clearing_the_query_restores_declared_order() {
	let mut screen = seeded();
	screen.set_search_query("retorno");
	assert_eq!(visible_ids(&screen), ["2"]);
	screen.set_search_query("");
	assert_eq!(visible_ids(&screen), ["1", "2", "3"]);
	assert!(!screen.shows_empty_placeholder());
}

#[test]
fn accented_queries_fold_case() {
	let mut screen = seeded();
	screen.set_search_query("URGÊNCIA");
	assert_eq!(visible_ids(&screen), ["3"]);
	screen.set_search_query("joão");
	assert_eq!(visible_ids(&screen), ["3"]);
}

#[test]
fn query_is_not_trimmed_or_tokenized() {
	let mut screen = seeded();
	screen.set_search_query("consulta silva");
	assert!(screen.shows_empty_placeholder());
	screen.set_search_query(" Costa");
	assert_eq!(visible_ids(&screen), ["2"]);
}

#[test]
fn filtering_partitions_the_catalog() {
	let catalog = Catalog::new([
		AppointmentRecord::new("a", "Limpeza", "Ana Lima", "08:00", "1", "Profilaxia"),
		AppointmentRecord::new("b", "Canal", "Lima Barreto", "09:00", "2", "Endodontia"),
		AppointmentRecord::new("c", "Implante", "Rita", "10:00", "3", "Cirurgia"),
		AppointmentRecord::new("d", "Limpeza de rotina", "Paulo", "11:00", "4", "Profilaxia"),
	])
	.expect("valid catalog");
	let mut screen = AppointmentListScreen::new(catalog);

	for query in ["lim", "LIMA", "a", "ri", "x", "Canal", "endodontia"] {
		screen.set_search_query(query);
		let needle = query.to_lowercase();
		for record in screen.catalog().iter() {
			let matches = record.title.to_lowercase().contains(&needle)
				|| record.patient_name.to_lowercase().contains(&needle);
			assert_eq!(
				screen.is_visible(record.id.as_str()),
				matches,
				"query {query:?} disagrees on record {}",
				record.id
			);
		}
	}
}

#[test]
fn toggle_expand_twice_restores_membership() {
	let mut screen = seeded();
	assert_eq!(screen.toggle_expand("2"), Some(true));
	assert!(screen.is_expanded("2"));
	assert_eq!(screen.toggle_expand("2"), Some(false));
	assert!(!screen.is_expanded("2"));
	assert!(screen.expanded_ids().is_empty());
}

#[test]
fn toggle_expand_ignores_unknown_ids() {
	let mut screen = seeded();
	assert_eq!(screen.toggle_expand("99"), None);
	assert!(screen.expanded_ids().is_empty());
}

#[test]
fn expansion_does_not_change_visibility() {
	let mut screen = seeded();
	screen.toggle_expand("2");
	screen.set_search_query("consulta");
	assert!(screen.is_expanded("2"));
	assert!(!screen.is_visible("2"));
	screen.set_search_query("");
	assert!(screen.is_visible("2"));
	assert!(screen.is_expanded("2"));
}

#[test]
fn edit_opens_a_notice_without_changing_data() {
	let mut screen = seeded();
	let outcome = screen.request_edit("1");
	assert_eq!(
		outcome,
		ActionOutcome::NotImplemented {
			action: RecordAction::Edit,
			id: RecordId::new("1"),
		}
	);
	match screen.dialog() {
		Some(Dialog::Notice(notice)) => {
			assert_eq!(notice.title, "Editar");
			assert_eq!(notice.lines[0], "Você deseja editar o tópico 1");
		}
		other => panic!("expected edit notice, got {other:?}"),
	}
	assert_eq!(screen.catalog(), &Catalog::seed());
}

#[test]
fn unknown_ids_are_reported_and_open_nothing() {
	let mut screen = seeded();
	assert_eq!(
		screen.request_edit("42"),
		ActionOutcome::NotFound(RecordId::new("42"))
	);
	assert_eq!(
		screen.request_delete("42"),
		ActionOutcome::NotFound(RecordId::new("42"))
	);
	assert!(screen.dialog().is_none());
}

#[test]
fn confirmed_delete_keeps_the_record_visible() {
	let mut screen = seeded();
	assert_eq!(
		screen.request_delete("1"),
		ActionOutcome::AwaitingConfirmation(RecordId::new("1"))
	);
	match screen.dialog() {
		Some(Dialog::ConfirmDelete(confirmation)) => {
			assert_eq!(confirmation.choice, ConfirmChoice::Cancel);
			assert_eq!(
				confirmation.message(),
				"Tem certeza de que deseja excluir o tópico 1?"
			);
		}
		other => panic!("expected confirmation, got {other:?}"),
	}

	let outcome = screen.confirm_delete();
	assert_eq!(
		outcome,
		ActionOutcome::NotImplemented {
			action: RecordAction::Delete,
			id: RecordId::new("1"),
		}
	);
	match screen.dialog() {
		Some(Dialog::Notice(notice)) => {
			assert_eq!(notice.kind, NoticeKind::Completed);
			assert_eq!(notice.title, "Excluído");
		}
		other => panic!("expected completion notice, got {other:?}"),
	}
	assert!(screen.is_visible("1"));
	assert_eq!(screen.catalog().len(), 3);
}

#[test]
fn cancelled_delete_closes_the_dialog() {
	let mut screen = seeded();
	screen.request_delete("3");
	assert_eq!(screen.cancel_delete(), ActionOutcome::Cancelled(RecordId::new("3")));
	assert!(screen.dialog().is_none());
	assert_eq!(screen.cancel_delete(), ActionOutcome::NoPendingConfirmation);
}

#[test]
fn confirm_without_pending_dialog_is_rejected() {
	let mut screen = seeded();
	assert_eq!(screen.confirm_delete(), ActionOutcome::NoPendingConfirmation);

	screen.show_notifications();
	assert_eq!(screen.confirm_delete(), ActionOutcome::NoPendingConfirmation);
	assert_eq!(screen.dialog().map(Dialog::title), Some("Notificações"));
}

#[test]
fn dismissing_a_confirmation_cancels_it() {
	let mut screen = seeded();
	screen.request_delete("2");
	screen.toggle_confirm_choice();
	match screen.dialog() {
		Some(Dialog::ConfirmDelete(confirmation)) => {
			assert_eq!(confirmation.choice, ConfirmChoice::Confirm);
		}
		other => panic!("expected confirmation, got {other:?}"),
	}
	screen.dismiss_dialog();
	assert!(screen.dialog().is_none());
	assert!(screen.is_visible("2"));
}

#[test]
fn leaving_search_mode_keeps_the_query() {
	let mut screen = seeded();
	screen.toggle_search_bar();
	assert!(screen.is_search_bar_active());
	screen.set_search_query("retorno");
	screen.toggle_search_bar();
	assert!(!screen.is_search_bar_active());
	assert_eq!(screen.query(), "retorno");
	assert_eq!(visible_ids(&screen), ["2"]);
}

#[test]
fn empty_catalog_shows_placeholder() {
	let screen = AppointmentListScreen::new(Catalog::default());
	assert!(screen.shows_empty_placeholder());
	assert!(screen.visible_record(0).is_none());
}
