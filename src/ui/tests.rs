use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::catalog::{Catalog, RecordId};
use crate::screen::{ActionOutcome, Dialog};

fn app<'a>() -> App<'a> {
	ScreenUi::new(Catalog::seed()).build()
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<ExitSummary> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(72, 24)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn collapsed_cards_show_titles_only() {
	let mut app = app();
	let view = render(&mut app);

	assert!(view.contains("OdontoLife"));
	assert!(view.contains("Consultas"));
	for title in ["Consulta Odontológica", "Retorno Clínico", "Consulta de Urgência"] {
		assert!(view.contains(title), "missing card {title}\n{view}");
	}
	assert!(!view.contains("Carlos Silva"));
	assert!(!view.contains("Editar"));
}

#[test]
fn enter_expands_the_card_under_the_cursor() {
	let mut app = app();
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);
	assert!(app.screen.is_expanded("2"));

	let view = render(&mut app);
	assert!(view.contains("Nome: Mariana Costa"), "{view}");
	assert!(view.contains("Horário: 15:30"));
	assert!(view.contains("CPF: 987.654.321-00"));
	assert!(view.contains("Tipo: Tratamento ortodôntico"));
	assert!(view.contains("Editar"));
	assert!(view.contains("Excluir"));
	assert!(!view.contains("Carlos Silva"));

	press(&mut app, KeyCode::Char(' '));
	assert!(!app.screen.is_expanded("2"));
}

#[test]
fn edit_and_delete_require_an_expanded_card() {
	let mut app = app();
	press(&mut app, KeyCode::Char('e'));
	press(&mut app, KeyCode::Char('d'));
	assert!(app.screen.dialog().is_none());

	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Char('e'));
	assert_eq!(app.screen.dialog().map(Dialog::title), Some("Editar"));
	let view = render(&mut app);
	assert!(view.contains("Você deseja editar o tópico 1"), "{view}");

	press(&mut app, KeyCode::Esc);
	assert!(app.screen.dialog().is_none());
}

#[test]
fn delete_flow_defaults_to_cancel() {
	let mut app = app();
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Char('d'));
	let view = render(&mut app);
	assert!(view.contains("Cancelar"), "{view}");

	press(&mut app, KeyCode::Enter);
	assert!(app.screen.dialog().is_none());
	assert!(app.screen.is_visible("1"));
}

#[test]
fn confirmed_delete_shows_completion_and_keeps_the_card() {
	let mut app = app();
	press(&mut app, KeyCode::Enter);
	press(&mut app, KeyCode::Char('d'));
	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.screen.dialog().map(Dialog::title), Some("Excluído"));
	let view = render(&mut app);
	assert!(view.contains("Consulta Odontológica"));

	press(&mut app, KeyCode::Enter);
	assert!(app.screen.dialog().is_none());
	assert!(app.screen.is_visible("1"));
	assert_eq!(
		app.screen.request_delete("1"),
		ActionOutcome::AwaitingConfirmation(RecordId::new("1"))
	);
}

#[test]
fn typing_in_search_mode_filters_cards() {
	let mut app = app();
	press(&mut app, KeyCode::Char('/'));
	assert!(app.screen.is_search_bar_active());
	type_text(&mut app, "mariana");

	assert_eq!(app.screen.query(), "mariana");
	assert_eq!(app.screen.visible_len(), 1);
	assert_eq!(app.selected_record().map(|r| r.id.as_str()), Some("2"));

	let view = render(&mut app);
	assert!(view.contains("Retorno Clínico"));
	assert!(!view.contains("Consulta Odontológica"));
	assert!(!view.contains("OdontoLife"), "title is replaced by the search field");
}

#[test]
fn unmatched_search_renders_placeholder_and_clears_cursor() {
	let mut app = app();
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "zzz");

	assert_eq!(app.list_state.selected(), None);
	let view = render(&mut app);
	assert!(view.contains("Nenhum resultado encontrado"), "{view}");

	press(&mut app, KeyCode::Enter);
	assert!(app.screen.expanded_ids().is_empty());
}

#[test]
fn leaving_search_mode_keeps_the_filter() {
	let mut app = app();
	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "consulta");
	press(&mut app, KeyCode::Esc);

	assert!(!app.screen.is_search_bar_active());
	assert_eq!(app.screen.visible_len(), 2);
	let view = render(&mut app);
	assert!(view.contains("OdontoLife"));
	assert!(!view.contains("Retorno Clínico"));
}

#[test]
fn quit_keys_report_the_session() {
	let mut app = ScreenUi::new(Catalog::seed())
		.with_initial_query("consulta")
		.build();
	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Enter);

	let summary = press(&mut app, KeyCode::Char('q')).expect("quit");
	assert_eq!(summary.query, "consulta");
	assert_eq!(summary.expanded, [RecordId::new("3")]);
}

#[test]
fn ctrl_c_quits_from_search_mode() {
	let mut app = ScreenUi::new(Catalog::seed()).with_search_open(true).build();
	let summary = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
	assert!(summary.is_some());
}

#[test]
fn notifications_placeholder_opens_a_notice() {
	let mut app = app();
	press(&mut app, KeyCode::Char('n'));
	let view = render(&mut app);
	assert!(view.contains("Nenhuma notificação no momento."), "{view}");
	press(&mut app, KeyCode::Enter);
	assert!(app.screen.dialog().is_none());
}

#[test]
fn cursor_is_clamped_when_the_view_shrinks() {
	let mut app = app();
	press(&mut app, KeyCode::End);
	assert_eq!(app.list_state.selected(), Some(2));

	press(&mut app, KeyCode::Char('/'));
	type_text(&mut app, "retorno");
	assert_eq!(app.list_state.selected(), Some(0));
	assert_eq!(app.selected_record().map(|r| r.id.as_str()), Some("2"));
}

#[test]
fn custom_labels_are_rendered() {
	let labels = UiLabels {
		title: "Clínica Sorriso".to_string(),
		empty_text: "Sem consultas".to_string(),
		..UiLabels::default()
	};
	let mut app = ScreenUi::new(Catalog::default()).with_labels(labels).build();
	let view = render(&mut app);
	assert!(view.contains("Clínica Sorriso"));
	assert!(view.contains("Sem consultas"));
}
