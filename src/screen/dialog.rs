use crate::catalog::RecordId;

/// Which button of a confirmation dialog is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmChoice {
	#[default]
	Cancel,
	Confirm,
}

impl ConfirmChoice {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			ConfirmChoice::Cancel => ConfirmChoice::Confirm,
			ConfirmChoice::Confirm => ConfirmChoice::Cancel,
		}
	}
}

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
	Info,
	Completed,
}

/// A single-button alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub title: String,
	pub lines: Vec<String>,
}

impl Notice {
	pub(crate) fn edit(id: &RecordId) -> Self {
		Self {
			kind: NoticeKind::Info,
			title: "Editar".to_string(),
			lines: vec![
				format!("Você deseja editar o tópico {id}"),
				"A edição ainda não está disponível.".to_string(),
			],
		}
	}

	pub(crate) fn deleted(id: &RecordId) -> Self {
		Self {
			kind: NoticeKind::Completed,
			title: "Excluído".to_string(),
			lines: vec![format!(
				"Exclusão do tópico {id} registrada. Nenhum dado foi removido."
			)],
		}
	}

	pub(crate) fn notifications() -> Self {
		Self {
			kind: NoticeKind::Info,
			title: "Notificações".to_string(),
			lines: vec!["Nenhuma notificação no momento.".to_string()],
		}
	}

	/// Button label for dismissing the notice.
	#[must_use]
	pub fn dismiss_label(&self) -> &'static str {
		"OK"
	}
}

/// Two-button delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
	pub id: RecordId,
	pub choice: ConfirmChoice,
}

impl DeleteConfirmation {
	pub const TITLE: &'static str = "Excluir";
	pub const CANCEL_LABEL: &'static str = "Cancelar";
	pub const CONFIRM_LABEL: &'static str = "Excluir";

	pub(crate) fn new(id: RecordId) -> Self {
		Self {
			id,
			choice: ConfirmChoice::default(),
		}
	}

	#[must_use]
	pub fn message(&self) -> String {
		format!("Tem certeza de que deseja excluir o tópico {}?", self.id)
	}
}

/// Modal surface currently shown over the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
	Notice(Notice),
	ConfirmDelete(DeleteConfirmation),
}

impl Dialog {
	#[must_use]
	pub fn title(&self) -> &str {
		match self {
			Dialog::Notice(notice) => &notice.title,
			Dialog::ConfirmDelete(_) => DeleteConfirmation::TITLE,
		}
	}
}
