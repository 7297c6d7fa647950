/// Literal text rendered around the appointment cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// App bar title shown while the search bar is closed.
	pub title: String,
	/// Section heading above the cards.
	pub heading: String,
	/// Placeholder of the empty search field.
	pub search_placeholder: String,
	/// Replaces the list when no appointment matches.
	pub empty_text: String,
	pub search_action: String,
	pub notifications_action: String,
	pub patient_label: String,
	pub time_label: String,
	pub document_label: String,
	pub procedure_label: String,
	pub edit_button: String,
	pub delete_button: String,
	/// Footer line listing the key bindings.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "OdontoLife".to_string(),
			heading: "Consultas".to_string(),
			search_placeholder: "Pesquisar...".to_string(),
			empty_text: "Nenhum resultado encontrado".to_string(),
			search_action: "[/] Buscar".to_string(),
			notifications_action: "[n] Notificações".to_string(),
			patient_label: "Nome".to_string(),
			time_label: "Horário".to_string(),
			document_label: "CPF".to_string(),
			procedure_label: "Tipo".to_string(),
			edit_button: "Editar".to_string(),
			delete_button: "Excluir".to_string(),
			hint: "↑↓ mover  Enter abrir  e editar  d excluir  / buscar  q sair".to_string(),
		}
	}
}
