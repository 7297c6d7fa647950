use ratatui::style::{Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "plain";

/// Terminal default colours, for monochrome or low-colour terminals.
pub const PLAIN: Theme = Theme {
	header: Style::new().add_modifier(Modifier::BOLD),
	search: Style::new().add_modifier(Modifier::UNDERLINED),
	heading: Style::new().add_modifier(Modifier::BOLD),
	card: Style::new(),
	card_expanded: Style::new(),
	details: Style::new().add_modifier(Modifier::DIM),
	cursor: Style::new().add_modifier(Modifier::REVERSED),
	edit_button: Style::new().add_modifier(Modifier::BOLD),
	delete_button: Style::new().add_modifier(Modifier::BOLD),
	empty: Style::new().add_modifier(Modifier::DIM),
	dialog: Style::new(),
	button_focus: Style::new().add_modifier(Modifier::REVERSED),
	hint: Style::new().add_modifier(Modifier::DIM),
};

pub const DEFINITION: ThemeDefinition =
	ThemeDefinition::new(NAME, PLAIN).with_aliases(&["mono"]);
