use ratatui::style::{Color, Modifier, Style};

use crate::tui::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "odontolife";

const WHITE: Color = Color::Rgb(255, 255, 255);
const BLACK: Color = Color::Rgb(0, 0, 0);

pub const ODONTOLIFE: Theme = Theme {
	header: Style::new()
		.fg(WHITE)
		.bg(Color::Rgb(32, 48, 135))
		.add_modifier(Modifier::BOLD),
	search: Style::new().fg(BLACK).bg(WHITE),
	heading: Style::new().add_modifier(Modifier::BOLD),
	card: Style::new(),
	card_expanded: Style::new().fg(BLACK).bg(Color::Rgb(230, 247, 255)),
	details: Style::new().fg(BLACK).bg(Color::Rgb(220, 148, 250)),
	cursor: Style::new().add_modifier(Modifier::REVERSED),
	edit_button: Style::new()
		.fg(WHITE)
		.bg(Color::Rgb(0, 123, 255))
		.add_modifier(Modifier::BOLD),
	delete_button: Style::new()
		.fg(WHITE)
		.bg(Color::Rgb(255, 77, 77))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(153, 153, 153)),
	dialog: Style::new().fg(BLACK).bg(WHITE),
	button_focus: Style::new()
		.fg(WHITE)
		.bg(Color::Rgb(32, 48, 135))
		.add_modifier(Modifier::BOLD),
	hint: Style::new().fg(Color::Rgb(153, 153, 153)),
};

pub const DEFINITION: ThemeDefinition =
	ThemeDefinition::new(NAME, ODONTOLIFE).with_aliases(&["default", "clinic"]);
