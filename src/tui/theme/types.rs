use ratatui::style::Style;

/// Styles for every surface of the appointment screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// App bar behind the title, search input and icons.
	pub header: Style,
	/// Search input text while the search bar is open.
	pub search: Style,
	/// Section heading above the cards.
	pub heading: Style,
	/// Collapsed card.
	pub card: Style,
	/// Card whose detail panel is open.
	pub card_expanded: Style,
	/// Detail lines inside an expanded card.
	pub details: Style,
	/// Card under the cursor.
	pub cursor: Style,
	pub edit_button: Style,
	pub delete_button: Style,
	/// "No results" placeholder.
	pub empty: Style,
	/// Dialog body and border.
	pub dialog: Style,
	/// Focused dialog button.
	pub button_focus: Style,
	/// Footer key hints.
	pub hint: Style,
}

/// A named built-in theme.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			aliases: &[],
			theme,
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}
}
