//! Terminal building blocks shared by the screen renderer: the search input
//! widget and the colour themes.

pub mod input;
pub mod theme;
