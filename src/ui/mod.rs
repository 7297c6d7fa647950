//! Interactive terminal rendition of the appointment list screen.
//!
//! [`ScreenUi`] is the entry point: it wraps an
//! [`AppointmentListScreen`](crate::screen::AppointmentListScreen) in an
//! [`App`] that owns the cursor, the search field and the theme, then runs the
//! event loop until the user quits.

mod actions;
mod builder;
pub mod components;
mod config;
mod render;
mod runtime;
mod state;

pub use builder::ScreenUi;
pub use config::UiLabels;
pub use state::{App, ExitSummary};

#[cfg(test)]
mod tests;
