//! Core crate exports for the `odontolife` appointment screen.
//!
//! The screen model lives in [`screen`] and is independent of any terminal;
//! [`ui`] renders it with ratatui and drives it from key events.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod screen;
pub mod tui;
pub mod ui;

pub use catalog::{AppointmentRecord, Catalog, CatalogError, RecordId};
pub use screen::{ActionOutcome, AppointmentListScreen, Dialog, RecordAction};
pub use tui::theme::Theme;
pub use ui::{App, ExitSummary, ScreenUi, UiLabels};
