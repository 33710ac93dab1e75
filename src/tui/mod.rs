//! Terminal User Interface module
//!
//! The interactive import wizard, built on ratatui. One view per wizard
//! step, a field picker dialog and toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
