//! UI layer for the desktop GUI: app shell and form state.

pub mod app;
pub mod forms;

pub use app::PhoneBookApp;
