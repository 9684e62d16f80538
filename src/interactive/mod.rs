//! Interactive TUI assistant

pub mod app;
mod rendering;

pub use app::{App, run_tui};
