//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, AppError, Message, MessageStyle, run_tui};
