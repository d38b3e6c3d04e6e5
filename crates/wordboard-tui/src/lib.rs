//! wordboard-tui - Terminal frontend for wordboard
//!
//! Renders the board with ratatui and feeds crossterm input into the
//! engine's emitters. The engine itself (wordboard-app) never touches the
//! terminal; this crate owns raw mode, mouse capture, and the render loop.

pub mod event;
pub mod render;
pub mod runner;
pub mod styles;
pub mod surface;
pub mod terminal;

pub use runner::run;
