//! interactive-page: a theme toggle, a click challenge, a FAQ, tabs and a
//! validated signup form, rendered in the terminal.

pub mod config;
pub mod disclosure;
pub mod form;
pub mod game;
pub mod report;
pub mod tui;
pub mod types;
pub mod validate;
