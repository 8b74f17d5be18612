//! TUI module for the interactive page.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (Page, Action, Transition)
//! - `update`: Pure transitions, `(Page, Action) → Transition`
//! - `view`: Pure rendering of the page into ratatui widgets
//! - `theme`: Light/dark styles
//! - `run`: Effects (terminal, key reader, countdown timer)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
