//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire page state space. The transition
//! function (`update`) and the rendering layer (`view`) both program
//! against them.
//!
//! Design principle: [`Page`] carries everything a gesture can change.
//! Static content (FAQ text, tab panes, timing) lives in the config held
//! by [`App`] and is only read.

use crossterm::event::KeyEvent;

use crate::config::PageConfig;
use crate::disclosure::{Accordion, Tabs};
use crate::form::SignupForm;
use crate::game::GameState;
use crate::types::Theme;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - The countdown thread sends `Tick` while a round is running
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// One countdown interval elapsed. Carries the id of the timer that
    /// produced it so ticks from a stopped timer can be dropped.
    Tick(u64),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    pub page: Page,

    /// Static page content and timing.
    pub config: PageConfig,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

/// Panels of the page, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Theme,
    Game,
    Faq,
    Tabs,
    Form,
}

impl Section {
    pub fn next(self) -> Section {
        match self {
            Section::Theme => Section::Game,
            Section::Game => Section::Faq,
            Section::Faq => Section::Tabs,
            Section::Tabs => Section::Form,
            Section::Form => Section::Theme,
        }
    }

    pub fn prev(self) -> Section {
        match self {
            Section::Theme => Section::Form,
            Section::Game => Section::Theme,
            Section::Faq => Section::Game,
            Section::Tabs => Section::Faq,
            Section::Form => Section::Tabs,
        }
    }
}

/// Everything a user gesture or a tick can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Panel receiving keys.
    pub section: Section,
    pub theme: Theme,
    pub game: GameState,
    pub faq: Accordion,
    /// Highlighted FAQ question.
    pub faq_cursor: usize,
    pub tabs: Tabs,
    pub form: SignupForm,
    /// Modal notice (game over); any key dismisses it.
    pub notice: Option<String>,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the next panel.
    NextSection,
    /// Focus the previous panel.
    PrevSection,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Press the focused control (toggle, click, open question).
    Activate,
    /// Start a click-challenge round.
    StartGame,
    /// Toggle the theme from any panel.
    ToggleTheme,
    /// Jump to tab by number (1-based).
    NumberKey(u8),
    /// Type a character into the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Move to the next input (blurs the current one).
    NextField,
    /// Move to the previous input (blurs the current one).
    PrevField,
    /// Submit the signup form.
    Submit,
    /// Leave the form.
    Back,
    /// Quit the application (dismisses a visible notice instead).
    Quit,
    /// Quit the application unconditionally (Ctrl+C).
    ForceQuit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// effectful code decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this page.
    Page(Page),
    /// Quit the application.
    Quit,
    /// Render this page and execute a side effect.
    Effect { page: Page, effect: Effect },
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Begin emitting ticks at the configured interval.
    StartTimer,
    /// Cancel the pending countdown.
    StopTimer,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    pub fn new(config: PageConfig) -> Self {
        App {
            page: Page::new(&config),
            config,
            should_quit: false,
        }
    }
}

impl Page {
    /// Fresh page: theme from config, game idle, FAQ closed, first tab.
    pub fn new(config: &PageConfig) -> Self {
        Page {
            section: Section::Theme,
            theme: config.theme,
            game: GameState::idle(config.game_seconds),
            faq: Accordion::new(config.faq.len()),
            faq_cursor: 0,
            tabs: Tabs::new(config.tabs.len()),
            form: SignupForm::new(),
            notice: None,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new(&PageConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
