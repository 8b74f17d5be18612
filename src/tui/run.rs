//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: two producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Countdown thread: sends ticks while a round is running
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::config::PageConfig;

use super::state::{Action, App, AppEvent, Effect, Section, Transition};
use super::update::{handle_tick, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// `typing` is true while the signup form has focus: printable keys
/// then go into the focused input instead of acting as shortcuts.
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent, typing: bool) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::ForceQuit);
    }

    if typing {
        return match key.code {
            // Only plain or shifted characters are text; Ctrl/Alt chords are not.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                Some(Action::Input(c))
            }
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        };
    }

    match key.code {
        // Panel focus
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),

        // Controls
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('s') => Some(Action::StartGame),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('q') => Some(Action::Quit),

        // Number keys for tab selection
        KeyCode::Char(c @ '1'..='9') => Some(Action::NumberKey(c as u8 - b'0')),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore releases, mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Handle to a running countdown thread.
///
/// The thread sends `AppEvent::Tick(id)` every interval until the handle
/// is stopped or dropped.
struct Countdown {
    id: u64,
    stop: mpsc::Sender<()>,
}

/// Whether a tick from countdown `id` belongs to the running timer.
///
/// Ticks queued by a timer that has since been stopped or replaced are stale.
fn accepts_tick(timer: Option<&Countdown>, id: u64) -> bool {
    timer.is_some_and(|t| t.id == id)
}

impl Countdown {
    fn spawn(id: u64, interval: Duration, tx: mpsc::Sender<AppEvent>) -> Self {
        let (stop, stop_rx) = mpsc::channel::<()>();
        thread::spawn(move || {
            // Timeout means a full interval passed; anything else is a stop.
            while let Err(mpsc::RecvTimeoutError::Timeout) = stop_rx.recv_timeout(interval) {
                if tx.send(AppEvent::Tick(id)).is_err() {
                    break;
                }
            }
        });
        Countdown { id, stop }
    }

    fn stop(self) {
        // The thread may already have exited; dropping the sender is enough then.
        let _ = self.stop.send(());
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
pub fn run(config: PageConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    let mut timer: Option<Countdown> = None;
    let mut next_timer_id: u64 = 0;

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let transition = match event {
            AppEvent::Key(key) => {
                let typing = app.page.section == Section::Form && app.page.notice.is_none();
                let Some(action) = map_key(key, typing) else {
                    continue;
                };
                let page = std::mem::take(&mut app.page);
                update(page, &action, &app.config)
            }
            AppEvent::Tick(id) => {
                if !accepts_tick(timer.as_ref(), id) {
                    debug!(id, "dropping stale tick");
                    continue;
                }
                let page = std::mem::take(&mut app.page);
                handle_tick(page, &app.config)
            }
        };

        match transition {
            Transition::Page(page) => {
                app.page = page;
            }
            Transition::Quit => {
                app.should_quit = true;
            }
            Transition::Effect { page, effect } => {
                app.page = page;
                match effect {
                    Effect::StartTimer => {
                        if let Some(old) = timer.take() {
                            old.stop();
                        }
                        next_timer_id += 1;
                        let interval = Duration::from_millis(app.config.tick_millis);
                        timer = Some(Countdown::spawn(next_timer_id, interval, tx.clone()));
                    }
                    Effect::StopTimer => {
                        if let Some(old) = timer.take() {
                            old.stop();
                        }
                    }
                }
            }
        }
    }

    if let Some(t) = timer.take() {
        t.stop();
    }
    restore_terminal()?;
    info!("tui exited");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
