//! Pure state transitions: (Page, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each section defines which actions it accepts. Unhandled actions
//! return the current page unchanged (no-op).

use crate::config::PageConfig;
use crate::game::{game_over_message, reduce, GameEvent, TimerCommand};

use super::state::{Action, Effect, Page, Section, Transition};

/// Pure state transition function.
///
/// Given the current page, an action, and the read-only page config,
/// produces the next transition. The effects boundary interprets the
/// result.
pub fn update(page: Page, action: &Action, config: &PageConfig) -> Transition {
    if *action == Action::ForceQuit {
        return Transition::Quit;
    }

    // A visible notice swallows the next key, including `q`.
    if page.notice.is_some() {
        return Transition::Page(Page {
            notice: None,
            ..page
        });
    }

    if *action == Action::Quit {
        return Transition::Quit;
    }

    match page.section {
        Section::Theme => update_theme(page, action),
        Section::Game => update_game(page, action, config),
        Section::Faq => update_faq(page, action),
        Section::Tabs => update_tabs(page, action),
        Section::Form => update_form(page, action),
    }
}

/// A countdown tick arrived from the effects layer.
///
/// Ticks are delivered regardless of which section has focus.
pub fn handle_tick(page: Page, config: &PageConfig) -> Transition {
    apply_game_event(page, GameEvent::Tick, config)
}

// ============================================================================
// PER-SECTION HANDLERS
// ============================================================================

/// Theme: Activate flips light/dark.
fn update_theme(page: Page, action: &Action) -> Transition {
    match action {
        Action::Activate => toggle_theme(page),
        _ => common(page, action),
    }
}

/// Game: start a round, click during one.
fn update_game(page: Page, action: &Action, config: &PageConfig) -> Transition {
    match action {
        Action::StartGame => apply_game_event(page, GameEvent::Start, config),
        Action::Activate => apply_game_event(page, GameEvent::Click, config),
        _ => common(page, action),
    }
}

/// FAQ: move between questions, open/close the highlighted one.
fn update_faq(page: Page, action: &Action) -> Transition {
    let len = page.faq.len();
    match action {
        Action::MoveUp => Transition::Page(Page {
            faq_cursor: page.faq_cursor.saturating_sub(1),
            ..page
        }),
        Action::MoveDown => {
            let faq_cursor = if len == 0 {
                0
            } else {
                (page.faq_cursor + 1).min(len - 1)
            };
            Transition::Page(Page { faq_cursor, ..page })
        }
        Action::Activate => Transition::Page(Page {
            faq: page.faq.toggle(page.faq_cursor),
            ..page
        }),
        _ => common(page, action),
    }
}

/// Tabs: left/right cycle, number keys jump.
fn update_tabs(page: Page, action: &Action) -> Transition {
    match action {
        Action::MoveLeft => Transition::Page(Page {
            tabs: page.tabs.prev(),
            ..page
        }),
        Action::MoveRight => Transition::Page(Page {
            tabs: page.tabs.next(),
            ..page
        }),
        Action::NumberKey(n) if *n >= 1 => Transition::Page(Page {
            tabs: page.tabs.select(usize::from(*n) - 1),
            ..page
        }),
        _ => common(page, action),
    }
}

/// Form: editing, field focus (with blur validation), submission.
fn update_form(mut page: Page, action: &Action) -> Transition {
    match action {
        Action::Input(c) => page.form.insert_char(*c),
        Action::Backspace => page.form.delete_char(),
        Action::NextField => page.form.focus_next(),
        Action::PrevField => page.form.focus_prev(),
        Action::Submit => {
            page.form.submit();
        }
        Action::Back => {
            let focused = page.form.focused;
            page.form.blur(focused);
            page.section = Section::Form.prev();
        }
        _ => return common(page, action),
    }
    Transition::Page(page)
}

/// Actions every section shares: panel focus and the theme shortcut.
fn common(page: Page, action: &Action) -> Transition {
    match action {
        Action::NextSection => Transition::Page(Page {
            section: page.section.next(),
            ..page
        }),
        Action::PrevSection => Transition::Page(Page {
            section: page.section.prev(),
            ..page
        }),
        Action::ToggleTheme => toggle_theme(page),
        _ => Transition::Page(page),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn toggle_theme(page: Page) -> Transition {
    Transition::Page(Page {
        theme: page.theme.toggle(),
        ..page
    })
}

/// Run the game reducer and translate its timer command into an Effect.
fn apply_game_event(page: Page, event: GameEvent, config: &PageConfig) -> Transition {
    let step = reduce(page.game, event, config.game_seconds);
    let notice = match step.game_over {
        Some(score) => Some(game_over_message(score)),
        None => page.notice.clone(),
    };
    let page = Page {
        game: step.state,
        notice,
        ..page
    };
    match step.timer {
        Some(TimerCommand::Start) => Transition::Effect {
            page,
            effect: Effect::StartTimer,
        },
        Some(TimerCommand::Stop) => Transition::Effect {
            page,
            effect: Effect::StopTimer,
        },
        None => Transition::Page(page),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormMessage;
    use crate::game::GameState;
    use crate::types::{Field, Theme};

    fn config() -> PageConfig {
        PageConfig::default()
    }

    fn page_at(section: Section) -> Page {
        Page {
            section,
            ..Page::default()
        }
    }

    /// Unwrap a transition into the page it carries.
    fn page_of(t: Transition) -> Page {
        match t {
            Transition::Page(page) | Transition::Effect { page, .. } => page,
            Transition::Quit => panic!("Expected a page, got Quit"),
        }
    }

    fn type_text(mut page: Page, text: &str) -> Page {
        for c in text.chars() {
            page = page_of(update(page, &Action::Input(c), &config()));
        }
        page
    }

    // -- Global --

    #[test]
    fn quit_from_any_section() {
        for section in [Section::Theme, Section::Game, Section::Faq, Section::Tabs, Section::Form] {
            assert_eq!(update(page_at(section), &Action::Quit, &config()), Transition::Quit);
        }
    }

    #[test]
    fn quit_key_dismisses_notice_instead_of_quitting() {
        let page = Page {
            notice: Some("Game over! Your score: 3".into()),
            ..page_at(Section::Game)
        };
        match update(page, &Action::Quit, &config()) {
            Transition::Page(page) => {
                assert!(page.notice.is_none());
                assert_eq!(page.section, Section::Game);
            }
            other => panic!("Expected the notice to close, got {:?}", other),
        }
    }

    #[test]
    fn force_quit_ignores_notice() {
        let page = Page {
            notice: Some("Game over! Your score: 3".into()),
            ..page_at(Section::Form)
        };
        assert_eq!(update(page, &Action::ForceQuit, &config()), Transition::Quit);
    }

    #[test]
    fn next_section_cycles_focus() {
        let page = page_of(update(page_at(Section::Theme), &Action::NextSection, &config()));
        assert_eq!(page.section, Section::Game);
        let page = page_of(update(page, &Action::PrevSection, &config()));
        assert_eq!(page.section, Section::Theme);
    }

    #[test]
    fn notice_is_dismissed_by_any_key() {
        let page = Page {
            notice: Some("Game over! Your score: 3".into()),
            ..page_at(Section::Theme)
        };
        let page = page_of(update(page, &Action::Activate, &config()));
        assert!(page.notice.is_none());
        // The dismissing key does nothing else.
        assert_eq!(page.theme, Theme::Light);
    }

    // -- Theme --

    #[test]
    fn activate_on_theme_toggles() {
        let page = page_of(update(page_at(Section::Theme), &Action::Activate, &config()));
        assert_eq!(page.theme, Theme::Dark);
        let page = page_of(update(page, &Action::Activate, &config()));
        assert_eq!(page.theme, Theme::Light);
    }

    #[test]
    fn theme_shortcut_works_outside_theme_section() {
        let page = page_of(update(page_at(Section::Faq), &Action::ToggleTheme, &config()));
        assert_eq!(page.theme, Theme::Dark);
    }

    // -- Game --

    #[test]
    fn start_game_requests_timer() {
        let result = update(page_at(Section::Game), &Action::StartGame, &config());
        match result {
            Transition::Effect { page, effect } => {
                assert_eq!(effect, Effect::StartTimer);
                assert!(page.game.running);
                assert_eq!(page.game.seconds_remaining, 10);
            }
            other => panic!("Expected StartTimer effect, got {:?}", other),
        }
    }

    #[test]
    fn activate_on_game_clicks_only_while_running() {
        let page = page_of(update(page_at(Section::Game), &Action::Activate, &config()));
        assert_eq!(page.game.score, 0);

        let page = page_of(update(page, &Action::StartGame, &config()));
        let page = page_of(update(page, &Action::Activate, &config()));
        let page = page_of(update(page, &Action::Activate, &config()));
        assert_eq!(page.game.score, 2);
    }

    #[test]
    fn countdown_ends_round_with_notice_and_stop() {
        let mut page = page_of(update(page_at(Section::Game), &Action::StartGame, &config()));
        page = page_of(update(page, &Action::Activate, &config()));

        for _ in 0..9 {
            match handle_tick(page, &config()) {
                Transition::Page(p) => page = p,
                other => panic!("Expected plain tick, got {:?}", other),
            }
        }
        match handle_tick(page, &config()) {
            Transition::Effect { page, effect } => {
                assert_eq!(effect, Effect::StopTimer);
                assert_eq!(
                    page.game,
                    GameState {
                        score: 1,
                        seconds_remaining: 0,
                        running: false
                    }
                );
                assert_eq!(page.notice.as_deref(), Some("Game over! Your score: 1"));
            }
            other => panic!("Expected StopTimer effect, got {:?}", other),
        }
    }

    #[test]
    fn tick_reaches_game_while_focus_elsewhere() {
        let page = page_of(update(page_at(Section::Game), &Action::StartGame, &config()));
        let page = page_of(update(page, &Action::NextSection, &config()));
        let page = page_of(handle_tick(page, &config()));
        assert_eq!(page.section, Section::Faq);
        assert_eq!(page.game.seconds_remaining, 9);
    }

    #[test]
    fn idle_tick_is_noop() {
        let page = page_at(Section::Theme);
        assert_eq!(handle_tick(page.clone(), &config()), Transition::Page(page));
    }

    // -- FAQ --

    #[test]
    fn faq_cursor_clamps() {
        let page = page_of(update(page_at(Section::Faq), &Action::MoveUp, &config()));
        assert_eq!(page.faq_cursor, 0);
        let mut page = page;
        for _ in 0..10 {
            page = page_of(update(page, &Action::MoveDown, &config()));
        }
        assert_eq!(page.faq_cursor, config().faq.len() - 1);
    }

    #[test]
    fn faq_activate_opens_only_highlighted() {
        let page = page_of(update(page_at(Section::Faq), &Action::Activate, &config()));
        assert_eq!(page.faq.open(), Some(0));
        let page = page_of(update(page, &Action::MoveDown, &config()));
        let page = page_of(update(page, &Action::Activate, &config()));
        assert_eq!(page.faq.open(), Some(1));
        let page = page_of(update(page, &Action::Activate, &config()));
        assert_eq!(page.faq.open(), None);
    }

    // -- Tabs --

    #[test]
    fn tabs_move_and_jump() {
        let page = page_of(update(page_at(Section::Tabs), &Action::MoveRight, &config()));
        assert_eq!(page.tabs.active(), 1);
        let page = page_of(update(page, &Action::NumberKey(3), &config()));
        assert_eq!(page.tabs.active(), 2);
        let page = page_of(update(page, &Action::NumberKey(9), &config()));
        assert_eq!(page.tabs.active(), 2);
        let page = page_of(update(page, &Action::MoveLeft, &config()));
        assert_eq!(page.tabs.active(), 1);
    }

    // -- Form --

    #[test]
    fn typing_fills_focused_field() {
        let page = type_text(page_at(Section::Form), "Jo");
        assert_eq!(page.form.field(Field::Name).raw_value, "Jo");
        let page = page_of(update(page, &Action::Backspace, &config()));
        assert_eq!(page.form.field(Field::Name).raw_value, "J");
    }

    #[test]
    fn next_field_blurs_and_shows_error() {
        let page = type_text(page_at(Section::Form), "J");
        let page = page_of(update(page, &Action::NextField, &config()));
        assert_eq!(page.form.focused, Field::Email);
        assert!(!page.form.field(Field::Name).is_valid());
    }

    #[test]
    fn submit_valid_form_succeeds_and_resets() {
        let mut page = type_text(page_at(Section::Form), "Jo");
        for text in ["a@b.co", "Abcdefg1", "Abcdefg1"] {
            page = page_of(update(page, &Action::NextField, &config()));
            page = type_text(page, text);
        }
        let page = page_of(update(page, &Action::Submit, &config()));
        assert_eq!(page.form.message, Some(FormMessage::Success));
        assert_eq!(page.form.field(Field::Email).raw_value, "");
    }

    #[test]
    fn submit_empty_form_shows_fix_errors() {
        let page = page_of(update(page_at(Section::Form), &Action::Submit, &config()));
        assert_eq!(page.form.message, Some(FormMessage::FixErrors));
        assert!(Field::ALL.iter().all(|&f| !page.form.field(f).is_valid()));
    }

    #[test]
    fn back_leaves_form_and_blurs() {
        let page = page_of(update(page_at(Section::Form), &Action::Back, &config()));
        assert_eq!(page.section, Section::Tabs);
        assert!(!page.form.field(Field::Name).is_valid());
    }
}
