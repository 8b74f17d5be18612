//! Click challenge: count clicks before a countdown runs out.
//!
//! Pure reducer — `(GameState, GameEvent) → GameStep`. The timer itself
//! lives in the effects layer; the reducer only says when to start and
//! stop it.

use tracing::info;

/// Default length of a round, in ticks of one second.
pub const DEFAULT_GAME_SECONDS: u32 = 10;

/// Score and countdown of the click challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub seconds_remaining: u32,
    pub running: bool,
}

impl GameState {
    /// A stopped game showing a full countdown.
    pub fn idle(duration: u32) -> Self {
        GameState {
            score: 0,
            seconds_remaining: duration,
            running: false,
        }
    }

    /// The start control is usable only between rounds.
    pub fn start_enabled(&self) -> bool {
        !self.running
    }

    /// The click control is usable only during a round.
    pub fn click_enabled(&self) -> bool {
        self.running
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::idle(DEFAULT_GAME_SECONDS)
    }
}

/// Inputs to the game reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Start control pressed.
    Start,
    /// Click control pressed.
    Click,
    /// One countdown interval elapsed.
    Tick,
}

/// Instruction for whoever owns the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Stop,
}

/// Result of one reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStep {
    pub state: GameState,
    pub timer: Option<TimerCommand>,
    /// Final score, set on the tick that ends a round.
    pub game_over: Option<u32>,
}

impl GameStep {
    fn unchanged(state: GameState) -> Self {
        GameStep {
            state,
            timer: None,
            game_over: None,
        }
    }
}

/// Advance the game by one event.
///
/// Events that the current controls would not allow (start during a
/// round, click or tick between rounds) leave the state unchanged.
pub fn reduce(state: GameState, event: GameEvent, duration: u32) -> GameStep {
    match event {
        GameEvent::Start if state.start_enabled() => {
            info!(duration, "game started");
            GameStep {
                state: GameState {
                    score: 0,
                    seconds_remaining: duration,
                    running: true,
                },
                timer: Some(TimerCommand::Start),
                game_over: None,
            }
        }
        GameEvent::Click if state.click_enabled() => GameStep::unchanged(GameState {
            score: state.score.saturating_add(1),
            ..state
        }),
        GameEvent::Tick if state.running => {
            let seconds_remaining = state.seconds_remaining.saturating_sub(1);
            if seconds_remaining == 0 {
                info!(score = state.score, "game over");
                GameStep {
                    state: GameState {
                        seconds_remaining,
                        running: false,
                        ..state
                    },
                    timer: Some(TimerCommand::Stop),
                    game_over: Some(state.score),
                }
            } else {
                GameStep::unchanged(GameState {
                    seconds_remaining,
                    ..state
                })
            }
        }
        _ => GameStep::unchanged(state),
    }
}

/// Notice shown when a round ends.
pub fn game_over_message(score: u32) -> String {
    format!("Game over! Your score: {}", score)
}

// ============================================================================
// TESTS
// ============================================================================
