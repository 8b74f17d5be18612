//! Page configuration: countdown timing, starting theme, FAQ and tab text.
//!
//! Read once at startup from JSON. Nothing is ever written back, so a
//! theme toggled during a session is forgotten on exit.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::game::DEFAULT_GAME_SECONDS;
use crate::types::Theme;

/// Config filename within the config directory.
const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// One FAQ question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// One tab with the pane it reveals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabPane {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Length of a click-challenge round, in ticks.
    pub game_seconds: u32,
    /// Interval between countdown ticks.
    pub tick_millis: u64,
    /// Theme on startup.
    pub theme: Theme,
    pub faq: Vec<FaqEntry>,
    pub tabs: Vec<TabPane>,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            game_seconds: DEFAULT_GAME_SECONDS,
            tick_millis: 1000,
            theme: Theme::Light,
            faq: vec![
                faq(
                    "What is this page?",
                    "A playground of small interactive elements: a theme toggle, a click challenge, this FAQ, tabs and a signup form.",
                ),
                faq(
                    "How does the click challenge work?",
                    "Start a round, then press the click button as many times as you can before the countdown reaches zero.",
                ),
                faq(
                    "Is my signup stored anywhere?",
                    "No. Submission is simulated: the form is validated and then cleared.",
                ),
            ],
            tabs: vec![
                tab("Events", "Every control reacts to a single gesture: a key press, a focus change or a submission."),
                tab("Elements", "Only one FAQ answer and one tab pane are shown at a time."),
                tab("Validation", "Each input is checked when it loses focus, and all of them again on submit."),
            ],
        }
    }
}

fn faq(question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn tab(title: &str, body: &str) -> TabPane {
    TabPane {
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Returns the default config file location.
///
/// On Linux: ~/.config/interactive-page/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("interactive-page")
        .join(CONFIG_FILENAME)
}

impl PageConfig {
    /// Load from an explicit path, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default = default_config_path();
                if default.exists() {
                    Self::from_file(&default)
                } else {
                    debug!(path = %default.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and check a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PageConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Reject settings the page cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game_seconds == 0 {
            return Err(ConfigError::Invalid("game_seconds must be at least 1"));
        }
        if self.tick_millis == 0 {
            return Err(ConfigError::Invalid("tick_millis must be at least 1"));
        }
        if self.tabs.is_empty() {
            return Err(ConfigError::Invalid("at least one tab is required"));
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
