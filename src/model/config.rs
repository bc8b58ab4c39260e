use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Thresholds and delays used to tell gestures apart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Stationary hold before a press counts as a long-press
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
    /// Rest on a bubble before its preview shows
    #[serde(default = "default_hover_intent_ms")]
    pub hover_intent_ms: u64,
    /// Window in which a second click on the same bubble is a double-click
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
    /// Manhattan distance (cells) before a press becomes a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            long_press_ms: default_long_press_ms(),
            hover_intent_ms: default_hover_intent_ms(),
            double_click_ms: default_double_click_ms(),
            drag_threshold: default_drag_threshold(),
        }
    }
}

impl GestureConfig {
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }

    pub fn hover_intent(&self) -> Duration {
        Duration::from_millis(self.hover_intent_ms)
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

fn default_long_press_ms() -> u64 {
    800
}

fn default_hover_intent_ms() -> u64 {
    600
}

fn default_double_click_ms() -> u64 {
    300
}

fn default_drag_threshold() -> u32 {
    2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Seed the board with a couple of example bubbles on startup
    #[serde(default = "default_true")]
    pub sample_tasks: bool,
    /// Emoji preselected in the create form
    #[serde(default)]
    pub default_emoji: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            sample_tasks: true,
            default_emoji: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#FB4196"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Absent = platform state directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
