use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::model::config::AppConfig;
use crate::util::unicode::first_grapheme;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("board.default_emoji must be a single glyph, got {0:?}")]
    InvalidEmoji(String),
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tubetasker").join("config.toml")
}

/// Get the log directory, respecting XDG_STATE_HOME
pub fn default_log_dir() -> PathBuf {
    let state_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("state"));
    state_dir.join("tubetasker")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the config from a specific path. A missing file yields defaults;
/// an explicitly requested file must exist.
pub fn read_config_from(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    if !required && !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(text)?;
    if let Some(emoji) = &config.board.default_emoji
        && first_grapheme(emoji.trim()) != Some(emoji.trim())
    {
        return Err(ConfigError::InvalidEmoji(emoji.clone()));
    }
    if config.gesture.drag_threshold == 0 {
        warn!("event=config_value_clamped key=gesture.drag_threshold value=0 using=1");
    }
    Ok(sanitize(config))
}

fn sanitize(mut config: AppConfig) -> AppConfig {
    config.gesture.drag_threshold = config.gesture.drag_threshold.max(1);
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[gesture]
long_press_ms = 500
drag_threshold = 3

[board]
sample_tasks = false
default_emoji = "🚀"

[ui.colors]
highlight = "#112233"

[log]
level = "debug"
"##
    }

    #[test]
    fn test_read_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let config = read_config_from(&path, true).unwrap();
        assert_eq!(config.gesture.long_press_ms, 500);
        assert_eq!(config.gesture.drag_threshold, 3);
        assert_eq!(config.gesture.hover_intent_ms, 600);
        assert!(!config.board.sample_tasks);
        assert_eq!(config.board.default_emoji.as_deref(), Some("🚀"));
        assert_eq!(
            config.ui.colors.get("highlight").map(String::as_str),
            Some("#112233")
        );
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_missing_optional_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = read_config_from(&tmp.path().join("nope.toml"), false).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_missing_required_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = read_config_from(&tmp.path().join("nope.toml"), true).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn test_bad_toml_errors() {
        let err = parse_config("[gesture\nlong_press_ms = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_multi_glyph_default_emoji_rejected() {
        let err = parse_config("[board]\ndefault_emoji = \"🚀🔥\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEmoji(_)));
    }

    #[test]
    fn test_zero_drag_threshold_clamped() {
        let config = parse_config("[gesture]\ndrag_threshold = 0\n").unwrap();
        assert_eq!(config.gesture.drag_threshold, 1);
    }
}
