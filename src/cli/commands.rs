use std::path::PathBuf;

use clap::Parser;

use crate::model::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "tt", about = concat!("tubetasker v", env!("CARGO_PKG_VERSION"), " - drag your tasks to done"), version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Hold time (ms) before a press becomes a long-press
    #[arg(long, value_name = "MS")]
    pub long_press_ms: Option<u64>,

    /// Cells a press must travel before it becomes a drag
    #[arg(long, value_name = "CELLS", value_parser = clap::value_parser!(u32).range(1..))]
    pub drag_threshold: Option<u32>,

    /// Start with an empty board
    #[arg(long)]
    pub no_sample: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write log files to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line flags over file configuration
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ms) = self.long_press_ms {
            config.gesture.long_press_ms = ms;
        }
        if let Some(cells) = self.drag_threshold {
            config.gesture.drag_threshold = cells;
        }
        if self.no_sample {
            config.board.sample_tasks = false;
        }
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.log.dir = Some(dir.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["tt"]).unwrap();
        assert_eq!(cli.apply_overrides(AppConfig::default()), AppConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "tt",
            "--long-press-ms",
            "500",
            "--drag-threshold",
            "4",
            "--no-sample",
            "--log-level",
            "debug",
            "--log-dir",
            "/tmp/tt-logs",
        ])
        .unwrap();
        let config = cli.apply_overrides(AppConfig::default());
        assert_eq!(config.gesture.long_press_ms, 500);
        assert_eq!(config.gesture.drag_threshold, 4);
        assert!(!config.board.sample_tasks);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.dir, Some(PathBuf::from("/tmp/tt-logs")));
        // Untouched values survive
        assert_eq!(config.gesture.hover_intent_ms, 600);
    }

    #[test]
    fn test_zero_drag_threshold_rejected() {
        assert!(Cli::try_parse_from(["tt", "--drag-threshold", "0"]).is_err());
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::try_parse_from(["tt", "--config", "board.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
    }
}
