use clap::Parser;
use tubetasker::cli::commands::Cli;
use tubetasker::io::config_io::{self, ConfigError};
use tubetasker::logging::{self, LogError};
use tubetasker::model::AppConfig;
use tubetasker::ops::board::Board;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let log_dir = config
        .log
        .dir
        .clone()
        .unwrap_or_else(config_io::default_log_dir);
    match logging::init_logging(&config.log.level, &log_dir) {
        Ok(_) => {}
        Err(e @ LogError::UnsupportedLevel(_)) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
        // The board still works without a log file
        Err(e) => eprintln!("warning: logging disabled: {}", e),
    }

    let board = if config.board.sample_tasks {
        Board::with_sample_tasks(chrono::Utc::now().timestamp_millis())
    } else {
        Board::new()
    };

    if let Err(e) = tubetasker::tui::run(board, &config) {
        log::error!("event=tui_failed error=\"{}\"", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// File config (explicit `--config` must exist), then flag overrides
fn load_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let file_config = match &cli.config {
        Some(path) => config_io::read_config_from(path, true)?,
        None => config_io::read_config_from(&config_io::default_config_path(), false)?,
    };
    Ok(cli.apply_overrides(file_config))
}
