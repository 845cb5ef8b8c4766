//! Logger setup: terminal (stderr) plus an optional log file.

use std::fs::File;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use super::config::SessionCfg;
use super::errors::LoggerError;


/// Installs the global logger described by `cfg`.
///
/// Terminal output goes to stderr so it never interleaves with the
/// iteration tables on stdout. With `log_level = "off"` nothing is
/// installed.
///
/// # Errors
/// - [`LoggerError::Config`]     : unknown `log_level`
/// - [`LoggerError::File`]       : `log_file` cannot be created
/// - [`LoggerError::AlreadySet`] : a global logger is already installed
pub fn init_logger(cfg: &SessionCfg) -> Result<(), LoggerError> {
    let level = cfg.level_filter()?;
    if level == LevelFilter::Off {
        return Ok(());
    }

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = &cfg.log_file {
        let file = File::create(path).map_err(|source| LoggerError::File {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    log::info!("logging started at level {level}");
    Ok(())
}
