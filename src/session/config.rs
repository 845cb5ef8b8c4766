//! Session configuration.
//!
//! [`SessionCfg`]: loaded from TOML, every field optional
//! ├ `max_iter`           : iteration cap for both methods (default 20)
//! ├ `precision`          : decimals shown in tables and results (default 7)
//! ├ `log_level`          : off | error | warn | info | debug | trace (default warn)
//! ├ `log_file`           : optional file receiving the same log records
//! ├ `default_expression` : function offered before the user enters one;
//! │                        `""` disables it
//! └ `repeat`             : return to the first prompt after a run
//!
//! ```toml
//! max_iter = 50
//! precision = 10
//! log_level = "debug"
//! repeat = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use simplelog::LevelFilter;

use super::errors::ConfigError;
use crate::root_finding::MAX_ITS;


pub const DEFAULT_PRECISION: usize = 7;
pub const MAX_PRECISION: usize = 17;
pub const DEFAULT_EXPRESSION: &str = "x - 4*log(x)";


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionCfg {
    pub max_iter           : usize,
    pub precision          : usize,
    pub log_level          : String,
    pub log_file           : Option<PathBuf>,
    pub default_expression : Option<String>,
    pub repeat             : bool,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            max_iter           : MAX_ITS,
            precision          : DEFAULT_PRECISION,
            log_level          : "warn".to_string(),
            log_file           : None,
            default_expression : Some(DEFAULT_EXPRESSION.to_string()),
            repeat             : false,
        }
    }
}

impl SessionCfg {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: SessionCfg = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    /// Checks ranges and the log level name. The default expression is
    /// checked when a session is built, against that session's registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iter == 0 {
            return Err(ConfigError::InvalidMaxIter { got: self.max_iter });
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision { got: self.precision, max: MAX_PRECISION });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel { got: self.log_level.clone() })
    }
}
