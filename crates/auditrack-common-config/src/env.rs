//! Environment variable handling.

use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    /// Explicit config file, read by the CLI `--config` flag.
    pub const AUDITRACK_CONFIG: &str = "AUDITRACK_CONFIG";
    /// Search index, read by the CLI `--index` flag.
    pub const AUDITRACK_INDEX: &str = "AUDITRACK_INDEX";
    /// Selects an extra `.env.<name>` file.
    pub const AUDITRACK_ENV: &str = "AUDITRACK_ENV";
}

/// Process environment, after `.env` files have been applied.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Initialize environment from .env files.
    ///
    /// Missing files are skipped; a file that exists but cannot be parsed is
    /// an error. Variables already set in the process are never overwritten.
    pub fn init() -> Result<Self, EnvError> {
        let mut files = vec![".env".to_string(), ".env.local".to_string()];
        if let Ok(name) = env::var(vars::AUDITRACK_ENV) {
            files.push(format!(".env.{name}"));
        }

        for file in files {
            match dotenvy::from_filename(&file) {
                Ok(_) => {}
                Err(e) if e.not_found() => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self { _guard: () })
    }
}
