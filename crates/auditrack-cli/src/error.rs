//! CLI error handling.

use std::io;
use std::process::ExitCode;

use auditrack_common_config::{ConfigError, EnvError};
use auditrack_common_log::LogError;
use thiserror::Error;

/// CLI error type with context for the user.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
        suggestions: Vec<String>,
    },

    #[error("{message}")]
    Logging {
        message: String,
        #[source]
        source: LogError,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::NotFound { .. } => "E005",
            Self::Logging { .. } => "E011",
            Self::Other(_) => "E999",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub(crate) fn exit_status(&self) -> u8 {
        match self {
            Self::Config { .. } => 2,
            Self::Io { .. } => 3,
            Self::NotFound { .. } => 6,
            Self::Logging { .. } | Self::Other(_) => 1,
        }
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => {
                Some("See suggestions below")
            }
            _ => None,
        }
    }

    /// Get suggestions for this error
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Create a config error with hint
    pub fn config_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a not found error with suggestions
    pub fn not_found_with_suggestions(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
            suggestions,
        }
    }

    /// Render the error, its hint and suggestions for stderr.
    pub fn render(&self) -> String {
        let mut out = format!("error[{}]: {self}", self.code());
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            out.push_str(&format!("\n  caused by: {cause}"));
            source = cause.source();
        }
        if let Some(hint) = self.hint() {
            out.push_str(&format!("\n  hint: {hint}"));
        }
        for suggestion in self.suggestions() {
            out.push_str(&format!("\n    - {suggestion}"));
        }
        out
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::NotFound { .. } => {
                Some("pass --config with an existing file or unset AUDITRACK_CONFIG".to_string())
            }
            ConfigError::EnvVarNotFound { var } => {
                Some(format!("export {var} or give it a default with ${{{var}:-value}}"))
            }
            _ => None,
        };
        Self::Config {
            message: "failed to load configuration".to_string(),
            source: Some(Box::new(err)),
            hint,
        }
    }
}

impl From<EnvError> for CliError {
    fn from(err: EnvError) -> Self {
        Self::Config {
            message: "failed to load environment".to_string(),
            source: Some(Box::new(err)),
            hint: None,
        }
    }
}

impl From<LogError> for CliError {
    fn from(err: LogError) -> Self {
        Self::Logging {
            message: "failed to set up logging".to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codes_and_exit_statuses() {
        let err = CliError::not_found_with_suggestions("resource", "deploy", vec![]);
        assert_eq!(err.code(), "E005");
        assert_eq!(err.exit_status(), 6);
        assert_eq!(err.to_string(), "resource not found: deploy");

    }

    #[test]
    fn test_config_error_conversion_keeps_source() {
        let err: CliError = ConfigError::NotFound {
            path: PathBuf::from("/nope.yaml"),
        }
        .into();

        let rendered = err.render();
        assert!(rendered.starts_with("error[E001]: failed to load configuration"));
        assert!(rendered.contains("caused by: config file not found: /nope.yaml"));
        assert!(rendered.contains("hint: pass --config"));
    }

    #[test]
    fn test_env_var_hint() {
        let err: CliError = ConfigError::EnvVarNotFound {
            var: "INDEX".to_string(),
        }
        .into();
        assert_eq!(
            err.hint(),
            Some("export INDEX or give it a default with ${INDEX:-value}")
        );
    }

    #[test]
    fn test_render_lists_suggestions() {
        let err = CliError::not_found_with_suggestions(
            "resource",
            "pipelinerun",
            vec!["pipeline-run".to_string()],
        );
        let rendered = err.render();
        assert!(rendered.contains("hint: See suggestions below"));
        assert!(rendered.ends_with("    - pipeline-run"));
    }
}
