//! Run configuration (`.sheaf.toml`).
//!
//! Defines the typed defaults for a collection run. The file is looked up in
//! the invocation directory; CLI flags override anything set here. Missing
//! fields use built-in defaults, and a missing file is not an error.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Conventional config file name, resolved against the invocation directory.
pub const CONFIG_FILE_NAME: &str = ".sheaf.toml";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level sheaf configuration.
///
/// Parsed from `.sheaf.toml`. Missing fields use defaults; missing file →
/// all defaults (no error).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SheafConfig {
    /// Default values for the collect run.
    #[serde(default)]
    pub collect: CollectDefaults,
}

// ---------------------------------------------------------------------------
// CollectDefaults
// ---------------------------------------------------------------------------

/// Defaults applied when the corresponding CLI flag is absent.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectDefaults {
    /// Destination file for the bundle (default: `"combined.php"`).
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File-name suffix to match, case-sensitive (default: `".php"`).
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CollectDefaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            extension: default_extension(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("combined.php")
}

fn default_extension() -> String {
    ".php".to_owned()
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Failure to load or parse the configuration file.
#[derive(Debug)]
pub struct ConfigError {
    /// The path that was being loaded (if available).
    pub path: Option<PathBuf>,
    /// Human-readable message with line-level detail when possible.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = &self.path {
            write!(f, "{}: {}", p.display(), self.message)
        } else {
            write!(f, "config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl SheafConfig {
    /// Load configuration from `path`.
    ///
    /// - File missing → returns defaults.
    /// - File present but unreadable or invalid → returns a [`ConfigError`]
    ///   with line-level detail.
    ///
    /// # Errors
    /// Returns `ConfigError` on I/O errors (other than not-found) or parse
    /// errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError {
                    path: Some(path.to_owned()),
                    message: format!("could not read file: {e}"),
                });
            }
        };
        Self::parse(&contents).map_err(|mut e| {
            e.path = Some(path.to_owned());
            e
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ConfigError` on invalid TOML or unknown fields.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| {
            let mut message = e.message().to_owned();
            if let Some(span) = e.span() {
                // Calculate line number from byte offset.
                let line = toml_str[..span.start]
                    .chars()
                    .filter(|&c| c == '\n')
                    .count()
                    + 1;
                message = format!("line {line}: {message}");
            }
            ConfigError {
                path: None,
                message,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
