//! Run error types for sheaf.
//!
//! Defines [`SheafError`], the unified error type for a collection run.
//! Error messages include a clear description of what went wrong and
//! actionable guidance on how to fix it.
//!
//! Only run-fatal conditions live here. An individual input file that cannot
//! be read is data, not control flow: it is recorded on the run report as a
//! [`crate::collect::SkippedFile`] and never escalates.

use std::fmt;
use std::path::PathBuf;

use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// SheafError
// ---------------------------------------------------------------------------

/// Unified error type for a collection run.
///
/// Every variant aborts the run. All of them occur before or around the
/// output sink, so no partial-state reconciliation is ever needed: either
/// nothing was written, or the output file is plainly truncated.
#[derive(Debug)]
pub enum SheafError {
    /// The output file could not be created or truncated.
    OutputCreate {
        /// The destination path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed.
    Config(ConfigError),

    /// A write to the output sink failed mid-run.
    Io(std::io::Error),
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SheafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputCreate { path, source } => {
                write!(
                    f,
                    "cannot create output file '{}': {source}\n  To fix: check that the parent directory exists and is writable, or pass a different destination:\n    sheaf --output <FILE>",
                    path.display()
                )
            }
            Self::Config(err) => {
                write!(
                    f,
                    "{err}\n  To fix: edit the config file and correct the issue."
                )
            }
            Self::Io(err) => {
                write!(
                    f,
                    "I/O error while writing output: {err}\n  To fix: check file permissions and disk space."
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// std::error::Error
// ---------------------------------------------------------------------------

impl std::error::Error for SheafError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutputCreate { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

// ---------------------------------------------------------------------------
// From impls
// ---------------------------------------------------------------------------

impl From<std::io::Error> for SheafError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ConfigError> for SheafError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
