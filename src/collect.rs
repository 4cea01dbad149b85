//! The collector: walk a directory tree and bundle matching files.
//!
//! One linear pass: create the output sink, recurse through the tree in
//! filesystem order, and for every file whose name ends with the configured
//! extension write a record (relative path, `---content---` marker, verbatim
//! content) to the sink. A file that cannot be read is recorded as skipped
//! and the run continues; only sink-level failures abort.

use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SheafError;

/// Marker line separating a record's path header from its content.
///
/// If a collected file's own text contains this token, the bundle is not
/// unambiguously splittable back into files. Known limitation; no escaping
/// scheme exists.
pub const SEPARATOR: &str = "---content---";

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Explicit configuration for one collection run.
///
/// Immutable for the run's duration. Built by the CLI from flags and
/// `.sheaf.toml`; library callers construct it directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Directory to scan.
    pub root: PathBuf,
    /// Destination file, created or truncated at run start.
    pub output: PathBuf,
    /// Case-sensitive suffix matched against each file NAME (not the path).
    pub extension: String,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// A file whose record has a path header but no content in the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Path to the file that could not be read.
    pub path: PathBuf,
    /// Human-readable reason (permission denied, invalid UTF-8, vanished).
    pub reason: String,
}

impl fmt::Display for SkippedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}

/// Summary of a completed run.
///
/// `collected` counts records with content; files listed in `skipped` still
/// have a path header and separator in the output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectReport {
    /// The output file that was written.
    pub output: PathBuf,
    /// Number of files whose content made it into the output.
    pub collected: usize,
    /// Files that matched the filter but could not be read.
    pub skipped: Vec<SkippedFile>,
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Walk `options.root` and write one record per matching file to
/// `options.output`.
///
/// Records appear in filesystem traversal order — no sorting, not stable
/// across platforms or runs. A root that does not exist (or is not a
/// directory) yields an empty output file and a successful, zero-record
/// report; the condition is surfaced as a warning so it can be told apart
/// from "no matches". The output file itself is never collected, even when
/// it sits inside the scanned tree and matches the filter.
///
/// # Errors
/// Returns [`SheafError::OutputCreate`] if the output file cannot be
/// created, before any traversal happens, and [`SheafError::Io`] if a write
/// to the sink fails mid-run. Unreadable input files never produce an error;
/// they are reported via [`CollectReport::skipped`].
pub fn collect(options: &CollectOptions) -> Result<CollectReport, SheafError> {
    let file = File::create(&options.output).map_err(|source| SheafError::OutputCreate {
        path: options.output.clone(),
        source,
    })?;
    let mut sink = BufWriter::new(file);

    if !options.root.is_dir() {
        warn!(
            root = %options.root.display(),
            "scan root is not an existing directory; output will contain no records"
        );
    }

    let mut report = CollectReport {
        output: options.output.clone(),
        collected: 0,
        skipped: Vec::new(),
    };

    // The sink exists now, so this resolves. Matching candidates are compared
    // against it so the bundle never collects itself when it lives inside the
    // scanned tree (the default invocation does exactly that).
    let sink_path = options.output.canonicalize().ok();

    walk_dir(
        &options.root,
        &options.root,
        &options.extension,
        sink_path.as_deref(),
        &mut sink,
        &mut report,
    )?;

    sink.flush()?;
    Ok(report)
}

/// Recurse through `current`, writing records for matching files.
///
/// An unreadable directory contributes nothing and does not fail the run,
/// matching the silent-skip contract for inputs.
fn walk_dir(
    root: &Path,
    current: &Path,
    extension: &str,
    sink_path: Option<&Path>,
    sink: &mut BufWriter<File>,
    report: &mut CollectReport,
) -> Result<(), SheafError> {
    let Ok(entries) = fs::read_dir(current) else {
        return Ok(());
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(meta) = entry.metadata() else {
            continue;
        };
        if meta.is_dir() {
            walk_dir(root, &path, extension, sink_path, sink, report)?;
        } else if name_matches(&entry.file_name(), extension) {
            if is_sink(&path, sink_path) {
                debug!(path = %path.display(), "not collecting the output file itself");
                continue;
            }
            write_record(root, &path, sink, report)?;
        }
    }
    Ok(())
}

/// Whether this candidate is the output file we are writing to.
fn is_sink(path: &Path, sink_path: Option<&Path>) -> bool {
    sink_path.is_some_and(|sp| path.canonicalize().is_ok_and(|p| p == sp))
}

/// Suffix match on the file name. Case-sensitive; non-UTF-8 names never
/// match.
fn name_matches(name: &OsStr, extension: &str) -> bool {
    name.to_str().is_some_and(|n| n.ends_with(extension))
}

/// Write one record: path header, separator, then the content if readable.
///
/// The header is written before the read is attempted, so a skipped file
/// still appears in the output as a content-less record.
fn write_record(
    root: &Path,
    path: &Path,
    sink: &mut BufWriter<File>,
    report: &mut CollectReport,
) -> Result<(), SheafError> {
    let rel = path.strip_prefix(root).unwrap_or(path);
    write!(sink, "{}\n\n{SEPARATOR}\n\n", rel.display())?;

    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %rel.display(), bytes = content.len(), "collected");
            write!(sink, "{content}\n\n")?;
            report.collected += 1;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable file");
            report.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason: err.to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
