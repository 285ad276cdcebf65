//! Per-file driver shared by the CLI and library callers.

use std::io::Write;
use std::path::Path;

use crate::error::ExtractError;
use crate::extract::{ExtractSummary, NetClassExtractor};

/// Options for an extraction run.
#[derive(Clone, Debug, Default)]
pub struct ExtractOptions {
    /// Keep going after the first file that extracts successfully.
    pub all_files: bool,
}

/// What happened over a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows: usize,
}

/// Per-file extraction API used by the CLI.
pub struct NetClassCore;

impl NetClassCore {
    /// Read one project file and write its rows to `out`.
    pub fn extract_file<W: Write>(path: &Path, out: &mut W) -> Result<ExtractSummary, ExtractError> {
        let raw = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        NetClassExtractor::write_rows(&raw, out)
    }

    /// Process `paths` in order, writing rows and file access errors to `out`.
    ///
    /// A file that cannot be read is reported on `out` and skipped. Unless
    /// `options.all_files` is set, the run stops after the first file that
    /// extracts successfully. Parse and schema errors abort the run.
    pub fn run<P, W>(
        paths: &[P],
        options: &ExtractOptions,
        out: &mut W,
    ) -> Result<RunOutcome, ExtractError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let mut outcome = RunOutcome::default();
        for path in paths {
            let path = path.as_ref();
            tracing::debug!("Extracting net classes from {}", path.display());
            match Self::extract_file(path, out) {
                Ok(summary) => {
                    outcome.files_processed += 1;
                    outcome.rows += summary.rows;
                    tracing::info!(
                        "{}: {} classes, {} rows",
                        path.display(),
                        summary.classes,
                        summary.rows
                    );
                    if !options.all_files {
                        return Ok(outcome);
                    }
                }
                Err(e) if e.is_recoverable() => Self::report(&e, out, &mut outcome)?,
                Err(e) => return Err(e),
            }
        }
        Ok(outcome)
    }

    fn report<W: Write>(
        error: &ExtractError,
        out: &mut W,
        outcome: &mut RunOutcome,
    ) -> Result<(), ExtractError> {
        tracing::debug!("Skipping unreadable input");
        outcome.files_failed += 1;
        writeln!(out, "{}", error).map_err(ExtractError::Output)
    }
}
