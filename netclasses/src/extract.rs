//! Net class extraction.
//!
//! Parsing happens in two steps so the two failure modes stay apart: the text
//! is first read as generic JSON (`ExtractError::Parse`), then the
//! `net_settings.classes` path and each class record are checked
//! (`ExtractError::Schema`). Records are checked one at a time, so rows of the
//! records before a malformed one have already been emitted when it fails.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::error::ExtractError;
use crate::label::normalize_label;
use crate::project::{ClassRecords, NetClass, ProjectFile};

/// One output row: a normalized class label and one of its nets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetClassRow {
    pub label: String,
    pub net: String,
}

impl NetClassRow {
    pub fn new(label: impl Into<String>, net: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            net: net.into(),
        }
    }
}

/// Formats as `label,"net"`. Quotes inside the net name are not escaped.
impl fmt::Display for NetClassRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},\"{}\"", self.label, self.net)
    }
}

/// Counts for one extracted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractSummary {
    pub classes: usize,
    pub rows: usize,
}

/// Turns raw project text into net class rows.
pub struct NetClassExtractor;

impl NetClassExtractor {
    /// Parse raw project text into the net class model.
    ///
    /// Unlike [`NetClassExtractor::write_rows`], every record is checked
    /// before anything is returned.
    pub fn parse(raw: impl AsRef<[u8]>) -> Result<ProjectFile, ExtractError> {
        let value = Self::parse_json(raw.as_ref())?;
        serde_json::from_value(value).map_err(ExtractError::Schema)
    }

    /// Extract all (label, net) rows in document order.
    pub fn extract(raw: impl AsRef<[u8]>) -> Result<Vec<NetClassRow>, ExtractError> {
        let mut rows = Vec::new();
        Self::visit(raw.as_ref(), |row| {
            rows.push(row);
            Ok(())
        })?;
        Ok(rows)
    }

    /// Extract rows and write each one to `out` as soon as it is produced.
    pub fn write_rows<W: Write>(
        raw: impl AsRef<[u8]>,
        out: &mut W,
    ) -> Result<ExtractSummary, ExtractError> {
        Self::visit(raw.as_ref(), |row| {
            writeln!(out, "{}", row).map_err(ExtractError::Output)
        })
    }

    fn parse_json(raw: &[u8]) -> Result<serde_json::Value, ExtractError> {
        serde_json::from_slice(raw).map_err(ExtractError::Parse)
    }

    fn visit<F>(raw: &[u8], mut emit: F) -> Result<ExtractSummary, ExtractError>
    where
        F: FnMut(NetClassRow) -> Result<(), ExtractError>,
    {
        let value = Self::parse_json(raw)?;
        let records: ClassRecords =
            serde_json::from_value(value).map_err(ExtractError::Schema)?;

        let mut summary = ExtractSummary::default();
        for record in records.net_settings.classes {
            let class: NetClass = serde_json::from_value(record).map_err(ExtractError::Schema)?;
            summary.classes += 1;
            let label = normalize_label(&class.name);
            tracing::debug!(
                "Net class '{}' -> '{}' ({} nets)",
                class.name,
                label,
                class.nets().len()
            );
            for net in class.nets() {
                emit(NetClassRow::new(label.as_str(), net.as_str()))?;
                summary.rows += 1;
            }
        }
        Ok(summary)
    }
}
