use std::path::PathBuf;

/// Errors raised while reading a project file or extracting its net classes.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text is not a JSON document.
    #[error("Parse error: {0}")]
    Parse(serde_json::Error),
    /// The document is JSON but lacks the `net_settings.classes` shape.
    #[error("Schema error: {0}")]
    Schema(serde_json::Error),
    /// Writing rows to the output failed.
    #[error("Output error: {0}")]
    Output(std::io::Error),
}

impl ExtractError {
    /// Only file access failures are recovered; the caller moves on to the next file.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ExtractError::Io { .. })
    }
}
