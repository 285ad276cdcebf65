//! Netclasses - list KiCad net classes and their member nets
//!
//! Reads the `net_settings.classes` section of a KiCad project file
//! (`*.kicad_pro`) and turns it into flat `label,"net"` rows that can be
//! pasted into a spreadsheet or another tool's configuration.
//!
//! # Quick Start
//!
//! ```
//! use netclasses::{NetClassExtractor, NetClassRow};
//!
//! let raw = r#"{"net_settings":{"classes":[{"name":"pwr_supply_ma","nets":["VCC"]}]}}"#;
//! let rows = NetClassExtractor::extract(raw).unwrap();
//!
//! assert_eq!(rows, vec![NetClassRow::new("supply", "VCC")]);
//! assert_eq!(rows[0].to_string(), "supply,\"VCC\"");
//! ```
//!
//! Class labels drop everything up to the last underscore and a trailing
//! `ma` unit suffix, see [`normalize_label`].

pub mod core;
pub mod error;
pub mod extract;
pub mod label;
pub mod project;

// Re-export main types
pub use crate::core::{ExtractOptions, NetClassCore, RunOutcome};
pub use error::ExtractError;
pub use extract::{ExtractSummary, NetClassExtractor, NetClassRow};
pub use label::normalize_label;
pub use project::{NetClass, NetSettings, ProjectFile};

/// Parse a project file into the net class model (convenience wrapper).
pub fn parse_project(path: &std::path::Path) -> Result<ProjectFile, ExtractError> {
    let raw = std::fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    NetClassExtractor::parse(&raw)
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ExtractError, ExtractOptions, ExtractSummary, NetClassCore, NetClassExtractor,
        NetClassRow, RunOutcome,
    };
}
