//! KiCad project file model (`*.kicad_pro`).
//!
//! Only the `net_settings.classes` subtree is modelled. Every other key in the
//! document is ignored when deserializing.

use serde::{Deserialize, Deserializer, Serialize};

/// Top level of a KiCad project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFile {
    pub net_settings: NetSettings,
}

/// The `net_settings` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetSettings {
    pub classes: Vec<NetClass>,
}

/// A single net class record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetClass {
    pub name: String,
    /// Absent in newer project files, where membership lives in `netclass_patterns`.
    /// When present it must be a list; `null` is rejected.
    #[serde(
        default,
        deserialize_with = "present_nets",
        skip_serializing_if = "Option::is_none"
    )]
    pub nets: Option<Vec<String>>,
}

fn present_nets<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::deserialize(deserializer).map(Some)
}

/// Just enough of the project to reach the class records, which stay as raw
/// JSON so each one can be checked when it is reached.
#[derive(Debug, Deserialize)]
pub(crate) struct ClassRecords {
    pub net_settings: RawNetSettings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNetSettings {
    pub classes: Vec<serde_json::Value>,
}

impl NetClass {
    /// Nets in document order; empty when the record has no `nets` field.
    pub fn nets(&self) -> &[String] {
        self.nets.as_deref().unwrap_or(&[])
    }
}

impl ProjectFile {
    pub fn classes(&self) -> &[NetClass] {
        &self.net_settings.classes
    }
}
