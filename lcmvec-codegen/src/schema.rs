//! Schema model — vector definitions and the TOML schema file parser
//!
//! Deserialises `vectors.toml` into a [`SchemaSet`].

use serde::{Deserialize, Serialize};

// ── Schema set ───────────────────────────────────────────────────────────────

/// The full contents of a `vectors.toml` schema file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSet {
    #[serde(default)]
    pub vectors: Vec<VectorDef>,
}

impl SchemaSet {
    /// Parse from a TOML string (the contents of `vectors.toml`).
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialise back to a TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

// ── Vector definition ────────────────────────────────────────────────────────

/// One `[[vectors]]` entry — the canonical input for a generation run.
///
/// The title phrase drives every derived identifier; the field list order
/// fixes the row index of each coordinate and must therefore never be
/// reordered without regenerating all artifacts together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorDef {
    /// Human title phrase, e.g. `"driving command"`.
    pub title: String,
    /// Ordered snake_case coordinate names, e.g. `["steering_angle", "throttle"]`.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl VectorDef {
    pub fn new<T, F>(title: T, fields: F) -> Self
    where
        T: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            title: title.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
