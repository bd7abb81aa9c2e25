//! Cell value objects - units of notebook content.
//!
//! Cells are passed through to the exporter uninspected beyond
//! serialization; the bridge never reads individual fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a notebook cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(Uuid);

impl CellId {
    /// Creates a new random CellId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a CellId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CellId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CellId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The kind of content a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Executable code.
    Code,
    /// Markdown prose.
    Markdown,
    /// Raw, unrendered text.
    Raw,
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::Code => write!(f, "code"),
            CellKind::Markdown => write!(f, "markdown"),
            CellKind::Raw => write!(f, "raw"),
        }
    }
}

/// A single unit of notebook content.
///
/// Opaque from the bridge's perspective: cells are handed to the exporter
/// as an ordered slice and never mutated or inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Unique identifier for the cell.
    pub id: CellId,

    /// What the cell contains.
    pub kind: CellKind,

    /// The cell's textual source.
    pub source: String,
}

impl Cell {
    /// Creates a new cell with a fresh identifier.
    pub fn new(kind: CellKind, source: impl Into<String>) -> Self {
        Self {
            id: CellId::new(),
            kind,
            source: source.into(),
        }
    }

    /// Creates a code cell.
    pub fn code(source: impl Into<String>) -> Self {
        Self::new(CellKind::Code, source)
    }

    /// Creates a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self::new(CellKind::Markdown, source)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
