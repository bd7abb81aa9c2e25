//! Notebook Scratch - Temp-dir and notebook model round-trip bridge.
//!
//! This crate bridges in-memory notebook cell data and temporary on-disk
//! notebook files. It creates scratch temp directories with best-effort
//! cleanup, materializes a model's serialized content to a named file, and
//! rebuilds a notebook model from a cell list by round-tripping through an
//! exporter and the storage layer. The notebook format itself is owned by
//! collaborators behind the port traits.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
