//! Domain - value types owned by this crate.
//!
//! The notebook format belongs to the storage/exporter collaborators; the
//! domain here is only what the bridge itself handles: cells and the
//! crate-level error.

mod cell;
mod error;

pub use cell::{Cell, CellId, CellKind};
pub use error::BridgeError;
