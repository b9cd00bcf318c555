//! Snapshot persistence module
//!
//! This module writes the three per-invocation debug records (properties,
//! pixels, mask) to a configured directory for offline inspection.

mod bincode_writer;
pub mod types;
mod writer;

#[cfg(test)]
mod tests;

pub use bincode_writer::{read_record, BincodeSnapshotWriter};
pub use types::{SnapshotConfig, SnapshotPaths};
pub use writer::SnapshotWriter;
