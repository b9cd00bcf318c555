//! Snapshot configuration and naming types

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};

/// Filename prefix shared by every snapshot record.
const STEM_PREFIX: &str = "singleDataset";

static SNAPSHOT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Where snapshot records are written.
///
/// The directory must exist and be writable; the plugin neither creates it
/// nor cleans it up.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub directory: PathBuf,
}

impl SnapshotConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// The three record paths produced by one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    pub properties: PathBuf,
    pub pixels: PathBuf,
    pub mask: PathBuf,
}

impl SnapshotPaths {
    pub fn for_stem(directory: &Path, stem: &str) -> Self {
        Self {
            properties: directory.join(format!("{stem}props.p")),
            pixels: directory.join(format!("{stem}pix_blocks.p")),
            mask: directory.join(format!("{stem}mask.p")),
        }
    }
}

/// Builds the shared filename stem for one invocation.
///
/// The timestamp has one-second granularity, so the stem also carries a
/// process-wide sequence number; two invocations within the same second would
/// otherwise silently overwrite each other's records.
pub fn snapshot_stem(now: DateTime<Local>) -> String {
    let seq = SNAPSHOT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}_{:04}", STEM_PREFIX, now.format("%Y_%b_%d_%H_%M_%S"), seq)
}
