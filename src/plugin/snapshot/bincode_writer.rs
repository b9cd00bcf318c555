//! Snapshot writer backed by bincode-encoded files.
//!
//! Each record is a standalone bincode payload (standard configuration) of a
//! serde-serializable value. The format is chosen for compactness and easy
//! offline decoding; nothing in the plugin ever reads the files back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::plugin::common::error::{CaptureError, Result};
use crate::plugin::raster::types::{PixelBuffer, Properties};
use crate::plugin::snapshot::types::{snapshot_stem, SnapshotConfig, SnapshotPaths};
use crate::plugin::snapshot::writer::SnapshotWriter;

pub struct BincodeSnapshotWriter {
    config: SnapshotConfig,
}

impl BincodeSnapshotWriter {
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    fn write_record<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        bincode::serde::encode_into_std_write(value, &mut writer, bincode::config::standard())
            .map_err(|e| CaptureError::SnapshotEncode(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }
}

impl SnapshotWriter for BincodeSnapshotWriter {
    fn write_snapshot(
        &self,
        properties: &Properties,
        pixels: &PixelBuffer,
        mask: &PixelBuffer,
    ) -> Result<SnapshotPaths> {
        let stem = snapshot_stem(Local::now());
        let paths = SnapshotPaths::for_stem(&self.config.directory, &stem);

        debug!("Writing snapshot records with stem {}", stem);

        self.write_record(&paths.properties, properties)?;
        self.write_record(&paths.pixels, pixels)?;
        self.write_record(&paths.mask, mask)?;

        debug!(
            "Snapshot complete: {}, {}, {}",
            paths.properties.display(),
            paths.pixels.display(),
            paths.mask.display()
        );

        Ok(paths)
    }
}

/// Decodes a snapshot record written by [`BincodeSnapshotWriter`].
///
/// Intended for offline inspection tooling and tests.
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path)?;
    let (decoded, read) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
        .map_err(|e| CaptureError::SnapshotDecode(e.to_string()))?;
    if read != bytes.len() {
        return Err(CaptureError::SnapshotDecode(format!(
            "trailing bytes in {}",
            path.display()
        )));
    }
    Ok(decoded)
}
