use crate::plugin::common::error::Result;
use crate::plugin::raster::types::{PixelBuffer, Properties};
use crate::plugin::snapshot::types::SnapshotPaths;

pub trait SnapshotWriter {
    fn write_snapshot(
        &self,
        properties: &Properties,
        pixels: &PixelBuffer,
        mask: &PixelBuffer,
    ) -> Result<SnapshotPaths>;
}
