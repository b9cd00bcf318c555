use tracing::{debug, info, instrument};

use crate::plugin::common::error::{CaptureError, Result};
use crate::plugin::raster::{
    Configuration, InheritMask, ParameterDataType, ParameterInfo, PixelBlocks, PixelBuffer,
    PixelType, PluginDescriptor, Properties, RasterPlugin, TileOrigin, TileShape, OUTPUT_PIXELS,
    RASTER_MASK, RASTER_PIXELS,
};
use crate::plugin::snapshot::{BincodeSnapshotWriter, SnapshotConfig, SnapshotWriter};

/// Property key naming the element type requested for the output tile.
const PIXEL_TYPE_KEY: &str = "pixelType";

/// Diagnostic plugin that snapshots every tile it is handed.
///
/// On each invocation it serializes the tile's properties, pixel buffer and
/// mask to the configured snapshot directory, then returns a same-shaped
/// all-ones buffer in the requested element type. The real pixel values are
/// deliberately discarded; the point is the snapshot, not the output.
pub struct DebugCapture<W: SnapshotWriter = BincodeSnapshotWriter> {
    writer: W,
}

impl DebugCapture<BincodeSnapshotWriter> {
    pub fn new(config: SnapshotConfig) -> Self {
        Self {
            writer: BincodeSnapshotWriter::new(config),
        }
    }
}

impl<W: SnapshotWriter> DebugCapture<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    fn requested_pixel_type(properties: &Properties) -> Result<PixelType> {
        let code = properties
            .get(PIXEL_TYPE_KEY)
            .and_then(|v| v.as_str())
            .ok_or_else(|| CaptureError::MissingProperty(PIXEL_TYPE_KEY.to_string()))?;
        PixelType::parse(code)
    }
}

impl<W: SnapshotWriter> RasterPlugin for DebugCapture<W> {
    fn describe(&self) -> PluginDescriptor {
        PluginDescriptor {
            name: "Debug Capture".to_string(),
            description: "Snapshots incoming pixel blocks to disk and returns a tile of ones."
                .to_string(),
            parameters: vec![ParameterInfo {
                name: "raster".to_string(),
                data_type: ParameterDataType::Raster,
                required: true,
                display_name: "Raster".to_string(),
                description: "A single input raster.".to_string(),
            }],
        }
    }

    fn configure(&self, _scalars: &Properties) -> Configuration {
        Configuration {
            inherit_properties: InheritMask::ALL,
            input_mask: true,
        }
    }

    fn describe_output_schema(&self, raster_info: Properties) -> Properties {
        // Geometry, resolution and band count are untouched.
        raster_info
    }

    fn describe_key_metadata(
        &self,
        _names: &[String],
        _band_index: Option<usize>,
        key_metadata: Properties,
    ) -> Properties {
        key_metadata
    }

    #[instrument(skip_all, fields(row = origin.row, col = origin.col))]
    fn capture(
        &self,
        origin: TileOrigin,
        shape: &TileShape,
        properties: &Properties,
        mut pixel_blocks: PixelBlocks,
    ) -> Result<PixelBlocks> {
        let pixels = pixel_blocks
            .get(RASTER_PIXELS)
            .ok_or_else(|| CaptureError::MissingBlock(RASTER_PIXELS.to_string()))?;
        let mask = pixel_blocks
            .get(RASTER_MASK)
            .ok_or_else(|| CaptureError::MissingBlock(RASTER_MASK.to_string()))?;
        let pixel_type = Self::requested_pixel_type(properties)?;

        debug!(
            "Capturing tile: requested shape {:?}, buffer shape {:?}",
            shape.dims,
            pixels.shape()
        );

        // Raw pre-conversion buffers go to disk, exactly as received.
        self.writer.write_snapshot(properties, pixels, mask)?;

        let dims = pixels.shape().to_vec();
        let output = PixelBuffer::ones(&dims, pixel_type);

        info!(
            "Tile captured: output shape {:?}, element type {}",
            dims,
            pixel_type.code()
        );

        pixel_blocks.insert(OUTPUT_PIXELS.to_string(), output);
        Ok(pixel_blocks)
    }
}
