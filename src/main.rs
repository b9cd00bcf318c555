use anyhow::Context;
use ndarray::{ArrayD, IxDyn};
use tile_probe_rs::logger;
use tile_probe_rs::plugin::{
    DebugCapture, PixelBlocks, PixelBuffer, Properties, PropertyValue, RasterPlugin,
    SnapshotConfig, TileOrigin, TileShape, OUTPUT_PIXELS, RASTER_MASK, RASTER_PIXELS,
};

use tracing::{error, info};

const SNAPSHOT_DIRECTORY: &str = "debug_logs";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting tile probe demo...");

    std::fs::create_dir_all(SNAPSHOT_DIRECTORY)
        .with_context(|| format!("creating snapshot directory {SNAPSHOT_DIRECTORY}"))?;

    let plugin = DebugCapture::new(SnapshotConfig::new(SNAPSHOT_DIRECTORY));

    let descriptor = plugin.describe();
    info!("Plugin initialized: {}", descriptor.name);
    info!("Configuration: {:?}", plugin.configure(&Properties::new()));

    // One synthetic f4 tile with a full-validity mask.
    let shape = [1usize, 64, 64];
    let mut properties = Properties::new();
    properties.insert(
        "pixelType".to_string(),
        PropertyValue::Text("f4".to_string()),
    );

    let mut blocks = PixelBlocks::new();
    blocks.insert(
        RASTER_PIXELS.to_string(),
        PixelBuffer::F32(ArrayD::zeros(IxDyn(&shape))),
    );
    blocks.insert(
        RASTER_MASK.to_string(),
        PixelBuffer::U8(ArrayD::ones(IxDyn(&shape))),
    );

    let origin = TileOrigin { row: 0, col: 0 };
    match plugin.capture(origin, &TileShape::new(shape), &properties, blocks) {
        Ok(blocks) => info!(
            "Capture successful, output shape {:?}",
            blocks[OUTPUT_PIXELS].shape()
        ),
        Err(e) => error!("Capture failed: {}", e),
    }

    Ok(())
}
