//! Raster plugin module
//!
//! This module implements a diagnostic raster plugin: it snapshots the pixel
//! blocks the host hands over, then returns a constant tile of ones in the
//! host-requested element type. Separate submodules cover the host contract
//! types, snapshot persistence, and the plugin itself.

pub mod capture;
pub mod common;
pub mod raster;
pub mod snapshot;

pub use common::{
    CaptureError,
    Result,
};

pub use raster::{
    Configuration,
    InheritMask,
    ParameterDataType,
    ParameterInfo,
    PixelBlocks,
    PixelBuffer,
    PixelType,
    PluginDescriptor,
    Properties,
    PropertyValue,
    RasterPlugin,
    TileOrigin,
    TileShape,
    OUTPUT_PIXELS,
    RASTER_MASK,
    RASTER_PIXELS,
};

pub use snapshot::{
    BincodeSnapshotWriter,
    SnapshotConfig,
    SnapshotPaths,
    SnapshotWriter,
};

pub use capture::DebugCapture;
