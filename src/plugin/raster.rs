//! Host raster contract module
//!
//! This module defines the types the host exchanges with a plugin (open
//! property mappings, pixel buffers, tile geometry) and the five-operation
//! plugin trait itself.

mod contract;
pub mod types;


pub use contract::{
    Configuration, InheritMask, ParameterDataType, ParameterInfo, PluginDescriptor, RasterPlugin,
};
pub use types::{
    PixelBlocks, PixelBuffer, PixelType, Properties, PropertyValue, TileOrigin, TileShape,
    OUTPUT_PIXELS, RASTER_MASK, RASTER_PIXELS,
};
