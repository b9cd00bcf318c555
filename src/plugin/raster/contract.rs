use serde::{Deserialize, Serialize};

use crate::plugin::common::error::Result;
use crate::plugin::raster::types::{PixelBlocks, Properties, TileOrigin, TileShape};

/// Data type of a declared plugin parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterDataType {
    Raster,
    Numeric,
    Text,
    Boolean,
}

/// Declaration of one host-visible plugin parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub data_type: ParameterDataType,
    pub required: bool,
    pub display_name: String,
    pub description: String,
}

/// Static descriptor a plugin reports to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterInfo>,
}

/// Bitmask of property groups a plugin inherits from its input raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritMask(pub u32);

impl InheritMask {
    pub const PIXEL_TYPE: InheritMask = InheritMask(1);
    pub const NODATA: InheritMask = InheritMask(2);
    pub const DIMENSIONS: InheritMask = InheritMask(4);
    pub const RESAMPLING: InheritMask = InheritMask(8);
    pub const ALL: InheritMask = InheritMask(1 | 2 | 4 | 8);

    pub fn contains(&self, other: InheritMask) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Flags a plugin returns from `configure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub inherit_properties: InheritMask,
    /// Whether the host should supply a validity mask alongside pixel data.
    pub input_mask: bool,
}

/// The five-operation contract a raster-processing host invokes on a plugin.
///
/// The host historically recognized plugins by probing for method names on an
/// object; this trait makes that contract explicit. `describe_output_schema`
/// and `describe_key_metadata` take and return open mappings so a plugin that
/// does not touch schema or metadata can pass everything through verbatim.
pub trait RasterPlugin {
    /// Reports the plugin's name, description and declared parameters.
    fn describe(&self) -> PluginDescriptor;

    /// Reports configuration flags for the given scalar parameters.
    fn configure(&self, scalars: &Properties) -> Configuration;

    /// Transforms the raster-info mapping describing the output dataset.
    fn describe_output_schema(&self, raster_info: Properties) -> Properties;

    /// Transforms per-band key metadata.
    fn describe_key_metadata(
        &self,
        names: &[String],
        band_index: Option<usize>,
        key_metadata: Properties,
    ) -> Properties;

    /// Processes one tile: consumes the host's pixel blocks and returns them
    /// with the plugin's output added.
    fn capture(
        &self,
        origin: TileOrigin,
        shape: &TileShape,
        properties: &Properties,
        pixel_blocks: PixelBlocks,
    ) -> Result<PixelBlocks>;
}
