//! Host-exchanged data types

use std::collections::BTreeMap;

use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::plugin::common::error::{CaptureError, Result};

/// Key under which the host supplies the tile's pixel buffer.
pub const RASTER_PIXELS: &str = "raster_pixels";
/// Key under which the host supplies the tile's validity mask.
pub const RASTER_MASK: &str = "raster_mask";
/// Key under which the plugin returns the produced tile.
pub const OUTPUT_PIXELS: &str = "output_pixels";

/// A scalar or nested value in an open property mapping.
///
/// The host attaches arbitrary properties to a tile request; unknown keys and
/// value shapes must survive untouched, so this mirrors the full range of what
/// the host can send rather than a closed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<PropertyValue>),
    Map(BTreeMap<String, PropertyValue>),
}

/// Open string-keyed property mapping attached to a tile request.
pub type Properties = BTreeMap<String, PropertyValue>;

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PropertyValue::Null,
            serde_json::Value::Bool(b) => PropertyValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PropertyValue::Int(i)
                } else {
                    PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => PropertyValue::Text(s),
            serde_json::Value::Array(items) => {
                PropertyValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                PropertyValue::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<PropertyValue> for serde_json::Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Null => serde_json::Value::Null,
            PropertyValue::Bool(b) => serde_json::Value::Bool(b),
            PropertyValue::Int(i) => serde_json::Value::from(i),
            PropertyValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::Text(s) => serde_json::Value::String(s),
            PropertyValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            PropertyValue::Map(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// Numeric element types the host can request for an output tile.
///
/// Codes follow the host's `pixelType` property convention: a kind letter
/// (`u`nsigned, `i`nteger, `f`loat) followed by the element width in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl PixelType {
    /// Parses a `pixelType` property code.
    ///
    /// Unrecognized codes are an error; the plugin has no sensible fallback
    /// element type to produce.
    pub fn parse(code: &str) -> Result<Self> {
        Ok(match code {
            "u1" => PixelType::U8,
            "i1" => PixelType::I8,
            "u2" => PixelType::U16,
            "i2" => PixelType::I16,
            "u4" => PixelType::U32,
            "i4" => PixelType::I32,
            "f4" => PixelType::F32,
            "f8" => PixelType::F64,
            other => return Err(CaptureError::UnknownPixelType(other.to_string())),
        })
    }

    pub fn code(&self) -> &'static str {
        match self {
            PixelType::U8 => "u1",
            PixelType::I8 => "i1",
            PixelType::U16 => "u2",
            PixelType::I16 => "i2",
            PixelType::U32 => "u4",
            PixelType::I32 => "i4",
            PixelType::F32 => "f4",
            PixelType::F64 => "f8",
        }
    }
}

/// A dynamically-shaped numeric buffer for one tile.
///
/// The host decides the element type per request, so the buffer is an enum
/// over the supported element types rather than a generic parameter; the
/// plugin trait stays object-safe and the buffer stays serializable as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PixelBuffer {
    U8(ArrayD<u8>),
    I8(ArrayD<i8>),
    U16(ArrayD<u16>),
    I16(ArrayD<i16>),
    U32(ArrayD<u32>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

impl PixelBuffer {
    pub fn shape(&self) -> &[usize] {
        match self {
            PixelBuffer::U8(a) => a.shape(),
            PixelBuffer::I8(a) => a.shape(),
            PixelBuffer::U16(a) => a.shape(),
            PixelBuffer::I16(a) => a.shape(),
            PixelBuffer::U32(a) => a.shape(),
            PixelBuffer::I32(a) => a.shape(),
            PixelBuffer::F32(a) => a.shape(),
            PixelBuffer::F64(a) => a.shape(),
        }
    }

    pub fn pixel_type(&self) -> PixelType {
        match self {
            PixelBuffer::U8(_) => PixelType::U8,
            PixelBuffer::I8(_) => PixelType::I8,
            PixelBuffer::U16(_) => PixelType::U16,
            PixelBuffer::I16(_) => PixelType::I16,
            PixelBuffer::U32(_) => PixelType::U32,
            PixelBuffer::I32(_) => PixelType::I32,
            PixelBuffer::F32(_) => PixelType::F32,
            PixelBuffer::F64(_) => PixelType::F64,
        }
    }

    /// Allocates an all-ones buffer of the given shape and element type.
    ///
    /// The buffer is built directly in the target type, so no intermediate
    /// allocation or cast happens even when the requested type differs from
    /// the input tile's.
    pub fn ones(shape: &[usize], pixel_type: PixelType) -> Self {
        let dim = IxDyn(shape);
        match pixel_type {
            PixelType::U8 => PixelBuffer::U8(ArrayD::ones(dim)),
            PixelType::I8 => PixelBuffer::I8(ArrayD::ones(dim)),
            PixelType::U16 => PixelBuffer::U16(ArrayD::ones(dim)),
            PixelType::I16 => PixelBuffer::I16(ArrayD::ones(dim)),
            PixelType::U32 => PixelBuffer::U32(ArrayD::ones(dim)),
            PixelType::I32 => PixelBuffer::I32(ArrayD::ones(dim)),
            PixelType::F32 => PixelBuffer::F32(ArrayD::ones(dim)),
            PixelType::F64 => PixelBuffer::F64(ArrayD::ones(dim)),
        }
    }
}

/// Open mapping of named pixel buffers exchanged with the host per tile.
pub type PixelBlocks = BTreeMap<String, PixelBuffer>;

/// Top-left coordinate of the requested tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOrigin {
    pub row: i64,
    pub col: i64,
}

/// Dimensions of the requested tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileShape {
    pub dims: Vec<usize>,
}

impl TileShape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self {
        Self { dims: dims.into() }
    }
}
