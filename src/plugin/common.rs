//! Common utilities module
//!
//! This module contains shared utilities used across the plugin.

pub mod error;

pub use error::{CaptureError, Result};
