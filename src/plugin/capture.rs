//! Debug capture plugin module
//!
//! This module contains the plugin implementation itself: snapshot the
//! incoming tile, return a constant tile of ones.

mod debug_capture;


pub use debug_capture::DebugCapture;
