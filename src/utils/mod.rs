//! Utility functions for presenting symbols
//!
//! This module provides helpers around a finished QR code:
//! - Rasterizing to an RGB image with custom colors and quiet zone
//! - Saving as PNG or JPEG
//! - ASCII preview for terminals

pub mod raster;
