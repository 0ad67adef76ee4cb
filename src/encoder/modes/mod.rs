//! QR code data mode encoders
//!
//! This module contains packers for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and nine symbols
//! - Byte: 8-bit data (UTF-8 text or raw binary)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;
