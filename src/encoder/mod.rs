//! QR code encoding modules
//!
//! This module contains all the logic for turning input data into a symbol:
//! - Segment construction and data mode packing (numeric, alphanumeric, byte)
//! - Version selection and bitstream assembly
//! - Error correction (Reed-Solomon blocks, BCH format and version info)
//! - Module layout, masking and penalty scoring

/// BCH codes for format and version info
pub mod bch;
/// Data codeword assembly (headers, terminator, padding)
pub mod bitstream;
/// Bit accumulator used while packing segments
pub mod bit_buffer;
/// Reed-Solomon block split and codeword interleaving
pub mod blocks;
/// Working module grid with function/data tracking
pub mod canvas;
/// Version and error correction level selection
pub mod capacity;
/// Encoding options and environment tuning knobs
pub mod config;
/// Format information (EC level, mask) drawing and read-back
pub mod format;
/// Finder, timing and alignment patterns
pub mod function_patterns;
/// Mask application and automatic selection
pub mod mask;
/// Data mode packers (numeric, alphanumeric, byte)
pub mod modes;
/// Penalty heuristic for mask selection
pub mod penalty;
/// Zigzag codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// Data segments and mode selection
pub mod segment;
/// ISO/IEC 18004 tables (ECC codewords/blocks)
pub mod tables;
/// Version information (versions 7-40)
pub mod version;
