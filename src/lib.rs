//! RustQRGen - deterministic QR code generation
//!
//! A pure Rust QR code encoder (Model 2, versions 1-40) producing symbols
//! that match the reference module layout bit for bit: same version choice,
//! same error correction boosting, same mask selection.
//!
//! ```
//! use rust_qrgen::{ECLevel, encode_text};
//!
//! let qr = encode_text("HELLO WORLD", ECLevel::L).unwrap();
//! assert_eq!(qr.size(), 21);
//! assert!(qr.get_module(0, 0));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Debug logging gated on `QR_DEBUG`
mod debug;
/// QR code encoding modules (segments, error correction, layout, masking)
#[allow(missing_docs)]
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
pub mod models;
/// Helpers shared by the command-line tool
pub mod tools;
/// Utility functions (rasterizing, ASCII preview)
pub mod utils;

pub use encoder::config::EncodeOptions;
pub use encoder::segment::{Mode, Segment};
pub use error::{DataTooLong, ErrorKind, QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QRCode, Version};

use encoder::qr_encoder::QrEncoder;

/// Encode Unicode text
///
/// Picks numeric, alphanumeric or byte mode for the whole text, searches
/// versions 1-40, selects the mask automatically and boosts the error
/// correction level when that costs no extra version.
///
/// # Errors
/// [`QrError::DataTooLong`] if the text does not fit version 40 at `ec_level`.
pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QRCode> {
    QrEncoder::encode_text(text, ec_level)
}

/// Encode raw bytes as a single byte-mode segment
pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QRCode> {
    QrEncoder::encode_binary(data, ec_level)
}

/// Encode prepared segments with full control
///
/// # Arguments
/// * `segments` - Data segments, written in order
/// * `ec_level` - Minimum error correction level
/// * `min_version`, `max_version` - Inclusive version search range (1-40)
/// * `mask` - Mask index 0-7, or `None` for automatic selection
/// * `boost_ecl` - Raise the level while the data still fits the chosen version
///
/// # Errors
/// Parameter errors for an invalid range or mask, [`QrError::DataTooLong`]
/// if no version in range can hold the data.
pub fn encode_segments(
    segments: &[Segment],
    ec_level: ECLevel,
    min_version: u8,
    max_version: u8,
    mask: Option<u8>,
    boost_ecl: bool,
) -> Result<QRCode> {
    QrEncoder::encode_segments(segments, ec_level, min_version, max_version, mask, boost_ecl)
}

/// Data codewords (bytes) available at `version` and `ec_level`
pub fn data_codeword_capacity(version: Version, ec_level: ECLevel) -> usize {
    encoder::tables::num_data_codewords(version, ec_level)
}

/// Encoder with reusable options
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with specific options
    pub fn with_options(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode text with automatic segment mode
    pub fn encode_text(&self, text: &str, ec_level: ECLevel) -> Result<QRCode> {
        self.encode_segments(&Segment::make_segments(text), ec_level)
    }

    /// Encode raw bytes in byte mode
    pub fn encode_binary(&self, data: &[u8], ec_level: ECLevel) -> Result<QRCode> {
        self.encode_segments(&[Segment::make_bytes(data)], ec_level)
    }

    /// Encode prepared segments
    pub fn encode_segments(&self, segments: &[Segment], ec_level: ECLevel) -> Result<QRCode> {
        QrEncoder::encode_with_options(segments, ec_level, &self.options)
    }
}
