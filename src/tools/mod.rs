use crate::encoder::config::EncodeOptions;
use crate::encoder::segment::{Mode, Segment};
use crate::error::QrError;
use crate::models::{ECLevel, QRCode};
use crate::utils::raster::{RenderOptions, render_rgb, save_image};
use crate::{Encoder, data_codeword_capacity};
use image::Rgb;
use std::path::Path;
use thiserror::Error;

/// Failures surfaced by the command-line helpers
#[derive(Debug, Error)]
pub enum ToolError {
    /// Encoding failed
    #[error(transparent)]
    Encode(#[from] QrError),
    /// Writing the image failed
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Parse `L`, `M`, `Q` or `H` (case-insensitive, long names accepted)
pub fn parse_ec_level(value: &str) -> Result<ECLevel, String> {
    match value.trim().to_ascii_uppercase().as_str() {
        "L" | "LOW" => Ok(ECLevel::L),
        "M" | "MEDIUM" => Ok(ECLevel::M),
        "Q" | "QUARTILE" => Ok(ECLevel::Q),
        "H" | "HIGH" => Ok(ECLevel::H),
        other => Err(format!("unknown error correction level '{}'", other)),
    }
}

/// Parse a `#RRGGBB` (or `RRGGBB`) color
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>, String> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected #RRGGBB, got '{}'", value));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Encode `text` and write it as an image at `out`.
pub fn encode_to_file(
    text: &str,
    ec_level: ECLevel,
    options: EncodeOptions,
    render: &RenderOptions,
    out: &Path,
) -> Result<QRCode, ToolError> {
    let qr = Encoder::with_options(options).encode_text(text, ec_level)?;
    let img = render_rgb(&qr, render);
    save_image(&img, out)?;
    Ok(qr)
}

/// Summary of an encoded symbol for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolSummary {
    /// Version number (1-40)
    pub version: u8,
    /// Side length in modules
    pub size: usize,
    /// Error correction level after boosting
    pub ec_level: ECLevel,
    /// Chosen mask index
    pub mask: u8,
    /// Data codewords available at this version and level
    pub data_codewords: usize,
    /// Mode of the single segment chosen for the text, if any
    pub mode: Option<Mode>,
    /// Ratio of dark modules to all modules
    pub dark_ratio: f64,
}

/// Collect display statistics for `qr`, built from `text`.
pub fn symbol_summary(qr: &QRCode, text: &str) -> SymbolSummary {
    let total = qr.size() * qr.size();
    let dark = qr.modules().count_dark();
    let dark_ratio = if total == 0 {
        0.0
    } else {
        dark as f64 / total as f64
    };
    SymbolSummary {
        version: qr.version().number(),
        size: qr.size(),
        ec_level: qr.error_correction(),
        mask: qr.mask_pattern().index(),
        data_codewords: data_codeword_capacity(qr.version(), qr.error_correction()),
        mode: Segment::make_segments(text).first().map(Segment::mode),
        dark_ratio,
    }
}
