use crate::models::QRCode;
use image::codecs::jpeg::JpegEncoder;
use image::{ColorType, ImageFormat, ImageResult, Rgb, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JPEG quality used by [`save_image`]
pub const JPEG_QUALITY: u8 = 90;

/// Anything that exposes a square grid of dark/light modules
pub trait ModuleSource {
    /// Side length in modules
    fn size(&self) -> usize;
    /// Module color at (x, y); coordinates outside the grid read as light
    fn get_module(&self, x: i32, y: i32) -> bool;
}

impl ModuleSource for QRCode {
    fn size(&self) -> usize {
        QRCode::size(self)
    }

    fn get_module(&self, x: i32, y: i32) -> bool {
        QRCode::get_module(self, x, y)
    }
}

/// Raster output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output width and height in pixels
    pub size_px: u32,
    /// Quiet zone width in modules, drawn in the background color
    pub border: u32,
    /// Dark module color
    pub foreground: Rgb<u8>,
    /// Light module color
    pub background: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size_px: 300,
            border: 0,
            foreground: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

/// Rasterize `source` into a square RGB image.
///
/// Pixel `p` maps to module `floor(p * modules / size_px)` along each axis,
/// where `modules` includes the border on both sides.
pub fn render_rgb(source: &impl ModuleSource, options: &RenderOptions) -> RgbImage {
    let border = i64::from(options.border);
    let modules = source.size() as i64 + 2 * border;
    let size_px = i64::from(options.size_px.max(1));
    let module_at = |p: u32| (i64::from(p) * modules / size_px - border) as i32;

    RgbImage::from_fn(options.size_px, options.size_px, |px, py| {
        if source.get_module(module_at(px), module_at(py)) {
            options.foreground
        } else {
            options.background
        }
    })
}

/// Write `image` to `path` as PNG or JPEG (quality 90) based on the file
/// extension. Other formats the `image` crate recognizes are written with
/// its defaults; unrecognized extensions are an error.
pub fn save_image(image: &RgbImage, path: &Path) -> ImageResult<()> {
    match ImageFormat::from_path(path)? {
        ImageFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
            encoder.encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
        }
        format => image.save_with_format(path, format),
    }
}

/// Text preview: two characters per module, `#` for dark
pub fn to_ascii(source: &impl ModuleSource, border: usize) -> String {
    let border = border as i32;
    let size = source.size() as i32;
    let mut out = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            out.push_str(if source.get_module(x, y) { "##" } else { "  " });
        }
        out.push('\n');
    }
    out
}
