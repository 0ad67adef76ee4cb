use crate::debug::qr_debug;
use crate::encoder::bitstream::BitstreamAssembler;
use crate::encoder::blocks::add_ecc_and_interleave;
use crate::encoder::canvas::ModuleGrid;
use crate::encoder::capacity;
use crate::encoder::config::EncodeOptions;
use crate::encoder::format::draw_format_bits;
use crate::encoder::function_patterns::draw_function_patterns;
use crate::encoder::mask::{apply_mask, select_mask};
use crate::encoder::placement::draw_codewords;
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, QRCode, Version};

/// Main QR encoder: segments in, finished symbol out
pub struct QrEncoder;

impl QrEncoder {
    /// Encode Unicode text with automatic mode, full version range,
    /// automatic mask and error correction boosting
    pub fn encode_text(text: &str, ec_level: ECLevel) -> Result<QRCode> {
        let segments = Segment::make_segments(text);
        Self::encode_with_options(&segments, ec_level, &EncodeOptions::default())
    }

    /// Encode raw bytes as a single byte-mode segment
    pub fn encode_binary(data: &[u8], ec_level: ECLevel) -> Result<QRCode> {
        let segments = [Segment::make_bytes(data)];
        Self::encode_with_options(&segments, ec_level, &EncodeOptions::default())
    }

    /// Encode segments with explicit version bounds, mask and boost flag.
    /// `mask` of `None` selects the lowest-penalty mask.
    pub fn encode_segments(
        segments: &[Segment],
        ec_level: ECLevel,
        min_version: u8,
        max_version: u8,
        mask: Option<u8>,
        boost_ecl: bool,
    ) -> Result<QRCode> {
        let options = EncodeOptions {
            min_version,
            max_version,
            mask,
            boost_ecl,
        };
        Self::encode_with_options(segments, ec_level, &options)
    }

    /// Encode segments under `options`
    pub fn encode_with_options(
        segments: &[Segment],
        ec_level: ECLevel,
        options: &EncodeOptions,
    ) -> Result<QRCode> {
        let (min_version, max_version, mask) = options.validate()?;

        // Step 1: Pick version and final level
        let plan = capacity::plan(
            segments,
            ec_level,
            min_version,
            max_version,
            options.boost_ecl,
        )?;

        // Step 2: Header, payload, terminator and padding
        let data = BitstreamAssembler::assemble(segments, &plan)?;

        // Step 3: Error correction, layout and masking
        Self::encode_codewords(plan.version, plan.ec_level, &data, mask)
    }

    /// Build a symbol from already padded data codewords
    ///
    /// `data` must hold exactly the data capacity of (version, level).
    pub fn encode_codewords(
        version: Version,
        ec_level: ECLevel,
        data: &[u8],
        mask: Option<MaskPattern>,
    ) -> Result<QRCode> {
        if data.len() != num_data_codewords(version, ec_level) {
            return Err(QrError::Internal("data codeword count does not match version"));
        }

        let mut grid = ModuleGrid::new(version.size());
        draw_function_patterns(&mut grid, version, ec_level);

        let codewords = add_ecc_and_interleave(version, ec_level, data)?;
        draw_codewords(&mut grid, &codewords)?;

        let mask = match mask {
            Some(mask) => mask,
            None => select_mask(&grid, version, ec_level),
        };
        apply_mask(&mut grid, mask);
        draw_format_bits(&mut grid, ec_level, mask);

        qr_debug!(
            "ENCODE: v{} {:?} mask={} codewords={}",
            version.number(),
            ec_level,
            mask.index(),
            codewords.len()
        );

        Ok(QRCode::new(version, ec_level, mask, grid.to_matrix()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DataTooLong, ErrorKind};

    #[test]
    fn test_encode_text_hello_world() {
        let qr = QrEncoder::encode_text("HELLO WORLD", ECLevel::L).unwrap();
        assert_eq!(qr.version().number(), 1);
        assert_eq!(qr.size(), 21);
        // Boosted from L: 74 bits fit 1-Q but not 1-H
        assert_eq!(qr.error_correction(), ECLevel::Q);
        assert_eq!(qr.mask_pattern(), MaskPattern::Pattern0);
    }

    #[test]
    fn test_explicit_mask_is_used() {
        let segs = Segment::make_segments("4376471154038");
        let qr = QrEncoder::encode_segments(&segs, ECLevel::M, 1, 40, Some(3), false).unwrap();
        assert_eq!(qr.mask_pattern(), MaskPattern::Pattern3);
        let info = qr.format_info().unwrap();
        assert_eq!(info.mask_pattern, MaskPattern::Pattern3);
        assert_eq!(info.ec_level, ECLevel::M);
    }

    #[test]
    fn test_parameter_errors() {
        let segs = Segment::make_segments("1");
        for (min, max, mask) in [(0, 40, None), (5, 4, None), (1, 41, None), (1, 40, Some(8))] {
            let err = QrEncoder::encode_segments(&segs, ECLevel::L, min, max, mask, true)
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parameter);
        }
    }

    #[test]
    fn test_data_too_long() {
        let err = QrEncoder::encode_binary(&[0u8; 3000], ECLevel::L).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataTooLong);

        let segs = Segment::make_segments(&"A".repeat(30));
        let err = QrEncoder::encode_segments(&segs, ECLevel::L, 1, 1, None, true).unwrap_err();
        assert!(matches!(
            err,
            QrError::DataTooLong(DataTooLong::DataOverCapacity { .. })
        ));
    }

    #[test]
    fn test_encode_codewords_checks_length() {
        let err = QrEncoder::encode_codewords(Version::MIN, ECLevel::L, &[0; 5], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_largest_binary_payload() {
        // 2953 bytes is the byte-mode limit of 40-L
        let qr = QrEncoder::encode_binary(&vec![0xA5; 2953], ECLevel::L).unwrap();
        assert_eq!(qr.version(), Version::MAX);
        assert_eq!(qr.size(), 177);
        assert!(QrEncoder::encode_binary(&vec![0xA5; 2954], ECLevel::L).is_err());
    }
}
