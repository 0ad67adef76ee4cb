//! Version and error-correction level selection

use crate::debug::qr_debug;
use crate::encoder::segment::Segment;
use crate::encoder::tables::num_data_codewords;
use crate::error::{DataTooLong, QrError, Result};
use crate::models::{ECLevel, Version};

/// Outcome of capacity planning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPlan {
    /// Smallest version in range that holds the data
    pub version: Version,
    /// Requested level, possibly boosted
    pub ec_level: ECLevel,
    /// Bits used by mode indicators, count fields and payloads
    pub data_used_bits: usize,
}

impl CapacityPlan {
    /// Data capacity in bits at the planned version and level
    pub fn capacity_bits(&self) -> usize {
        num_data_codewords(self.version, self.ec_level) * 8
    }
}

/// Validate `min..=max` as a version range
pub fn version_range(min_version: u8, max_version: u8) -> Result<(Version, Version)> {
    let err = QrError::VersionRange {
        min: min_version,
        max: max_version,
    };
    match (Version::new(min_version), Version::new(max_version)) {
        (Some(min), Some(max)) if min <= max => Ok((min, max)),
        _ => Err(err),
    }
}

/// Find the smallest version in `min..=max` whose capacity at `ec_level`
/// holds `segments`, then optionally raise the level while the data still
/// fits that same version.
pub fn plan(
    segments: &[Segment],
    ec_level: ECLevel,
    min_version: Version,
    max_version: Version,
    boost_ecl: bool,
) -> Result<CapacityPlan> {
    if min_version > max_version {
        return Err(QrError::VersionRange {
            min: min_version.number(),
            max: max_version.number(),
        });
    }

    let mut version = min_version;
    let data_used_bits = loop {
        let capacity_bits = num_data_codewords(version, ec_level) * 8;
        let used = Segment::total_bits(segments, version);
        match used {
            Some(n) if n <= capacity_bits => break n,
            _ if version >= max_version => {
                return Err(match used {
                    None => DataTooLong::SegmentTooLong,
                    Some(n) => DataTooLong::DataOverCapacity {
                        used_bits: n,
                        capacity_bits,
                    },
                }
                .into());
            }
            _ => {
                version = version
                    .next()
                    .ok_or(QrError::Internal("version search ran past 40"))?;
            }
        }
    };

    let mut ec_level = ec_level;
    if boost_ecl {
        for candidate in [ECLevel::M, ECLevel::Q, ECLevel::H] {
            if candidate > ec_level && data_used_bits <= num_data_codewords(version, candidate) * 8
            {
                ec_level = candidate;
            }
        }
    }

    qr_debug!(
        "PLAN: version={} level={:?} used_bits={} capacity_bits={}",
        version.number(),
        ec_level,
        data_used_bits,
        num_data_codewords(version, ec_level) * 8
    );

    Ok(CapacityPlan {
        version,
        ec_level,
        data_used_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_version_range_validation() {
        assert!(version_range(1, 40).is_ok());
        assert!(version_range(5, 5).is_ok());
        assert_eq!(
            version_range(0, 40),
            Err(QrError::VersionRange { min: 0, max: 40 })
        );
        assert!(version_range(10, 9).is_err());
        assert!(version_range(1, 41).is_err());
    }

    #[test]
    fn test_plan_smallest_version() {
        let segs = Segment::make_segments("HELLO WORLD");
        let plan = plan(&segs, ECLevel::L, Version::MIN, Version::MAX, false).unwrap();
        assert_eq!(plan.version, v(1));
        assert_eq!(plan.ec_level, ECLevel::L);
        assert_eq!(plan.data_used_bits, 74);
    }

    #[test]
    fn test_plan_boost_never_changes_version() {
        // 74 bits fit 1-Q (104) but not 1-H (72)
        let segs = Segment::make_segments("HELLO WORLD");
        let plan = plan(&segs, ECLevel::L, Version::MIN, Version::MAX, true).unwrap();
        assert_eq!(plan.version, v(1));
        assert_eq!(plan.ec_level, ECLevel::Q);
    }

    #[test]
    fn test_plan_boost_never_lowers() {
        let plan = plan(&[], ECLevel::H, Version::MIN, Version::MAX, true).unwrap();
        assert_eq!(plan.ec_level, ECLevel::H);
        assert_eq!(plan.data_used_bits, 0);
    }

    #[test]
    fn test_plan_respects_min_version() {
        let plan = plan(&[], ECLevel::M, v(12), Version::MAX, false).unwrap();
        assert_eq!(plan.version, v(12));
    }

    #[test]
    fn test_plan_data_too_long() {
        // 20 bytes need 4 + 8 + 160 = 172 bits; version 1-L holds 152
        let segs = vec![Segment::make_bytes(&[0x55; 20])];
        let err = plan(&segs, ECLevel::L, v(1), v(1), true).unwrap_err();
        assert_eq!(
            err,
            QrError::DataTooLong(DataTooLong::DataOverCapacity {
                used_bits: 172,
                capacity_bits: 152
            })
        );
        assert!(plan(&segs, ECLevel::L, v(1), v(2), true).is_ok());
    }

    #[test]
    fn test_plan_segment_too_long() {
        // 300 bytes overflow the 8-bit count field of versions 1-9
        let segs = vec![Segment::make_bytes(&[0u8; 300])];
        let err = plan(&segs, ECLevel::L, v(1), v(9), false).unwrap_err();
        assert_eq!(err, QrError::DataTooLong(DataTooLong::SegmentTooLong));
        let plan = plan(&segs, ECLevel::L, v(1), Version::MAX, false).unwrap();
        assert_eq!(plan.version, v(11));
    }
}
