use crate::encoder::capacity::version_range;
use crate::error::{QrError, Result};
use crate::models::{MaskPattern, Version};
use std::sync::OnceLock;

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Whether mask trials may run on the rayon pool (`QR_PARALLEL_MASKS`)
pub(crate) fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static PARALLEL_MIN_VERSION: OnceLock<u8> = OnceLock::new();

/// Smallest version worth spreading across threads (`QR_PARALLEL_MIN_VERSION`);
/// 41 disables parallelism entirely.
pub(crate) fn parallel_min_version() -> u8 {
    *PARALLEL_MIN_VERSION
        .get_or_init(|| parse_env_u8("QR_PARALLEL_MIN_VERSION", 7).clamp(1, 41))
}

/// True when work for `version` should use rayon
pub(crate) fn use_parallel(version: Version) -> bool {
    version.number() >= parallel_min_version()
}

/// Caller-facing encoding options
///
/// Defaults match [`crate::encode_text`]: full version range, automatic
/// mask, error correction boosting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Smallest version to consider (1-40)
    pub min_version: u8,
    /// Largest version to consider (1-40, >= `min_version`)
    pub max_version: u8,
    /// Explicit mask index 0-7, or `None` to pick the lowest-penalty mask
    pub mask: Option<u8>,
    /// Raise the error correction level when it costs no extra version
    pub boost_ecl: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            min_version: Version::MIN.number(),
            max_version: Version::MAX.number(),
            mask: None,
            boost_ecl: true,
        }
    }
}

impl EncodeOptions {
    /// Restrict the version search to `min..=max`
    pub fn with_version_range(mut self, min: u8, max: u8) -> Self {
        self.min_version = min;
        self.max_version = max;
        self
    }

    /// Force a specific mask index instead of automatic selection
    pub fn with_mask(mut self, mask: u8) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Return to automatic mask selection
    pub fn with_auto_mask(mut self) -> Self {
        self.mask = None;
        self
    }

    /// Enable or disable error correction boosting
    pub fn with_boost_ecl(mut self, boost: bool) -> Self {
        self.boost_ecl = boost;
        self
    }

    /// Check ranges, returning the typed version bounds and mask
    pub fn validate(&self) -> Result<(Version, Version, Option<MaskPattern>)> {
        let (min, max) = version_range(self.min_version, self.max_version)?;
        let mask = match self.mask {
            None => None,
            Some(m) => Some(MaskPattern::from_index(m).ok_or(QrError::MaskOutOfRange(m))?),
        };
        Ok((min, max, mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.min_version, 1);
        assert_eq!(opts.max_version, 40);
        assert_eq!(opts.mask, None);
        assert!(opts.boost_ecl);
        let (min, max, mask) = opts.validate().unwrap();
        assert_eq!((min, max, mask), (Version::MIN, Version::MAX, None));
    }

    #[test]
    fn test_builder_and_validation() {
        let opts = EncodeOptions::default()
            .with_version_range(2, 5)
            .with_mask(3)
            .with_boost_ecl(false);
        let (_, max, mask) = opts.validate().unwrap();
        assert_eq!(max.number(), 5);
        assert_eq!(mask, Some(MaskPattern::Pattern3));
        assert_eq!(opts.with_auto_mask().mask, None);

        assert_eq!(
            EncodeOptions::default().with_mask(8).validate(),
            Err(QrError::MaskOutOfRange(8))
        );
        assert_eq!(
            EncodeOptions::default().with_version_range(7, 3).validate(),
            Err(QrError::VersionRange { min: 7, max: 3 })
        );
    }

    #[test]
    fn test_parallel_threshold_is_clamped() {
        let min = parallel_min_version();
        assert!((1..=41).contains(&min));
        assert_eq!(use_parallel(Version::MAX), min <= 40);
    }
}
