//! Error types for QR encoding

use crate::encoder::segment::Mode;
use thiserror::Error;

/// Result alias used throughout the encoder
pub type Result<T> = std::result::Result<T, QrError>;

/// Broad classification of a [`QrError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument outside its valid range
    Parameter,
    /// No symbol version in the requested range can hold the data
    DataTooLong,
    /// An encoder invariant was violated (a bug, not a usage error)
    Internal,
}

/// Why the data could not fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DataTooLong {
    /// A segment's character count does not fit its count field
    #[error("segment too long for its character count field")]
    SegmentTooLong,
    /// The encoded bits exceed the data capacity of the largest allowed version
    #[error("data length = {used_bits} bits, max capacity = {capacity_bits} bits")]
    DataOverCapacity {
        /// Bits required by the segments at the largest allowed version
        used_bits: usize,
        /// Data bits available at that version and level
        capacity_bits: usize,
    },
}

/// Errors produced while building a QR code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Version bounds violate `1 <= min <= max <= 40`
    #[error("invalid version range {min}..={max}")]
    VersionRange {
        /// Requested minimum version
        min: u8,
        /// Requested maximum version
        max: u8,
    },
    /// Explicit mask outside 0..=7
    #[error("mask value {0} out of range")]
    MaskOutOfRange(u8),
    /// A segment constructor was given a character its mode cannot encode
    #[error("character {ch:?} at position {position} cannot be encoded in {mode:?} mode")]
    InvalidCharacter {
        /// Mode the segment was being built in
        mode: Mode,
        /// Offending character
        ch: char,
        /// Character index within the input
        position: usize,
    },
    /// The data does not fit any version in range
    #[error("data too long: {0}")]
    DataTooLong(#[from] DataTooLong),
    /// Invariant violation inside the encoder
    #[error("internal encoder error: {0}")]
    Internal(&'static str),
}

impl QrError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::VersionRange { .. }
            | QrError::MaskOutOfRange(_)
            | QrError::InvalidCharacter { .. } => ErrorKind::Parameter,
            QrError::DataTooLong(_) => ErrorKind::DataTooLong,
            QrError::Internal(_) => ErrorKind::Internal,
        }
    }
}
