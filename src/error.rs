//! Error types for property set decoding.
//!
//! Every failure mode of the codec maps to one variant here. Decoding never
//! panics on malformed input: any length, count, or offset read from the
//! stream is validated against the actually-supplied buffer before use.
use thiserror::Error;

/// Main error type for property set decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The stream header does not carry the property set byte-order mark
    #[error("not a property set stream")]
    NotPropertySetStream,

    /// Buffer exhausted before the expected data
    #[error("unexpected end of stream: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },

    /// A length or count field exceeds what the buffer can hold
    #[error("length field out of range: declared {declared}, {available} bytes available")]
    InvalidLength { declared: u32, available: usize },

    /// Unrecognized variant type tag
    #[error("unsupported variant type 0x{0:04X}")]
    UnsupportedVariant(u16),

    /// Section count outside the legal range of one or two
    #[error("invalid section count: {0}")]
    InvalidSectionCount(u32),

    /// Codepage with no known decoding table
    #[error("unknown codepage: {0}")]
    UnknownCodepage(u32),
}

/// Result type for property set decoding.
pub type Result<T> = std::result::Result<T, Error>;
