//! Error types for rpmcpio operations.
//!
//! Conversion can fail in exactly three ways besides plain I/O: the input is
//! not an RPM package, no known compressed payload follows the lead, or the
//! payload decoder rejects the data.

use crate::codec::PayloadFormat;
use std::io;
use thiserror::Error;

/// The main error type for rpmcpio operations.
#[derive(Debug, Error)]
pub enum RpmCpioError {
    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The lead does not start with the RPM magic number.
    #[error("the input is not a RPM package (lead starts with {found:02x?})")]
    InvalidFormat {
        /// The leading bytes that were actually read (at most four).
        found: Vec<u8>,
    },

    /// Neither the XZ nor the GZIP signature occurs after the lead.
    #[error("could not find compressed cpio archive")]
    UnsupportedCompression,

    /// A payload signature was found but the decoder rejected the stream.
    #[error("{format} decompression failed: {source}")]
    DecompressionFailure {
        /// The format that was selected for the payload.
        format: PayloadFormat,
        /// The decoder's own diagnostic.
        #[source]
        source: io::Error,
    },
}

/// Result type alias for rpmcpio operations.
pub type Result<T> = std::result::Result<T, RpmCpioError>;

impl RpmCpioError {
    /// Create an invalid format error from the bytes found at the lead.
    pub fn invalid_format(found: impl Into<Vec<u8>>) -> Self {
        Self::InvalidFormat {
            found: found.into(),
        }
    }

    /// Create a decompression failure for the given payload format.
    pub fn decompression(format: PayloadFormat, source: io::Error) -> Self {
        Self::DecompressionFailure { format, source }
    }
}
