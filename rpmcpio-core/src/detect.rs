//! Payload location.
//!
//! The header section between the lead and the payload is not parsed.
//! Instead the bytes after the lead are scanned for the magic number of a
//! known compression format.

use crate::codec::PayloadFormat;
use crate::error::{Result, RpmCpioError};

/// Where the compressed payload starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLocation {
    /// Format selected for the payload.
    pub format: PayloadFormat,
    /// Offset of the format's magic number, relative to the end of the lead.
    pub offset: usize,
}

/// Find the first occurrence of `needle` in `haystack`.
///
/// An empty needle matches at offset 0.
pub fn find_signature(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Select the payload format and its offset in `data`.
///
/// Formats are tried in [`PayloadFormat::SEARCH_ORDER`]. The first format
/// whose signature occurs anywhere in `data` is selected, so an XZ stream
/// is preferred even when a GZIP signature appears before it.
pub fn locate_payload(data: &[u8]) -> Result<PayloadLocation> {
    PayloadFormat::SEARCH_ORDER
        .iter()
        .find_map(|&format| {
            find_signature(data, format.signature())
                .map(|offset| PayloadLocation { format, offset })
        })
        .inspect(|location| {
            tracing::debug!(
                format = %location.format,
                offset = location.offset,
                "located compressed payload"
            );
        })
        .ok_or(RpmCpioError::UnsupportedCompression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{GZIP_MAGIC, XZ_MAGIC};

    #[test]
    fn test_find_signature() {
        assert_eq!(find_signature(b"hello world", b"world"), Some(6));
        assert_eq!(find_signature(b"hello world", b"hello"), Some(0));
        assert_eq!(find_signature(b"hello", b"hello!"), None);
        assert_eq!(find_signature(b"", b"a"), None);
        assert_eq!(find_signature(b"abc", b""), Some(0));
        // Partial match before the real one.
        assert_eq!(find_signature(b"aab", b"ab"), Some(1));
        assert_eq!(find_signature(b"xyzxyz", b"zx"), Some(2));
        // Needle at the very end.
        assert_eq!(find_signature(b"....ab", b"ab"), Some(4));
    }

    #[test]
    fn test_locate_gzip() {
        let mut data = vec![0u8; 40];
        data.extend_from_slice(&GZIP_MAGIC);
        data.extend_from_slice(&[0x08, 0x00]);

        let location = locate_payload(&data).unwrap();
        assert_eq!(location.format, PayloadFormat::Gzip);
        assert_eq!(location.offset, 40);
    }

    #[test]
    fn test_locate_xz() {
        let mut data = vec![0u8; 13];
        data.extend_from_slice(&XZ_MAGIC);

        let location = locate_payload(&data).unwrap();
        assert_eq!(location.format, PayloadFormat::Xz);
        assert_eq!(location.offset, 13);
    }

    #[test]
    fn test_xz_wins_over_earlier_gzip() {
        let mut data = vec![0u8; 8];
        data.extend_from_slice(&GZIP_MAGIC);
        data.extend_from_slice(&[0u8; 100]);
        data.extend_from_slice(&XZ_MAGIC);

        let location = locate_payload(&data).unwrap();
        assert_eq!(location.format, PayloadFormat::Xz);
        assert_eq!(location.offset, 110);
    }

    #[test]
    fn test_partial_xz_magic_falls_back_to_gzip() {
        let mut data = XZ_MAGIC[..5].to_vec();
        data.push(0x01);
        data.extend_from_slice(&GZIP_MAGIC);

        let location = locate_payload(&data).unwrap();
        assert_eq!(location.format, PayloadFormat::Gzip);
        assert_eq!(location.offset, 6);
    }

    #[test]
    fn test_no_signature() {
        let data = [0x1Fu8, 0x00, 0x8B, 0xFD, 0x37, 0x7A];
        assert!(matches!(
            locate_payload(&data),
            Err(RpmCpioError::UnsupportedCompression)
        ));
        assert!(matches!(
            locate_payload(&[]),
            Err(RpmCpioError::UnsupportedCompression)
        ));
    }
}
