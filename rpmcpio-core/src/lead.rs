//! RPM lead handling.
//!
//! Every RPM package starts with a fixed 96-byte lead. Only its first four
//! bytes (the magic number) are checked here; the remaining fields are
//! carried along untouched.

use crate::error::{Result, RpmCpioError};
use std::io::{ErrorKind, Read};

/// Size of the RPM lead in bytes.
pub const LEAD_SIZE: usize = 96;

/// Magic number at the start of every RPM lead.
pub const RPM_MAGIC: [u8; 4] = [0xED, 0xAB, 0xEE, 0xDB];

/// The raw lead block of an RPM package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    bytes: Vec<u8>,
}

impl Lead {
    /// Read the lead from `reader` and check its magic number.
    ///
    /// Up to [`LEAD_SIZE`] bytes are consumed. A stream that ends early
    /// yields a shorter lead, which is still accepted as long as the magic
    /// number itself is complete and correct.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut bytes = vec![0u8; LEAD_SIZE];
        let mut filled = 0;

        while filled < LEAD_SIZE {
            match reader.read(&mut bytes[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        bytes.truncate(filled);

        Self::from_bytes(bytes)
    }

    /// Build a lead from bytes already in memory.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if bytes.len() < RPM_MAGIC.len() || bytes[..RPM_MAGIC.len()] != RPM_MAGIC {
            let found = &bytes[..bytes.len().min(RPM_MAGIC.len())];
            return Err(RpmCpioError::invalid_format(found));
        }

        tracing::debug!(len = bytes.len(), "accepted RPM lead");
        Ok(Self { bytes })
    }

    /// The four magic bytes.
    pub fn magic(&self) -> &[u8] {
        &self.bytes[..RPM_MAGIC.len()]
    }

    /// Whether the full 96-byte lead was present.
    pub fn is_complete(&self) -> bool {
        self.bytes.len() == LEAD_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lead_bytes() -> Vec<u8> {
        let mut bytes = RPM_MAGIC.to_vec();
        bytes.resize(LEAD_SIZE, 0);
        bytes
    }

    #[test]
    fn test_read_full_lead() {
        let mut input = lead_bytes();
        input.extend_from_slice(b"rest of the package");
        let mut reader = Cursor::new(input);

        let lead = Lead::read(&mut reader).unwrap();
        assert_eq!(lead.magic(), &RPM_MAGIC);
        assert!(lead.is_complete());
        assert_eq!(reader.position(), LEAD_SIZE as u64);
    }

    #[test]
    fn test_wrong_magic() {
        let mut input = lead_bytes();
        input[0] = 0x00;
        let err = Lead::read(&mut Cursor::new(input)).unwrap_err();
        match err {
            RpmCpioError::InvalidFormat { found } => {
                assert_eq!(found, vec![0x00, 0xAB, 0xEE, 0xDB]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_shorter_than_magic() {
        let err = Lead::read(&mut Cursor::new(vec![0xED, 0xAB])).unwrap_err();
        assert!(matches!(err, RpmCpioError::InvalidFormat { .. }));

        let err = Lead::read(&mut Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, RpmCpioError::InvalidFormat { found } if found.is_empty()));
    }

    #[test]
    fn test_truncated_lead_with_valid_magic() {
        let lead = Lead::read(&mut Cursor::new(RPM_MAGIC.to_vec())).unwrap();
        assert_eq!(lead.magic(), &RPM_MAGIC);
        assert!(!lead.is_complete());
    }

    #[test]
    fn test_read_from_chunked_reader() {
        // A reader that hands out one byte per call.
        struct Trickle(Cursor<Vec<u8>>);

        impl Read for Trickle {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                let len = buf.len().min(1);
                self.0.read(&mut buf[..len])
            }
        }

        let mut reader = Trickle(Cursor::new(lead_bytes()));
        let lead = Lead::read(&mut reader).unwrap();
        assert!(lead.is_complete());
    }
}
