//! Payload compression formats.
//!
//! RPM payloads in the wild are almost always XZ or GZIP compressed cpio
//! archives. Each format is identified by a magic number and decoded with
//! its default parameters as a single stream.

use crate::error::{Result, RpmCpioError};
use std::io::{self, Read};
use xz2::stream::{Action, Status, Stream};

/// XZ stream header magic: `0xFD '7' 'z' 'X' 'Z' 0x00`.
pub const XZ_MAGIC: [u8; 6] = [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];

/// GZIP member header magic.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Compression format of an RPM payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadFormat {
    /// XZ (LZMA2) compressed stream.
    Xz,
    /// GZIP (DEFLATE) compressed member.
    Gzip,
}

impl PayloadFormat {
    /// Formats in the order their signatures are searched for.
    ///
    /// An earlier entry that is found anywhere in the payload area wins over
    /// a later one, whatever their offsets.
    pub const SEARCH_ORDER: [Self; 2] = [Self::Xz, Self::Gzip];

    /// The magic bytes that start a stream of this format.
    pub fn signature(&self) -> &'static [u8] {
        match self {
            Self::Xz => &XZ_MAGIC,
            Self::Gzip => &GZIP_MAGIC,
        }
    }

    /// Short lowercase name, as used in the RPM `PAYLOADCOMPRESSOR` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Xz => "xz",
            Self::Gzip => "gzip",
        }
    }

    /// Get the typical file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xz => "xz",
            Self::Gzip => "gz",
        }
    }

    /// Get the MIME type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Xz => "application/x-xz",
            Self::Gzip => "application/gzip",
        }
    }

    /// Decompress a complete stream held in memory.
    ///
    /// `data` must start at the format's magic number. Bytes following the
    /// end of the first stream are ignored.
    pub fn decompress(self, data: &[u8]) -> Result<Vec<u8>> {
        let decoded = match self {
            Self::Xz => decompress_xz(data),
            Self::Gzip => {
                let mut output = Vec::new();
                flate2::read::GzDecoder::new(data)
                    .read_to_end(&mut output)
                    .map(|_| output)
            }
        };
        decoded.map_err(|e| RpmCpioError::decompression(self, e))
    }
}

/// Output buffer growth step for the XZ decoder.
const XZ_CHUNK: usize = 64 * 1024;

/// Decode a single XZ stream, stopping at its end.
fn decompress_xz(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut stream = Stream::new_stream_decoder(u64::MAX, 0)?;
    let mut output = Vec::with_capacity(XZ_CHUNK);

    loop {
        if output.len() == output.capacity() {
            output.reserve(XZ_CHUNK);
        }
        let consumed = stream.total_in() as usize;
        let produced = output.len();

        let status = stream.process_vec(&data[consumed..], &mut output, Action::Finish)?;
        if status == Status::StreamEnd {
            return Ok(output);
        }

        // Input exhausted with room left for output: the stream is cut short.
        let stalled = stream.total_in() as usize == consumed && output.len() == produced;
        if stalled && output.len() < output.capacity() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "xz stream ended before its footer",
            ));
        }
    }
}

impl std::fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xz => write!(f, "XZ"),
            Self::Gzip => write!(f, "GZIP"),
        }
    }
}
