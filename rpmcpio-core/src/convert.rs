//! RPM to cpio conversion.

use crate::codec::PayloadFormat;
use crate::detect::{PayloadLocation, locate_payload};
use crate::error::Result;
use crate::lead::Lead;
use std::io::{Read, Write};

/// Outcome of a successful [`convert_to`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Format the payload was decoded with.
    pub format: PayloadFormat,
    /// Offset of the payload relative to the end of the lead.
    pub payload_offset: usize,
    /// Size of the compressed payload, up to end of input.
    pub compressed_size: usize,
    /// Size of the cpio archive written.
    pub decompressed_size: usize,
}

fn read_body<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let lead = Lead::read(reader)?;
    if !lead.is_complete() {
        tracing::debug!("input ends inside the RPM lead");
    }
    let mut body = Vec::new();
    reader.read_to_end(&mut body)?;
    Ok(body)
}

/// Check the lead and locate the payload without decompressing it.
pub fn inspect<R: Read>(mut reader: R) -> Result<PayloadLocation> {
    let body = read_body(&mut reader)?;
    locate_payload(&body)
}

/// Extract the cpio archive and report how it was found.
///
/// This is [`convert`] with the [`ConvertSummary`] kept alongside the
/// output, for callers that decide where to write only after success.
pub fn convert_detailed<R: Read>(mut reader: R) -> Result<(ConvertSummary, Vec<u8>)> {
    let body = read_body(&mut reader)?;
    let location = locate_payload(&body)?;
    let payload = &body[location.offset..];
    let cpio = location.format.decompress(payload)?;

    tracing::debug!(
        format = %location.format,
        compressed = payload.len(),
        decompressed = cpio.len(),
        "decompressed payload"
    );
    let summary = ConvertSummary {
        format: location.format,
        payload_offset: location.offset,
        compressed_size: payload.len(),
        decompressed_size: cpio.len(),
    };
    Ok((summary, cpio))
}

/// Extract the cpio archive from an RPM package.
///
/// The whole input is read into memory. Fails with
/// [`InvalidFormat`](crate::RpmCpioError::InvalidFormat) if the lead magic
/// does not match, [`UnsupportedCompression`](crate::RpmCpioError::UnsupportedCompression)
/// if no payload signature is found, and
/// [`DecompressionFailure`](crate::RpmCpioError::DecompressionFailure) if
/// the payload cannot be decoded.
pub fn convert<R: Read>(reader: R) -> Result<Vec<u8>> {
    convert_detailed(reader).map(|(_, cpio)| cpio)
}

/// Extract the cpio archive from an RPM package into `writer`.
///
/// Nothing is written unless decompression succeeded in full.
pub fn convert_to<R: Read, W: Write>(reader: R, mut writer: W) -> Result<ConvertSummary> {
    let (summary, cpio) = convert_detailed(reader)?;
    writer.write_all(&cpio)?;
    writer.flush()?;
    Ok(summary)
}
