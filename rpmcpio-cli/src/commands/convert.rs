//! Convert command implementation.

use super::open_input;
use rpmcpio_core::{convert_detailed, convert_to};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub fn cmd_convert(
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader = open_input(input)?;

    let summary = match output {
        Some(path) => {
            // The output file is only created once the payload decoded.
            let (summary, cpio) = convert_detailed(reader)?;
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(&cpio)?;
            writer.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            convert_to(reader, BufWriter::new(stdout.lock()))?
        }
    };

    log::info!(
        "extracted {} byte cpio archive from {} payload at offset {}",
        summary.decompressed_size,
        summary.format,
        summary.payload_offset
    );
    Ok(())
}
