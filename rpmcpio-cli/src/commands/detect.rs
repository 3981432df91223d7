//! Detect command implementation.

use super::{input_name, open_input};
use rpmcpio_core::{LEAD_SIZE, inspect};
use std::path::Path;

pub fn cmd_detect(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let reader = open_input(input)?;
    let location = inspect(reader)?;

    println!("File: {}", input_name(input));
    println!("Payload format: {}", location.format);
    println!("Payload compressor: {}", location.format.name());
    println!("Extension: .{}", location.format.extension());
    println!("MIME type: {}", location.format.mime_type());
    println!(
        "Payload offset: {} (file offset {})",
        location.offset,
        location.offset + LEAD_SIZE
    );

    Ok(())
}
