//! Command implementations for the rpm2cpio CLI.

pub mod convert;
pub mod detect;

pub use convert::cmd_convert;
pub use detect::cmd_detect;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Open the package to read: a file, or standard input for `None` / `-`.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) if path != Path::new("-") => {
            Ok(Box::new(BufReader::new(File::open(path)?)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

/// How the input is named in messages.
pub fn input_name(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "the input".to_string(),
    }
}
