//! # rpmcpio Core
//!
//! Extraction of the cpio archive embedded in an RPM package.
//!
//! An RPM file is a 96-byte lead, a signature and header section, and a
//! compressed cpio payload. This crate checks the lead magic, scans the
//! rest of the file for an XZ or GZIP stream and decompresses it:
//!
//! - [`lead`]: the 96-byte lead and its magic number
//! - [`detect`]: payload signature search
//! - [`codec`]: XZ and GZIP payload decoders
//! - [`convert`]: the conversion pipeline
//! - [`error`]: Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let rpm = BufReader::new(File::open("adjtimex-1.20-2.1.i386.rpm").unwrap());
//! let cpio = rpmcpio_core::convert(rpm).unwrap();
//! println!("{} bytes of cpio", cpio.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod convert;
pub mod detect;
pub mod error;
pub mod lead;

// Re-exports for convenience
pub use codec::{GZIP_MAGIC, PayloadFormat, XZ_MAGIC};
pub use convert::{ConvertSummary, convert, convert_detailed, convert_to, inspect};
pub use detect::{PayloadLocation, find_signature, locate_payload};
pub use error::{Result, RpmCpioError};
pub use lead::{LEAD_SIZE, Lead, RPM_MAGIC};
