//! rpm2cpio - extract the cpio archive from an RPM package.
//!
//! Reads the package named on the command line, or standard input, and
//! writes the decompressed cpio stream to standard output.

mod commands;

use clap::Parser;
use commands::{cmd_convert, cmd_detect, input_name};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpm2cpio")]
#[command(
    author,
    version,
    about = "Convert an RPM package to a cpio archive"
)]
#[command(long_about = "
rpm2cpio converts the RPM on standard input or first parameter to a CPIO
archive on standard output. XZ and GZIP compressed payloads are supported.

Examples:
  rpm2cpio adjtimex-1.20-2.1.i386.rpm | cpio -it
  rpm2cpio < adjtimex-1.20-2.1.i386.rpm | cpio -idmv
  rpm2cpio -o adjtimex.cpio adjtimex-1.20-2.1.i386.rpm
  rpm2cpio --detect adjtimex-1.20-2.1.i386.rpm
")]
struct Cli {
    /// RPM package to convert (standard input if omitted or '-')
    input: Option<PathBuf>,

    /// Write the cpio archive to a file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only report the payload format and offset
    #[arg(long, conflicts_with = "output")]
    detect: bool,

    /// Log at debug level on standard error (overrides the RUST_LOG default level)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(log::LevelFilter::Warn);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // -v raises the default level even when RUST_LOG is set.
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // Only fails if a logger is already set.
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = cli.input.as_deref();
    let result = if cli.detect {
        cmd_detect(input)
    } else {
        cmd_convert(input, cli.output.as_deref())
    };

    if let Err(e) = result {
        eprintln!("Error: {}: {}", input_name(input), e);
        std::process::exit(1);
    }
}
