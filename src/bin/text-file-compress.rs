use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;

use text_file_compress::compress::Compressor;

/// Sort a text file and remove duplicate lines
#[derive(Parser)]
#[command(name = "text-file-compress")]
#[command(version, about)]
struct Cli {
    /// File to read
    source: PathBuf,
    /// File to write, replaced if it exists
    destination: PathBuf,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
        .with_context(|| "init logger")?;

    log::info!("Started compressing.");
    let compressor = Compressor::new(cli.source, cli.destination);
    compressor.compress()?;
    log::info!("Ended compressing.");
    Ok(())
}
