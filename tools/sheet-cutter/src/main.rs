//! sheet-cutter - sprite sheet cutter
//!
//! Prints the bounding box of every sprite on a sheet as a rect literal,
//! one per line, ready to paste into a rect array.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;

use sheet_cutter::{ExtractOptions, extract_with, load_sheet, write_rects};

#[derive(Parser)]
#[command(name = "sheet-cutter")]
#[command(about = "Extract sprite bounding boxes from a sprite sheet")]
#[command(version)]
struct Cli {
    /// Sprite sheet image (PNG/JPG) with sprites separated by transparent rows
    #[arg(allow_hyphen_values = true)]
    image_file: PathBuf,

    /// Also emit a sprite that touches the bottom edge of the sheet
    #[arg(long)]
    flush_trailing: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rect literals
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                tracing::debug!("Argument error: {}", err);
                println!("Usage: {} image_file.png", program_name());
                std::process::exit(1);
            }
        },
    };

    let sheet = load_sheet(&cli.image_file)?;
    let options = ExtractOptions {
        flush_trailing: cli.flush_trailing,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let count = write_rects(&mut out, extract_with(&sheet, options))
        .context("Failed to write sprite rects")?;
    out.flush().context("Failed to flush stdout")?;

    tracing::info!("Extracted {} sprites from {:?}", count, cli.image_file);

    Ok(())
}

/// Invoked program name for the usage line
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sheet-cutter".to_string())
}
