// src/main.rs
mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "huffpack", version = "0.1.0")]
#[command(about = "Huffman compression for single files.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into <file>.huf
    Compress { file: PathBuf },
    /// Decompress a .huf artifact next to itself
    Decompress { file: PathBuf },
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    let span = tracing::info_span!("command_execution", command = ?std::env::args().collect::<Vec<_>>());
    let _enter = span.enter();

    let outcome = match cli.command {
        Commands::Compress { file } => huffpack::compress_file(&file).map(|bits| {
            println!("Compressed {} ({} body bits)", file.display(), bits.len());
        }),
        Commands::Decompress { file } => huffpack::decompress_file(&file).map(|bytes| {
            println!("Decompressed {} ({} bytes recovered)", file.display(), bytes.len());
        }),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
