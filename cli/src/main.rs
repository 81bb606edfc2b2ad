use clap::{Parser, Subcommand};
use std::path::PathBuf;

use wav::process::{wav_compare, wav_extract, wav_fix, wav_probe};

#[derive(Parser)]
#[command(name = "wav-cli")]
#[command(about = "CLI for RIFF/WAVE container inspection and repair", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a WAV file's chunk table and format descriptor
    Probe {
        /// Input WAV file
        input: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite placeholder RIFF/data size fields from the true file length
    Fix {
        /// Input WAV file
        input: PathBuf,
        /// Output file (optional, defaults to <input>.fixed.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Re-emit the sample payload as a minimal canonical WAV
    Extract {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file (optional, defaults to <input>.extracted.wav)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode via ffmpeg capture and via symphonia, then compare waveforms
    Compare {
        /// Input audio file (anything ffmpeg can read)
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Probe { input, json } => wav_probe(input, *json)?,
        Commands::Fix { input, output } => wav_fix(input, output)?,
        Commands::Extract { input, output } => wav_extract(input, output)?,
        Commands::Compare { input } => wav_compare(input)?,
    }

    Ok(())
}
