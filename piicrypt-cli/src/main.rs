//! Command-line frontend for the piicrypt demo codecs.

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use piicrypt_core::{block, stream};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// Framed stream-XOR codec (5-byte header)
    Stream,
    /// Block-scramble codec (32-byte key, key-derived IV)
    Block,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a framed ciphertext
    Encrypt {
        /// File holding the raw key bytes
        #[arg(short, long)]
        key_file: PathBuf,

        /// Version byte stamped into the frame header
        #[arg(long, default_value_t = 1)]
        version_byte: u8,

        /// Which codec variant to apply
        #[arg(long, value_enum, default_value_t = Variant::Stream)]
        variant: Variant,

        /// The plaintext input file
        input: PathBuf,

        /// Where to write the frame
        output: PathBuf,
    },
    /// Decrypt a framed ciphertext back into bytes
    ///
    /// Block frames decode to the whole padded body; the trailing filler is
    /// written as-is, since the format does not record the plaintext length.
    Decrypt {
        /// File holding the raw key bytes
        #[arg(short, long)]
        key_file: PathBuf,

        /// Which codec variant to apply
        #[arg(long, value_enum, default_value_t = Variant::Stream)]
        variant: Variant,

        /// The frame input file
        input: PathBuf,

        /// Where to write the decoded bytes
        output: PathBuf,
    },
    /// Print a frame's header fields as JSON
    Inspect {
        /// Which codec variant framed the file
        #[arg(long, value_enum, default_value_t = Variant::Stream)]
        variant: Variant,

        /// The frame to inspect
        input: PathBuf,
    },
}

#[derive(Serialize)]
struct StreamHeader {
    version: u8,
    declared_len: u32,
    frame_len: usize,
}

#[derive(Serialize)]
struct BlockHeader {
    version: u8,
    iv: String,
    body_len: usize,
    frame_len: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Encrypt {
            key_file,
            version_byte,
            variant,
            input,
            output,
        } => {
            let key = fs::read(key_file)?;
            let plain = fs::read(input)?;
            let frame = match variant {
                Variant::Stream => stream::encrypt(*version_byte, &key, &plain)?,
                Variant::Block => block::encrypt(*version_byte, &key, &plain)?,
            };
            fs::write(output, &frame)?;
            info!(
                "encrypted {} bytes into a {}-byte frame at '{}'",
                plain.len(),
                frame.len(),
                output.display()
            );
        }
        Commands::Decrypt {
            key_file,
            variant,
            input,
            output,
        } => {
            let key = fs::read(key_file)?;
            let frame = fs::read(input)?;
            let plain = match variant {
                Variant::Stream => stream::decrypt(&key, &frame)?,
                Variant::Block => block::decrypt(&key, &frame)?,
            };
            fs::write(output, &plain)?;
            info!(
                "decoded {} bytes from '{}' to '{}'",
                plain.len(),
                input.display(),
                output.display()
            );
        }
        Commands::Inspect { variant, input } => {
            inspect(*variant, input)?;
        }
    }
    Ok(())
}

fn inspect(variant: Variant, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let frame = fs::read(input)?;
    let json = match variant {
        Variant::Stream => {
            if frame.len() < stream::HEADER_LEN {
                return Err(format!(
                    "frame too short for a stream header: {} bytes",
                    frame.len()
                )
                .into());
            }
            serde_json::to_string_pretty(&StreamHeader {
                version: frame[0],
                declared_len: u32::from_be_bytes([frame[1], frame[2], frame[3], frame[4]]),
                frame_len: frame.len(),
            })?
        }
        Variant::Block => {
            if frame.len() < 1 + block::IV_LEN {
                return Err(format!(
                    "frame too short for a block header: {} bytes",
                    frame.len()
                )
                .into());
            }
            let iv: String = frame[1..1 + block::IV_LEN]
                .iter()
                .map(|b| format!("{b:02x}"))
                .collect();
            serde_json::to_string_pretty(&BlockHeader {
                version: frame[0],
                iv,
                body_len: frame.len() - 1 - block::IV_LEN,
                frame_len: frame.len(),
            })?
        }
    };
    println!("{json}");
    Ok(())
}
