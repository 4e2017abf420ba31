//! # ESB Utils
//!
//! Command line front end for the Enhanced ShockBurst helpers.
//!
//! ```bash
//! esb-utils crc e846f92fa429006100007f57ff80004900
//! esb-utils --json channel-to-freq 37
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use esb_utils::config::Config;
use esb_utils::error::EsbError;
use esb_utils::esb::bits::{bits_to_bytes, bitwise_xor, bytes_to_bits};
use esb_utils::esb::crc::calc_crc;
use esb_utils::esb::decoder::verify_frame;
use esb_utils::esb::encoder::append_crc;
use esb_utils::esb::protocol::{channel_to_frequency, frequency_to_channel, is_in_band};
use esb_utils::logging;

#[derive(Parser)]
#[command(name = "esb-utils")]
#[command(about = "Enhanced ShockBurst channel, bit string and CRC helpers")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON (overrides the configured output format)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a frequency in MHz to an ESB channel
    FreqToChannel {
        #[arg(allow_hyphen_values = true)]
        frequency: i32,
    },
    /// Convert an ESB channel to its frequency in MHz
    ChannelToFreq {
        #[arg(allow_hyphen_values = true)]
        channel: i32,
    },
    /// Convert hex bytes to a bit string
    ToBits { hex: String },
    /// Convert a bit string to hex bytes
    FromBits { bits: String },
    /// XOR two bit strings of equal length
    Xor { a: String, b: String },
    /// Compute the CRC of a packet (hex, without preamble)
    Crc { hex: String },
    /// Append the CRC to a payload (hex)
    Frame { hex: String },
    /// Check the CRC at the end of a frame (hex) and print the payload
    Verify { hex: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("Failed to load config from {}", path))?,
        None => Config::default(),
    };

    let _guard = logging::init(&config.logging)?;
    debug!("ESB Utils v{} starting", env!("CARGO_PKG_VERSION"));

    let json_output = cli.json || config.output.is_json();
    let (text, value) = run(&cli.command)?;

    if json_output {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", text);
    }

    Ok(())
}

/// Execute a command, returning both the plain text and JSON renderings
fn run(command: &Commands) -> Result<(String, Value)> {
    let output = match command {
        Commands::FreqToChannel { frequency } => {
            let channel = frequency_to_channel(*frequency);
            if !is_in_band(channel) {
                warn!("Frequency {} MHz is outside the ESB band", frequency);
            }
            (channel.to_string(), json!({ "frequency": frequency, "channel": channel }))
        }
        Commands::ChannelToFreq { channel } => {
            if !is_in_band(*channel) {
                warn!("Channel {} is outside the usual 0-99 range", channel);
            }
            let frequency = channel_to_frequency(*channel);
            (frequency.to_string(), json!({ "channel": channel, "frequency": frequency }))
        }
        Commands::ToBits { hex } => {
            let bits = bytes_to_bits(&parse_hex(hex)?);
            (bits.clone(), json!({ "bits": bits }))
        }
        Commands::FromBits { bits } => {
            let encoded = hex::encode(bits_to_bytes(bits)?);
            (encoded.clone(), json!({ "hex": encoded }))
        }
        Commands::Xor { a, b } => {
            let result = bitwise_xor(a, b)?;
            (result.clone(), json!({ "bits": result }))
        }
        Commands::Crc { hex } => {
            let packet = parse_hex(hex)?;
            let crc = hex::encode(calc_crc(&packet)?);
            info!("CRC over {} bytes: {}", packet.len(), crc);
            (crc.clone(), json!({ "length": packet.len(), "crc": crc }))
        }
        Commands::Frame { hex } => {
            let frame = hex::encode(append_crc(&parse_hex(hex)?)?);
            (frame.clone(), json!({ "frame": frame }))
        }
        Commands::Verify { hex } => {
            let frame = parse_hex(hex)?;
            let payload = hex::encode(verify_frame(&frame)?);
            (payload.clone(), json!({ "valid": true, "payload": payload }))
        }
    };

    Ok(output)
}

/// Parse hex bytes, tolerating a `0x` prefix, whitespace and `:` separators
fn parse_hex(input: &str) -> Result<Vec<u8>, EsbError> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    hex::decode(&cleaned).map_err(|e| EsbError::InvalidInput(format!("Invalid hex '{}': {}", input, e)))
}
