//! # Error Types
//!
//! Custom error types for ESB Utils using `thiserror`.

use thiserror::Error;

/// Main error type for ESB Utils
#[derive(Debug, Error)]
pub enum EsbError {
    /// Two bit strings that must be combined position by position differ in length
    #[error("Bit string length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A bit string contains something other than '0' or '1'
    #[error("Invalid bit character {found:?} at index {index}")]
    InvalidBitChar { index: usize, found: char },

    /// Input outside the contract of an operation (empty packet, short frame, bad hex)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Received CRC does not match the one computed over the payload
    #[error("CRC mismatch: expected 0x{}, got 0x{}", crc_hex(.expected), crc_hex(.received))]
    CrcMismatch { expected: [u8; 2], received: [u8; 2] },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Logging setup errors
    #[error("Logging setup error: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn crc_hex(crc: &[u8; 2]) -> String {
    format!("{:02X}{:02X}", crc[0], crc[1])
}

/// Result type alias for ESB Utils
pub type Result<T> = std::result::Result<T, EsbError>;
