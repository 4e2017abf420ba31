//! # ESB CRC-16 Implementation
//!
//! Bit-serial CRC-16 used by Enhanced ShockBurst packets.
//!
//! **Polynomial**: 0x1021 (x^16 + x^12 + x^5 + 1)
//! **Initial Value**: 0xFFFF
//!
//! Every packet byte is XORed into the top of the register and shifted
//! through 8 polynomial iterations, except the last byte, which only gets a
//! single iteration. That asymmetry is how ESB radios compute the field and
//! must be kept as is.
//!
//! Two implementations are provided: a `u16` register engine used everywhere,
//! and a reference engine built from the bit string codec for cross-checking.

use tracing::trace;

use super::bits::{bits_to_bytes, bitwise_xor, bytes_to_bits};
use super::protocol::{ESB_CRC_INIT, ESB_CRC_POLYNOMIAL};
use crate::error::{EsbError, Result};

/// Bit iterations for every byte except the last
const FULL_BYTE_ITERATIONS: u8 = 8;

/// Bit iterations for the last byte of a packet
const FINAL_BYTE_ITERATIONS: u8 = 1;

/// Run one CRC step over a byte
///
/// The byte is XORed into the upper half of the register, then the register
/// is shifted left `bit_count` times, XORing in the polynomial whenever a one
/// is shifted out.
///
/// # Arguments
///
/// * `register` - Current CRC register
/// * `byte` - Input byte
/// * `bit_count` - Number of shift iterations (8 for a full byte)
///
/// # Returns
///
/// * `u16` - Updated CRC register
pub fn crc_step(register: u16, byte: u8, bit_count: u8) -> u16 {
    let mut working = register ^ (u16::from(byte) << 8);

    for _ in 0..bit_count {
        if (working & 0x8000) != 0 {
            working = (working << 1) ^ ESB_CRC_POLYNOMIAL;
        } else {
            working <<= 1;
        }
    }

    working
}

/// Calculate the ESB CRC of a packet
///
/// # Arguments
///
/// * `packet` - Packet bytes without preamble and without the CRC field
///
/// # Returns
///
/// * `Result<[u8; 2]>` - CRC, most significant byte first
///
/// # Errors
///
/// Returns [`EsbError::InvalidInput`] for an empty packet
///
/// # Examples
///
/// ```
/// use esb_utils::esb::crc::calc_crc;
///
/// let packet = [
///     0xe8, 0x46, 0xf9, 0x2f, 0xa4, 0x29, 0x00, 0x61, 0x00,
///     0x00, 0x7f, 0x57, 0xff, 0x80, 0x00, 0x49, 0x00,
/// ];
/// assert_eq!(calc_crc(&packet)?, [0x9e, 0xd4]);
/// # Ok::<(), esb_utils::error::EsbError>(())
/// ```
pub fn calc_crc(packet: &[u8]) -> Result<[u8; 2]> {
    let (&last, body) = packet
        .split_last()
        .ok_or_else(|| EsbError::InvalidInput("cannot compute CRC of an empty packet".to_string()))?;

    let register = body
        .iter()
        .fold(ESB_CRC_INIT, |register, &byte| crc_step(register, byte, FULL_BYTE_ITERATIONS));
    let register = crc_step(register, last, FINAL_BYTE_ITERATIONS);

    trace!("CRC 0x{:04X} over {} bytes", register, packet.len());
    Ok(register.to_be_bytes())
}

/// Run one CRC step using bit strings
///
/// Same result as [`crc_step`], computed literally with the bit string codec:
/// the register is rendered as 16 bits, XORed with the byte followed by eight
/// zeros, then shifted character by character.
///
/// # Errors
///
/// Only fails if the codec does, which would indicate a bug
pub fn crc_step_bits(register: [u8; 2], byte: u8, bit_count: u8) -> Result<[u8; 2]> {
    let polynomial = bytes_to_bits(&ESB_CRC_POLYNOMIAL.to_be_bytes());
    let mask = bytes_to_bits(&[byte, 0x00]);
    let mut working = bitwise_xor(&bytes_to_bits(&register), &mask)?;

    for _ in 0..bit_count {
        let carry = working.starts_with('1');
        working.remove(0);
        working.push('0');

        if carry {
            working = bitwise_xor(&working, &polynomial)?;
        }
    }

    let bytes = bits_to_bytes(&working)?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| EsbError::InvalidInput(format!("CRC register grew to {} bytes", bytes.len())))
}

/// Calculate the ESB CRC of a packet using bit strings
///
/// Slow reference for [`calc_crc`]; handy when debugging register contents.
pub fn calc_crc_bits(packet: &[u8]) -> Result<[u8; 2]> {
    let (&last, body) = packet
        .split_last()
        .ok_or_else(|| EsbError::InvalidInput("cannot compute CRC of an empty packet".to_string()))?;

    let mut register = ESB_CRC_INIT.to_be_bytes();
    for &byte in body {
        register = crc_step_bits(register, byte, FULL_BYTE_ITERATIONS)?;
    }

    crc_step_bits(register, last, FINAL_BYTE_ITERATIONS)
}
