//! # Bit String Codec
//!
//! Conversions between bytes and textual bit strings, plus bitwise XOR.
//!
//! Bit strings hold one `'0'` or `'1'` character per bit, most significant
//! bit of each byte first:
//!
//! ```text
//! [0x01, 0xFF] <-> "0000000111111111"
//! ```
//!
//! Any other character is rejected with [`EsbError::InvalidBitChar`].

use crate::error::{EsbError, Result};

/// Convert bytes to an MSB-first bit string (8 characters per byte)
///
/// # Examples
///
/// ```
/// use esb_utils::esb::bits::bytes_to_bits;
///
/// assert_eq!(bytes_to_bits(&[0x01, 0x02, 0x03, 0xFF]), "00000001000000100000001111111111");
/// assert_eq!(bytes_to_bits(&[]), "");
/// ```
pub fn bytes_to_bits(data: &[u8]) -> String {
    let mut bits = String::with_capacity(data.len() * 8);

    for &byte in data {
        for shift in (0..8).rev() {
            bits.push(if (byte >> shift) & 1 == 1 { '1' } else { '0' });
        }
    }

    bits
}

/// Convert an MSB-first bit string to bytes
///
/// The string is consumed in groups of 8 bits. A final group shorter than 8
/// bits is right-padded with zeros, so `"1"` becomes `[0x80]`.
///
/// # Errors
///
/// Returns [`EsbError::InvalidBitChar`] if the string contains anything but `'0'` and `'1'`
///
/// # Examples
///
/// ```
/// use esb_utils::esb::bits::bits_to_bytes;
///
/// assert_eq!(bits_to_bytes("010000010100001001000011")?, b"ABC".to_vec());
/// assert_eq!(bits_to_bytes("1")?, vec![0x80]);
/// # Ok::<(), esb_utils::error::EsbError>(())
/// ```
pub fn bits_to_bytes(bits: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    let mut current: u8 = 0;
    let mut filled = 0;

    for (index, found) in bits.chars().enumerate() {
        current = (current << 1) | bit_value(index, found)?;
        filled += 1;

        if filled == 8 {
            bytes.push(current);
            current = 0;
            filled = 0;
        }
    }

    if filled > 0 {
        bytes.push(current << (8 - filled));
    }

    Ok(bytes)
}

/// XOR two bit strings of equal length
///
/// # Errors
///
/// - [`EsbError::LengthMismatch`] if the strings differ in length
/// - [`EsbError::InvalidBitChar`] if either string is not a bit string
///
/// # Examples
///
/// ```
/// use esb_utils::esb::bits::bitwise_xor;
///
/// assert_eq!(bitwise_xor("11001111", "10101010")?, "01100101");
/// assert!(bitwise_xor("1100", "101").is_err());
/// # Ok::<(), esb_utils::error::EsbError>(())
/// ```
pub fn bitwise_xor(a: &str, b: &str) -> Result<String> {
    let (left, right) = (a.chars().count(), b.chars().count());
    if left != right {
        return Err(EsbError::LengthMismatch { left, right });
    }

    a.chars()
        .zip(b.chars())
        .enumerate()
        .map(|(index, (x, y))| {
            let bit = bit_value(index, x)? ^ bit_value(index, y)?;
            Ok(if bit == 1 { '1' } else { '0' })
        })
        .collect()
}

fn bit_value(index: usize, found: char) -> Result<u8> {
    match found {
        '0' => Ok(0),
        '1' => Ok(1),
        _ => Err(EsbError::InvalidBitChar { index, found }),
    }
}
