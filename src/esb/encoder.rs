//! # ESB Frame Encoder
//!
//! Appends the CRC field to an outgoing payload.

use bytes::{BufMut, Bytes, BytesMut};

use super::crc::calc_crc;
use super::protocol::ESB_CRC_SIZE;
use crate::error::Result;

/// Build a frame ready for transmission: payload followed by its CRC
///
/// # Arguments
///
/// * `payload` - Packet bytes without preamble (at least one byte)
///
/// # Returns
///
/// * `Result<Bytes>` - `payload.len() + 2` bytes, CRC most significant byte first
///
/// # Errors
///
/// Returns [`crate::error::EsbError::InvalidInput`] for an empty payload
///
/// # Examples
///
/// ```
/// use esb_utils::esb::encoder::append_crc;
///
/// let frame = append_crc(b"ABC")?;
/// assert_eq!(&frame[..], &[0x41, 0x42, 0x43, 0x10, 0xe8]);
/// # Ok::<(), esb_utils::error::EsbError>(())
/// ```
pub fn append_crc(payload: &[u8]) -> Result<Bytes> {
    let crc = calc_crc(payload)?;

    let mut frame = BytesMut::with_capacity(payload.len() + ESB_CRC_SIZE);
    frame.put_slice(payload);
    frame.put_slice(&crc);

    Ok(frame.freeze())
}
