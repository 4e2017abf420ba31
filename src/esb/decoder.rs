//! # ESB Frame Decoder
//!
//! Checks the CRC field of a received frame and strips it.

use tracing::{debug, warn};

use super::crc::calc_crc;
use super::protocol::ESB_CRC_SIZE;
use crate::error::{EsbError, Result};

/// Split a frame into payload and received CRC
///
/// # Errors
///
/// Returns error if the frame has no room for a one-byte payload plus CRC
pub fn split_frame(frame: &[u8]) -> Result<(&[u8], [u8; 2])> {
    // Minimum frame size: payload(1) + crc(2) = 3 bytes
    if frame.len() < ESB_CRC_SIZE + 1 {
        return Err(EsbError::InvalidInput(format!(
            "Frame too short: expected at least {} bytes, got {}",
            ESB_CRC_SIZE + 1,
            frame.len()
        )));
    }

    let (payload, crc) = frame.split_at(frame.len() - ESB_CRC_SIZE);
    Ok((payload, [crc[0], crc[1]]))
}

/// Verify a received frame and return its payload
///
/// # Arguments
///
/// * `frame` - Payload followed by the 2-byte CRC (preamble already removed)
///
/// # Returns
///
/// * `Result<&[u8]>` - Payload slice if the CRC matches
///
/// # Errors
///
/// Returns error if:
/// - Frame is too short
/// - CRC check fails
///
/// # Examples
///
/// ```
/// use esb_utils::esb::decoder::verify_frame;
///
/// let frame = [0x41, 0x42, 0x43, 0x10, 0xe8];
/// assert_eq!(verify_frame(&frame)?, b"ABC");
/// # Ok::<(), esb_utils::error::EsbError>(())
/// ```
pub fn verify_frame(frame: &[u8]) -> Result<&[u8]> {
    let (payload, received) = split_frame(frame)?;
    let expected = calc_crc(payload)?;

    if expected != received {
        warn!(
            "CRC mismatch on {}-byte payload: expected 0x{:02X}{:02X}, got 0x{:02X}{:02X}",
            payload.len(), expected[0], expected[1], received[0], received[1]
        );
        return Err(EsbError::CrcMismatch { expected, received });
    }

    debug!("Verified ESB frame ({} bytes payload)", payload.len());
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esb::encoder::append_crc;

    #[test]
    fn test_verify_frame_too_short() {
        assert!(matches!(verify_frame(&[]), Err(EsbError::InvalidInput(_))));
        assert!(matches!(verify_frame(&[0x9e, 0xd4]), Err(EsbError::InvalidInput(_))));
    }

    #[test]
    fn test_verify_frame_valid() {
        let frame = append_crc(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(verify_frame(&frame).unwrap(), &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_verify_frame_known_crc() {
        let frame = [0x01, 0x02, 0xf7, 0x83];
        assert_eq!(verify_frame(&frame).unwrap(), &[0x01, 0x02]);
    }

    #[test]
    fn test_verify_frame_crc_mismatch() {
        let mut frame = append_crc(&[0x01, 0x02, 0x03]).unwrap().to_vec();
        frame[1] ^= 0x01;

        match verify_frame(&frame) {
            Err(EsbError::CrcMismatch { received, .. }) => {
                assert_eq!(received, [frame[3], frame[4]]);
            }
            other => panic!("Expected CrcMismatch, got: {:?}", other),
        }
    }

    #[test]
    fn test_verify_frame_corrupted_crc_field() {
        let mut frame = append_crc(b"ABC").unwrap().to_vec();
        let last = frame.len() - 1;
        frame[last] ^= 0x80;

        assert!(matches!(verify_frame(&frame), Err(EsbError::CrcMismatch { .. })));
    }

    #[test]
    fn test_split_frame() {
        let (payload, crc) = split_frame(&[0xAA, 0xBB, 0x12, 0x34]).unwrap();
        assert_eq!(payload, &[0xAA, 0xBB]);
        assert_eq!(crc, [0x12, 0x34]);
    }
}
