//! # ESB Protocol Constants and Channel Mapping
//!
//! Core protocol definitions for Enhanced ShockBurst (ESB) links.
//!
//! ESB channels are 1 MHz apart, starting at 2400 MHz:
//!
//! ```text
//! frequency (MHz) = 2400 + channel
//! ```

/// Carrier frequency of channel 0 in MHz
pub const ESB_BASE_FREQUENCY_MHZ: i32 = 2400;

/// Highest channel in common use (not enforced by the conversions)
pub const ESB_MAX_CHANNEL: i32 = 99;

/// CRC generator polynomial (x^16 + x^12 + x^5 + 1, leading term implicit)
pub const ESB_CRC_POLYNOMIAL: u16 = 0x1021;

/// CRC register value at the start of every packet
pub const ESB_CRC_INIT: u16 = 0xFFFF;

/// CRC field size in bytes
pub const ESB_CRC_SIZE: usize = 2;

/// Convert a carrier frequency to the matching ESB channel
///
/// No range check is made: out-of-band frequencies give out-of-band
/// (possibly negative) channels.
///
/// # Arguments
///
/// * `frequency` - Carrier frequency in MHz
///
/// # Returns
///
/// * `i32` - ESB channel index
///
/// # Examples
///
/// ```
/// use esb_utils::esb::protocol::frequency_to_channel;
///
/// assert_eq!(frequency_to_channel(2420), 20);
/// assert_eq!(frequency_to_channel(2402), 2);
/// ```
pub fn frequency_to_channel(frequency: i32) -> i32 {
    frequency.wrapping_sub(ESB_BASE_FREQUENCY_MHZ)
}

/// Convert an ESB channel to its carrier frequency in MHz
///
/// Exact inverse of [`frequency_to_channel`] for every `i32`.
///
/// # Examples
///
/// ```
/// use esb_utils::esb::protocol::channel_to_frequency;
///
/// assert_eq!(channel_to_frequency(37), 2437);
/// assert_eq!(channel_to_frequency(8), 2408);
/// ```
pub fn channel_to_frequency(channel: i32) -> i32 {
    channel.wrapping_add(ESB_BASE_FREQUENCY_MHZ)
}

/// Check whether a channel lies in the usual 0..=99 range
pub fn is_in_band(channel: i32) -> bool {
    (0..=ESB_MAX_CHANNEL).contains(&channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_to_channel() {
        assert_eq!(frequency_to_channel(2420), 20);
        assert_eq!(frequency_to_channel(2402), 2);
        assert_eq!(frequency_to_channel(2400), 0);
    }

    #[test]
    fn test_channel_to_frequency() {
        assert_eq!(channel_to_frequency(37), 2437);
        assert_eq!(channel_to_frequency(8), 2408);
        assert_eq!(channel_to_frequency(0), 2400);
    }

    #[test]
    fn test_out_of_band_passes_through() {
        // No validation: garbage in, garbage out
        assert_eq!(frequency_to_channel(2300), -100);
        assert_eq!(frequency_to_channel(0), -2400);
        assert_eq!(channel_to_frequency(-2400), 0);
        assert_eq!(channel_to_frequency(500), 2900);
    }

    #[test]
    fn test_extremes_do_not_panic() {
        assert_eq!(channel_to_frequency(frequency_to_channel(i32::MIN)), i32::MIN);
        assert_eq!(frequency_to_channel(channel_to_frequency(i32::MAX)), i32::MAX);
    }

    #[test]
    fn test_is_in_band() {
        assert!(is_in_band(0));
        assert!(is_in_band(99));
        assert!(!is_in_band(100));
        assert!(!is_in_band(-1));
    }

    #[test]
    fn test_crc_constants() {
        assert_eq!(ESB_CRC_POLYNOMIAL.to_be_bytes(), [0x10, 0x21]);
        assert_eq!(ESB_CRC_INIT, 0xFFFF);
        assert_eq!(ESB_CRC_SIZE, 2);
    }
}
