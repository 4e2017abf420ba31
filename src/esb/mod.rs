//! # ESB Protocol Module
//!
//! Bit-level primitives for Enhanced ShockBurst (ESB) packets.
//!
//! This module handles:
//! - Channel <-> frequency conversion (1 MHz spacing from 2400 MHz)
//! - Byte <-> bit string conversion and bitwise XOR
//! - Bit-serial CRC-16 calculation (polynomial 0x1021)
//! - Appending and verifying the CRC field of a frame

pub mod protocol;
pub mod bits;
pub mod crc;
pub mod encoder;
pub mod decoder;
