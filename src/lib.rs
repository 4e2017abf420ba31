//! # ESB Utils Library
//!
//! Helpers for manipulating Enhanced ShockBurst (ESB) packets.
//!
//! This library provides channel/frequency conversion, MSB-first bit string
//! conversion, bitwise XOR and the bit-serial CRC-16 used to protect ESB
//! packets.

pub mod config;
pub mod error;
pub mod esb;
pub mod logging;
