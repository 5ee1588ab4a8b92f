//! QR payload decoding modules
//!
//! Everything between an error-corrected codeword buffer and readable segments:
//! - Bit-level reading across byte boundaries
//! - Symbol size classes and the mode registry
//! - The segment decoding loop
//! - Raw bit dumps for diagnostics

/// Bit cursor over a byte buffer
pub mod bitstream;
/// Environment-driven settings
pub mod config;
/// Raw bit dump and its parser
pub mod dump;
/// Mode indicator registry
pub mod modes;
/// Segment decoding loop
pub mod segments;
/// Version to symbol size class
pub mod symbol_type;
/// Character count field widths
pub mod tables;
