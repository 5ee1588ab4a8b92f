//! qr_payload - QR code payload segment decoder
//!
//! Reads the error-corrected data codewords of a QR symbol as a bit stream
//! and splits them into segments: mode indicators, Structured Append headers,
//! byte-mode text and the terminator.
//!
//! ```
//! // Byte mode, one character 'A', end of message (version 1)
//! let lines = qr_payload::decode(&[0x40, 0x14, 0x10], 1);
//! assert_eq!(lines, ["Mode: 0100 Byte", "A", "Mode: 0000 End of message"]);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Payload decoding modules (bit reader, mode registry, segment loop)
pub mod decoder;
/// Error types for dump parsing and payload loading
pub mod error;
/// Tracing subscriber setup for binaries
pub mod logging;
/// Core data structures (Payload, Segment, StructuredAppendInfo)
pub mod models;
/// Dataset and file helpers used by the CLI
pub mod tools;

pub use decoder::bitstream::BitReader;
pub use decoder::dump::{dump_bits, parse_bit_dump};
pub use decoder::modes::Mode;
pub use decoder::segments::{DecodeState, SegmentDecoder};
pub use decoder::symbol_type::SymbolType;
pub use error::{DumpParseError, PayloadError};
pub use models::{DECODE_FAILED_MESSAGE, Payload, Segment, StructuredAppendInfo, transcript};

/// Decode a payload into its segments.
///
/// # Arguments
/// * `payload` - Error-corrected data codewords
/// * `symbol_version` - Symbol version (1-40); selects character count widths
///
/// # Returns
/// Segments in stream order, ending at the terminator, an unsupported mode
/// or the end of the buffer
pub fn decode_segments(payload: &[u8], symbol_version: i32) -> Vec<Segment> {
    SegmentDecoder::new(payload, symbol_version).collect()
}

/// Decode a payload into display strings, one per rendered segment.
///
/// An unsupported first mode yields the single [`DECODE_FAILED_MESSAGE`].
pub fn decode(payload: &[u8], symbol_version: i32) -> Vec<String> {
    SegmentDecoder::new(payload, symbol_version)
        .filter_map(|segment| segment.render())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert!(decode(&[], 1).is_empty());
        assert!(decode_segments(&[], 1).is_empty());
    }

    #[test]
    fn test_decode_failure_message() {
        assert_eq!(decode(&[0x60], 1), vec![DECODE_FAILED_MESSAGE]);
    }

    #[test]
    fn test_decode_omits_terminator() {
        let segments = decode_segments(&[0x00], 1);
        assert_eq!(segments.len(), 2);
        assert_eq!(decode(&[0x00], 1), vec!["Mode: 0000 End of message"]);
    }
}
