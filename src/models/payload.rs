use crate::decoder::dump::dump_bits;
use crate::decoder::segments::SegmentDecoder;
use crate::models::segment::{Segment, transcript};

/// Error-corrected data codewords of one symbol together with its version.
///
/// This is what a detector hands over once Reed-Solomon correction is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    /// Corrected data codewords
    pub bytes: Vec<u8>,
    /// Symbol version (1-40 for a valid symbol)
    pub symbol_version: i32,
}

impl Payload {
    /// Create a payload
    pub fn new(bytes: Vec<u8>, symbol_version: i32) -> Self {
        Self {
            bytes,
            symbol_version,
        }
    }

    /// Lazily decode segments.
    pub fn segments(&self) -> SegmentDecoder<'_> {
        SegmentDecoder::new(&self.bytes, self.symbol_version)
    }

    /// Rendered segment strings.
    pub fn decode(&self) -> Vec<String> {
        self.segments().filter_map(|s| s.render()).collect()
    }

    /// Display text for the whole payload.
    pub fn transcript(&self) -> String {
        let segments: Vec<Segment> = self.segments().collect();
        transcript(&segments)
    }

    /// Raw bits, two nibbles per byte.
    pub fn dump_bits(&self) -> String {
        dump_bits(&self.bytes)
    }

    /// True when decoding stopped on an unsupported mode.
    pub fn failed(&self) -> bool {
        self.segments().any(|s| s.is_failure())
    }
}
