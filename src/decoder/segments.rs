//! Segment decoder
//!
//! Walks a payload one mode indicator at a time and yields [`Segment`]s
//! lazily. Only Structured Append, Byte and End of message bodies are walked;
//! any other indicator stops the stream because its body length is unknown
//! without mode-specific extraction.

use crate::decoder::bitstream::BitReader;
use crate::decoder::modes::Mode;
use crate::models::{Segment, StructuredAppendInfo};

const MODE_INDICATOR_BITS: usize = 4;
const STRUCTURED_APPEND_BITS: usize = 16;

/// Where the decoder is in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    /// More segments may follow
    Reading,
    /// Stream ended: terminator, exhausted bits, or an unreadable body
    Done,
    /// An unsupported mode indicator was reported
    Error,
}

/// Iterator over the segments of one payload.
#[derive(Debug, Clone)]
pub struct SegmentDecoder<'a> {
    reader: BitReader<'a>,
    symbol_version: i32,
    state: DecodeState,
    pending: Option<Segment>,
}

impl<'a> SegmentDecoder<'a> {
    /// Decode `payload` from its first bit.
    pub fn new(payload: &'a [u8], symbol_version: i32) -> Self {
        Self::with_reader(BitReader::new(payload), symbol_version)
    }

    /// Decode from wherever `reader` is positioned.
    pub fn with_reader(reader: BitReader<'a>, symbol_version: i32) -> Self {
        Self {
            reader,
            symbol_version,
            state: DecodeState::Reading,
            pending: None,
        }
    }

    /// Current state of the decode.
    pub fn state(&self) -> DecodeState {
        self.state
    }

    /// Bits consumed so far.
    pub fn bit_offset(&self) -> usize {
        self.reader.offset()
    }

    fn step(&mut self) -> Option<Segment> {
        let Some(code) = self.reader.read_bits(MODE_INDICATOR_BITS) else {
            tracing::debug!(
                offset = self.reader.offset(),
                "fewer than 4 bits left, stopping"
            );
            self.state = DecodeState::Done;
            return None;
        };
        let code = code as u8;

        let mode = match Mode::from_code(code) {
            Some(mode) if mode.is_supported() => mode,
            _ => {
                tracing::debug!(code, "unsupported mode indicator");
                self.state = DecodeState::Error;
                return Some(Segment::UnsupportedMode { code });
            }
        };
        tracing::debug!(%mode, offset = self.reader.offset(), "mode indicator");

        self.pending = match mode {
            Mode::EndOfMessage => {
                self.state = DecodeState::Done;
                Some(Segment::Terminator)
            }
            Mode::StructuredAppend => self.read_structured_append(),
            Mode::Byte => self.read_byte_segment(),
            _ => None,
        };

        Some(Segment::ModeHeader(mode))
    }

    fn read_structured_append(&mut self) -> Option<Segment> {
        if !self.reader.available(STRUCTURED_APPEND_BITS) {
            tracing::debug!("structured append header truncated");
            self.state = DecodeState::Done;
            return None;
        }
        let position = self.reader.read_bits(4)? as u8;
        let total_minus_one = self.reader.read_bits(4)? as u8;
        let parity = self.reader.read_bits(8)? as u8;
        tracing::trace!(position, total_minus_one, parity, "structured append");

        Some(Segment::StructuredAppend(StructuredAppendInfo::from_wire(
            position,
            total_minus_one,
            parity,
        )))
    }

    fn read_byte_segment(&mut self) -> Option<Segment> {
        let (Some(count_bits), Some(char_bits)) = (
            Mode::Byte.length_field_bits(self.symbol_version),
            Mode::Byte.bits_per_character(),
        ) else {
            // No count width for this version; stop without a diagnostic segment.
            tracing::debug!(
                version = self.symbol_version,
                "no character count width for symbol version"
            );
            self.state = DecodeState::Done;
            return None;
        };

        let Some(count) = self.reader.read_bits(count_bits) else {
            tracing::debug!(count_bits, "character count truncated");
            self.state = DecodeState::Done;
            return None;
        };
        let count = count as usize;
        if !self.reader.available(count * char_bits) {
            tracing::debug!(count, remaining = self.reader.remaining(), "byte body truncated");
            self.state = DecodeState::Done;
            return None;
        }

        let mut bytes = Vec::with_capacity(count);
        for _ in 0..count {
            bytes.push(self.reader.read_bits(char_bits)? as u8);
        }
        tracing::trace!(count, "byte segment");

        Some(Segment::ByteText(String::from_utf8(bytes).unwrap_or_default()))
    }
}

impl Iterator for SegmentDecoder<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }
        match self.state {
            DecodeState::Reading => self.step(),
            DecodeState::Done | DecodeState::Error => None,
        }
    }
}
