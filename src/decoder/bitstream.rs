//! Bit-level reader over an error-corrected payload
//!
//! Fields in a QR data stream are packed MSB-first with no byte alignment,
//! so every read may straddle byte boundaries.

/// Cursor over a borrowed byte buffer.
///
/// The reader is `Copy`: each copy owns its own cursor, so a diagnostic pass
/// and a decoding pass can walk the same payload independently.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> BitReader<'a> {
    /// Widest field a single read can return.
    pub const MAX_READ_BITS: usize = 32;

    /// Create a reader positioned at bit 0.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Current cursor position in bits.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of bits in the payload.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Bits left after the cursor.
    pub fn remaining(&self) -> usize {
        self.bit_len() - self.offset
    }

    /// True if `n` more bits can be read.
    pub fn available(&self, n: usize) -> bool {
        n <= self.remaining()
    }

    /// Move the cursor to an absolute bit offset, clamped to the payload length.
    pub fn reset(&mut self, offset: usize) {
        self.offset = offset.min(self.bit_len());
    }

    /// Read `n` bits (0-32) MSB-first and advance the cursor.
    ///
    /// Returns `None` without moving the cursor if `n` exceeds 32 or fewer
    /// than `n` bits remain.
    pub fn read_bits(&mut self, n: usize) -> Option<u32> {
        if n > Self::MAX_READ_BITS || !self.available(n) {
            return None;
        }

        let mut value: u64 = 0;
        let mut needed = n;
        while needed > 0 {
            let byte = self.bytes[self.offset / 8];
            let left_in_byte = 8 - self.offset % 8;
            let take = left_in_byte.min(needed);
            let shift = left_in_byte - take;
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (byte >> shift) & mask;

            value = (value << take) | chunk as u64;
            self.offset += take;
            needed -= take;
        }

        Some(value as u32)
    }

    /// Read a single bit.
    pub fn read_bit(&mut self) -> Option<bool> {
        self.read_bits(1).map(|bit| bit != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_aligned_reads_reproduce_bytes() {
        let data = [0x00, 0x7f, 0x80, 0xff, 0x5a];
        let mut reader = BitReader::new(&data);
        for &expected in &data {
            assert_eq!(reader.read_bits(8), Some(expected as u32));
        }
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_read_across_byte_boundary() {
        // 1010 1100 | 0011 0101
        let data = [0xac, 0x35];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(4), Some(0b1010));
        assert_eq!(reader.read_bits(8), Some(0b1100_0011));
        assert_eq!(reader.read_bits(4), Some(0b0101));
        assert_eq!(reader.offset(), 16);
    }

    #[test]
    fn test_full_width_read() {
        let data = [0xde, 0xad, 0xbe, 0xef, 0x01];
        let mut reader = BitReader::new(&data);
        reader.reset(4);
        assert_eq!(reader.read_bits(32), Some(0xeadb_eef0));
        assert_eq!(reader.offset(), 36);
    }

    #[test]
    fn test_zero_width_read() {
        let mut reader = BitReader::new(&[]);
        assert!(reader.available(0));
        assert_eq!(reader.read_bits(0), Some(0));
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn test_unavailable_read_leaves_cursor() {
        let data = [0xff];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(5), Some(0b11111));
        assert!(!reader.available(4));
        assert_eq!(reader.read_bits(4), None);
        assert_eq!(reader.offset(), 5);
        assert_eq!(reader.read_bits(3), Some(0b111));
    }

    #[test]
    fn test_oversized_read_rejected() {
        let data = [0u8; 8];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(33), None);
        assert_eq!(reader.offset(), 0);
    }

    #[test]
    fn test_split_widths_agree() {
        let data = [0x9c, 0x41, 0xe7, 0x0f, 0xb2, 0x68];
        for width in 1..=16usize {
            let mut whole = BitReader::new(&data);
            let mut halves = BitReader::new(&data);
            whole.reset(3);
            halves.reset(3);

            let combined = whole.read_bits(width * 2).unwrap();
            let high = halves.read_bits(width).unwrap();
            let low = halves.read_bits(width).unwrap();
            assert_eq!(combined, (high << width) | low, "width {}", width);
            assert_eq!(whole.offset(), halves.offset());
        }
    }

    #[test]
    fn test_values_fit_width() {
        let data = [0xff; 6];
        for width in 1..=32usize {
            let mut reader = BitReader::new(&data);
            reader.reset(width % 8);
            let value = reader.read_bits(width).unwrap() as u64;
            assert!(value < (1u64 << width));
            assert_eq!(value, (1u64 << width) - 1);
        }
    }

    #[test]
    fn test_copies_have_independent_cursors() {
        let data = [0x12, 0x34];
        let mut first = BitReader::new(&data);
        first.read_bits(12);
        let mut second = first;
        second.reset(0);
        assert_eq!(second.read_bits(8), Some(0x12));
        assert_eq!(first.offset(), 12);
        assert_eq!(first.read_bits(4), Some(0x4));
    }

    #[test]
    fn test_reset_clamps_to_payload() {
        let data = [0u8; 2];
        let mut reader = BitReader::new(&data);
        reader.reset(100);
        assert_eq!(reader.offset(), 16);
        assert!(reader.available(0));
        assert!(!reader.available(1));
    }
}
