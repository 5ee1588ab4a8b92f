//! Raw bit dump of a payload, for diagnostic display
//!
//! Each byte is printed as two 4-bit groups: `0100 0001 0000 0001 ...`

use crate::decoder::bitstream::BitReader;
use crate::error::DumpParseError;

/// Render every bit of `payload`, one nibble per space-separated group.
///
/// Uses its own reader, so it never disturbs a decode over the same bytes.
pub fn dump_bits(payload: &[u8]) -> String {
    let mut reader = BitReader::new(payload);
    let mut out = String::with_capacity(payload.len() * 10);

    while reader.available(4) {
        if !out.is_empty() {
            out.push(' ');
        }
        for _ in 0..4 {
            match reader.read_bit() {
                Some(true) => out.push('1'),
                Some(false) => out.push('0'),
                None => break,
            }
        }
    }

    out
}

/// Parse the output of [`dump_bits`] back into bytes.
pub fn parse_bit_dump(dump: &str) -> Result<Vec<u8>, DumpParseError> {
    if let Some((position, character)) = dump
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, '0' | '1') && !c.is_whitespace())
    {
        return Err(DumpParseError::InvalidCharacter {
            character,
            position,
        });
    }

    let mut nibbles = Vec::new();
    for (index, group) in dump.split_whitespace().enumerate() {
        if group.len() != 4 {
            return Err(DumpParseError::GroupWidth {
                index,
                width: group.len(),
            });
        }
        let nibble = group
            .bytes()
            .fold(0u8, |acc, b| (acc << 1) | (b == b'1') as u8);
        nibbles.push(nibble);
    }

    if nibbles.len() % 2 != 0 {
        return Err(DumpParseError::IncompleteByte);
    }

    Ok(nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
