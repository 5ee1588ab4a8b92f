//! QR code data mode registry
//!
//! The 4-bit mode indicator selects how the rest of a segment is laid out:
//! - Numeric, Alphanumeric, Byte and Kanji carry a character-count field
//! - Structured Append carries a fixed 16-bit header
//! - ECI and the FNC1 modes carry no count field
//! - End of message terminates the stream

use std::fmt;

use crate::decoder::symbol_type::SymbolType;
use crate::decoder::tables;

/// Mode indicator values (ISO/IEC 18004). Code 6 is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// 0000
    EndOfMessage = 0,
    /// 0001
    Numeric = 1,
    /// 0010
    Alphanumeric = 2,
    /// 0011
    StructuredAppend = 3,
    /// 0100
    Byte = 4,
    /// 0101
    Fnc1First = 5,
    /// 0111
    Eci = 7,
    /// 1000
    Kanji = 8,
    /// 1001
    Fnc1Second = 9,
}

impl Mode {
    /// Every registered mode, ordered by indicator value.
    pub const ALL: [Mode; 9] = [
        Mode::EndOfMessage,
        Mode::Numeric,
        Mode::Alphanumeric,
        Mode::StructuredAppend,
        Mode::Byte,
        Mode::Fnc1First,
        Mode::Eci,
        Mode::Kanji,
        Mode::Fnc1Second,
    ];

    /// Look up a 4-bit mode indicator. Reserved and out-of-range codes yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Mode::EndOfMessage),
            1 => Some(Mode::Numeric),
            2 => Some(Mode::Alphanumeric),
            3 => Some(Mode::StructuredAppend),
            4 => Some(Mode::Byte),
            5 => Some(Mode::Fnc1First),
            7 => Some(Mode::Eci),
            8 => Some(Mode::Kanji),
            9 => Some(Mode::Fnc1Second),
            _ => None,
        }
    }

    /// The 4-bit indicator value.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label shown to users, prefixed by the indicator bits.
    pub fn description(self) -> &'static str {
        match self {
            Mode::Numeric => "0001 Numeric",
            Mode::Alphanumeric => "0010 Alphanumeric",
            Mode::Byte => "0100 Byte",
            Mode::Kanji => "1000 Kanji",
            Mode::StructuredAppend => "0011 Structured Append",
            Mode::Eci => "0111 ECI",
            Mode::Fnc1First => "0101 FNC1 (first position)",
            Mode::Fnc1Second => "1001 FNC1 (second position)",
            Mode::EndOfMessage => "0000 End of message",
        }
    }

    /// Whether a character-count field follows the indicator.
    pub fn has_length_field(self) -> bool {
        self.table_row().is_some()
    }

    /// Width of one encoded character unit, for modes that carry characters.
    pub fn bits_per_character(self) -> Option<usize> {
        tables::bits_per_character(self.table_row()?)
    }

    /// Width of the character-count field for a symbol version.
    ///
    /// `None` when the mode has no count field or the version is outside 1-40.
    pub fn length_field_bits(self, version: i32) -> Option<usize> {
        let row = self.table_row()?;
        let symbol_type = SymbolType::from_version(version)?;
        tables::length_field_bits(row, symbol_type)
    }

    /// Modes whose bodies the segment decoder walks.
    pub fn is_supported(self) -> bool {
        matches!(
            self,
            Mode::StructuredAppend | Mode::Byte | Mode::EndOfMessage
        )
    }

    fn table_row(self) -> Option<usize> {
        match self {
            Mode::Numeric => Some(0),
            Mode::Alphanumeric => Some(1),
            Mode::Byte => Some(2),
            Mode::Kanji => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
