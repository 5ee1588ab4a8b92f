use crate::decoder::symbol_type::SymbolType;

/// Character-count field widths from the QR Code specification (Model 2).
/// Index: [mode][symbol_type] with modes ordered Numeric, Alphanumeric, Byte, Kanji.
const LENGTH_FIELD_BITS: [[u8; 3]; 4] = [
    [10, 12, 14], // Numeric
    [9, 11, 13],  // Alphanumeric
    [8, 16, 16],  // Byte
    [8, 10, 12],  // Kanji
];

/// Bits per encoded character, same mode order as above.
const BITS_PER_CHARACTER: [u8; 4] = [10, 11, 8, 13];

pub(crate) fn length_field_bits(row: usize, symbol_type: SymbolType) -> Option<usize> {
    LENGTH_FIELD_BITS
        .get(row)
        .map(|widths| widths[symbol_type.index()] as usize)
}

pub(crate) fn bits_per_character(row: usize) -> Option<usize> {
    BITS_PER_CHARACTER.get(row).map(|&bits| bits as usize)
}
