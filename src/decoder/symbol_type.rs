/// Symbol size class derived from the QR version number.
///
/// The class selects the width of every character-count field, so an
/// unclassifiable version blocks all length-prefixed bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolType {
    /// Versions 1-9
    Small,
    /// Versions 10-26
    Medium,
    /// Versions 27-40
    Large,
}

impl SymbolType {
    /// Classify a symbol version. Returns `None` outside 1-40.
    pub fn from_version(version: i32) -> Option<Self> {
        match version {
            1..=9 => Some(SymbolType::Small),
            10..=26 => Some(SymbolType::Medium),
            27..=40 => Some(SymbolType::Large),
            _ => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            SymbolType::Small => 0,
            SymbolType::Medium => 1,
            SymbolType::Large => 2,
        }
    }
}
