use std::path::PathBuf;

use thiserror::Error;

/// Errors parsing a textual bit dump back into bytes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DumpParseError {
    /// A character other than `0`, `1` or whitespace.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Character index in the input
        position: usize,
    },
    /// A space-separated group that is not four bits wide.
    #[error("bit group {index} has {width} bits, expected 4")]
    GroupWidth {
        /// 0-based group index
        index: usize,
        /// Bits found in the group
        width: usize,
    },
    /// An odd number of nibbles, leaving half a byte.
    #[error("dump ends with an incomplete byte")]
    IncompleteByte,
}

/// Errors loading a payload from the outside world.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// Reading a payload file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Hex text did not decode.
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    /// Payload is larger than any QR symbol can carry.
    #[error("payload is {len} bytes, limit is {max}")]
    TooLarge {
        /// Payload length
        len: usize,
        /// Configured maximum
        max: usize,
    },
}
