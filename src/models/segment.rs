use std::fmt;

use crate::decoder::modes::Mode;

/// Message shown when the first unreadable mode stops decoding.
pub const DECODE_FAILED_MESSAGE: &str = "No data or the decode failed.";

/// Structured Append header: this symbol's place in a multi-symbol message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredAppendInfo {
    /// 1-based position of this symbol
    pub position: u8,
    /// 1-based total number of symbols
    pub total: u8,
    /// Parity byte of the whole message
    pub parity: u8,
}

impl StructuredAppendInfo {
    /// Build from the raw wire fields (0-based position, total minus one).
    ///
    /// Position and total are 4-bit fields; higher bits are ignored.
    pub fn from_wire(position: u8, total_minus_one: u8, parity: u8) -> Self {
        Self {
            position: (position & 0x0f) + 1,
            total: (total_minus_one & 0x0f) + 1,
            parity,
        }
    }
}

impl fmt::Display for StructuredAppendInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}, Position: {}. Parity: {}.",
            self.total, self.position, self.parity
        )
    }
}

/// One decoded unit of a payload, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Mode indicator of the segment that follows
    ModeHeader(Mode),
    /// Structured Append metadata
    StructuredAppend(StructuredAppendInfo),
    /// Byte-mode characters; empty if they were not valid UTF-8
    ByteText(String),
    /// End of message reached
    Terminator,
    /// Reserved code, or a mode whose body this decoder cannot walk
    UnsupportedMode {
        /// Raw 4-bit indicator
        code: u8,
    },
}

impl Segment {
    /// Text shown for this segment. The terminator renders nothing because its
    /// mode header already names it.
    pub fn render(&self) -> Option<String> {
        match self {
            Segment::ModeHeader(mode) => Some(format!("Mode: {}", mode)),
            Segment::StructuredAppend(info) => Some(info.to_string()),
            Segment::ByteText(text) => Some(text.clone()),
            Segment::Terminator => None,
            Segment::UnsupportedMode { .. } => Some(DECODE_FAILED_MESSAGE.to_string()),
        }
    }

    /// Whether decoding stops after this segment.
    pub fn is_final(&self) -> bool {
        matches!(self, Segment::Terminator | Segment::UnsupportedMode { .. })
    }

    /// Whether this segment reports a failed decode.
    pub fn is_failure(&self) -> bool {
        matches!(self, Segment::UnsupportedMode { .. })
    }
}

/// Assemble segments into one block of display text.
pub fn transcript(segments: &[Segment]) -> String {
    let mut text = String::new();
    for segment in segments {
        match segment {
            Segment::ModeHeader(mode) => {
                text.push_str("\nMode: ");
                text.push_str(mode.description());
                text.push('\n');
            }
            Segment::StructuredAppend(info) => {
                text.push_str(&info.to_string());
                text.push_str("\n\n");
            }
            Segment::ByteText(body) => text.push_str(body),
            Segment::Terminator => {}
            Segment::UnsupportedMode { .. } => {
                text.push_str(DECODE_FAILED_MESSAGE);
                text.push('\n');
            }
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_append_is_one_based() {
        let info = StructuredAppendInfo::from_wire(0, 0, 0);
        assert_eq!(info.to_string(), "Total: 1, Position: 1. Parity: 0.");

        let info = StructuredAppendInfo::from_wire(2, 15, 0xa7);
        assert_eq!(info.position, 3);
        assert_eq!(info.total, 16);
        assert_eq!(info.to_string(), "Total: 16, Position: 3. Parity: 167.");
    }

    #[test]
    fn test_from_wire_ignores_high_bits() {
        let info = StructuredAppendInfo::from_wire(255, 255, 255);
        assert_eq!(info.position, 16);
        assert_eq!(info.total, 16);
        assert_eq!(info.parity, 255);

        let info = StructuredAppendInfo::from_wire(0x13, 0x20, 1);
        assert_eq!(info.position, 4);
        assert_eq!(info.total, 1);
    }

    #[test]
    fn test_final_segments() {
        assert!(Segment::Terminator.is_final());
        assert!(!Segment::Terminator.is_failure());
        assert!(Segment::UnsupportedMode { code: 6 }.is_final());
        assert!(Segment::UnsupportedMode { code: 6 }.is_failure());
        assert!(!Segment::ModeHeader(Mode::EndOfMessage).is_final());
        assert!(!Segment::ByteText(String::new()).is_final());
    }

    #[test]
    fn test_render() {
        assert_eq!(
            Segment::ModeHeader(Mode::Byte).render().as_deref(),
            Some("Mode: 0100 Byte")
        );
        assert_eq!(Segment::ByteText("hi".into()).render().as_deref(), Some("hi"));
        assert_eq!(Segment::Terminator.render(), None);
        assert_eq!(
            Segment::UnsupportedMode { code: 6 }.render().as_deref(),
            Some(DECODE_FAILED_MESSAGE)
        );
    }

    #[test]
    fn test_transcript_layout() {
        let segments = vec![
            Segment::ModeHeader(Mode::StructuredAppend),
            Segment::StructuredAppend(StructuredAppendInfo::from_wire(1, 1, 9)),
            Segment::ModeHeader(Mode::Byte),
            Segment::ByteText("QR".into()),
            Segment::ModeHeader(Mode::EndOfMessage),
            Segment::Terminator,
        ];
        assert_eq!(
            transcript(&segments),
            "\nMode: 0011 Structured Append\nTotal: 2, Position: 2. Parity: 9.\n\n\
             \nMode: 0100 Byte\nQR\nMode: 0000 End of message\n"
        );
    }

    #[test]
    fn test_transcript_failure() {
        let segments = vec![Segment::UnsupportedMode { code: 1 }];
        assert_eq!(transcript(&segments), "No data or the decode failed.\n");
    }
}
