/// Error-corrected payload hand-off value
pub mod payload;
/// Decoded segments and their rendering
pub mod segment;

pub use payload::Payload;
pub use segment::{DECODE_FAILED_MESSAGE, Segment, StructuredAppendInfo, transcript};
