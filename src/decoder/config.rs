use std::path::PathBuf;
use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_i32(name: &str, default: i32) -> i32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

/// Data capacity of a version 40-L symbol, the largest payload a QR code carries.
pub const MAX_PAYLOAD_BYTES: usize = 2956;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// `QR_DEBUG` set to anything turns on debug logging.
pub fn debug_enabled() -> bool {
    *DEBUG_ENABLED.get_or_init(|| std::env::var("QR_DEBUG").is_ok())
}

static DEFAULT_SYMBOL_VERSION: OnceLock<i32> = OnceLock::new();

/// Symbol version assumed when a caller does not supply one.
pub fn default_symbol_version() -> i32 {
    *DEFAULT_SYMBOL_VERSION.get_or_init(|| parse_env_i32("QR_SYMBOL_VERSION", 1).clamp(1, 40))
}

static MAX_PAYLOAD: OnceLock<usize> = OnceLock::new();

/// Largest payload file the loader accepts.
pub fn max_payload_bytes() -> usize {
    *MAX_PAYLOAD.get_or_init(|| parse_env_usize("QR_MAX_PAYLOAD_BYTES", MAX_PAYLOAD_BYTES).max(1))
}

/// Default payload dataset root.
pub fn payload_root_from_env() -> PathBuf {
    std::env::var("QR_PAYLOAD_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("tests/payloads"))
}

/// Optional cap on how many dataset files to process.
///
/// Returns `None` (full dataset) when `QR_BENCH_LIMIT` is unset or set to `0`.
pub fn bench_limit_from_env() -> Option<usize> {
    match parse_env_usize("QR_BENCH_LIMIT", 0) {
        0 => None,
        v => Some(v),
    }
}
