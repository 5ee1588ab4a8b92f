use crate::decoder::config::max_payload_bytes;
use crate::error::PayloadError;
use crate::models::{Payload, Segment};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Decode hex text (whitespace ignored) into payload bytes.
pub fn parse_hex_payload(text: &str) -> Result<Vec<u8>, PayloadError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact)?;
    check_len(bytes)
}

/// Load a payload file: `.hex` files hold hex text, anything else raw bytes.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, PayloadError> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| PayloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_hex_file(path) {
        parse_hex_payload(&String::from_utf8_lossy(&raw))
    } else {
        check_len(raw)
    }
}

fn check_len(bytes: Vec<u8>) -> Result<Vec<u8>, PayloadError> {
    let max = max_payload_bytes();
    if bytes.len() > max {
        return Err(PayloadError::TooLarge {
            len: bytes.len(),
            max,
        });
    }
    Ok(bytes)
}

fn is_hex_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("hex"))
        .unwrap_or(false)
}

fn is_payload_file(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            ext == "bin" || ext == "hex"
        }
        None => false,
    }
}

/// Iterate payload files under `root`, sorted, with an optional limit.
pub fn dataset_iter<P: AsRef<Path>>(root: P, limit: Option<usize>) -> impl Iterator<Item = PathBuf> {
    let mut files = collect_payloads(root.as_ref());
    files.sort();
    if let Some(limit) = limit {
        files.truncate(limit);
    }
    files.into_iter()
}

fn collect_payloads(root: &Path) -> Vec<PathBuf> {
    let mut stack = vec![root.to_path_buf()];
    let mut files = Vec::new();

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            // Symlinked directories are not followed; they can loop back.
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                stack.push(path);
            } else if is_payload_file(&path) {
                files.push(path);
            }
        }
    }

    files
}

/// Outcome of decoding one dataset file.
#[derive(Debug)]
pub struct DatasetEntry {
    /// Source file
    pub path: PathBuf,
    /// Segments, or the load error
    pub result: Result<Vec<Segment>, PayloadError>,
}

impl DatasetEntry {
    /// Loaded and did not stop on an unsupported mode.
    pub fn decoded(&self) -> bool {
        match &self.result {
            Ok(segments) => !segments.iter().any(Segment::is_failure),
            Err(_) => false,
        }
    }
}

/// Load and decode every file in parallel. Output keeps the input order.
pub fn decode_dataset(paths: &[PathBuf], symbol_version: i32) -> Vec<DatasetEntry> {
    paths
        .par_iter()
        .map(|path| {
            let result: Result<Vec<Segment>, PayloadError> = load_payload(path)
                .map(|bytes| Payload::new(bytes, symbol_version).segments().collect());
            if let Err(err) = &result {
                tracing::warn!(path = %path.display(), error = %err, "skipping payload");
            }
            DatasetEntry {
                path: path.clone(),
                result,
            }
        })
        .collect()
}
