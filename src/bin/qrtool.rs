use clap::{Parser, Subcommand};
use qr_payload::decoder::config::{
    bench_limit_from_env, default_symbol_version, payload_root_from_env,
};
use qr_payload::logging::setup_logging;
use qr_payload::tools::{dataset_iter, decode_dataset, parse_hex_payload};
use qr_payload::{Payload, Segment, dump_bits};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode one hex-encoded payload into segments
    Decode {
        #[arg(long)]
        hex: String,
        #[arg(long, env = "QR_SYMBOL_VERSION")]
        symbol_version: Option<i32>,
        /// Print accumulated display text instead of one line per segment
        #[arg(long)]
        transcript: bool,
    },
    /// Print the raw bits of a hex-encoded payload
    Dump {
        #[arg(long)]
        hex: String,
    },
    /// Decode every .bin/.hex payload under a directory
    DecodeDir {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long, env = "QR_SYMBOL_VERSION")]
        symbol_version: Option<i32>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Decode {
            hex,
            symbol_version,
            transcript,
        } => decode_cmd(&hex, symbol_version, transcript),
        Command::Dump { hex } => dump_cmd(&hex),
        Command::DecodeDir {
            root,
            symbol_version,
            limit,
        } => decode_dir_cmd(root, symbol_version, limit),
    }
}

fn decode_cmd(hex: &str, symbol_version: Option<i32>, transcript: bool) -> ExitCode {
    let bytes = match parse_hex_payload(hex) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let payload = Payload::new(bytes, symbol_version.unwrap_or_else(default_symbol_version));

    if transcript {
        print!("{}", payload.transcript());
    } else {
        for line in payload.decode() {
            println!("{}", line);
        }
    }

    if payload.failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn dump_cmd(hex: &str) -> ExitCode {
    match parse_hex_payload(hex) {
        Ok(bytes) => {
            println!("{}", dump_bits(&bytes));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn decode_dir_cmd(
    root: Option<PathBuf>,
    symbol_version: Option<i32>,
    limit: Option<usize>,
) -> ExitCode {
    let root = root.unwrap_or_else(payload_root_from_env);
    let limit = limit.or_else(bench_limit_from_env);
    let symbol_version = symbol_version.unwrap_or_else(default_symbol_version);

    let paths: Vec<PathBuf> = dataset_iter(&root, limit).collect();
    if paths.is_empty() {
        eprintln!("No payload files found under {}", root.display());
        return ExitCode::FAILURE;
    }

    let start = Instant::now();
    let entries = decode_dataset(&paths, symbol_version);
    let elapsed = start.elapsed();

    let mut decoded = 0usize;
    for entry in &entries {
        match &entry.result {
            Ok(segments) => {
                let text: Vec<String> = segments
                    .iter()
                    .filter(|s| matches!(s, Segment::ByteText(_)))
                    .filter_map(Segment::render)
                    .collect();
                let status = if !entry.decoded() {
                    "failed"
                } else if segments.last().is_some_and(Segment::is_final) {
                    "ok"
                } else {
                    "ok, no terminator"
                };
                println!(
                    "{}: {} ({} segments) {:?}",
                    entry.path.display(),
                    status,
                    segments.len(),
                    text
                );
            }
            Err(err) => println!("{}: error: {}", entry.path.display(), err),
        }
        if entry.decoded() {
            decoded += 1;
        }
    }

    println!(
        "\nDecoded {}/{} payloads in {:.2?} (symbol version {})",
        decoded,
        entries.len(),
        elapsed,
        symbol_version
    );
    ExitCode::SUCCESS
}
