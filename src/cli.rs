//! Debug driver for the Atom scanner extension.
//!
//! Grammar work needs a way to watch the hand-written rules in isolation:
//! `atom-scan` positions a cursor in a source file, runs a single scan with
//! a chosen valid-symbols set, and reports what the host parser would have
//! been handed.
//!
//! ## Design
//!
//! Scanning functions return `Result` instead of calling `process::exit`;
//! only the top-level [`run`] prints errors and decides the exit code.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use crate::scanner::{Scanner, SourceCursor, TokenKind, ValidSymbols};

/// Errors surfaced to the shell by the debug driver.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("offset {0} is past the end of the input or not on a character boundary")]
    BadOffset(usize),
}

/// Outcome of a recognized scan: the kind and the committed span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
    pub lexeme: String,
}

/// Run one external-scanner decision the way the host parser would.
#[derive(Parser, Debug)]
#[command(name = "atom-scan", version)]
#[command(about = "Run one scan of Atom's hand-written scanner rules", long_about = None)]
pub struct Cli {
    /// Source file to scan, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Token kinds the simulated parser accepts, comma-separated
    /// (default: all four)
    #[arg(long, value_name = "KINDS", value_delimiter = ',')]
    pub tokens: Vec<TokenKind>,

    /// Byte offset to position the cursor at
    #[arg(long, default_value_t = 0)]
    pub offset: usize,
}

/// Parse arguments, run the scan, print the outcome, and pick the exit
/// code: 0 on recognition, 1 on decline or error.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    match scan_once(&cli) {
        Ok(Some(report)) => {
            println!(
                "{}@{}..{} {:?}",
                report.kind, report.start, report.end, report.lexeme
            );
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("no external token recognized");
            ExitCode::FAILURE
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Run a single scan over the input named by the CLI arguments.
pub fn scan_once(cli: &Cli) -> Result<Option<ScanReport>, CliError> {
    let source = read_source(&cli.file)?;
    let valid = if cli.tokens.is_empty() {
        ValidSymbols::all()
    } else {
        cli.tokens.iter().copied().collect()
    };

    let mut cursor =
        SourceCursor::starting_at(&source, cli.offset).ok_or(CliError::BadOffset(cli.offset))?;

    tracing::debug!(file = %cli.file.display(), offset = cli.offset, ?valid, "scanning");

    let token = Scanner::new().scan(&mut cursor, valid);
    Ok(token.map(|kind| {
        let end = cursor.marked_end();
        ScanReport {
            kind,
            start: cli.offset,
            end,
            lexeme: source[cli.offset..end].to_string(),
        }
    }))
}

fn read_source(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(CliError::Stdin)?;
        Ok(source)
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
