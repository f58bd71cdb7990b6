//! chainhash: recompute and check trust chain section hashes.
#![allow(clippy::multiple_crate_versions)]

use chainhash::config::Config;
use chainhash::formats::markdown::MarkdownFormat;
use chainhash::report::{self, SectionSummary, VerificationReport};
use chainhash::verify::{verify_with, Status};
use chainhash::{input, locate};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "chainhash", version)]
#[command(about = "Calculate SHA3 hash for trust chain sections", long_about = None)]
struct Args {
    /// Trust chain ID (e.g. tc-1) or path to a chain document
    #[arg(value_name = "CHAIN")]
    chain: String,

    /// Link ID within the trust chain (e.g. 0.1, Purpose)
    #[arg(value_name = "SECTION", required_unless_present = "list")]
    section: Option<String>,

    /// List the sections of the chain instead of verifying one
    #[arg(long)]
    list: bool,

    /// Directory holding chain documents
    #[arg(long, short = 'd', value_name = "DIR")]
    dir: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Config file to load instead of ./chainhash.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Characters of hashed content to preview
    #[arg(long, value_name = "N")]
    preview: Option<usize>,

    /// Only treat headings numbered 0 to 12 as section boundaries
    #[arg(long)]
    legacy_numbering: bool,

    /// Hash without the newline after the parent hash line, as first-generation chains were
    #[arg(long)]
    legacy_join: bool,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Exit with status 2 when the recorded hash does not match
    #[arg(long)]
    check: bool,

    /// Log debug output to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            let message = format!("{e:#}");
            match report::error_json(&message) {
                Ok(json) if args.json => println!("{json}"),
                _ => eprintln!("Error: {message}"),
            }
            ExitCode::FAILURE
        }
    }
}

/// Override config with command line args.
fn apply_overrides(cfg: &mut Config, args: &Args) {
    if let Some(dir) = &args.dir {
        cfg.chains_dir = dir.to_string_lossy().into_owned();
    }
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }
    if let Some(preview) = args.preview {
        cfg.preview_chars = preview;
    }
    if args.legacy_numbering {
        cfg.legacy_numbering = true;
    }
    if args.legacy_join {
        cfg.legacy_join = true;
    }
}

/// Status 2 flags a mismatch only when `--check` asked for it.
fn exit_code(status: Status, check: bool) -> ExitCode {
    match status {
        Status::Mismatch if check => ExitCode::from(2),
        Status::Match | Status::Mismatch | Status::NoRecordedHash => ExitCode::SUCCESS,
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let mut cfg = Config::load(args.config.as_deref())?;
    apply_overrides(&mut cfg, args);

    let path = input::resolve_document(
        &args.chain,
        Path::new(&cfg.chains_dir),
        &cfg.file_extensions,
    )?;
    let format = MarkdownFormat::new(cfg.numbering());
    let sections = input::load_sections(&path, &format)?;

    let Some(requested) = args.section.as_deref().filter(|_| !args.list) else {
        let rows: Vec<SectionSummary> = sections.iter().map(SectionSummary::from).collect();
        if args.json {
            println!("{}", report::to_json(&rows)?);
        } else {
            for row in &rows {
                println!("{row}");
            }
        }
        return Ok(ExitCode::SUCCESS);
    };

    let section = locate::require(&sections, &args.chain, requested)?;

    let verification = verify_with(section, cfg.join());
    let report = VerificationReport {
        chain: &args.chain,
        verification: &verification,
        preview_chars: cfg.preview_chars,
    };
    if args.json {
        println!("{}", report::to_json(&report)?);
    } else {
        println!("{report}");
    }

    Ok(exit_code(verification.status, args.check))
}
