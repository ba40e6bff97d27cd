use std::fs;
use std::io::Write as _;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use zpl_composer_core::{emit, to_pretty_json, tokenize_bytes, wrap_if_needed};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "zplc",
    version,
    about = "zpl-composer — tokenize, verify, and wrap ZPL II label code"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Tokenize a ZPL file and print its token sequence as JSON.
    Tokens { file: String },

    /// Verify that tokenize → emit reproduces the file byte-for-byte.
    /// Exits 1 on the first divergence. For CI.
    Roundtrip { file: String },

    /// Enclose a ZPL fragment in ^XA/^XZ unless it already is, and write
    /// the result to stdout.
    Wrap { file: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Tokens { file } => cmd_tokens(&file)?,
        Cmd::Roundtrip { file } => cmd_roundtrip(&file)?,
        Cmd::Wrap { file } => cmd_wrap(&file)?,
    }
    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn read_input(file: &str) -> Result<Vec<u8>> {
    fs::read(file).with_context(|| format!("failed to read {file}"))
}

fn cmd_tokens(file: &str) -> Result<()> {
    let input = read_input(file)?;
    let tokens = tokenize_bytes(&input);
    println!("{}", to_pretty_json(&tokens));
    Ok(())
}

fn cmd_roundtrip(file: &str) -> Result<()> {
    let input = read_input(file)?;
    let output = emit(&tokenize_bytes(&input));

    if output == input {
        eprintln!("roundtrip ok ({} bytes)", input.len());
        return Ok(());
    }

    // Diverging output would mean the token pipeline lost or invented
    // bytes; report where so the offending construct is easy to find.
    let at = input
        .iter()
        .zip(&output)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| input.len().min(output.len()));
    eprintln!(
        "roundtrip FAILED at byte {at}: input is {} bytes, output is {} bytes",
        input.len(),
        output.len()
    );
    process::exit(1);
}

fn cmd_wrap(file: &str) -> Result<()> {
    let input = read_input(file)?;
    let wrapped = wrap_if_needed(&tokenize_bytes(&input));
    std::io::stdout()
        .write_all(&emit(&wrapped))
        .context("failed to write to stdout")?;
    Ok(())
}
