//! Stepshadow CLI
//!
//! Prints stepped `box-shadow` values for the unhovered, hovered and active
//! states, ready to paste into a stylesheet.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use stepshadow_css::render_report;

/// Stepped pixel box-shadow generator for CSS
#[derive(Parser, Debug)]
#[command(name = "stepshadow")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"OUTPUT:
    One block per state: a label line, then the box-shadow value.

    Unhovered (6px):
    1px 1px 0 var(--dark), 2px 2px 0 var(--dark), ...
")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(render_report().as_bytes())
        .context("failed to write shadow report to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}

fn print_error(err: &anyhow::Error) {
    eprintln!(
        "{} {err}",
        "error:".if_supports_color(Stream::Stderr, |text| text.red())
    );
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
