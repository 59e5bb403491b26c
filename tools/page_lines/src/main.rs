//! Show one window of a text file, paged with a selection cursor.
//!
//! Usage:
//!   page_lines notes.txt --height 5 --moves page-down,next
//!   seq 1 50 | page_lines --style bottom --pre-select 20 --moves pgup
//!   page_lines notes.txt --config pager.toml --verbose

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libpager_core::{DisplayStyle, Motion, Pager, PagerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "page_lines")]
#[command(about = "Print the window of lines a paging cursor would display")]
struct Args {
    /// Input file (defaults to stdin)
    input: Option<PathBuf>,

    /// Number of lines per window
    #[arg(short = 'H', long, default_value_t = 10)]
    height: usize,

    /// Display style: fixed-page, top-anchored or bottom-anchored
    #[arg(short, long)]
    style: Option<DisplayStyle>,

    /// Index selected before any moves are applied
    #[arg(short, long)]
    pre_select: Option<usize>,

    /// TOML file with `style` and `pre_select`; flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated motions: next, prev, page-down, page-up
    #[arg(short, long, value_delimiter = ',')]
    moves: Vec<Motion>,

    /// Report on stderr whether each motion moved the selection
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let content = read_input(&args)?;
    let lines: Vec<&str> = content.lines().collect();
    tracing::debug!(lines = lines.len(), "read input");

    let config = build_config(&args)?;
    let mut pager = Pager::with_config(args.height, lines.len(), config)
        .with_context(|| format!("cannot page {} lines", lines.len()))?;

    for motion in &args.moves {
        let changed = pager.apply(*motion);
        if args.verbose {
            eprintln!("{}: {}", motion, if changed { "moved" } else { "unchanged" });
        }
    }

    for line in render(&lines, &pager) {
        println!("{}", line);
    }
    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read stdin")?;
            Ok(content)
        }
    }
}

fn build_config(args: &Args) -> Result<PagerConfig> {
    let mut config = match &args.config {
        Some(path) => PagerConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PagerConfig::default(),
    };

    if let Some(style) = args.style {
        config = config.style(style);
    }
    if let Some(index) = args.pre_select {
        config = config.pre_select(index);
    }
    Ok(config)
}

/// Format the visible window, marking the selected line with `> `.
fn render(lines: &[&str], pager: &Pager) -> Vec<String> {
    let Some(window) = pager.window() else {
        return Vec::new();
    };

    window
        .slice(lines)
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let prefix = if i == window.selected { "> " } else { "  " };
            format!("{}{}", prefix, line)
        })
        .collect()
}
