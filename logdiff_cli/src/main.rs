mod discover;
mod error;
mod fanout;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use logdiff_core::{DiffEngine, LineNormalizer};
use tracing_subscriber::EnvFilter;

use discover::discover_pairs;
use error::CliError;
use fanout::{HostOutcome, run_fanout};
use render::{render_json, render_markdown};

#[derive(Debug, Parser)]
#[command(name = "logdiff")]
#[command(about = "Diff pre-check/post-check network device logs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Ignore-pattern regex, may be repeated. Defaults to the engine's
    /// built-in volatile-field patterns (timestamps, uptime, temperature).
    #[arg(long, global = true)]
    ignore_pattern: Vec<String>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Diff a single pre-check/post-check log pair.
    Pair { pre: PathBuf, post: PathBuf },
    /// Discover every `<ipv4>_preCheck.log` / `<ipv4>_postCheck.log` pair in
    /// a directory and diff each one.
    Scan { dir: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let patterns = if cli.ignore_pattern.is_empty() {
        LineNormalizer::default_patterns()
    } else {
        cli.ignore_pattern
    };
    let engine = DiffEngine::new(&patterns)?;

    match cli.command {
        Command::Pair { pre, post } => run_pair(&engine, &pre, &post, cli.format),
        Command::Scan { dir } => run_scan(&engine, &dir, cli.format),
    }
}

fn run_pair(engine: &DiffEngine, pre_path: &PathBuf, post_path: &PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let pre = read_lines(pre_path)?;
    let post = read_lines(post_path)?;
    let result = engine.diff(&pre, &post);

    match format {
        OutputFormat::Markdown => {
            println!(
                "{}",
                render_markdown(&result, &pre_path.display().to_string(), &post_path.display().to_string())
            );
        }
        OutputFormat::Json => println!("{}", render_json(&result)?),
    }

    if result.is_different {
        std::process::exit(1);
    }
    Ok(())
}

fn run_scan(engine: &DiffEngine, dir: &PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let pairs = discover_pairs(dir).map_err(|source| CliError::Io { path: dir.clone(), source })?;
    let reports = run_fanout(&pairs, engine);

    let mut any_different = false;
    for report in &reports {
        match &report.outcome {
            HostOutcome::Diffed(result) => {
                if result.is_different {
                    any_different = true;
                }
                match format {
                    OutputFormat::Markdown => {
                        println!("{}", render_markdown(result, &format!("{}_preCheck.log", report.ip), &format!("{}_postCheck.log", report.ip)));
                    }
                    OutputFormat::Json => println!("{}", render_json(result)?),
                }
            }
            HostOutcome::Missing => {
                any_different = true;
                println!("## {} — missing\n", report.ip);
            }
            HostOutcome::Unreadable => {
                any_different = true;
                println!("## {} — unreadable\n", report.ip);
            }
        }
    }

    if any_different {
        std::process::exit(1);
    }
    Ok(())
}

fn read_lines(path: &std::path::Path) -> Result<Vec<String>, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    Ok(text.lines().map(str::to_string).collect())
}
