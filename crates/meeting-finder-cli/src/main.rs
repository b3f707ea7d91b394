//! `meetq` CLI — find free meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout, JSON array of ranges)
//! meetq find < day.json
//!
//! # From file to file
//! meetq find -i day.json -o slots.json
//!
//! # Report whether optional attendees had to be dropped
//! meetq find -i day.json --explain
//!
//! # Human-readable clock times
//! meetq find -i day.json --format text
//!
//! # Check a document without running the query
//! meetq validate -i day.json
//! ```
//!
//! Input documents hold `events` and a `request`; see `meeting_finder::input`.
//! Set `RUST_LOG=meeting_finder=debug` to see how each query was resolved.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveTime;
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::{QueryInput, Resolution, TimeRange, MINUTES_PER_DAY};
use std::io::{self, Read};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every free slot that fits the request
    Find {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Include which attendee phase produced the slots
        #[arg(long)]
        explain: bool,
    },
    /// Parse and validate an input document
    Validate {
        /// Input JSON document (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// JSON array of `{start, end, duration}` objects
    Json,
    /// One `HH:MM-HH:MM (N min)` line per slot
    Text,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            explain,
        } => {
            let query = read_query(input.as_deref())?;
            let resolution = query.resolve();
            tracing::info!(
                phase = ?resolution.phase,
                slots = resolution.slots.len(),
                "query resolved"
            );

            let rendered = match format {
                Format::Json => render_json(&resolution, explain)?,
                Format::Text => render_text(&resolution, explain)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Validate { input } => {
            let query = read_query(input.as_deref())?;
            println!(
                "ok: {} events, duration {} min",
                query.events.len(),
                query.request.duration
            );
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable. Verbosity comes from `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=warn,meeting_finder=warn", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_query(path: Option<&str>) -> Result<QueryInput> {
    let json = read_input(path)?;
    QueryInput::from_json(&json).context("Invalid query document")
}

fn render_json(resolution: &Resolution, explain: bool) -> Result<String> {
    let json = if explain {
        serde_json::to_string_pretty(resolution)?
    } else {
        serde_json::to_string_pretty(&resolution.slots)?
    };
    Ok(json + "\n")
}

fn render_text(resolution: &Resolution, explain: bool) -> Result<String> {
    let mut out = String::new();
    if explain {
        let phase = serde_json::to_value(resolution.phase)?;
        out.push_str(&format!("phase: {}\n", phase.as_str().unwrap_or_default()));
    }
    if resolution.slots.is_empty() {
        out.push_str("none\n");
    }
    for slot in &resolution.slots {
        out.push_str(&format_slot(slot)?);
        out.push('\n');
    }
    Ok(out)
}

/// `HH:MM-HH:MM (N min)`. The end of the day prints as `24:00`.
fn format_slot(slot: &TimeRange) -> Result<String> {
    Ok(format!(
        "{}-{} ({} min)",
        clock(slot.start())?,
        clock(slot.end())?,
        slot.duration()
    ))
}

fn clock(minute: i32) -> Result<String> {
    if minute == MINUTES_PER_DAY {
        return Ok("24:00".to_string());
    }
    let seconds = u32::try_from(minute * 60)
        .with_context(|| format!("Minute offset out of range: {}", minute))?;
    NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .map(|time| time.format("%H:%M").to_string())
        .ok_or_else(|| anyhow!("Minute offset out of range: {}", minute))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
