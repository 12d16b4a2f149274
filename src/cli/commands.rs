use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::render::{render_summary, render_table};
use crate::models::{Day, QuerySpec, SortDirection, SortField, Venue};
use crate::parsers::load_payload;
use crate::query::run_query;
use crate::roster::{build_roster, day_label};
use crate::utils::{format_path_with_tilde, resolve_results_path, sanitize_cell};

#[derive(Parser)]
#[command(name = "roster-view")]
#[command(version = "0.1.0")]
#[command(about = "Search and sort scraped venue shift rosters", long_about = None)]
pub struct Cli {
    /// Saved scrape results (default: $ROSTER_RESULTS, then ./latest_results.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub results: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one venue's roster, filtered and sorted
    Show {
        /// Venue key: no5, ginza or ginza479
        #[arg(long)]
        venue: Venue,

        /// today or tomorrow
        #[arg(long, default_value = "today")]
        day: Day,

        /// Keep entries whose code, name, start or finish contains this text
        #[arg(long, default_value = "")]
        filter: String,

        /// code, name, start, finish or original
        #[arg(long, default_value = "original")]
        sort: SortField,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        direction: SortDirection,

        /// Print the records and counts as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show entry counts per venue
    Stats,
}

/// Initialize tracing on stderr; `RUST_LOG` overrides the `-v` level
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "roster_view=warn",
        1 => "roster_view=debug",
        _ => "roster_view=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).with_writer(std::io::stderr).init();
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Show { venue, day, filter, sort, direction, json }) => {
            let spec = QuerySpec::new(filter.as_str()).sorted_by(*sort, *direction);
            show_roster(&cli, *venue, *day, &spec, *json)?;
        }
        Some(Commands::Stats) => {
            show_stats(&cli)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_roster(cli: &Cli, venue: Venue, day: Day, spec: &QuerySpec, json: bool) -> Result<()> {
    let results_path = resolve_results_path(cli.results.as_deref())?;
    let payload = load_payload(&results_path)?;

    let records = build_roster(&payload, venue, day);
    let view = run_query(&records, spec);

    if json {
        let out = serde_json::to_string_pretty(&view).context("Failed to serialize roster")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}: {}", venue.label(), day_label(day, payload.last_updated()));
    println!();
    print!("{}", render_table(&view.records));
    println!();
    println!("{}", render_summary(&view));

    Ok(())
}

fn show_stats(cli: &Cli) -> Result<()> {
    let results_path = resolve_results_path(cli.results.as_deref())?;
    let payload = load_payload(&results_path)?;

    println!("Roster Statistics");
    println!("=================");
    for venue in Venue::ALL {
        match payload.venue(venue) {
            Some(data) => {
                let today = data.entries(Day::Today).len();
                let tomorrow = data.entries(Day::Tomorrow).len();
                let title =
                    data.title().map(|t| format!(" \"{}\"", sanitize_cell(t))).unwrap_or_default();
                println!(
                    "{} ({}){}: {} today, {} tomorrow",
                    venue.label(),
                    venue.key(),
                    title,
                    today,
                    tomorrow
                );
            }
            None => println!("{} ({}): not available", venue.label(), venue.key()),
        }
    }
    println!();

    match payload.last_updated() {
        Some(ts) => println!("Last updated: {}", ts.format("%Y-%m-%d %H:%M:%S")),
        None => println!("Last updated: unknown"),
    }
    println!("Results file: {}", format_path_with_tilde(&results_path));

    Ok(())
}
