mod commands;
mod render;
mod utils;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use deadlines_core::date::parse_day;
use deadlines_core::deadlines_config::DeadlinesConfig;
use deadlines_core::loader::DataSource;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "deadlines")]
#[command(about = "Show upcoming conference deadlines and render them into a web page")]
struct Cli {
    /// Log what is being loaded and rendered
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the deadlines and details views into an HTML page
    Render {
        /// Dataset path or http(s) URL
        #[arg(short, long)]
        data: Option<String>,

        /// Where to write the page
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Directory with templates overriding the built-in ones
        #[arg(short, long)]
        templates: Option<PathBuf>,

        /// Evaluate deadlines as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,
    },
    /// Print conferences with upcoming deadlines, soonest first
    Upcoming {
        /// Dataset path or http(s) URL
        #[arg(short, long)]
        data: Option<String>,

        /// Evaluate deadlines as of this day (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,
    },
    /// Print every conference with all of its deadlines
    Details {
        /// Dataset path or http(s) URL
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DeadlinesConfig::load()?;

    match cli.command {
        Commands::Render {
            data,
            out,
            templates,
            today,
        } => {
            let source = resolve_source(&config, data.as_deref());
            let out = out.unwrap_or_else(|| config.output_path());
            let templates = templates.or_else(|| config.templates_path());
            let today = resolve_today(today.as_deref())?;
            commands::render::run(source, out, templates, &config.title, today).await
        }
        Commands::Upcoming { data, today } => {
            let source = resolve_source(&config, data.as_deref());
            let today = resolve_today(today.as_deref())?;
            commands::upcoming::run(source, today).await
        }
        Commands::Details { data } => {
            let source = resolve_source(&config, data.as_deref());
            commands::details::run(source).await
        }
        Commands::Config => commands::config::run(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "deadlines=info,deadlines_core=info"
    } else {
        "deadlines=warn,deadlines_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_source(config: &DeadlinesConfig, data: Option<&str>) -> DataSource {
    DataSource::parse(data.unwrap_or(&config.data))
}

/// The day deadlines are evaluated against, local calendar day by default.
fn resolve_today(today: Option<&str>) -> Result<NaiveDate> {
    match today {
        Some(s) => parse_day(s).map_err(|e| anyhow::anyhow!(e)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
