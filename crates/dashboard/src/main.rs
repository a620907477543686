//! fundamenticks CLI - USD macro-economic scoring and seasonality dashboard

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fundamenticks_core::Config;
use fundamenticks_dashboard::report::{EventTable, OverviewReport};
use fundamenticks_dashboard::{Dashboard, Datasets};
use fundamenticks_ingestion::normalize;
use fundamenticks_scoring::score;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "fundamenticks")]
#[command(about = "Score USD macro-economic releases and explore DXY seasonality")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to find configuration and data.
#[derive(Args)]
struct DataArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the data files (overrides configured directories)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl DataArgs {
    fn load(&self) -> anyhow::Result<(Config, Datasets)> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to read config {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        info!("Calendar file: {}", config.data.calendar_path.display());

        let datasets = Datasets::load(&config.data);
        Ok((config, datasets))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize published values ("1,5%", "250K", "n/a", ...)
    Normalize {
        #[arg(value_name = "VALUE", required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Score an actual value against its forecast
    Score {
        #[arg(allow_hyphen_values = true)]
        actual: String,
        #[arg(allow_hyphen_values = true)]
        forecast: String,
    },
    /// Print the USD overview: category tables, total score and outlook
    Overview {
        #[command(flatten)]
        data: DataArgs,

        /// Print the view model as JSON
        #[arg(long)]
        json: bool,
    },
    /// List scored calendar events, newest first
    Calendar {
        #[command(flatten)]
        data: DataArgs,

        /// Only show this category
        #[arg(long, value_name = "NAME")]
        category: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { values } => {
            for raw in values {
                match normalize(&raw) {
                    Some(v) => println!("{raw}\t{v}"),
                    None => println!("{raw}\tunavailable"),
                }
            }
        }
        Commands::Score { actual, forecast } => {
            println!("{}", score(&actual, &forecast).points());
        }
        Commands::Overview { data, json } => {
            let (config, datasets) = data.load()?;
            let view = Dashboard::new(&datasets, &config).usd_overview();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", OverviewReport(&view));
            }
        }
        Commands::Calendar { data, category } => {
            let (config, datasets) = data.load()?;
            let mut events = Dashboard::new(&datasets, &config).scored_events();
            if let Some(name) = &category {
                events.retain(|e| e.event.category.eq_ignore_ascii_case(name));
            }
            info!("{} events", events.len());
            print!("{}", EventTable(&events));
        }
    }

    Ok(())
}
