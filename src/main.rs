use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use form_guide::api::state::AppState;
use form_guide::api::{build_router, cors_layer};
use form_guide::config::AppConfig;
use form_guide::models::{Match, Selection};
use form_guide::report::{render_text, Dashboard};
use form_guide::storage::ResultsReader;

#[derive(Parser)]
#[command(name = "form-guide")]
#[command(about = "Football results dashboard: recent form, outcomes and goal difference")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./form-guide.toml")]
    config: PathBuf,

    /// Results CSV path (overrides the config file)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print a team's recent results
    Report {
        /// Team to analyse
        #[arg(long)]
        team: String,

        /// Only include this tournament (repeatable)
        #[arg(long = "tournament")]
        tournaments: Vec<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Number of most recent matches
        #[arg(short = 'n', long)]
        matches: Option<usize>,
    },

    /// List the eligible teams
    Teams,

    /// List the tournaments a team played in
    Tournaments {
        #[arg(long)]
        team: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(data) = cli.data {
        config.dataset.path = data;
    }
    let log_level = cli.log_level.unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting form-guide v{}", env!("CARGO_PKG_VERSION"));

    let pipeline = config.pipeline();

    match cli.command {
        Commands::Serve { host, port } => {
            let dataset = load_dataset(&config)?;
            let state = AppState::new(dataset, pipeline);
            let app = build_router(state).layer(cors_layer(&config.server.cors_origin));

            let addr = format!(
                "{}:{}",
                host.unwrap_or(config.server.host),
                port.unwrap_or(config.server.port)
            );
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Report {
            team,
            tournaments,
            from,
            to,
            matches,
        } => {
            let dataset = load_dataset(&config)?;
            let selection = Selection {
                team,
                tournaments,
                start_date: parse_date_arg(from.as_deref(), "--from")?,
                end_date: parse_date_arg(to.as_deref(), "--to")?,
                limit: matches,
            };
            let filtered = pipeline.run(&dataset, &selection)?;
            print!("{}", render_text(&Dashboard::build(filtered)));
        }
        Commands::Teams => {
            for team in pipeline.roster().teams() {
                println!("{}", team);
            }
        }
        Commands::Tournaments { team } => {
            let dataset = load_dataset(&config)?;
            let filtered = pipeline.run(&dataset, &Selection::for_team(team))?;
            for tournament in &filtered.bounds.tournaments {
                println!("{}", tournament);
            }
        }
    }

    Ok(())
}

fn load_dataset(config: &AppConfig) -> Result<Vec<Match>> {
    let storage = config.storage();
    ResultsReader::from_config(&storage)
        .read_all()
        .with_context(|| format!("Failed to load results from {:?}", storage.results_path))
}

fn parse_date_arg(value: Option<&str>, flag: &str) -> Result<Option<NaiveDate>> {
    value
        .map(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid {} date (expected YYYY-MM-DD): {}", flag, s))
        })
        .transpose()
}
