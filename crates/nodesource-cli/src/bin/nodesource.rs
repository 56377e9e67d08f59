//! CLI for the nodesource placeholder data source

use clap::Parser;
use nodesource_cli::{ProbeOptions, commands, error::CliError};
use nodesource_core::{Profile, ValueRange};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nodesource")]
#[command(about = "Probe and query nodesource-compatible data sources", long_about = None)]
struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "NODESOURCE_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Check every route of a running data source
    Probe {
        /// Base URL of the data source
        #[arg(long, short, default_value = "http://localhost:8000")]
        url: String,

        /// Route set the source is expected to serve
        #[arg(long, short, default_value = "source", value_parser = parse_profile)]
        profile: Profile,

        /// Token used for inference and truth
        #[arg(long, short, default_value = "ETH")]
        token: String,

        /// Block height used for scoped truth
        #[arg(long, short, default_value = "1")]
        block_height: String,

        /// Inclusive lower bound for sampled values
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        low: f64,

        /// Exclusive upper bound for sampled values
        #[arg(long, default_value = "100.0", allow_hyphen_values = true)]
        high: f64,
    },
    /// Expand an endpoint template and print the response
    Fetch {
        /// URL template, e.g. http://localhost:8000/truth/{Token}/{BlockHeight}
        template: String,

        /// Template parameter as KEY=VALUE (can be specified multiple times)
        #[arg(long = "param", short = 'p', action = clap::ArgAction::Append)]
        params: Vec<String>,

        /// Value for {BlockHeight}
        #[arg(long, short, default_value_t = 0)]
        block_height: i64,

        /// Value for {TopicId}
        #[arg(long, default_value_t = 1)]
        topic_id: u64,
    },
    /// List profiles and the routes they serve
    Profiles,
}

fn parse_profile(name: &str) -> Result<Profile, String> {
    Profile::parse(name).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("nodesource_cli={}", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Probe {
            url,
            profile,
            token,
            block_height,
            low,
            high,
        }) => {
            let options = ProbeOptions {
                profile,
                token,
                block_height,
                range: ValueRange::new(low, high)?,
            };
            commands::run_probe(&url, options).await?;
        }
        Some(Commands::Fetch {
            template,
            params,
            block_height,
            topic_id,
        }) => {
            commands::run_fetch(&template, &params, block_height, topic_id).await?;
        }
        Some(Commands::Profiles) => {
            commands::run_profiles();
        }
        None => {
            println!("nodesource placeholder data source tools");
            println!("Use --help for more information");
        }
    }

    Ok(())
}
