//! axt-request CLI - inspect AXT request descriptors without sending them

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use axt_sdk::catalogue::{self, DynamicRequest};
use axt_sdk::{AxtError, ClientConfig, FixSuggestion, ParamKind};

#[derive(Parser)]
#[command(name = "axt-request")]
#[command(about = "Inspect AXT request descriptors")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Query,
}

#[derive(Subcommand)]
enum Commands {
    /// List every action with its parameters
    List {
        /// Only show actions of this API version (e.g. 2017-07-31)
        #[arg(long)]
        api_version: Option<String>,
    },

    /// Build a request and print it
    Show {
        /// Action name (e.g. DescribeTask)
        action: String,

        /// Pin the API version
        #[arg(long)]
        api_version: Option<String>,

        /// Parameter as KEY=VALUE (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Path to a YAML client config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the region id
        #[arg(short, long)]
        region: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { api_version } => list_actions(api_version.as_deref()),
        Commands::Show {
            action,
            api_version,
            params,
            format,
            config,
            region,
        } => show_request(&action, api_version.as_deref(), &params, format, config, region),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn list_actions(version: Option<&str>) -> Result<(), AxtError> {
    if let Some(version) = version {
        if !catalogue::versions().contains(&version) {
            return Err(AxtError::UnknownApiVersion {
                version: version.to_string(),
                available: catalogue::versions().join(", "),
            });
        }
    }

    for info in catalogue::ACTIONS
        .iter()
        .filter(|info| version.map_or(true, |v| info.version == v))
    {
        println!("{} {}", info.action.cyan().bold(), format!("({})", info.version).dimmed());
        for param in info.params {
            let kind = match param.kind {
                ParamKind::Integer => param.kind.to_string().yellow(),
                ParamKind::String => param.kind.to_string().normal(),
            };
            println!("  {} {}", param.name, kind);
        }
    }

    Ok(())
}

fn show_request(
    action: &str,
    version: Option<&str>,
    params: &[String],
    format: OutputFormat,
    config_path: Option<PathBuf>,
    region: Option<String>,
) -> Result<(), AxtError> {
    let mut request = DynamicRequest::for_action(action, version)?;
    for pair in params {
        request.set_pair(pair)?;
    }

    let mut config = match config_path {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    }
    .with_env();
    if let Some(region) = region {
        config.region_id = region;
    }
    let call = request.to_call().with_format(config.format);

    match format {
        OutputFormat::Query => println!("{}", call.query_string()),
        OutputFormat::Json => {
            config.validate()?;

            let output = serde_json::json!({
                "endpoint": config.endpoint(),
                "call": call,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
