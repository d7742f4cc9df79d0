use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ehr_core::constants::{MAX_LENGTH_ENV_VAR, SEPARATOR_ENV_VAR};
use ehr_core::{CharColumn, FieldConfig, FieldValue, IntegerList, Scalar};

#[derive(Parser)]
#[command(name = "ehr-fields")]
#[command(about = "Encode and decode delimited integer list fields")]
struct Cli {
    /// YAML file with `separator` and `max_length` options
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Separator override (takes precedence over file and environment)
    #[arg(long, global = true)]
    separator: Option<String>,
    /// Column width override (takes precedence over file and environment)
    #[arg(long, global = true)]
    max_length: Option<String>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode integers into the stored column text
    Encode {
        /// Integers to encode, in order
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
        /// Store a pre-formatted delimited string as is
        #[arg(long, conflicts_with = "values")]
        text: Option<String>,
    },
    /// Decode stored column text into integers
    Decode {
        /// Stored text; omit to decode a null column
        raw: Option<String>,
    },
    /// Show the resolved column definition
    Describe,
}

#[derive(Serialize)]
struct Description {
    db_type: String,
    separator: String,
    max_length: usize,
    options: std::collections::BTreeMap<&'static str, String>,
}

/// Entry point for the `ehr-fields` command line tool.
///
/// # Environment Variables
/// - `EHR_FIELD_SEPARATOR`: separator used when no `--separator` flag is given
/// - `EHR_FIELD_MAX_LENGTH`: column width used when no `--max-length` flag is given
/// - `RUST_LOG`: log filter (logs go to stderr)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ehr_fields=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(
        &cli,
        std::env::var(SEPARATOR_ENV_VAR).ok(),
        std::env::var(MAX_LENGTH_ENV_VAR).ok(),
    )?;
    tracing::debug!(
        separator = config.separator().as_str(),
        max_length = config.max_length().get(),
        "resolved field config"
    );

    let output = run(&cli, CharColumn::new(config))?;
    println!("{output}");

    Ok(())
}

/// Layers the config file, environment values and command line flags, in that order.
fn resolve_config(
    cli: &Cli,
    env_separator: Option<String>,
    env_max_length: Option<String>,
) -> anyhow::Result<FieldConfig> {
    let base = match &cli.config {
        Some(path) => {
            tracing::info!("++ Loading field config from {}", path.display());
            FieldConfig::load_yaml(path)?
        }
        None => FieldConfig::default(),
    };

    let config = base
        .with_overrides(env_separator, env_max_length)?
        .with_overrides(cli.separator.clone(), cli.max_length.clone())?;
    Ok(config)
}

fn field_value(values: &[String], text: Option<&str>) -> FieldValue {
    if let Some(text) = text {
        return FieldValue::from(text);
    }
    if values.is_empty() {
        return FieldValue::Empty;
    }
    FieldValue::Sequence(values.iter().map(|v| Scalar::from(v.as_str())).collect())
}

fn run(cli: &Cli, column: CharColumn) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Encode { values, text } => {
            let encoded = column.prep_value(&field_value(values, text.as_deref()))?;
            if cli.json {
                Ok(serde_json::to_string(&encoded)?)
            } else {
                Ok(encoded)
            }
        }
        Commands::Decode { raw } => {
            let decoded: IntegerList = column.from_db_value(raw.as_deref())?;
            if cli.json {
                Ok(serde_json::to_string(&decoded)?)
            } else {
                Ok(decoded.to_string())
            }
        }
        Commands::Describe => {
            let description = Description {
                db_type: column.db_type(),
                separator: column.config().separator().to_string(),
                max_length: column.config().max_length().get(),
                options: column.deconstruct(),
            };
            if cli.json {
                Ok(serde_json::to_string_pretty(&description)?)
            } else {
                Ok(format!(
                    "db_type: {}\nseparator: {:?}\nmax_length: {}",
                    description.db_type, description.separator, description.max_length
                ))
            }
        }
    }
}
