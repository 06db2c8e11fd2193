//! Stimuli CLI - Deterministic Stimulus Generation for the Investment Study
//!
//! # Commands
//!
//! - `stimuli generate <participant>` - Generate a participant's frames
//! - `stimuli geometry --probs .. --payoffs ..` - Encode one pie chart
//! - `stimuli check` - Validate configuration
//! - `stimuli catalog` - Print the experiment catalog

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use service_cli::commands;
use service_cli::commands::generate::GenerateArgs;
use service_cli::{OutputFormat, Result, StimuliSettings};

/// Investment study stimulus generator
#[derive(Parser)]
#[command(name = "stimuli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file path
    #[arg(short, long, global = true, default_value = service_cli::config::DEFAULT_SETTINGS_PATH)]
    config: String,

    /// Experiment file (overrides the settings file)
    #[arg(short, long, global = true)]
    experiment: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the frame sequence for a participant
    Generate {
        /// Participant id (integer or text)
        participant: String,

        /// Explicit seed overriding the participant id
        #[arg(short, long)]
        seed: Option<String>,

        /// Show only the frame for this app round
        #[arg(short, long)]
        round: Option<usize>,

        /// Output format (json, csv, table)
        #[arg(short, long)]
        format: Option<String>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode one outcome triple as a pie chart
    Geometry {
        /// Outcome probabilities, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        probs: Vec<f64>,

        /// Outcome payoffs, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        payoffs: Vec<f64>,

        /// Currency symbol for labels
        #[arg(long, default_value = "€")]
        currency: String,

        /// Print slices as JSON instead of SVG
        #[arg(long)]
        json: bool,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check settings and experiment catalog
    Check,

    /// Print the experiment catalog as TOML
    Catalog {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = StimuliSettings::load_or_default(Path::new(&cli.config))?.with_env_override();
    if let Some(experiment) = cli.experiment {
        settings.experiment = Some(experiment);
    }

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output_path = |output: Option<PathBuf>| output.map(|p| settings.output_path(&p));

    match cli.command {
        Commands::Generate {
            participant,
            seed,
            round,
            format,
            output,
        } => {
            let format = match format {
                Some(format) => format.parse::<OutputFormat>()?,
                None => settings.format,
            };
            let experiment = commands::load_experiment(settings.experiment.as_deref())?;
            let args = GenerateArgs {
                participant: &participant,
                seed: seed.as_deref(),
                round,
                round_offset: settings.round_offset,
                format,
            };
            commands::generate::run(&experiment, &args, output_path(output).as_deref())
        }
        Commands::Geometry {
            probs,
            payoffs,
            currency,
            json,
            output,
        } => commands::geometry::run(
            &probs,
            &payoffs,
            &currency,
            json,
            output_path(output).as_deref(),
        ),
        Commands::Check => commands::check::run(&settings),
        Commands::Catalog { output } => commands::catalog::run(
            settings.experiment.as_deref(),
            output_path(output).as_deref(),
        ),
    }
}
