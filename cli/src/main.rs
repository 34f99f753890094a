// MineZero CLI
// Emissions, carbon-credit and offset calculations for coal mines

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use minezero_cli::commands::{self, calculate::ActivityArgs, export::ExportFormat};
use minezero_cli::config::{Config, OutputFormat};
use minezero_core::environmental::{MineSize, MineType, OffsetMode, Pathway, PathwayRequest};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

fn print_banner() {
    let banner = r#"
    ╔═══════════════════════════════════════════════════╗
    ║                                                   ║
    ║   ⛏  M I N E Z E R O                              ║
    ║      Carbon accounting for coal mines             ║
    ║                                                   ║
    ╚═══════════════════════════════════════════════════╝
    "#;

    println!("{}", banner.bright_green().bold());
    let version = format!(
        "    CLI v{} - emissions, credits and offsets",
        env!("CARGO_PKG_VERSION")
    );
    println!("{}", version.bright_white());
    println!();
}

#[derive(Parser)]
#[command(name = "minezero")]
#[command(about = "Coal-mine emissions & carbon credit calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,

    /// Output format: json, table or text
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[arg(long, global = true)]
    no_banner: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate emissions, credits and offsets for one period
    Calculate(ActivityArgs),

    /// Offset amount a strategy achieves for a total (kg CO₂)
    Offsets {
        #[arg(value_name = "TOTAL_KG")]
        total: f64,

        /// trees, solar or combined
        #[arg(short, long)]
        strategy: Option<OffsetMode>,
    },

    /// Reduction advice based on the emission breakdown
    Recommend(ActivityArgs),

    /// Compare an intensity against the industry benchmark
    Benchmark {
        /// Emission intensity (tCO₂/ton)
        #[arg(value_name = "INTENSITY")]
        intensity: f64,

        /// openCast or underground
        #[arg(short, long)]
        mine_type: Option<MineType>,
    },

    /// Surplus/deficit credit position at a given price
    Credits {
        /// Actual intensity (tCO₂/ton)
        #[arg(long)]
        actual: f64,

        /// Target intensity (tCO₂/ton)
        #[arg(long)]
        target: f64,

        /// Production (tons)
        #[arg(long)]
        production: f64,

        /// Credit price per tonne (defaults to the configured price)
        #[arg(long)]
        price: Option<f64>,
    },

    /// Project a carbon neutrality pathway
    Pathway {
        /// Baseline emissions (tCO₂/year)
        #[arg(long, default_value_t = 1000.0)]
        baseline: f64,

        /// small, medium or large
        #[arg(long, default_value = "medium")]
        size: MineSize,

        /// balanced, tech-focused, nature-based or energy-transition
        #[arg(long, default_value = "balanced")]
        pathway: Pathway,

        #[arg(long, default_value_t = 10)]
        years: u32,

        #[arg(long, default_value_t = 2024)]
        start_year: i32,

        /// List pathways and mine sizes instead of projecting
        #[arg(long)]
        list: bool,
    },

    /// Export a calculation report
    Export {
        #[command(flatten)]
        activity: ActivityArgs,

        #[arg(long, value_enum, default_value = "csv")]
        to: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Reset to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

type LogHandle = reload::Handle<EnvFilter, Registry>;

/// Install the subscriber. The returned handle can raise the level once the
/// config file has been read; `None` when RUST_LOG is in charge.
fn init_logging(debug: bool) -> Option<LogHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let env_controlled = from_env.is_some();
    let default_level = if debug { "debug" } else { "info" };
    let filter = from_env.unwrap_or_else(|| EnvFilter::new(default_level));

    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    (!env_controlled).then_some(handle)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_handle = init_logging(cli.debug);

    // set and reset repair the stored file, so they must not depend on loading it
    let command = match cli.command {
        Commands::Config(ConfigCommands::Set { key, value }) => {
            return commands::config::set(&key, &value)
        }
        Commands::Config(ConfigCommands::Reset { yes }) => return commands::config::reset(yes),
        command => command,
    };

    let mut config = Config::load().context(
        "Invalid configuration. Fix it with `minezero config set` or `minezero config reset`",
    )?;

    // Override with CLI arguments
    if let Some(format) = cli.format {
        match format.parse::<OutputFormat>() {
            Ok(format) => config.output_format = format,
            Err(e) => commands::print_error(&format!("{e}. Using default.")),
        }
    }
    if cli.debug {
        config.debug = true;
    } else if config.debug {
        if let Some(handle) = &log_handle {
            if let Err(e) = handle.reload(EnvFilter::new("debug")) {
                commands::print_warning(&format!("Could not enable debug logging: {e}"));
            }
        }
    }

    if !cli.no_banner && config.output_format == OutputFormat::Table {
        print_banner();
    }

    match command {
        Commands::Calculate(args) => commands::calculate::execute(&args, &config)?,
        Commands::Offsets { total, strategy } => {
            commands::offsets::execute(total, strategy, &config)?
        }
        Commands::Recommend(args) => commands::recommend::execute(&args, &config)?,
        Commands::Benchmark {
            intensity,
            mine_type,
        } => commands::benchmark::execute(intensity, mine_type, &config)?,
        Commands::Credits {
            actual,
            target,
            production,
            price,
        } => commands::credits::execute(actual, target, production, price, &config)?,
        Commands::Pathway {
            baseline,
            size,
            pathway,
            years,
            start_year,
            list,
        } => {
            if list {
                commands::pathway::list();
            } else {
                let request = PathwayRequest {
                    baseline_emissions: baseline,
                    mine_size: size,
                    pathway,
                    years,
                    start_year,
                };
                commands::pathway::execute(&request, &config)?;
            }
        }
        Commands::Export {
            activity,
            to,
            output,
        } => commands::export::execute(&activity, to, output.as_deref(), &config)?,
        Commands::Config(ConfigCommands::Show) => commands::config::show(&config)?,
        Commands::Config(ConfigCommands::Set { key, value }) => {
            commands::config::set(&key, &value)?
        }
        Commands::Config(ConfigCommands::Reset { yes }) => commands::config::reset(yes)?,
    }

    Ok(())
}
