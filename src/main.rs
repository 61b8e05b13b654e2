//! coffee-mixer: flavor profile scoring for coffee recipes
//!
//! Scores recipe files against an ingredient catalog and renders the
//! resulting seven-dimensional flavor profile.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use coffee_mixer::{
    cli, config::AppConfig, editor::TastePreference, pipeline::exit_codes, reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nFlavor dimensions:",
        "\n  sweetness, bitterness, acidity, body, aroma, aftertaste, caffeine",
        "\n\nCatalog formats:",
        "\n  JSON, YAML (built-in catalog: 8 categories)",
        "\n\nOutput Formats:",
        "\n  summary, table, json, text"
    )
}

#[derive(Parser)]
#[command(name = "coffee-mixer")]
#[command(version, long_version = build_long_version())]
#[command(about = "Flavor profile scoring for coffee recipes", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Validation failed / unresolved references with --strict
    3  Error occurred

EXAMPLES:
    # Score a recipe
    coffee-mixer profile latte.yaml

    # Explain each category's contribution
    coffee-mixer breakdown latte.yaml -o table

    # Three sweet random recipes as JSON
    coffee-mixer random --taste sweet --count 3 -o json

    # Espresso extraction check
    coffee-mixer brew-math --dose 18 --yield 36 --tds 9.5")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Custom ingredient catalog (.json, .yaml, .yml)
    #[arg(long = "catalog", global = true, env = "COFFEE_MIXER_CATALOG")]
    catalog_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output options shared by reporting subcommands
#[derive(Args)]
struct OutputArgs {
    /// Output format (auto: summary on a terminal, JSON otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `profile` subcommand
#[derive(Parser)]
struct ProfileArgs {
    /// Recipe files (YAML or JSON, `-` for stdin)
    #[arg(required = true)]
    recipes: Vec<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,

    /// Include per-category contributions
    #[arg(long)]
    breakdown: bool,

    /// Exit with code 1 when a recipe references unknown options or brands
    #[arg(long)]
    strict: bool,
}

/// Arguments for the `random` subcommand
#[derive(Parser)]
struct RandomArgs {
    /// Taste direction for option selection
    #[arg(short, long)]
    taste: Option<TastePreference>,

    /// Number of recipes to generate
    #[arg(short = 'n', long, default_value = "1")]
    count: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `brew-math` subcommand
#[derive(Parser)]
struct BrewMathArgs {
    /// Coffee dose in grams
    #[arg(long)]
    dose: f64,

    /// Beverage yield in grams
    #[arg(long = "yield")]
    yield_g: f64,

    /// Total dissolved solids in percent
    #[arg(long)]
    tds: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score recipe files and show their flavor profiles
    Profile(ProfileArgs),

    /// Same as `profile --breakdown`
    Breakdown(ProfileArgs),

    /// Inspect or validate the ingredient catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Generate random recipes
    Random(RandomArgs),

    /// Brew ratio and extraction yield
    BrewMath(BrewMathArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `catalog` command
#[derive(Subcommand)]
enum CatalogAction {
    /// List categories with option counts
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show the options of one category
    Show {
        /// Category key, e.g. `milk`
        category: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a catalog for duplicates and malformed entries
    Validate {
        /// Catalog file (defaults to the configured or built-in catalog)
        path: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .coffee-mixer.yaml in the current directory
    Init,
}

/// Layer global flags and subcommand output options over the config file.
fn effective_config(
    cli: &Cli,
    output: Option<&OutputArgs>,
    overrides: AppConfig,
) -> Result<AppConfig> {
    let mut cli_overrides = AppConfig::builder()
        .catalog_path(cli.catalog_file.clone())
        .no_color(cli.no_color)
        .build();
    if let Some(output) = output {
        cli_overrides.output.format = output.output;
        cli_overrides.output.file.clone_from(&output.output_file);
    }
    cli_overrides.merge(&overrides);
    cli_overrides.behavior.quiet = cli.quiet;

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli_overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config.ensure_valid()?;
    Ok(config)
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_codes::ERROR);
    }
    Ok(())
}

/// Dispatch to command handlers.
fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Profile(args) | Commands::Breakdown(args) => {
            let breakdown = args.breakdown || matches!(cli.command, Commands::Breakdown(_));
            let overrides = AppConfig::builder()
                .show_breakdown(breakdown)
                .strict(args.strict)
                .build();
            let config = effective_config(cli, Some(&args.output), overrides)?;
            exit_with(cli::run_profile(&args.recipes, &config)?)
        }

        Commands::Catalog { action } => {
            let code = match action {
                CatalogAction::List { output } => {
                    let config = effective_config(cli, Some(output), AppConfig::default())?;
                    cli::run_catalog_list(&config)?
                }
                CatalogAction::Show { category, output } => {
                    let config = effective_config(cli, Some(output), AppConfig::default())?;
                    cli::run_catalog_show(category, &config)?
                }
                CatalogAction::Validate { path, output } => {
                    let config = effective_config(cli, Some(output), AppConfig::default())?;
                    cli::run_catalog_validate(path.as_deref(), &config)?
                }
            };
            exit_with(code)
        }

        Commands::Random(args) => {
            let mut builder = AppConfig::builder().seed(args.seed);
            if let Some(taste) = args.taste {
                builder = builder.taste(taste);
            }
            let overrides = builder.build();
            let config = effective_config(cli, Some(&args.output), overrides)?;
            exit_with(cli::run_random(args.count, &config)?)
        }

        Commands::BrewMath(args) => {
            let config = effective_config(cli, Some(&args.output), AppConfig::default())?;
            exit_with(cli::run_brew_math(args.dose, args.yield_g, args.tds, &config)?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "coffee-mixer", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = coffee_mixer::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    coffee_mixer::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                print_search_paths(cli.config.as_deref());
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".coffee-mixer.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = coffee_mixer::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

fn print_search_paths(explicit: Option<&Path>) {
    let search_paths: [Option<String>; 3] = [
        std::env::current_dir()
            .ok()
            .map(|p| p.display().to_string()),
        coffee_mixer::config::user_config_dir().map(|p| p.display().to_string()),
        dirs::home_dir().map(|p| p.display().to_string()),
    ];
    eprintln!("Config file search paths (in order):");
    for path in search_paths.into_iter().flatten() {
        eprintln!("  {path}");
    }
    eprintln!();
    eprintln!("Recognized file names:");
    for name in coffee_mixer::config::file::CONFIG_FILE_NAMES {
        eprintln!("  {name}");
    }
    eprintln!();
    match coffee_mixer::config::discover_config_file(explicit) {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
}
