//! seo-compliance: deterministic SEO compliance checks for articles
//!
//! Scores content, checks keyword density, heading structure and E-E-A-T
//! signals, and balances internal-link anchor text.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use seo_compliance::{
    cli::{self, AnchorNextConfig, AuditConfig, EeatOverrides, OutputOptions, ScoreConfig},
    config::{self, EngineConfig, LocalePreset, Validatable},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with locale and format info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nLocales:",
        "\n  fr (default), en",
        "\n\nOutput Formats:",
        "\n  summary, json, sarif"
    )
}

#[derive(Parser)]
#[command(name = "seo-compliance")]
#[command(version, long_version = build_long_version())]
#[command(about = "Deterministic SEO compliance engine", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All checks passed
    1  Score below --min-score / non-compliant distribution / invalid hierarchy
    3  Error occurred

EXAMPLES:
    # Score every article and fail CI below 70
    seo-compliance score articles/*.html --min-score 70 -o sarif -O seo.sarif

    # Full audit with related terms and the current anchor distribution
    seo-compliance audit article.json --related batterie,autonomie --distribution exact=12,partial=20

    # Pick the anchor text for the next internal link
    seo-compliance anchor next --keyword \"vélo électrique\" --platform Cyclo --distribution links.yaml")]
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

    /// Locale preset overriding the config file tables (fr, en)
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<LocalePreset>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_locale(value: &str) -> Result<LocalePreset, String> {
    LocalePreset::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = LocalePreset::all().iter().map(LocalePreset::name).collect();
        format!("unknown locale '{value}', expected one of: {}", names.join(", "))
    })
}

/// Output flags shared by every reporting command
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

impl OutputArgs {
    fn options(self, cli_no_color: bool, quiet: bool) -> OutputOptions {
        OutputOptions {
            format: self.output,
            file: self.output_file,
            no_color: cli_no_color,
            quiet,
        }
    }
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Documents to score (HTML, or JSON/YAML content documents)
    #[arg(required = true)]
    documents: Vec<PathBuf>,

    /// Keyword override applied to every document
    #[arg(short, long)]
    keyword: Option<String>,

    /// Exit with code 1 when any total score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `audit` subcommand
#[derive(Parser)]
struct AuditArgs {
    /// Document to audit
    document: PathBuf,

    /// Current anchor distribution: inline `exact=15,partial=10` or a JSON/YAML file
    #[arg(short, long)]
    distribution: Option<String>,

    /// Related terms to check coverage for (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    related: Vec<String>,

    /// Keyword override
    #[arg(short, long)]
    keyword: Option<String>,

    /// Exit with code 1 when the total score is below this value
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    min_score: Option<u32>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one or more documents (parallel)
    Score(ScoreArgs),

    /// Run every check on one document
    Audit(AuditArgs),

    /// Keyword density and presence in the introduction
    Density {
        document: PathBuf,
        /// Keyword to measure (defaults to the document keyword)
        #[arg(short, long)]
        keyword: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Heading hierarchy check
    Headers {
        document: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Inject a featured-snippet block for a question and print the HTML
    Snippet {
        document: PathBuf,
        /// Reader question the snippet answers
        #[arg(long)]
        question: String,
        /// Keyword shown in the block (defaults to the document keyword)
        #[arg(short, long)]
        keyword: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// E-E-A-T signal check
    Eeat {
        document: PathBuf,
        /// Author byline override
        #[arg(long)]
        author: Option<String>,
        /// Last update override (RFC 3339)
        #[arg(long)]
        updated_at: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Anchor-text balancing
    Anchor {
        #[command(subcommand)]
        action: AnchorAction,
    },

    /// Show, discover, validate or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum AnchorAction {
    /// Choose the anchor text for the next internal link
    Next {
        #[arg(short, long)]
        keyword: String,
        /// Platform (brand) name used by branded templates
        #[arg(short, long)]
        platform: String,
        /// Current distribution: inline `exact=15,partial=10` or a JSON/YAML file
        #[arg(short, long)]
        distribution: Option<String>,
        /// Link target substituted into naked-URL anchors
        #[arg(long)]
        url: Option<String>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a distribution against the targets
    Validate {
        /// Inline `exact=15,partial=10` or a JSON/YAML file
        #[arg(short, long)]
        distribution: String,
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
    /// Validate the effective configuration
    Validate,
    /// Generate an example .seo-compliance.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
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

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let (engine, loaded_from) =
        EngineConfig::from_file_with_locale(cli.config.as_deref(), cli.locale);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using configuration from {}", path.display());
    }
    let (no_color, quiet) = (cli.no_color, cli.quiet);

    // Dispatch to command handlers
    match cli.command {
        Commands::Score(args) => cli::run_score(
            &engine,
            ScoreConfig {
                paths: args.documents,
                keyword: args.keyword,
                min_score: args.min_score,
                output: args.output.options(no_color, quiet),
            },
        ),

        Commands::Audit(args) => cli::run_audit(
            &engine,
            AuditConfig {
                path: args.document,
                distribution: args.distribution,
                related: args.related,
                keyword: args.keyword,
                min_score: args.min_score,
                output: args.output.options(no_color, quiet),
            },
        ),

        Commands::Density {
            document,
            keyword,
            output,
        } => cli::run_density(
            &engine,
            &document,
            keyword.as_deref(),
            &output.options(no_color, quiet),
        ),

        Commands::Headers { document, output } => {
            cli::run_headers(&engine, &document, &output.options(no_color, quiet))
        }

        Commands::Snippet {
            document,
            question,
            keyword,
            output,
        } => cli::run_snippet(
            &engine,
            &document,
            &question,
            keyword.as_deref(),
            &output.options(no_color, quiet),
        ),

        Commands::Eeat {
            document,
            author,
            updated_at,
            output,
        } => cli::run_eeat(
            &engine,
            &document,
            &EeatOverrides { author, updated_at },
            &output.options(no_color, quiet),
        ),

        Commands::Anchor { action } => match action {
            AnchorAction::Next {
                keyword,
                platform,
                distribution,
                url,
                seed,
                output,
            } => cli::run_anchor_next(
                &engine,
                AnchorNextConfig {
                    keyword,
                    platform,
                    distribution,
                    url,
                    seed,
                    output: output.options(no_color, quiet),
                },
            ),
            AnchorAction::Validate {
                distribution,
                output,
            } => cli::run_anchor_validate(&engine, &distribution, &output.options(no_color, quiet)),
        },

        Commands::Config { action } => run_config(action, cli.config.as_deref(), engine, loaded_from),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "seo-compliance", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config(
    action: ConfigAction,
    explicit: Option<&Path>,
    engine: EngineConfig,
    loaded_from: Option<PathBuf>,
) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&engine).context("failed to serialize config")?;
            print!("{yaml}");
            Ok(exit_codes::SUCCESS)
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                ::dirs::config_dir().map(|p| p.join("seo-compliance").display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order, git root after cwd):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
            Ok(exit_codes::SUCCESS)
        }
        ConfigAction::Validate => {
            let errors = engine.validate();
            if errors.is_empty() {
                eprintln!("Configuration is valid.");
                return Ok(exit_codes::SUCCESS);
            }
            eprintln!("Configuration has {} problem(s):", errors.len());
            for error in &errors {
                eprintln!("  {error}");
            }
            Ok(exit_codes::THRESHOLD_FAILED)
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".seo-compliance.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
            Ok(exit_codes::SUCCESS)
        }
        ConfigAction::Schema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}
