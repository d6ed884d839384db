//! life-inventory: a guided self-reflection questionnaire for the terminal.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use life_inventory::{
    AppConfig, ConfigOverrides, InventoryError, Questionnaire, QuestionnaireController, StepKind,
    Validatable,
    config::{self, TuiPreferences},
    model::followup_key,
    tui::{self, App, Theme},
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "life-inventory")]
#[command(version)]
#[command(about = "Guided self-reflection questionnaire (人生の棚卸し)", long_about = None)]
#[command(after_help = "KEYS:
    Tab / Shift+Tab   move focus
    PgDn / PgUp       next / previous step
    F1                help
    Esc               quit (answers are kept in memory only)

EXAMPLES:
    # Walk through the built-in inventory
    life-inventory

    # Use your own questions
    life-inventory run --steps my-steps.yaml

    # Check a definition file without starting the TUI
    life-inventory steps --steps my-steps.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `run` subcommand
#[derive(Args, Default)]
struct RunArgs {
    /// Questionnaire definition (YAML or JSON); built-in steps when omitted
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Color theme: dark, light or high-contrast
    #[arg(long)]
    theme: Option<String>,

    /// Event poll interval in milliseconds
    #[arg(long)]
    tick_rate: Option<u64>,
}

/// Arguments for the `steps` subcommand
#[derive(Args)]
struct StepsArgs {
    /// Questionnaire definition (YAML or JSON); built-in steps when omitted
    #[arg(long)]
    steps: Option<PathBuf>,

    /// Print the validated definition as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the questionnaire (default)
    Run(RunArgs),

    /// Validate a definition and print its outline
    Steps(StepsArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .life-inventory.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        None => run(cli.config.as_deref(), RunArgs::default()),
        Some(Commands::Run(args)) => run(cli.config.as_deref(), args),
        Some(Commands::Steps(args)) => print_steps(cli.config.as_deref(), &args),

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "life-inventory", &mut io::stdout());
            Ok(())
        }

        Some(Commands::ConfigSchema { output }) => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
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
                eprintln!("Config file search paths (in order):");
                for dir in config::config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                if let Some(prefs) = TuiPreferences::config_path() {
                    eprintln!("Preferences file: {}", prefs.display());
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".life-inventory.yaml");
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
                Ok(())
            }
        },
    }
}

/// Set up the tracing subscriber.
///
/// The TUI owns stdout, so logs go to `log_file` when given and otherwise to
/// stderr.
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let file_layer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = log_file.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
    Ok(())
}

/// Load the questionnaire from an explicit path, or the built-in steps.
fn load_questionnaire(path: Option<&Path>) -> Result<Questionnaire> {
    match path {
        Some(path) => Questionnaire::from_path(path)
            .with_context(|| format!("failed to load questionnaire from {}", path.display())),
        None => Ok(Questionnaire::builtin()),
    }
}

fn run(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let overrides = ConfigOverrides {
        definition: args.steps,
        theme: args.theme,
        tick_rate_ms: args.tick_rate,
        show_progress: None,
    };

    // Bad values given on the command line are fatal; bad values in a
    // config file only warn.
    let cli_errors = overrides.validate();
    if !cli_errors.is_empty() {
        let message = cli_errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(InventoryError::config(message).into());
    }

    let (config, loaded_from) = AppConfig::from_file_with_overrides(config_path, &overrides);
    if let Some(path) = &loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Config: {}", error);
    }

    let questionnaire = load_questionnaire(config.questionnaire.definition.as_deref())?;

    // An explicit --theme wins over the remembered preference.
    let theme_name = if overrides.theme.is_some() {
        config.tui.theme.clone()
    } else if TuiPreferences::config_path().is_some_and(|p| p.exists()) {
        TuiPreferences::load().theme
    } else {
        config.tui.theme.clone()
    };
    tui::set_theme(Theme::from_name(&theme_name));

    let tick_rate = config.tui.tick_rate_ms.clamp(
        *config::TICK_RATE_RANGE_MS.start(),
        *config::TICK_RATE_RANGE_MS.end(),
    );

    let mut app = App::new(QuestionnaireController::new(questionnaire));
    app.show_progress = config.tui.show_progress;
    tui::run_tui(&mut app, tick_rate).context("terminal UI failed")?;
    Ok(())
}

fn print_steps(config_path: Option<&Path>, args: &StepsArgs) -> Result<()> {
    let definition = match &args.steps {
        Some(path) => Some(path.clone()),
        None => config::load_or_default(config_path).0.questionnaire.definition,
    };
    let questionnaire = load_questionnaire(definition.as_deref())?;

    if args.json {
        let json = serde_json::to_string_pretty(&questionnaire)
            .context("failed to serialize questionnaire")?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", questionnaire.labels().title);
    for (i, step) in questionnaire.steps().iter().enumerate() {
        println!(
            "{:>2}. [{}] {} ({})",
            i + 1,
            step.kind_name(),
            step.section,
            step.key
        );
        match &step.kind {
            StepKind::Select { options } => {
                println!("      options: {}", options.join(", "));
            }
            StepKind::TextArea {
                sub_question: Some(_),
            } => {
                println!("      followup: {}", followup_key(&step.key));
            }
            StepKind::TextArea { sub_question: None } => {}
            StepKind::Multipart { parts } => {
                for part in parts {
                    println!("      - {} ({})", part.label, part.key);
                }
            }
        }
    }
    eprintln!(
        "{} steps, {} answer keys",
        questionnaire.len(),
        questionnaire.answer_keys().len()
    );
    Ok(())
}
