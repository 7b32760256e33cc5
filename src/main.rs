use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studygen::cli::commands::generate::{GenerateKind, GenerateOptions};

#[derive(Parser)]
#[command(name = "studygen")]
#[command(
    version,
    about = "AI study-aid generator: flashcards, notes, and quizzes from any content"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate up to 10 Q/A flashcards
    Flashcards {
        #[arg(help = "Content to study; omit to read from --input or stdin")]
        content: Option<String>,
        #[arg(long, short, help = "Read content from a file ('-' for stdin)")]
        input: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Generate markdown study notes
    Notes {
        #[arg(help = "Content to study; omit to read from --input or stdin")]
        content: Option<String>,
        #[arg(long, short, help = "Read content from a file ('-' for stdin)")]
        input: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Generate a 5-question multiple-choice quiz
    Quiz {
        #[arg(help = "Content to study; omit to read from --input or stdin")]
        content: Option<String>,
        #[arg(long, short, help = "Read content from a file ('-' for stdin)")]
        input: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Flashcards {
            content,
            input,
            format,
        } => generate(GenerateKind::Flashcards, content, input, format)?,
        Commands::Notes {
            content,
            input,
            format,
        } => generate(GenerateKind::Notes, content, input, format)?,
        Commands::Quiz {
            content,
            input,
            format,
        } => generate(GenerateKind::Quiz, content, input, format)?,
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                studygen::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                studygen::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                studygen::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}

fn generate(
    kind: GenerateKind,
    content: Option<String>,
    input: Option<PathBuf>,
    format: String,
) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(studygen::cli::commands::generate::run(GenerateOptions {
        kind,
        content,
        input,
        format,
    }))?;
    Ok(())
}
