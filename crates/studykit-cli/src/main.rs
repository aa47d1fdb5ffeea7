//! studykit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studykit", version, about = "Quiz and study-plan helper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address (e.g. "127.0.0.1:8080")
        #[arg(long)]
        bind: Option<String>,

        /// Question bank TOML file (built-in bank if omitted)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Directory holding the classifier artifacts
        #[arg(long)]
        models_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print a quiz selection for one subject
    Quiz {
        /// Subject name (e.g. "Math")
        #[arg(long)]
        subject: String,

        /// Difficulty: easy, medium, hard
        #[arg(long, default_value = "easy")]
        difficulty: String,

        /// Include the answer column
        #[arg(long)]
        answers: bool,

        /// Question bank TOML file (built-in bank if omitted)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Directory holding the classifier artifacts
        #[arg(long)]
        models_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Generate a weekly study plan
    Plan {
        /// Comma-separated subjects (e.g. "Math,Python")
        #[arg(long)]
        subjects: String,

        /// Weekly hour budget
        #[arg(long)]
        hours: String,

        /// Scenario label embedded in each line
        #[arg(long, default_value = "general")]
        scenario: String,
    },

    /// Truncate text to a short summary
    Summarize {
        /// Text to summarize; read from stdin when omitted
        text: Option<String>,
    },

    /// Validate a question bank file
    Validate {
        /// Path to the bank TOML file
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config and example bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("studykit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            bind,
            bank,
            models_dir,
            config,
        } => commands::serve::execute(bind, bank, models_dir, config).await,
        Commands::Quiz {
            subject,
            difficulty,
            answers,
            bank,
            models_dir,
            config,
        } => commands::quiz::execute(subject, difficulty, answers, bank, models_dir, config),
        Commands::Plan {
            subjects,
            hours,
            scenario,
        } => commands::plan::execute(subjects, hours, scenario),
        Commands::Summarize { text } => commands::summarize::execute(text),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
