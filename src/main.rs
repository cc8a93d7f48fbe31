use std::path::PathBuf;

use clap::{Parser, Subcommand};

use code_sensei::{
    analyzer::Analyzer,
    commands,
    config::Config,
    error::Result,
    logging,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a code file for DSA patterns and complexity
    Analyze {
        /// Path of the file to analyze
        filepath: PathBuf,

        /// Additionally request a natural-language explanation
        #[arg(short, long)]
        detailed: bool,
    },
    /// Paste code on stdin for analysis
    Interactive,
    /// Run the analysis against built-in sample code
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(if cli.verbose { "debug" } else { "warn" })?;

    let config = Config::load();
    let analyzer = Analyzer::from_config(&config)?;

    match cli.command {
        Commands::Analyze { filepath, detailed } => {
            commands::analyze_file(&analyzer, &filepath, detailed).await
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            commands::run_interactive(&analyzer, stdin.lock()).await
        }
        Commands::Demo => commands::run_demo(&analyzer).await,
    }
}
