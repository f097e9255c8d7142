mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vital",
    version,
    about = "Wellness scoring tool for self-reported lifestyle habits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer file and render the comparative report
    Score {
        /// Path to JSON answers (marker id -> value, values as quoted decimals)
        answers_file: PathBuf,

        /// Region preset: global, europe, north_america
        #[arg(short, long, default_value = vital_core::catalog::builtin::DEFAULT_REGION)]
        region: String,

        /// Age bracket: 18-29, 30-39, 40-49, 50-59, 60-69, 70+
        #[arg(short, long, default_value = "30-39")]
        age: String,

        /// Gender: female, male, other
        #[arg(short, long, default_value = "other")]
        gender: String,

        /// Custom marker catalog JSON file (default: built-in catalog)
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Number of recommendations to show
        #[arg(short, long, default_value_t = vital_core::recommend::DEFAULT_LIMIT)]
        limit: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show every breakdown row, not just penalized markers
        #[arg(long)]
        show_all: bool,

        /// Show marker descriptions and citations
        #[arg(long)]
        verbose: bool,
    },
    /// Show resolved group baselines for a demographic selection
    Baseline {
        /// Region preset: global, europe, north_america
        #[arg(short, long, default_value = vital_core::catalog::builtin::DEFAULT_REGION)]
        region: String,

        /// Age bracket: 18-29, 30-39, 40-49, 50-59, 60-69, 70+
        #[arg(short, long, default_value = "30-39")]
        age: String,

        /// Gender: female, male, other
        #[arg(short, long, default_value = "other")]
        gender: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the marker catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List the built-in markers
    List,
    /// Explain markers, bands and penalties in plain language
    Explain,
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            answers_file,
            region,
            age,
            gender,
            catalog,
            limit,
            output,
            show_all,
            verbose,
        } => commands::score::run(
            answers_file,
            &region,
            &age,
            &gender,
            catalog,
            limit,
            &output,
            show_all,
            verbose,
        ),
        Commands::Baseline {
            region,
            age,
            gender,
            output,
        } => commands::baseline::run(&region, &age, &gender, &output),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain => commands::catalog::explain(),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
