use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Diet health insights: cost, variety, and processing scores for nutrition plans.
#[derive(Parser, Debug)]
#[command(name = "diet_insights")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the diets JSON file (one diet or a list).
    #[arg(short, long, default_value = "diets.json")]
    pub file: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute health insights for a diet.
    Analyze {
        /// Diet id; prompts for a choice when omitted.
        #[arg(long)]
        diet: Option<String>,

        /// Print the insights as JSON instead of a report.
        #[arg(long)]
        json: bool,

        /// Also save the insights as JSON to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Classify food names by processing level and food group.
    Classify {
        /// Free-text food names.
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Write a per-food classification CSV for a diet.
    Report {
        /// Diet id.
        #[arg(long)]
        diet: String,

        /// Output CSV path.
        #[arg(long, default_value = "food_report.csv")]
        csv: PathBuf,
    },

    /// List the loaded diets.
    List {
        /// Only diets for this client.
        #[arg(long)]
        client: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::List { client: None }
    }
}
