use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use diet_insights_rs::cli::{Cli, Command};
use diet_insights_rs::error::{InsightsError, Result};
use diet_insights_rs::generate_insights;
use diet_insights_rs::interface::{
    display_classification, display_diet_list, display_insights, prompt_select_diet,
    prompt_yes_no, resolve_diet,
};
use diet_insights_rs::models::Diet;
use diet_insights_rs::state::{load_diets, save_insights, write_food_report, DietStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diet_insights_rs={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Analyze { diet, json, out } => {
            cmd_analyze(&cli.file, diet.as_deref(), json, out.as_deref())
        }
        Command::Classify { names } => {
            display_classification(&names);
            Ok(())
        }
        Command::Report { diet, csv } => cmd_report(&cli.file, &diet, &csv),
        Command::List { client } => cmd_list(&cli.file, client.as_deref()),
    }
}

/// Load the diets file into a store.
fn open_store(file_path: &Path) -> Result<DietStore> {
    if !file_path.exists() {
        return Err(InsightsError::InvalidInput(format!(
            "diets file not found: {}",
            file_path.display()
        )));
    }

    // Load diets (duplicate ids resolved by the store)
    let store = DietStore::new(load_diets(file_path)?);
    info!(path = %file_path.display(), diets = store.len(), "loaded diets");

    if store.is_empty() {
        return Err(InsightsError::NoDiets);
    }
    Ok(store)
}

/// Pick the diet to work on: by id when given, otherwise interactively.
fn pick_diet<'a>(store: &'a DietStore, id: Option<&str>) -> Result<&'a Diet> {
    match id {
        Some(id) => match resolve_diet(store, id)? {
            Some(diet) => Ok(diet),
            None => {
                warn!(diet_id = id, "diet not found");
                Err(InsightsError::DietNotFound(id.to_string()))
            }
        },
        None => prompt_select_diet(&store.all_diets()),
    }
}

/// Compute and show insights for one diet.
fn cmd_analyze(file_path: &Path, id: Option<&str>, json: bool, out: Option<&Path>) -> Result<()> {
    // Load diets and resolve the target
    let store = open_store(file_path)?;
    let diet = pick_diet(&store, id)?;

    // Compute insights
    let insights = generate_insights(diet);
    info!(
        diet_id = %insights.diet_id,
        overall_score = insights.overall_score,
        "insights generated"
    );

    // Display results
    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        display_insights(&insights);
    }

    // Save if requested
    if let Some(out) = out {
        if out.exists() && !prompt_yes_no(&format!("Overwrite {}?", out.display()), false)? {
            println!("Insights not saved.");
            return Ok(());
        }
        save_insights(out, &insights)?;
        println!("Insights saved to {}.", out.display());
    }

    Ok(())
}

/// Write the per-food classification CSV.
fn cmd_report(file_path: &Path, id: &str, csv_path: &Path) -> Result<()> {
    let store = open_store(file_path)?;
    let diet = pick_diet(&store, Some(id))?;

    // One row per classified food
    write_food_report(csv_path, diet)?;
    println!("Food report written to {}.", csv_path.display());
    Ok(())
}

/// List diets, optionally for one client.
fn cmd_list(file_path: &Path, client: Option<&str>) -> Result<()> {
    let store = open_store(file_path)?;

    match client {
        Some(client_id) => {
            let diets = store.diets_for_client(client_id);
            display_diet_list(&diets, &format!("Diets for client {}", client_id));
        }
        None => display_diet_list(&store.all_diets(), "Diets"),
    }

    Ok(())
}
