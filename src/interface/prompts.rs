use dialoguer::{Confirm, Select};

use crate::error::{InsightsError, Result};
use crate::models::Diet;
use crate::state::DietStore;

/// Let the user pick one of the loaded diets.
pub fn prompt_select_diet<'a>(diets: &[&'a Diet]) -> Result<&'a Diet> {
    if diets.is_empty() {
        return Err(InsightsError::NoDiets);
    }
    if diets.len() == 1 {
        return Ok(diets[0]);
    }

    let options: Vec<String> = diets
        .iter()
        .map(|d| format!("{} (cliente {})", d.label(), d.client_id))
        .collect();

    let selection = Select::new()
        .with_prompt("Which diet should be analyzed?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(diets[selection])
}

/// Resolve a diet id, offering fuzzy suggestions when it is unknown.
///
/// Returns `None` when nothing matches or the user declines every suggestion.
pub fn resolve_diet<'a>(store: &'a DietStore, id: &str) -> Result<Option<&'a Diet>> {
    if let Some(diet) = store.get_diet(id) {
        return Ok(Some(diet));
    }

    let suggestions = store.suggest_ids(id);
    match suggestions.as_slice() {
        [] => Ok(None),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only))
                .default(true)
                .interact()?;
            Ok(if confirm { store.get_diet(only) } else { None })
        }
        many => {
            let mut options: Vec<String> = many.iter().take(5).cloned().collect();
            let shown = options.len();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            Ok(if selection < shown {
                store.get_diet(&options[selection])
            } else {
                None
            })
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
