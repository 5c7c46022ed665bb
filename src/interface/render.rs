use crate::insights::{classify_food_group, classify_processing_level, cost_component};
use crate::models::{Diet, Insights};

/// Display a full insights report.
pub fn display_insights(insights: &Insights) {
    println!();
    println!("=== Health Insights: {} ===", insights.diet_id);
    println!("Client: {}", insights.client_id);
    println!();
    println!("{}", insights.summary);
    println!();

    let cost = &insights.cost;
    println!("--- Cost ---");
    println!(
        "Per day: {:.2}  Per week: {:.2}  Per month: {:.2}  Per meal: {:.2}",
        cost.cost_per_day, cost.cost_per_week, cost.cost_per_month, cost.cost_per_meal
    );
    let sign = if cost.market_comparison.difference >= 0.0 { "+" } else { "" };
    println!(
        "Market benchmark: {:.2} ({}{:.2}, {}{:.2}%)",
        cost.market_comparison.benchmark,
        sign,
        cost.market_comparison.difference,
        sign,
        cost.market_comparison.percent_difference
    );
    for entry in &cost.by_meal_type {
        println!(
            "  {:<14} {:>8.2} {:>6.2}%",
            entry.meal_type.as_str(),
            entry.cost,
            entry.percentage
        );
    }
    println!("Cost score: {:.0}/100", cost_component(cost.cost_per_day));
    println!();

    let variety = &insights.variety;
    println!("--- Variety ({} unique foods) ---", variety.total_unique_foods);
    for group in &variety.groups {
        let mark = if group.recommended { "ok" } else { "--" };
        println!(
            "  [{}] {:<10} {:>3} {:>6.2}%",
            mark,
            group.group.as_str(),
            group.count,
            group.percentage
        );
    }
    println!("Variety score: {:.2}/100", variety.variety_score);
    println!();

    let processing = &insights.processing;
    println!("--- Processing ---");
    for share in &processing.distribution {
        println!("  {:<22} {:>6.2}%", share.level.as_str(), share.percentage);
    }
    if !processing.ultra_processed_foods.is_empty() {
        let names: Vec<&str> = processing
            .ultra_processed_foods
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        println!("Ultra-processed: {}", names.join(", "));
    }
    println!("Processing score: {:.2}/100", processing.processing_score);
    println!();

    println!("--- Summary ---");
    println!("Overall score: {:.0}/100", insights.overall_score);
    if insights.prioritized_recommendations.is_empty() {
        println!("No recommendations.");
    } else {
        for (i, rec) in insights.prioritized_recommendations.iter().enumerate() {
            println!("{:>2}. {}", i + 1, rec);
        }
    }
    println!("Generated at: {}", insights.generated_at.to_rfc3339());
    println!();
}

/// Column width for a list of names, in characters rather than bytes.
fn name_width(names: &[String]) -> usize {
    names.iter().map(|n| n.chars().count()).max().unwrap_or(10)
}

/// Display the classification of free-text food names.
pub fn display_classification(names: &[String]) {
    let width = name_width(names);
    for name in names {
        println!(
            "{:<width$}  {:<22} {}",
            name,
            classify_processing_level(name).as_str(),
            classify_food_group(name).as_str(),
            width = width
        );
    }
}

/// Display a list of diets.
pub fn display_diet_list(diets: &[&Diet], title: &str) {
    if diets.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} diets) ===", title, diets.len());
    println!();

    for diet in diets {
        println!(
            "  {} - {} (client {}), {} meals, {:.0} kcal",
            diet.id,
            diet.label(),
            diet.client_id,
            diet.meals.len(),
            diet.total_calories()
        );
    }

    println!();
}
