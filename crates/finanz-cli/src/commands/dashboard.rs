//! Dashboard, spending and fitness views
//!
//! The CLI rendition of what the assistant used to show as charts: spend
//! per category with a bar per row, the savings recommendations, and the
//! step counts per day.

use anyhow::Result;
use finanz_core::fitness::{analyze_fitness, DAILY_STEP_TARGET};
use finanz_core::models::{CategorySpending, FitnessSummary, SavingsPlan, SavingsSuggestion, StepRating};
use finanz_core::spending::{recommend_savings, spend_by_category};

use super::{format_bar, truncate, Sources};

const BAR_WIDTH: usize = 24;

pub fn cmd_dashboard(sources: &Sources, plan: &SavingsPlan) -> Result<()> {
    println!();
    println!("📈 Persönlicher Finanzassistent");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Sparziel: {:.2} Euro in {} Monaten",
        plan.goal, plan.horizon_months
    );
    println!("   💰 Monatliche Sparrate: {:.2} Euro", plan.monthly_rate);

    if sources.all_empty() {
        println!();
        println!("   Stelle sicher, dass alle Datenquellen vorhanden sind.");
        return Ok(());
    }

    let spending = spend_by_category(&sources.transactions);
    let suggestions = recommend_savings(&spending, &sources.preferences);
    let fitness = analyze_fitness(&sources.fitness);

    print_spending(&spending);
    print_suggestions(&suggestions);
    print_fitness(&fitness, &sources.fitness.daily_steps);

    Ok(())
}

pub fn cmd_spending(sources: &Sources) -> Result<()> {
    let spending = spend_by_category(&sources.transactions);
    print_spending(&spending);
    Ok(())
}

pub fn cmd_fitness(sources: &Sources) -> Result<()> {
    let fitness = analyze_fitness(&sources.fitness);
    print_fitness(&fitness, &sources.fitness.daily_steps);
    Ok(())
}

fn print_spending(spending: &[CategorySpending]) {
    println!();
    println!("📊 Ausgaben pro Kategorie");
    println!("   ─────────────────────────────────────────────────────────────");

    if spending.is_empty() {
        println!("   Keine Ausgaben gefunden.");
        return;
    }

    let max = spending.iter().map(|e| e.total).fold(0.0_f64, f64::max);
    let total: f64 = spending.iter().map(|e| e.total).sum();

    println!("   {:25} │ {:>10} │", "Kategorie", "Betrag");
    println!("   ──────────────────────────┼────────────┼──────────────────────────");
    for entry in spending {
        println!(
            "   {:25} │ {:>10.2} │ {}",
            truncate(&entry.category, 25),
            entry.total,
            format_bar(entry.total, max, BAR_WIDTH)
        );
    }
    println!("   ──────────────────────────┼────────────┼──────────────────────────");
    println!("   {:25} │ {:>10.2} │", "Gesamt", total);
}

fn print_suggestions(suggestions: &[SavingsSuggestion]) {
    println!();
    println!("💡 Empfehlungen zur Einsparung basierend auf deinen Präferenzen");
    println!("   ─────────────────────────────────────────────────────────────");

    if suggestions.is_empty() {
        println!("   Keine Empfehlungen ohne Ausgaben.");
        return;
    }

    for suggestion in suggestions {
        println!(
            "   - {}: Reduziere auf {:.2} Euro ({}% Einsparung, Priorität {})",
            suggestion.category,
            suggestion.suggested,
            suggestion.discount_percent,
            suggestion.priority
        );
    }
}

fn print_fitness(fitness: &FitnessSummary, daily_steps: &[u64]) {
    println!();
    println!("🏃 Empfehlungen basierend auf deinen Fitness-Daten");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Durchschnittliche Schrittzahl: {:.0} (Ziel: {:.0})",
        fitness.average_steps, DAILY_STEP_TARGET
    );

    match fitness.rating {
        StepRating::BelowTarget => println!(
            "   ⚠️  Versuche mehr zu gehen, um Gesundheit und eventuell Kosten zu sparen."
        ),
        StepRating::OnTarget => println!("   ✅ Weiter so!"),
    }

    if !daily_steps.is_empty() {
        println!();
        println!("   Schritte pro Tag:");
        let max = daily_steps.iter().copied().max().unwrap_or(0) as f64;
        for (i, steps) in daily_steps.iter().enumerate() {
            println!(
                "   Tag {:>2} │ {} │ {:>6}",
                i + 1,
                format_bar(*steps as f64, max, BAR_WIDTH),
                steps
            );
        }
    }

    if !fitness.activities.is_empty() {
        println!();
        println!("   Sportaktivitäten, die du kostengünstig gestalten kannst:");
        for activity in &fitness.activities {
            println!("     * {}", activity);
        }
    }
}
