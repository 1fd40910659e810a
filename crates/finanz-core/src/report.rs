//! Monthly report assembly
//!
//! The Monatsbericht is a plain-text document in the product language
//! (German). It is assembled purely from already-computed values: no
//! timestamps, no I/O, no ordering surprises, so identical inputs produce
//! byte-identical text.

use crate::models::{CategorySpending, FitnessSummary, SavingsPlan, SavingsSuggestion, StepRating};

/// Subject line used when the report is emailed
pub const REPORT_SUBJECT: &str = "Monatsbericht Finanzassistent";

/// Assemble the monthly report text.
///
/// The plan is validated at construction, so the monthly rate is always a
/// finished number here. Spending and suggestions are rendered in the order
/// they arrive, which the aggregator fixed to first-seen category order.
pub fn build_report(
    plan: &SavingsPlan,
    spending: &[CategorySpending],
    suggestions: &[SavingsSuggestion],
    fitness: &FitnessSummary,
) -> String {
    let mut report = String::new();

    report.push_str("Monatsbericht\n");
    report.push_str("=============\n\n");

    report.push_str(&format!("Sparziel: {:.2} Euro\n", plan.goal));
    report.push_str(&format!("Zeitraum: {} Monate\n", plan.horizon_months));
    report.push_str(&format!(
        "Monatliche Sparrate: {:.2} Euro\n",
        plan.monthly_rate
    ));

    report.push_str("\nAusgaben pro Kategorie:\n");
    for entry in spending {
        report.push_str(&format!("- {}: {:.2} Euro\n", entry.category, entry.total));
    }

    report.push_str("\nEmpfehlungen zur Einsparung basierend auf deinen Präferenzen:\n");
    for suggestion in suggestions {
        report.push_str(&format!(
            "- {}: Reduziere auf {:.2} Euro ({}% Einsparung)\n",
            suggestion.category, suggestion.suggested, suggestion.discount_percent
        ));
    }

    report.push_str("\nEmpfehlungen basierend auf deinen Fitness-Daten:\n");
    match fitness.rating {
        StepRating::BelowTarget => report.push_str(&format!(
            "- Deine durchschnittliche Schrittzahl ist {:.0}, versuche mehr zu gehen, \
             um Gesundheit und eventuell Kosten zu sparen.\n",
            fitness.average_steps
        )),
        StepRating::OnTarget => report.push_str(&format!(
            "- Deine durchschnittliche Schrittzahl ist {:.0}, weiter so!\n",
            fitness.average_steps
        )),
    }

    report.push_str("- Sportaktivitäten, die du kostengünstig gestalten kannst:\n");
    for activity in &fitness.activities {
        report.push_str(&format!("  * {}\n", activity));
    }

    report
}
