//! Expense aggregation and savings recommendations

use std::collections::HashMap;

use tracing::debug;

use crate::models::{CategorySpending, Preferences, SavingsSuggestion, Transaction};

/// Sum absolute outflows per category.
///
/// Only negative amounts count as expenses; deposits and zero amounts are
/// ignored entirely (the assistant does not track income). Categories keep
/// the order of their first expense in the input, and the recommendation and
/// report stages reuse that order.
pub fn spend_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut spending: Vec<CategorySpending> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        if tx.amount >= 0.0 {
            continue;
        }
        match index.get(tx.category.as_str()) {
            Some(&i) => spending[i].total += tx.amount.abs(),
            None => {
                index.insert(tx.category.clone(), spending.len());
                spending.push(CategorySpending {
                    category: tx.category.clone(),
                    total: tx.amount.abs(),
                });
            }
        }
    }

    debug!(categories = spending.len(), "aggregated expenses");
    spending
}

/// Derive a reduced-spend suggestion for every category.
///
/// The discount rate is keyed by the user's priority for the category;
/// categories without a configured priority count as niedrig. Output order
/// matches the aggregator's.
pub fn recommend_savings(
    spending: &[CategorySpending],
    preferences: &Preferences,
) -> Vec<SavingsSuggestion> {
    spending
        .iter()
        .map(|entry| {
            let priority = preferences.priority_for(&entry.category);
            let discount = priority.discount();
            SavingsSuggestion {
                category: entry.category.clone(),
                current: entry.total,
                suggested: entry.total * (1.0 - discount),
                discount_percent: priority.discount_percent(),
                priority,
            }
        })
        .collect()
}
