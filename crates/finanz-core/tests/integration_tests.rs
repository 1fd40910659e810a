//! End-to-end tests for the finanz core pipeline
//!
//! Exercises the full flow against real files on disk: load the three data
//! sources, aggregate, recommend, analyze, and assemble the report.

use std::fs;
use std::path::PathBuf;

use finanz_core::{
    analyze_fitness, build_report, load_fitness_or_default, load_preferences_or_default,
    load_transactions_or_default, recommend_savings, spend_by_category, LoadWarning, Priority,
    SavingsPlan, StepRating,
};

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn write_full_fixtures(dir: &tempfile::TempDir) -> (PathBuf, PathBuf, PathBuf) {
    let transactions = write_fixture(
        dir,
        "bankdaten.json",
        r#"[
            {"kategorie": "Miete", "betrag": -800},
            {"kategorie": "Lebensmittel", "betrag": -250.75},
            {"kategorie": "Freizeit", "betrag": -120},
            {"kategorie": "Lebensmittel", "betrag": -49.25},
            {"kategorie": "Lohn", "betrag": 2500}
        ]"#,
    );
    let preferences = write_fixture(
        dir,
        "praeferenzen.json",
        r#"{"Prioritäten": {"Miete": "hoch", "Freizeit": "mittel"}}"#,
    );
    let fitness = write_fixture(
        dir,
        "fitnessdaten.json",
        r#"{"Schritte_pro_Tag": [9000, 7000, 8000], "Sportaktivitäten": ["Joggen", "Schwimmen"]}"#,
    );
    (transactions, preferences, fitness)
}

#[test]
fn full_pipeline_produces_expected_report() {
    let dir = tempfile::tempdir().unwrap();
    let (tx_path, pref_path, fit_path) = write_full_fixtures(&dir);

    let (transactions, w1) = load_transactions_or_default(&tx_path);
    let (preferences, w2) = load_preferences_or_default(&pref_path);
    let (fitness_data, w3) = load_fitness_or_default(&fit_path);
    assert!(w1.is_none() && w2.is_none() && w3.is_none());

    let plan = SavingsPlan::new(1200.0, 12).unwrap();
    let spending = spend_by_category(&transactions);
    let suggestions = recommend_savings(&spending, &preferences);
    let fitness = analyze_fitness(&fitness_data);

    // Aggregation: income ignored, categories in first-seen order
    assert_eq!(spending.len(), 3);
    assert_eq!(spending[0].category, "Miete");
    assert_eq!(spending[0].total, 800.0);
    assert_eq!(spending[1].category, "Lebensmittel");
    assert!((spending[1].total - 300.0).abs() < 1e-9);
    assert_eq!(spending[2].category, "Freizeit");

    // Recommendations follow the configured priorities
    assert_eq!(suggestions[0].priority, Priority::Hoch);
    assert_eq!(suggestions[0].suggested, 400.0);
    assert_eq!(suggestions[2].priority, Priority::Mittel);

    // Fitness: (9000 + 7000 + 8000) / 3 = 8000, on target
    assert_eq!(fitness.average_steps, 8000.0);
    assert_eq!(fitness.rating, StepRating::OnTarget);

    let report = build_report(&plan, &spending, &suggestions, &fitness);
    let expected = "\
Monatsbericht
=============

Sparziel: 1200.00 Euro
Zeitraum: 12 Monate
Monatliche Sparrate: 100.00 Euro

Ausgaben pro Kategorie:
- Miete: 800.00 Euro
- Lebensmittel: 300.00 Euro
- Freizeit: 120.00 Euro

Empfehlungen zur Einsparung basierend auf deinen Präferenzen:
- Miete: Reduziere auf 400.00 Euro (50% Einsparung)
- Lebensmittel: Reduziere auf 270.00 Euro (10% Einsparung)
- Freizeit: Reduziere auf 84.00 Euro (30% Einsparung)

Empfehlungen basierend auf deinen Fitness-Daten:
- Deine durchschnittliche Schrittzahl ist 8000, weiter so!
- Sportaktivitäten, die du kostengünstig gestalten kannst:
  * Joggen
  * Schwimmen
";
    assert_eq!(report, expected);

    // Determinism: a second assembly is byte-identical
    let again = build_report(&plan, &spending, &suggestions, &fitness);
    assert_eq!(report, again);
}

#[test]
fn degraded_sources_still_produce_a_report() {
    let dir = tempfile::tempdir().unwrap();
    // Transactions file missing, preferences malformed, fitness fine
    let tx_path = dir.path().join("bankdaten.json");
    let pref_path = write_fixture(&dir, "praeferenzen.json", "{ kaputt");
    let fit_path = write_fixture(
        &dir,
        "fitnessdaten.json",
        r#"{"Schritte_pro_Tag": [5000], "Sportaktivitäten": []}"#,
    );

    let (transactions, w1) = load_transactions_or_default(&tx_path);
    let (preferences, w2) = load_preferences_or_default(&pref_path);
    let (fitness_data, w3) = load_fitness_or_default(&fit_path);

    assert!(matches!(w1, Some(LoadWarning::Missing { .. })));
    assert!(matches!(w2, Some(LoadWarning::Unreadable { .. })));
    assert!(w3.is_none());
    assert!(transactions.is_empty());
    assert!(preferences.priorities.is_empty());

    let plan = SavingsPlan::new(600.0, 6).unwrap();
    let spending = spend_by_category(&transactions);
    let suggestions = recommend_savings(&spending, &preferences);
    let fitness = analyze_fitness(&fitness_data);
    let report = build_report(&plan, &spending, &suggestions, &fitness);

    assert!(report.contains("Monatliche Sparrate: 100.00 Euro"));
    assert!(report.contains("versuche mehr zu gehen"));
}

#[test]
fn malformed_record_degrades_whole_transactions_source() {
    let dir = tempfile::tempdir().unwrap();
    let tx_path = write_fixture(
        &dir,
        "bankdaten.json",
        r#"[{"kategorie": "Miete", "betrag": -800}, {"kategorie": "Strom"}]"#,
    );

    let (transactions, warning) = load_transactions_or_default(&tx_path);
    assert!(transactions.is_empty());
    let warning = warning.unwrap();
    assert!(warning.to_string().contains("record 1"));
}
