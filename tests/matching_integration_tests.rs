//! End-to-end behaviour of the matching pipeline through the public API.

use dupe_names::io::{parse_names, render_report};
use dupe_names::matching::{
    MatchSettings, Normalizer, PairMatcher, has_fundamental_conflict, similarity,
};
use dupe_names::pipeline;
use tempfile::tempdir;

fn settings(threshold: f64) -> MatchSettings {
    MatchSettings {
        threshold,
        ..MatchSettings::default()
    }
}

#[test]
fn test_acme_scenario() {
    let names = ["Acme Inc", "ACME INC", "Acme Co", "Acme 1", "Acme 2"];
    let matches = PairMatcher::new(settings(0.99)).find_matches(&names);

    let has_pair = |a: &str, b: &str| matches.iter().any(|m| m.first == a && m.second == b);

    assert!(has_pair("Acme Inc", "ACME INC"));
    assert!(has_pair("Acme Inc", "Acme Co"));
    assert!(!has_pair("Acme 1", "Acme 2"));
    assert!(matches.iter().all(|m| m.score == 1.0));
}

#[test]
fn test_each_position_pair_reported_at_most_once() {
    let names = ["Globex", "Globex Corp", "GLOBEX", "Globex, Inc."];
    let matches = PairMatcher::new(settings(0.99)).find_matches(&names);

    // four names, all the same key, all different text: every pair matches once
    assert_eq!(matches.len(), 6);
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            let count = matches
                .iter()
                .filter(|m| &m.first == a && &m.second == b)
                .count();
            assert_eq!(count, 1, "{a} / {b}");
            assert!(!matches.iter().any(|m| &m.first == b && &m.second == a));
        }
    }
}

#[test]
fn test_output_properties_hold_on_mixed_list() {
    let input = "\
Northwind Traders
Northwind Traders Inc
northwind traders, llc
Northwind Trading Co
Contoso Ltd
Contoso Limited
Fabrikam 2
Fabrikam 3
Fabrikam 3 Inc
Woodgrove Bank
Woodgrove Bank
Wide World Importers
";
    let names = parse_names(input);
    let threshold = 0.9;
    let matcher = PairMatcher::new(settings(threshold));
    let normalizer = Normalizer::default();
    let matches = matcher.find_matches(&names);

    assert!(!matches.is_empty());
    for m in &matches {
        assert_ne!(m.first, m.second);
        assert!((0.0..=1.0).contains(&m.score));
        assert!(m.score >= threshold);
        assert_eq!(
            m.score,
            similarity(&normalizer.normalize(&m.first), &normalizer.normalize(&m.second))
        );
        assert!(!has_fundamental_conflict(
            &m.first.to_lowercase(),
            &m.second.to_lowercase()
        ));
    }
    assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));

    assert!(!matches.iter().any(|m| m.first == "Fabrikam 2"));
    assert!(!matches.iter().any(|m| m.first == "Woodgrove Bank" && m.second == "Woodgrove Bank"));
}

#[test]
fn test_custom_suffixes_change_matching() {
    let names = ["Muster GmbH", "Muster AG"];

    let default_matches = PairMatcher::new(settings(0.99)).find_matches(&names);
    assert!(default_matches.is_empty());

    let german = PairMatcher::new(MatchSettings {
        threshold: 0.99,
        suffixes: vec!["gmbh".to_string(), "ag".to_string()],
        parallel: false,
    });
    assert_eq!(german.find_matches(&names).len(), 1);
}

#[tokio::test]
async fn test_pipeline_run_writes_expected_report() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("companies.txt");
    let output = temp_dir.path().join("duplicates.txt");
    tokio::fs::write(&input, "Acme Inc\n\nACME INC\n  Acme 1 \nAcme 2\n")
        .await
        .unwrap();

    let outcome = pipeline::run(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        MatchSettings::default(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.stats.pairs, 6);
    assert_eq!(outcome.stats.skipped_conflict, 5);

    let report = tokio::fs::read_to_string(&output).await.unwrap();
    assert_eq!(report, "Similarity 1.00:\nAcme Inc\nACME INC\n\n");
    assert_eq!(report, render_report(&outcome.matches));
}

#[tokio::test]
async fn test_pipeline_run_empty_input() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("empty.txt");
    let output = temp_dir.path().join("report.txt");
    tokio::fs::write(&input, "\n\n   \n").await.unwrap();

    let outcome = pipeline::run(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        MatchSettings::default(),
    )
    .await
    .unwrap();

    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.stats.pairs, 0);
    assert_eq!(tokio::fs::read_to_string(&output).await.unwrap(), "");
}

#[tokio::test]
async fn test_pipeline_run_unwritable_output() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("names.txt");
    let output = temp_dir.path().join("missing_dir").join("report.txt");
    tokio::fs::write(&input, "Acme\nAcme Inc\n").await.unwrap();

    let result = pipeline::run(
        &input.to_string_lossy(),
        &output.to_string_lossy(),
        MatchSettings::default(),
    )
    .await;

    let error = result.unwrap_err();
    assert!(matches!(error, dupe_names::AppError::ReportWrite { .. }));
    assert!(error.is_io_boundary());
}

#[tokio::test]
async fn test_pipeline_run_report_to_stdout() {
    let temp_dir = tempdir().unwrap();
    let input = temp_dir.path().join("names.txt");
    tokio::fs::write(&input, "Acme Inc\rAcme Co\rAcme 2\r").await.unwrap();

    let outcome = pipeline::run(&input.to_string_lossy(), "-", MatchSettings::default())
        .await
        .unwrap();

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].first, "Acme Inc");
    assert_eq!(outcome.matches[0].second, "Acme Co");
    assert!(!std::path::Path::new("-").exists());
}
