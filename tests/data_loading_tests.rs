use std::fs;
use std::path::PathBuf;

use narrative_rs::NarrativeError;
use narrative_rs::api::{NarrativeConfig, NarrativeEngine};
use narrative_rs::core::{PolicyCard, ScrollMetrics, YearRecord, YearSeries, policy_badge_label};
use narrative_rs::render::NullRenderer;

const RECORDS_JSON: &str = r#"[
    { "year": 2014, "deaths": 7, "injured": 612, "source": "stat.fi" },
    { "year": 2015, "deaths": 4, "injured": 590 },
    { "year": 2016, "deaths": 9, "injured": 575 }
]"#;

fn build_engine() -> NarrativeEngine<NullRenderer> {
    NarrativeEngine::new(NullRenderer::default(), NarrativeConfig::default()).expect("engine init")
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("narrative_rs_{}_{name}", std::process::id()));
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn records_json_ignores_unknown_fields() {
    let series = YearSeries::from_json_str(RECORDS_JSON).expect("valid records");
    assert_eq!(series.len(), 3);
    assert_eq!(series.record_for_year(2015), Some(&YearRecord::new(2015, 4, 590)));
}

#[test]
fn negative_counts_are_malformed() {
    let err = YearSeries::from_json_str(r#"[{ "year": 2014, "deaths": -1, "injured": 3 }]"#)
        .expect_err("negative deaths must be rejected");
    assert!(matches!(err, NarrativeError::InvalidData(_)));
}

#[test]
fn malformed_records_degrade_to_empty_sequence() {
    let mut engine = build_engine();
    engine.mount(ScrollMetrics::at_top(800.0, 4_000.0));

    assert_eq!(engine.load_records_json("{ not json"), 0);
    assert!(engine.records().is_empty());
    assert_eq!(engine.active_year(), None);
    assert!(engine.hud_readout().is_blank());
    assert!(engine.render().is_ok());
}

#[test]
fn failed_reload_keeps_previous_sequence() {
    let mut engine = build_engine();
    assert_eq!(engine.load_records_json(RECORDS_JSON), 3);
    assert_eq!(engine.load_records_json("[{\"year\": \"x\"}]"), 3);
    assert_eq!(engine.active_year(), Some(2014));
}

#[test]
fn missing_records_file_is_logged_not_fatal() {
    let mut engine = build_engine();
    let missing = std::env::temp_dir().join("narrative_rs_definitely_missing_records.json");
    assert_eq!(engine.load_records_file(&missing), 0);
    assert_eq!(engine.active_year(), None);
}

#[test]
fn records_file_loads_and_sets_first_year() {
    let path = temp_file("records.json", RECORDS_JSON);
    let mut engine = build_engine();
    assert_eq!(engine.load_records_file(&path), 3);
    assert_eq!(engine.active_year(), Some(2014));
    let _ = fs::remove_file(path);
}

#[test]
fn unordered_input_is_canonicalized() {
    let mut engine = build_engine();
    engine.set_records(vec![
        YearRecord::new(2020, 1, 300),
        YearRecord::new(2018, 2, 350),
        YearRecord::new(2020, 0, 290),
    ]);
    let years: Vec<i32> = engine.records().years().collect();
    assert_eq!(years, vec![2018, 2020]);
    assert_eq!(engine.records().record_for_year(2020).map(|r| r.deaths), Some(0));
}

#[test]
fn policy_cards_load_best_effort() {
    let mut engine = build_engine();
    let json = r#"[
        { "title": "30 km/h zones", "summary": "Lower limits downtown.", "image": "zones.jpg", "source": "https://hel.fi" },
        { "title": "Speed cameras", "summary": "Fixed cameras on arterials.", "image": "cams.jpg", "source": "https://hel.fi/cams" }
    ]"#;
    assert_eq!(engine.load_policies_json(json), 2);
    assert_eq!(engine.policies()[1].title, "Speed cameras");
    assert_eq!(policy_badge_label(1), "02");

    assert_eq!(engine.load_policies_json("[{\"title\": 3}]"), 2);
    assert!(PolicyCard::list_from_json_str("nope").is_err());
}

#[test]
fn missing_policies_file_leaves_empty_list() {
    let mut engine = build_engine();
    let missing = std::env::temp_dir().join("narrative_rs_definitely_missing_policies.json");
    assert_eq!(engine.load_policies_file(missing), 0);
    assert!(engine.policies().is_empty());
}
