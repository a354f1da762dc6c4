//! Rendering tests for the report viewer derivation and layout rules.

use lumera::config::ViewMode;
use lumera::models::{Product, Report, ScoreInfo, ZylaResult};
use lumera::viewer::render;

fn plain_colors() {
    console::set_colors_enabled(false);
}

fn base_report() -> Report {
    Report {
        id: 42,
        patient_id: 7,
        scan_date: "2024-01-01T10:00:00Z".to_string(),
        dryness: Some(65.0),
        top_issue: Some("Dehydrated skin".to_string()),
        ai_recommendation: None,
        gpt_care_plan: None,
        zyla_result: Some(ZylaResult {
            score_info: ScoreInfo {
                acne_score: Some(30.0),
                ..Default::default()
            },
        }),
        products: vec![serde_json::from_str::<Product>(r#"{"name":"Sunscreen"}"#).unwrap()],
    }
}

#[test]
fn test_detail_renders_worked_scenario() {
    plain_colors();
    let out = render::render_report(&base_report(), ViewMode::Detail);

    assert!(out.contains("Skin Analysis Report"));
    assert!(out.contains("Report ID: 42"));
    assert!(out.contains("Patient ID: 7"));
    assert!(out.contains("Zyla AI Skin Scores (11 Parameters)"));
    assert!(out.contains(" 65 "));
    assert!(out.contains("Acne"));
    assert!(out.contains(" 30 "));
    assert!(out.contains("• Sunscreen"));
    // Acne has a value, the other 10 slots show the sentinel
    assert_eq!(out.matches("N/A").count(), 10);
}

#[test]
fn test_all_eleven_slots_render_with_empty_score_mapping() {
    plain_colors();
    let mut report = base_report();
    report.dryness = None;
    report.zyla_result = Some(ZylaResult::default());
    let out = render::render_report(&report, ViewMode::Detail);

    for label in [
        "Acne",
        "Pores",
        "Wrinkles",
        "Red Spots",
        "Texture / Roughness",
        "Dryness / Water",
        "Oiliness",
        "Sensitivity",
        "Pigmentation (Melanin)",
        "Dark Circles",
        "Blackheads",
    ] {
        assert!(out.contains(label), "missing slot: {}", label);
    }
    // 11 slots plus the dryness chip
    assert_eq!(out.matches("N/A").count(), 12);
}

#[test]
fn test_empty_products_render_explicit_message() {
    plain_colors();
    let mut report = base_report();
    report.products = vec![];
    let out = render::render_report(&report, ViewMode::Detail);
    assert!(out.contains("No products available"));
    assert!(!out.contains("• "));
}

#[test]
fn test_absent_text_fields_render_placeholder() {
    plain_colors();
    let mut report = base_report();
    report.top_issue = None;
    let out = render::render_report(&report, ViewMode::Detail);
    assert!(out.contains("Top Issue: -"));
    assert!(out.contains("AI Recommendation: -"));
    assert!(out.contains("Care Plan: -"));
}

#[test]
fn test_table_view_truncates_long_text() {
    plain_colors();
    let mut report = base_report();
    report.gpt_care_plan = Some("wash ".repeat(100));
    let table = render::render_report(&report, ViewMode::Table);
    assert!(table.contains("..."));

    let detail = render::render_report(&report, ViewMode::Detail);
    assert!(detail.contains(&"wash ".repeat(100)));
}

#[test]
fn test_unparsable_date_renders_inertly() {
    plain_colors();
    let mut report = base_report();
    report.scan_date = "not-a-date".to_string();
    let out = render::render_report(&report, ViewMode::Detail);
    assert!(out.contains("Date: not-a-date"));
}

#[test]
fn test_rendering_is_idempotent() {
    plain_colors();
    let report = base_report();
    let first = render::render_report(&report, ViewMode::Detail);
    let second = render::render_report(&report, ViewMode::Detail);
    assert_eq!(first, second);
}

#[test]
fn test_history_table_lists_scans() {
    plain_colors();
    let mut second = base_report();
    second.id = 43;
    second.dryness = Some(12.0);
    let out = render::render_history(&[base_report(), second]);

    assert!(out.contains("Scan History"));
    assert!(out.contains("42"));
    assert!(out.contains("43"));
    assert!(out.contains("2 scans"));
}

#[test]
fn test_empty_history_renders_no_scans_found() {
    plain_colors();
    let out = render::render_history(&[]);
    assert!(out.contains("No scans found"));
}

#[test]
fn test_not_found_messages() {
    plain_colors();
    assert!(render::render_report_not_found().contains("Report not found"));
    assert!(render::render_history_not_found().contains("No scans found"));
}
