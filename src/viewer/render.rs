use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ViewMode;
use crate::models::Report;
use crate::utils::formatting::{format_score, text_or_placeholder};
use crate::utils::truncation::{truncate_cell, truncate_field};
use crate::viewer::derive::{format_scan_date, parameter_slots, ScoreSeverity};

/// Render a single report for the requested view mode.
pub fn render_report(report: &Report, view: ViewMode) -> String {
    match view {
        ViewMode::Detail => render_detail(report),
        ViewMode::Table => render_table(report),
    }
}

/// Full card: header, identifiers, all 11 parameter slots, unabridged text
/// fields and the product list.
fn render_detail(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "\n{}\n\n",
        style("Skin Analysis Report").cyan().bold()
    ));
    out.push_str(&format!("{} {}\n", style("Report ID:").bold(), report.id));
    out.push_str(&format!(
        "{} {}\n",
        style("Date:").bold(),
        format_scan_date(&report.scan_date)
    ));
    out.push_str(&format!(
        "{} {}\n",
        style("Patient ID:").bold(),
        report.patient_id
    ));
    out.push_str(&format!(
        "{} {}\n",
        style("Dryness:").bold(),
        render_score_chip(report.dryness)
    ));

    out.push_str(&format!(
        "\n{}\n",
        style("Zyla AI Skin Scores (11 Parameters)").bold()
    ));
    for slot in parameter_slots(report) {
        out.push_str(&format!(
            "  {:<24} {}\n",
            slot.label,
            render_chip(slot.severity(), &slot.display_value())
        ));
    }

    out.push_str(&format!(
        "\n{} {}\n",
        style("Top Issue:").bold(),
        text_or_placeholder(report.top_issue.as_deref())
    ));
    out.push_str(&format!(
        "{} {}\n",
        style("AI Recommendation:").bold(),
        text_or_placeholder(report.ai_recommendation.as_deref())
    ));
    out.push_str(&format!(
        "{} {}\n",
        style("Care Plan:").bold(),
        text_or_placeholder(report.gpt_care_plan.as_deref())
    ));

    out.push_str(&format!("\n{}\n", style("Recommended Products:").bold()));
    if report.products.is_empty() {
        out.push_str(&format!("  {}\n", style("No products available").dim()));
    } else {
        for product in &report.products {
            out.push_str(&format!("  • {}\n", product.display_name()));
        }
    }

    out
}

/// Compact field/value table for the same record, long text truncated.
fn render_table(report: &Report) -> String {
    let rows = [
        ("Report ID", report.id.to_string()),
        ("Date", format_scan_date(&report.scan_date)),
        ("Patient ID", report.patient_id.to_string()),
        ("Dryness", render_score_chip(report.dryness)),
        (
            "Top Issue",
            truncate_field(&text_or_placeholder(report.top_issue.as_deref())),
        ),
        (
            "AI Recommendation",
            truncate_field(&text_or_placeholder(report.ai_recommendation.as_deref())),
        ),
        (
            "Care Plan",
            truncate_field(&text_or_placeholder(report.gpt_care_plan.as_deref())),
        ),
        ("Products", render_product_cell(report)),
    ];

    let mut out = String::new();
    out.push_str(&format!("| {:<24} | Value |\n", "Field"));
    out.push_str("|---|---|\n");
    for (field, value) in rows {
        out.push_str(&format!("| {:<24} | {} |\n", field, value));
    }
    for slot in parameter_slots(report) {
        out.push_str(&format!(
            "| {:<24} | {} |\n",
            slot.label,
            render_chip(slot.severity(), &slot.display_value())
        ));
    }
    out
}

/// Table of historical scans for one patient.
pub fn render_history(reports: &[Report]) -> String {
    if reports.is_empty() {
        return render_history_not_found();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}\n\n",
        style("Scan History").cyan().bold()
    ));
    // Plain header keeps the column widths honest when colors are on
    out.push_str(&format!(
        "{:<8} {:<20} {:<10} {:<44} {:>8}\n",
        "ID", "Date", "Dryness", "Top Issue", "Products"
    ));
    for report in reports {
        out.push_str(&format!(
            "{:<8} {:<20} {:<10} {:<44} {:>8}\n",
            report.id,
            format_scan_date(&report.scan_date),
            render_score_chip(report.dryness),
            truncate_cell(&text_or_placeholder(report.top_issue.as_deref())),
            report.products.len()
        ));
    }
    out.push_str(&format!("\n{} scans\n", reports.len()));
    out
}

pub fn render_report_not_found() -> String {
    format!("\n{}\n", style("Report not found").yellow().bold())
}

pub fn render_history_not_found() -> String {
    format!("\n{}\n", style("No scans found").yellow().bold())
}

/// Chip coloring follows score severity: warning above 50, normal at or
/// below, neutral for the N/A sentinel.
pub fn render_chip(severity: ScoreSeverity, value: &str) -> String {
    match severity {
        ScoreSeverity::Warning => style(format!(" {} ", value)).on_red().white().bold().to_string(),
        ScoreSeverity::Normal => style(format!(" {} ", value)).on_green().black().to_string(),
        ScoreSeverity::NotAvailable => style(format!(" {} ", value)).dim().to_string(),
    }
}

fn render_score_chip(score: Option<f64>) -> String {
    let text = match score {
        Some(v) => format_score(v),
        None => "N/A".to_string(),
    };
    render_chip(ScoreSeverity::from_score(score), &text)
}

fn render_product_cell(report: &Report) -> String {
    if report.products.is_empty() {
        "No products available".to_string()
    } else {
        report
            .products
            .iter()
            .map(|p| truncate_cell(&p.display_name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Spinner shown while a fetch is in flight (the Loading state).
pub fn loading_spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap(),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(std::time::Duration::from_millis(120));
    bar
}
