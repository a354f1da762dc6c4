use chrono::{DateTime, Local, NaiveDateTime};

use crate::models::{Report, SkinParameter};
use crate::utils::formatting::format_score;

/// Severity treatment for a numeric score chip. The threshold is exclusive
/// on the high side: 50 renders Normal, 51 renders Warning. This polarity
/// applies to every score field in the system, dryness included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSeverity {
    NotAvailable,
    Normal,
    Warning,
}

impl ScoreSeverity {
    pub fn from_score(score: Option<f64>) -> Self {
        match score {
            None => Self::NotAvailable,
            Some(v) if v > 50.0 => Self::Warning,
            Some(_) => Self::Normal,
        }
    }
}

/// One of the 11 fixed parameter slots. The slot always renders; a missing
/// score shows the N/A sentinel instead of dropping out of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSlot {
    pub label: &'static str,
    pub value: Option<f64>,
}

impl ParameterSlot {
    pub fn display_value(&self) -> String {
        match self.value {
            Some(v) => format_score(v),
            None => "N/A".to_string(),
        }
    }

    pub fn severity(&self) -> ScoreSeverity {
        ScoreSeverity::from_score(self.value)
    }
}

/// Project the nested score mapping onto the 11 fixed slots, in order.
pub fn parameter_slots(report: &Report) -> Vec<ParameterSlot> {
    SkinParameter::ALL
        .iter()
        .map(|&parameter| ParameterSlot {
            label: parameter.label(),
            value: report.score_info().and_then(|s| s.score(parameter)),
        })
        .collect()
}

/// Reformat the backend timestamp for local display. Unparsable input
/// degrades to the raw string; rendering never fails on a bad date.
pub fn format_scan_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, fmt) {
            return parsed.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ScoreInfo, ZylaResult};

    fn report_with_scores(score_info: ScoreInfo) -> Report {
        Report {
            id: 1,
            patient_id: 1,
            scan_date: "2024-01-01T10:00:00Z".to_string(),
            dryness: None,
            top_issue: None,
            ai_recommendation: None,
            gpt_care_plan: None,
            zyla_result: Some(ZylaResult { score_info }),
            products: vec![],
        }
    }

    #[test]
    fn test_severity_boundary_is_exclusive_above_50() {
        assert_eq!(ScoreSeverity::from_score(Some(50.0)), ScoreSeverity::Normal);
        assert_eq!(ScoreSeverity::from_score(Some(51.0)), ScoreSeverity::Warning);
        assert_eq!(ScoreSeverity::from_score(Some(50.1)), ScoreSeverity::Warning);
        assert_eq!(ScoreSeverity::from_score(None), ScoreSeverity::NotAvailable);
        assert_eq!(ScoreSeverity::from_score(Some(0.0)), ScoreSeverity::Normal);
    }

    #[test]
    fn test_all_slots_render_without_zyla_result() {
        let mut report = report_with_scores(ScoreInfo::default());
        report.zyla_result = None;
        let slots = parameter_slots(&report);
        assert_eq!(slots.len(), 11);
        assert!(slots.iter().all(|s| s.display_value() == "N/A"));
        assert!(slots.iter().all(|s| s.severity() == ScoreSeverity::NotAvailable));
    }

    #[test]
    fn test_present_score_fills_its_slot_only() {
        let slots = parameter_slots(&report_with_scores(ScoreInfo {
            acne_score: Some(30.0),
            ..Default::default()
        }));
        assert_eq!(slots[0].label, "Acne");
        assert_eq!(slots[0].display_value(), "30");
        assert_eq!(slots[0].severity(), ScoreSeverity::Normal);
        assert_eq!(slots.iter().filter(|s| s.value.is_none()).count(), 10);
    }

    #[test]
    fn test_rfc3339_date_is_reformatted() {
        let formatted = format_scan_date("2024-01-01T10:00:00Z");
        // Rendered in the local zone, so only assert shape and non-passthrough
        assert_eq!(formatted.len(), 19);
        assert!(!formatted.contains('T'));
    }

    #[test]
    fn test_unparsable_date_degrades_to_raw() {
        assert_eq!(format_scan_date("soonish"), "soonish");
        assert_eq!(format_scan_date(""), "");
    }
}
