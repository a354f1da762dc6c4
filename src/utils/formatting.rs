/// Placeholder shown for absent or empty free-text fields.
pub const TEXT_PLACEHOLDER: &str = "-";

/// Render a score the way the backend sent it: whole numbers without a
/// decimal point, fractional values with one digit.
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

pub fn text_or_placeholder(text: Option<&str>) -> String {
    match text {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => TEXT_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(65.0), "65");
        assert_eq!(format_score(30.5), "30.5");
        assert_eq!(format_score(0.0), "0");
    }

    #[test]
    fn test_text_or_placeholder() {
        assert_eq!(text_or_placeholder(Some("dry skin")), "dry skin");
        assert_eq!(text_or_placeholder(Some("   ")), "-");
        assert_eq!(text_or_placeholder(None), "-");
    }
}
