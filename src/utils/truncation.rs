const MAX_FIELD_LENGTH: usize = 80;
const MAX_CELL_LENGTH: usize = 40;

/// Truncate a long free-text field for the compact table view. The detail
/// view shows these fields unabridged.
pub fn truncate_field(text: &str) -> String {
    truncate_to(text, MAX_FIELD_LENGTH)
}

/// Tighter budget for history-table cells.
pub fn truncate_cell(text: &str) -> String {
    truncate_to(text, MAX_CELL_LENGTH)
}

fn truncate_to(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_passes_through() {
        assert_eq!(truncate_field("moisturize daily"), "moisturize daily");
    }

    #[test]
    fn test_long_text_is_cut_with_ellipsis() {
        let long = "x".repeat(200);
        let out = truncate_field(&long);
        assert_eq!(out.chars().count(), 83);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncation_is_char_safe() {
        let long = "ü".repeat(60);
        let out = truncate_cell(&long);
        assert!(out.starts_with(&"ü".repeat(40)));
        assert!(out.ends_with("..."));
    }
}
