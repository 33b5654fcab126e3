pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("Invoice Sync", 20), "Invoice Sync");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Résumé parser agent", 10), "Résumé ...");
    }
}
