pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::key_value_rows;

    #[test]
    fn aligns_values_on_the_longest_label() {
        let rows = key_value_rows(
            &[
                ("Entries scanned", "3".to_string()),
                ("Exported", "2".to_string()),
            ],
            2,
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "  Entries scanned  3");
        assert_eq!(rows[1], "  Exported         2");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(key_value_rows(&[], 2).is_empty());
    }
}
