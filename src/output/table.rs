//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table. `compact` drops the borders, for narrow
/// terminals and piping.
pub fn format_table<T: Tabled>(data: &[T], compact: bool) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    if compact {
        table.with(Style::blank());
    } else {
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "TITLE")]
        title: String,
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        let result = format_table(&items, false);
        assert_eq!(result, "No results found.");
    }

    #[test]
    fn test_format_table_single_row() {
        let items = vec![TestRow {
            id: "c-1".to_string(),
            title: "Rust 101".to_string(),
        }];

        let result = format_table(&items, false);

        assert!(result.contains("ID"));
        assert!(result.contains("TITLE"));
        assert!(result.contains("c-1"));
        assert!(result.contains("Rust 101"));
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let items = vec![TestRow {
            id: "c-1".to_string(),
            title: "Rust 101".to_string(),
        }];

        let result = format_table(&items, false);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_table_compact_has_no_borders() {
        let items = vec![TestRow {
            id: "c-1".to_string(),
            title: "Rust 101".to_string(),
        }];

        let result = format_table(&items, true);

        assert!(!result.contains("╭"));
        assert!(result.contains("Rust 101"));
    }
}
