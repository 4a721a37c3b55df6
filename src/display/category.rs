//! Category display formatting

use crate::models::TransactionType;

/// Format one type's categories as a bulleted list under a heading
pub fn format_category_list(kind: TransactionType, categories: &[String]) -> String {
    let heading = match kind {
        TransactionType::Income => "Income Categories",
        TransactionType::Expense => "Expense Categories",
    };

    let mut output = format!("{}\n", heading);
    if categories.is_empty() {
        output.push_str("  (none)\n");
    }
    for name in categories {
        output.push_str(&format!("  - {}\n", name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_category_list() {
        let text = format_category_list(
            TransactionType::Expense,
            &["Rent".to_string(), "Dining".to_string()],
        );
        assert_eq!(text, "Expense Categories\n  - Rent\n  - Dining\n");
        assert!(format_category_list(TransactionType::Income, &[]).contains("(none)"));
    }
}
