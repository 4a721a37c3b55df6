//! Report formatting helpers for terminal output
//!
//! Shared by the monthly dashboard and the budget status listing.

use crate::reports::BudgetStatus;

/// Format a percentage with precision that shrinks as the value grows
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Proportional bar, `width` cells wide, filled by `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Budget ceilings against this month's spending
pub fn format_budget_status(rows: &[BudgetStatus], symbol: &str) -> String {
    if rows.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>12} {:>6}\n",
        "Category", "Budget", "Spent", "Remaining", "Used"
    ));
    output.push_str(&separator(62));
    output.push('\n');

    for row in rows {
        let flag = if row.is_over_budget() { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12} {:>6}{}\n",
            truncate(&row.category, 16),
            row.limit.format_with_symbol(symbol),
            row.spent.format_with_symbol(symbol),
            row.remaining.format_with_symbol(symbol),
            format_percentage(row.percent_used()),
            flag
        ));
    }

    output
}
