//! Expense display formatting
//!
//! Renders an expense view as the line-per-record listing printed by the
//! interactive menu.

use crate::services::ExpenseView;

/// Format a user's expenses followed by their total
///
/// ```text
/// Expenses for alice:
///  - coffee: $3.50
///  - book: $12.99
/// Total Expenses: $16.49
/// ```
pub fn format_expense_view(view: &ExpenseView, currency_symbol: &str) -> String {
    let mut output = format!("Expenses for {}:\n", view.username);

    for record in &view.expenses {
        output.push_str(&format!(
            " - {}: {}\n",
            record.description(),
            record.amount().format_with_symbol(currency_symbol)
        ));
    }

    output.push_str(&format!(
        "Total Expenses: {}\n",
        view.total.format_with_symbol(currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};

    fn view(records: Vec<ExpenseRecord>) -> ExpenseView {
        let total = Money::checked_sum(records.iter().map(|r| r.amount())).unwrap();
        ExpenseView {
            username: "alice".into(),
            expenses: records,
            total,
        }
    }

    #[test]
    fn test_format_expense_view() {
        let output = format_expense_view(
            &view(vec![
                ExpenseRecord::new("coffee", Money::from_cents(350)),
                ExpenseRecord::new("book", Money::from_cents(1299)),
            ]),
            "$",
        );

        assert_eq!(
            output,
            "Expenses for alice:\n - coffee: $3.50\n - book: $12.99\nTotal Expenses: $16.49\n"
        );
    }

    #[test]
    fn test_format_empty_view() {
        let output = format_expense_view(&view(Vec::new()), "$");
        assert_eq!(output, "Expenses for alice:\nTotal Expenses: $0.00\n");
    }

    #[test]
    fn test_custom_symbol_and_negative() {
        let output = format_expense_view(
            &view(vec![ExpenseRecord::new("refund", Money::from_cents(-500))]),
            "€",
        );
        assert!(output.contains(" - refund: -€5.00"));
        assert!(output.contains("Total Expenses: -€5.00"));
    }
}
