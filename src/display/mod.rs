//! Display formatting for terminal output
//!
//! Turns service results into the text the interactive menu prints.
//! Amounts are always shown with two decimal places.

pub mod activity;
pub mod expense;

pub use activity::format_activity_log;
pub use expense::format_expense_view;
