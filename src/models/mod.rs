//! Core data models for spendbook
//!
//! Accounts own their expense records; amounts are exact cent values.

pub mod account;
pub mod expense;
pub mod ids;
pub mod money;

pub use account::Account;
pub use expense::ExpenseRecord;
pub use ids::{AccountId, ExpenseId};
pub use money::{Money, MoneyParseError};
