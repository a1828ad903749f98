//! Service layer for spendbook
//!
//! The service layer owns the accounts and session state and exposes the
//! register/login/expense operations callers use.

pub mod tracker;

pub use tracker::{ExpenseView, Session, TrackerService};
