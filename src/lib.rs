//! spendbook - terminal-based personal expense tracker
//!
//! This library provides the core of the spendbook tracker: registering
//! accounts, logging in, and keeping a per-account list of expenses with a
//! running total. All tracker data lives in memory for the lifetime of the
//! process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file location and user preferences
//! - `error`: Custom error types
//! - `models`: Accounts, expense records and the `Money` type
//! - `credential`: Credential verification (plaintext or Argon2id)
//! - `services`: The tracker service holding accounts and the session
//! - `audit`: In-memory activity log
//! - `display`: Text formatting for terminal output
//! - `cli`: The interactive menu front end
//!
//! # Example
//!
//! ```rust
//! use spendbook::models::Money;
//! use spendbook::services::TrackerService;
//!
//! let mut tracker = TrackerService::default();
//! tracker.register("alice", "pw")?;
//! tracker.login("alice", "pw")?;
//! tracker.add_expense("coffee", Money::from_cents(350))?;
//! tracker.add_expense("book", Money::from_cents(1299))?;
//!
//! let view = tracker.view_expenses()?;
//! assert_eq!(view.total, Money::from_cents(1649));
//! # Ok::<(), spendbook::TrackerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod credential;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{TrackerError, TrackerResult};
