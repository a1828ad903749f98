//! Activity log for spendbook
//!
//! Records registrations, logins and expense changes in an append-only,
//! in-memory log owned by the tracker service. Nothing is written to disk;
//! the log lives as long as the process.
//!
//! Credentials are never recorded.
//!
//! # Example
//!
//! ```rust
//! use spendbook::audit::{Action, ActivityEntry, ActivityLog};
//!
//! let mut log = ActivityLog::new();
//! log.record(ActivityEntry::new(Action::Register, Some("alice".into()), "account created"));
//! assert_eq!(log.len(), 1);
//! ```

mod entry;
mod log;

pub use entry::{Action, ActivityEntry};
pub use log::ActivityLog;
