//! Activity entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kinds of tracker activity worth recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Register,
    Login,
    LoginFailed,
    AddExpense,
    DeleteExpense,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Register => write!(f, "REGISTER"),
            Action::Login => write!(f, "LOGIN"),
            Action::LoginFailed => write!(f, "LOGIN_FAILED"),
            Action::AddExpense => write!(f, "ADD_EXPENSE"),
            Action::DeleteExpense => write!(f, "DELETE_EXPENSE"),
        }
    }
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the action happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub action: Action,

    /// Username involved, when one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Short human-readable detail
    pub detail: String,
}

impl ActivityEntry {
    pub fn new(action: Action, username: Option<String>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            username,
            detail: detail.into(),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action
        );

        if let Some(username) = &self.username {
            output.push_str(&format!(" {}", username));
        }

        if !self.detail.is_empty() {
            output.push_str(&format!(": {}", self.detail));
        }

        output
    }
}
