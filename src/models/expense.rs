//! Expense record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// One (description, amount) entry owned by an account
///
/// Records are never edited after creation; fields are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    id: ExpenseId,
    description: String,
    amount: Money,
    created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Exact, case-sensitive description match
    pub fn matches(&self, description: &str) -> bool {
        self.description == description
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.description, self.amount)
    }
}
