//! Account model
//!
//! A registered user: username, credential verifier, and the ordered list of
//! expense records the user owns.

use chrono::{DateTime, Utc};
use std::fmt;

use super::expense::ExpenseRecord;
use super::ids::AccountId;
use super::money::Money;
use crate::credential::CredentialVerifier;
use crate::error::{TrackerError, TrackerResult};

/// A registered user and their expenses
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    username: String,
    credential: Box<dyn CredentialVerifier>,
    expenses: Vec<ExpenseRecord>,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with no expenses
    pub fn new(username: impl Into<String>, credential: Box<dyn CredentialVerifier>) -> Self {
        Self {
            id: AccountId::new(),
            username: username.into(),
            credential,
            expenses: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append an expense
    ///
    /// Any sign is accepted. The only rejection is an amount that would push
    /// the account total out of range; the list is unchanged in that case.
    pub fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: Money,
    ) -> TrackerResult<&ExpenseRecord> {
        let amounts = self.expenses.iter().map(ExpenseRecord::amount);
        if Money::checked_sum(amounts.chain(std::iter::once(amount))).is_none() {
            return Err(TrackerError::Validation(format!(
                "adding {} would overflow the account total",
                amount
            )));
        }

        self.expenses.push(ExpenseRecord::new(description, amount));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Remove every expense whose description matches exactly
    ///
    /// Returns the number removed. The remaining records keep their order.
    pub fn remove_expenses(&mut self, description: &str) -> usize {
        let before = self.expenses.len();
        self.expenses.retain(|record| !record.matches(description));
        before - self.expenses.len()
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Sum of all amounts, zero when empty
    pub fn total(&self) -> TrackerResult<Money> {
        Money::checked_sum(self.expenses.iter().map(ExpenseRecord::amount))
            .ok_or_else(|| TrackerError::Validation("account total is out of range".into()))
    }

    pub fn check_credential(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} expenses)", self.username, self.expenses.len())
    }
}
