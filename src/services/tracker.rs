//! Tracker service
//!
//! Owns every registered account and the current session. Registration and
//! login live here; expense operations are delegated to whichever account
//! the session points at.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::audit::{Action, ActivityEntry, ActivityLog};
use crate::credential::CredentialPolicy;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Account, ExpenseRecord, Money};

/// Which account, if any, expense operations currently target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    NoActiveAccount,
    /// Username of the logged-in account
    Active(String),
}

impl Session {
    pub fn username(&self) -> Option<&str> {
        match self {
            Session::NoActiveAccount => None,
            Session::Active(username) => Some(username.as_str()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active(_))
    }
}

/// Snapshot of the active account's expenses
#[derive(Debug, Clone)]
pub struct ExpenseView {
    pub username: String,
    /// Records in insertion order
    pub expenses: Vec<ExpenseRecord>,
    pub total: Money,
}

/// Service holding all accounts and the session
#[derive(Debug, Default)]
pub struct TrackerService {
    accounts: HashMap<String, Account>,
    session: Session,
    policy: CredentialPolicy,
    activity: ActivityLog,
}

impl TrackerService {
    /// Create an empty tracker using `policy` for new credentials
    pub fn new(policy: CredentialPolicy) -> Self {
        Self {
            accounts: HashMap::new(),
            session: Session::NoActiveAccount,
            policy,
            activity: ActivityLog::new(),
        }
    }

    /// Register a new account
    ///
    /// Usernames are compared exactly (case-sensitive). Registering does not
    /// log the new account in.
    pub fn register(&mut self, username: &str, credential: &str) -> TrackerResult<()> {
        if self.accounts.contains_key(username) {
            warn!(username, "registration rejected: username taken");
            return Err(TrackerError::DuplicateUsername(username.to_string()));
        }

        let verifier = self.policy.seal(credential)?;
        let account = Account::new(username, verifier);
        let id = account.id();
        self.accounts.insert(username.to_string(), account);

        info!(username, %id, scheme = %self.policy.scheme, "account registered");
        self.activity.record(ActivityEntry::new(
            Action::Register,
            Some(username.to_string()),
            format!("account {} created", id),
        ));

        Ok(())
    }

    /// Log in, replacing any current session
    ///
    /// Fails with `InvalidCredentials` for both an unknown username and a
    /// wrong credential; the current session is left as it was.
    pub fn login(&mut self, username: &str, credential: &str) -> TrackerResult<()> {
        let accepted = self
            .accounts
            .get(username)
            .is_some_and(|account| account.check_credential(credential));

        if !accepted {
            warn!("login failed");
            self.activity
                .record(ActivityEntry::new(Action::LoginFailed, None, ""));
            return Err(TrackerError::InvalidCredentials);
        }

        if let Some(previous) = self.session.username() {
            debug!(previous, next = username, "replacing active session");
        }
        self.session = Session::Active(username.to_string());

        info!(username, "logged in");
        self.activity.record(ActivityEntry::new(
            Action::Login,
            Some(username.to_string()),
            "",
        ));

        Ok(())
    }

    /// Add an expense to the logged-in account
    pub fn add_expense(&mut self, description: &str, amount: Money) -> TrackerResult<()> {
        let account = self.active_account_mut()?;
        let username = account.username().to_string();
        let record_id = match account.add_expense(description, amount) {
            Ok(record) => record.id(),
            Err(e) => {
                warn!(username = %username, %amount, error = %e, "expense rejected");
                return Err(e);
            }
        };

        info!(username = %username, %record_id, %amount, "expense added");
        self.activity.record(ActivityEntry::new(
            Action::AddExpense,
            Some(username),
            format!("{} {}", description, amount),
        ));

        Ok(())
    }

    /// List the logged-in account's expenses with their total
    pub fn view_expenses(&self) -> TrackerResult<ExpenseView> {
        let account = self.active_account()?;
        debug!(username = account.username(), count = account.expense_count(), "viewing expenses");

        Ok(ExpenseView {
            username: account.username().to_string(),
            expenses: account.expenses().to_vec(),
            total: account.total()?,
        })
    }

    /// Delete every expense with exactly this description
    ///
    /// Returns how many were removed; zero is not an error.
    pub fn delete_expense(&mut self, description: &str) -> TrackerResult<usize> {
        let account = self.active_account_mut()?;
        let removed = account.remove_expenses(description);
        let username = account.username().to_string();

        info!(username = %username, description, removed, "expenses deleted");
        self.activity.record(ActivityEntry::new(
            Action::DeleteExpense,
            Some(username),
            format!("{} ({} removed)", description, removed),
        ));

        Ok(removed)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_username(&self) -> Option<&str> {
        self.session.username()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn contains_account(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    fn active_account(&self) -> TrackerResult<&Account> {
        let username = self.session.username().ok_or(TrackerError::NoActiveSession)?;
        // Accounts are never removed, so an active username always resolves.
        self.accounts
            .get(username)
            .ok_or(TrackerError::NoActiveSession)
    }

    fn active_account_mut(&mut self) -> TrackerResult<&mut Account> {
        let username = self.session.username().ok_or(TrackerError::NoActiveSession)?;
        self.accounts
            .get_mut(username)
            .ok_or(TrackerError::NoActiveSession)
    }
}
