//! Interactive numbered menu
//!
//! Parses raw terminal input into typed arguments, calls the tracker
//! service, and prints the outcome. Recoverable tracker errors are reported
//! and the menu keeps running.

use std::io::{BufRead, Write};

use tracing::debug;

use super::prompt::Prompter;
use crate::config::Settings;
use crate::display::{format_activity_log, format_expense_view};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;
use crate::services::TrackerService;

const MENU: &str = "\
1. Register
2. Login
3. Add Expense
4. View Expenses
5. Delete Expense
6. Quit
7. Activity Log
";

/// One menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    Login,
    AddExpense,
    ViewExpenses,
    DeleteExpense,
    Quit,
    ActivityLog,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Register),
            "2" => Some(Self::Login),
            "3" => Some(Self::AddExpense),
            "4" => Some(Self::ViewExpenses),
            "5" => Some(Self::DeleteExpense),
            "6" => Some(Self::Quit),
            "7" => Some(Self::ActivityLog),
            _ => None,
        }
    }
}

/// Whether the menu loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// The interactive front end
pub struct Menu<'a, R, W, E> {
    service: &'a mut TrackerService,
    settings: &'a Settings,
    prompter: Prompter<R, W, E>,
}

impl<'a, R: BufRead, W: Write, E: Write> Menu<'a, R, W, E> {
    pub fn new(
        service: &'a mut TrackerService,
        settings: &'a Settings,
        prompter: Prompter<R, W, E>,
    ) -> Self {
        Self {
            service,
            settings,
            prompter,
        }
    }

    /// Run until Quit is chosen or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        loop {
            self.prompter.print(MENU)?;
            let Some(answer) = self.prompter.word("Choose an option: ")? else {
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.prompter.complain("Invalid option.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            if self.dispatch(choice)? == Flow::Stop {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> TrackerResult<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::Login => self.login(),
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ViewExpenses => self.view_expenses(),
            MenuChoice::DeleteExpense => self.delete_expense(),
            MenuChoice::ActivityLog => {
                let entries = self.service.activity().recent(self.settings.activity_limit);
                let text = format_activity_log(entries);
                self.prompter.print(&text)?;
                Ok(Flow::Continue)
            }
            MenuChoice::Quit => Ok(Flow::Stop),
        }
    }

    fn register(&mut self) -> TrackerResult<Flow> {
        let Some((username, password)) = self.read_login_pair()? else {
            return Ok(Flow::Stop);
        };

        match self.service.register(&username, &password) {
            Ok(()) => self.prompter.say("User registered successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn login(&mut self) -> TrackerResult<Flow> {
        let Some((username, password)) = self.read_login_pair()? else {
            return Ok(Flow::Stop);
        };

        match self.service.login(&username, &password) {
            Ok(()) => self.prompter.say("Logged in successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_expense(&mut self) -> TrackerResult<Flow> {
        let Some(description) = self.prompter.line("Enter description: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(raw_amount) = self.prompter.word("Enter amount: ")? else {
            return Ok(Flow::Stop);
        };

        let amount = match Money::parse(&raw_amount) {
            Ok(amount) => amount,
            Err(e) => {
                self.prompter.complain(&format!("Invalid amount: {}", e))?;
                return Ok(Flow::Continue);
            }
        };

        match self.service.add_expense(&description, amount) {
            Ok(()) => self.prompter.say("Expense added successfully.")?,
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn view_expenses(&mut self) -> TrackerResult<Flow> {
        match self.service.view_expenses() {
            Ok(view) => {
                let text = format_expense_view(&view, &self.settings.currency_symbol);
                self.prompter.print(&text)?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_expense(&mut self) -> TrackerResult<Flow> {
        let Some(description) = self
            .prompter
            .line("Enter description of expense to delete: ")?
        else {
            return Ok(Flow::Stop);
        };

        match self.service.delete_expense(&description) {
            Ok(removed) => {
                self.prompter.say("Expense deleted successfully.")?;
                self.prompter
                    .say(&format!("Removed {} matching expense(s).", removed))?;
            }
            Err(e) => self.report(e)?,
        }
        Ok(Flow::Continue)
    }

    fn read_login_pair(&mut self) -> TrackerResult<Option<(String, String)>> {
        let Some(username) = self.prompter.word("Enter username: ")? else {
            return Ok(None);
        };
        let Some(password) = self.prompter.credential("Enter password: ")? else {
            return Ok(None);
        };
        Ok(Some((username, password)))
    }

    /// Print a recoverable error; anything else is returned to the caller
    fn report(&mut self, err: TrackerError) -> TrackerResult<()> {
        if !err.is_recoverable() {
            return Err(err);
        }

        let message = match err {
            TrackerError::DuplicateUsername(_) => {
                "Username already taken. Please choose another username.".to_string()
            }
            TrackerError::InvalidCredentials => "Invalid username or password.".to_string(),
            TrackerError::NoActiveSession => "No user logged in.".to_string(),
            other => other.to_string(),
        };
        self.prompter.complain(&message)
    }
}
