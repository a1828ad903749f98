//! Interactive command-line front end
//!
//! A thin caller over the tracker service: it reads menu choices and
//! arguments from a terminal (or any reader), converts them to typed values,
//! and renders the results.

pub mod menu;
pub mod prompt;

pub use menu::{Menu, MenuChoice};
pub use prompt::Prompter;
