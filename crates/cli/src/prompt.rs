//! Interactive input for the `config` commands.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Password};

/// Source of interactive answers.
pub trait Prompter {
    /// A line of visible text.
    fn input(&self, prompt: &str) -> Result<String>;

    /// A hidden value; `allow_empty` permits skipping it.
    fn secret(&self, prompt: &str, allow_empty: bool) -> Result<String>;

    /// A yes/no question defaulting to no.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// [`Prompter`] reading from the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .with_context(|| format!("reading '{prompt}'"))
    }

    fn secret(&self, prompt: &str, allow_empty: bool) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(allow_empty)
            .interact()
            .with_context(|| format!("reading '{prompt}'"))
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .with_context(|| format!("reading '{prompt}'"))
    }
}
