//! Operator prompting.
//!
//! The interactive flows talk to a [`Prompter`] instead of the terminal so
//! that they can be driven by a script in tests. [`TerminalPrompter`] is the
//! real implementation on top of `dialoguer`.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::error::Result;

/// Line-oriented operator input.
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Free text, trimmed. Blank input is allowed and returned as "".
    fn text(&mut self, prompt: &str) -> Result<String>;

    /// Yes/no question that defaults to No.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// `dialoguer`-backed prompter for an interactive terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn text(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
