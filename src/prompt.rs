use crate::error::AppError;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

/// Interactive input. Every method returns `AppError::Cancelled` when the user backs out.
pub trait Prompter {
    fn input_text(&mut self, prompt: &str) -> Result<String, AppError>;
    fn select_one(&mut self, prompt: &str, choices: &[String], default: Option<usize>) -> Result<usize, AppError>;
    fn input_number(&mut self, prompt: &str, min: f64, max: f64, default: f64) -> Result<f64, AppError>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn input_text(&mut self, prompt: &str) -> Result<String, AppError> {
        (**self).input_text(prompt)
    }

    fn select_one(&mut self, prompt: &str, choices: &[String], default: Option<usize>) -> Result<usize, AppError> {
        (**self).select_one(prompt, choices, default)
    }

    fn input_number(&mut self, prompt: &str, min: f64, max: f64, default: f64) -> Result<f64, AppError> {
        (**self).input_number(prompt, min, max, default)
    }
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        TerminalPrompter {
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
    fn input_text(&mut self, prompt: &str) -> Result<String, AppError> {
        let text: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;
        Ok(text)
    }

    fn select_one(&mut self, prompt: &str, choices: &[String], default: Option<usize>) -> Result<usize, AppError> {
        let picked = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(choices)
            .default(default.unwrap_or(0))
            .interact_opt()?;
        picked.ok_or(AppError::Cancelled)
    }

    fn input_number(&mut self, prompt: &str, min: f64, max: f64, default: f64) -> Result<f64, AppError> {
        let value: f64 = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .validate_with(move |v: &f64| -> Result<(), String> {
                if v.is_finite() && *v >= min && *v <= max {
                    Ok(())
                } else {
                    Err(format!("Enter a number between {} and {}", min, max))
                }
            })
            .interact_text()?;
        Ok(value)
    }
}
