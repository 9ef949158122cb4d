//! Terminal prompts.
//!
//! With the `interactive` feature and a terminal on both stdin and stderr,
//! questions go through dialoguer. Otherwise every prompt fails with
//! `PromptUnavailable` instead of blocking, so scripts get an error that
//! names the flag they forgot.

use momo_core::{
    application::{ApplicationError, ports::Prompter},
    error::MomoResult,
};

/// Pick the prompter for this process.
pub fn terminal_prompter() -> Box<dyn Prompter> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal;
        if std::io::stdin().is_terminal() && std::io::stderr().is_terminal() {
            return Box::new(DialoguerPrompter::new());
        }
    }
    Box::new(NonInteractivePrompter)
}

/// Refuses every question.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractivePrompter;

fn unavailable<T>(prompt: &str) -> MomoResult<T> {
    Err(ApplicationError::PromptUnavailable {
        prompt: prompt.to_string(),
    }
    .into())
}

impl Prompter for NonInteractivePrompter {
    fn select(&self, prompt: &str, _items: &[String], _default: usize) -> MomoResult<Option<usize>> {
        unavailable(prompt)
    }

    fn input(&self, prompt: &str, _default: &str) -> MomoResult<Option<String>> {
        unavailable(prompt)
    }

    fn confirm(&self, prompt: &str, _default: bool) -> MomoResult<Option<bool>> {
        unavailable(prompt)
    }
}

#[cfg(feature = "interactive")]
pub use interactive::DialoguerPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use momo_core::{
        application::{ApplicationError, ports::Prompter},
        error::{MomoError, MomoResult},
    };

    /// dialoguer-backed prompts on stderr. Esc / `q` cancel.
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    impl DialoguerPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Default for DialoguerPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    fn failed(err: dialoguer::Error) -> MomoError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                ApplicationError::Cancelled.into()
            }
            other => ApplicationError::PromptFailed(other.to_string()).into(),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn select(&self, prompt: &str, items: &[String], default: usize) -> MomoResult<Option<usize>> {
            Select::with_theme(&self.theme)
                .with_prompt(prompt)
                .items(items)
                .default(default.min(items.len().saturating_sub(1)))
                .interact_opt()
                .map_err(failed)
        }

        fn input(&self, prompt: &str, default: &str) -> MomoResult<Option<String>> {
            let mut input = Input::<String>::with_theme(&self.theme).with_prompt(prompt);
            if !default.is_empty() {
                input = input.default(default.to_string());
            }
            match input.interact_text() {
                Ok(text) => Ok(Some(text.trim().to_string())),
                Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                    Ok(None)
                }
                Err(e) => Err(failed(e)),
            }
        }

        fn confirm(&self, prompt: &str, default: bool) -> MomoResult<Option<bool>> {
            Confirm::with_theme(&self.theme)
                .with_prompt(prompt)
                .default(default)
                .interact_opt()
                .map_err(failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use momo_core::error::MomoError;

    #[test]
    fn non_interactive_names_the_prompt() {
        let err = NonInteractivePrompter
            .select("Where should zod be installed?", &["web (app)".into()], 0)
            .unwrap_err();
        assert!(matches!(
            &err,
            MomoError::Application(ApplicationError::PromptUnavailable { prompt })
                if prompt == "Where should zod be installed?"
        ));
    }

    #[test]
    fn non_interactive_refuses_input_and_confirm() {
        assert!(NonInteractivePrompter.input("name?", "acme").is_err());
        assert!(NonInteractivePrompter.confirm("sure?", true).is_err());
    }
}
