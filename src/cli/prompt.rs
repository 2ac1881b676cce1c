//! Interactive prompt helpers over dialoguer

use dialoguer::{Input, Select};
use grants_admin::error::{Error, Result};
use std::fmt::Display;

fn prompt_err(e: dialoguer::Error) -> Error {
    Error::Prompt(e.to_string())
}

/// Pick one entry from a menu, returning its index
pub fn select(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact()
        .map_err(prompt_err)
}

/// Pick an optional value; the first entry means "not set"
pub fn select_optional<T: Display + Copy>(prompt: &str, options: &[T]) -> Result<Option<T>> {
    let mut items = vec!["(not set)".to_string()];
    items.extend(options.iter().map(ToString::to_string));

    let picked = select(prompt, &items, 0)?;
    Ok(picked.checked_sub(1).and_then(|i| options.get(i).copied()))
}

/// Read a line of text, pre-filled with `initial`
///
/// Required inputs re-prompt until something other than whitespace is typed.
pub fn text(prompt: &str, initial: &str, required: bool) -> Result<String> {
    let label = if required {
        format!("{prompt} *")
    } else {
        prompt.to_string()
    };

    Input::<String>::new()
        .with_prompt(label)
        .with_initial_text(initial)
        .allow_empty(!required)
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            if required && value.trim().is_empty() {
                Err("this field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(prompt_err)
}
