//! Interactive choices backed by dialoguer.

use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::domain::{AppError, ConflictChoice, DestinationPreset, TemplateConfig};
use crate::ports::ConflictResolver;

fn prompt_error(what: &str, err: DialoguerError) -> AppError {
    AppError::Prompt(format!("{}: {}", what, err))
}

/// Asks about each existing template target. Escape means cancel.
pub(super) struct DialoguerConflictResolver;

impl ConflictResolver for DialoguerConflictResolver {
    fn resolve(&mut self, display_path: &str) -> Result<ConflictChoice, AppError> {
        let labels: Vec<&str> = ConflictChoice::ALL.iter().map(|choice| choice.label()).collect();
        let selection = Select::new()
            .with_prompt(format!("{} already exists", display_path))
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|err| prompt_error("Failed to resolve conflict", err))?;

        Ok(selection.map_or(ConflictChoice::Cancel, |index| ConflictChoice::ALL[index]))
    }
}

pub(super) fn prompt_repository_url() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Prompt repository URL").interact_text() {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_error("Failed to read repository URL", err)),
    }
}

pub(super) fn prompt_destination() -> Result<Option<DestinationPreset>, AppError> {
    let items: Vec<String> =
        DestinationPreset::ALL.iter().map(|preset| preset.description()).collect();
    let selection = Select::new()
        .with_prompt("Select destination")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| prompt_error("Failed to select destination", err))?;

    Ok(selection.map(|index| DestinationPreset::ALL[index]))
}

pub(super) fn prompt_template(templates: &[TemplateConfig]) -> Result<Option<usize>, AppError> {
    let items: Vec<String> = templates
        .iter()
        .map(|template| match &template.description {
            Some(description) => format!("{} - {}", template.name, description),
            None => template.name.clone(),
        })
        .collect();

    Select::new()
        .with_prompt("Select template")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| prompt_error("Failed to select template", err))
}

pub(super) fn confirm_overwrite(display_path: &str) -> Result<bool, AppError> {
    let answer = Confirm::new()
        .with_prompt(format!("{} already exists. Overwrite?", display_path))
        .default(false)
        .interact_opt()
        .map_err(|err| prompt_error("Failed to confirm overwrite", err))?;
    Ok(answer.unwrap_or(false))
}
