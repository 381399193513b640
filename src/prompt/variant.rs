//! Selection of a remote template variant.

use crate::constants::LANGUAGES;
use crate::error::{Error, Result};
use crate::prompt::interface::{PromptProvider, SingleChoiceConfig};
use crate::remote::{Variant, VariantResolver};

/// Parts of a variant already fixed on the command line.
#[derive(Debug, Clone, Default)]
pub struct VariantSelection {
    pub language: Option<String>,
    pub framework: Option<String>,
    pub version: Option<String>,
}

/// Completes a variant, prompting for every part that was not given.
///
/// # Returns
/// * `Err(Error::TemplateNotFound)` - The index lists no framework for the language
/// * `Err(Error::NoVersionsAvailable)` - The index lists no version for the framework
pub fn select_variant(
    prompter: &dyn PromptProvider,
    resolver: &VariantResolver<'_>,
    selection: VariantSelection,
) -> Result<Variant> {
    let language = match selection.language {
        Some(language) => language,
        None => choose(
            prompter,
            "Choose a language".to_string(),
            LANGUAGES.iter().map(|l| l.to_string()).collect(),
        )?,
    };

    let framework = match selection.framework {
        Some(framework) => framework,
        None => {
            let frameworks = resolver.frameworks_for(&language)?;
            if frameworks.is_empty() {
                return Err(Error::TemplateNotFound {
                    url: resolver.listing_url(&[&language]).to_string(),
                });
            }
            choose(prompter, format!("Choose a {language} framework"), frameworks)?
        }
    };

    let version = match selection.version {
        Some(version) => version,
        None => {
            let versions = resolver.versions_for(&language, &framework)?;
            if versions.is_empty() {
                return Err(Error::NoVersionsAvailable { framework });
            }
            choose(prompter, format!("Choose a version for {framework}"), versions)?
        }
    };

    Ok(Variant { language, framework, version })
}

fn choose(prompter: &dyn PromptProvider, prompt: String, choices: Vec<String>) -> Result<String> {
    let index = prompter.prompt_single_choice(&SingleChoiceConfig {
        prompt,
        choices: choices.clone(),
        default_index: Some(0),
    })?;
    choices.into_iter().nth(index).ok_or_else(|| {
        Error::Other(anyhow::anyhow!("Selection {index} is out of range"))
    })
}
