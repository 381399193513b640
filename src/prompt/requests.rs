//! Interactive source of module requests.

use crate::config::ModuleCatalog;
use crate::constants::module_kinds;
use crate::error::{Error, Result};
use crate::module::ModuleRequest;
use crate::prompt::interface::{
    ConfirmationConfig, PromptProvider, SingleChoiceConfig, TextPromptConfig,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Database,
    FirstModule,
    AnotherModule,
    Done,
}

/// Asks for module requests one at a time.
///
/// First offers a database module (when the catalog has drivers), then keeps
/// offering service/repository modules until the user declines. Stops after the
/// first prompt failure.
pub struct InteractiveModuleRequests<'a> {
    prompter: &'a dyn PromptProvider,
    catalog: &'a ModuleCatalog,
    stage: Stage,
}

impl<'a> InteractiveModuleRequests<'a> {
    pub fn new(prompter: &'a dyn PromptProvider, catalog: &'a ModuleCatalog) -> Self {
        Self { prompter, catalog, stage: Stage::Database }
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompter.prompt_confirmation(&ConfirmationConfig {
            prompt: prompt.to_string(),
            default: false,
        })
    }

    fn choose(&self, prompt: String, choices: Vec<String>) -> Result<String> {
        let index = self.prompter.prompt_single_choice(&SingleChoiceConfig {
            prompt,
            choices: choices.clone(),
            default_index: Some(0),
        })?;
        choices.into_iter().nth(index).ok_or_else(|| {
            Error::Other(anyhow::anyhow!("Selection {index} is out of range"))
        })
    }

    fn ask_database(&self) -> Result<Option<ModuleRequest>> {
        let db_types = self.catalog.database_types();
        if db_types.is_empty() {
            log::debug!("No database modules configured, skipping database prompt");
            return Ok(None);
        }
        if !self.confirm("Do you want to create a database module?")? {
            return Ok(None);
        }

        let db_type = self.choose("Choose a database type".to_string(), db_types)?;
        let drivers = self.catalog.drivers_for(&db_type);
        if drivers.is_empty() {
            log::warn!("No drivers configured for '{db_type}'");
            return Ok(None);
        }
        let driver = self.choose(format!("Choose a {db_type} driver"), drivers)?;

        Ok(Some(ModuleRequest::Database { db_type, driver }))
    }

    fn ask_module(&self) -> Result<ModuleRequest> {
        let mut kinds = self.catalog.kinds();
        if kinds.is_empty() {
            kinds = module_kinds::INJECTABLE.iter().map(|kind| kind.to_string()).collect();
        }
        let kind = self.choose("Choose a module type".to_string(), kinds)?;
        let name = self.prompter.prompt_text(&TextPromptConfig {
            prompt: format!("Enter the {kind} module name"),
            default: None,
        })?;

        ModuleRequest::module(&kind, &name)
    }

    /// Ends the dialog after a prompt failure. An invalid module name is handed
    /// on and the dialog continues.
    fn fail<T>(&mut self, result: Result<T>) -> Option<Result<T>> {
        if result.as_ref().is_err_and(|e| !matches!(e, Error::InvalidModuleRequest { .. })) {
            self.stage = Stage::Done;
        }
        Some(result)
    }
}

impl Iterator for InteractiveModuleRequests<'_> {
    type Item = Result<ModuleRequest>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stage {
                Stage::Database => {
                    self.stage = Stage::FirstModule;
                    match self.ask_database() {
                        Ok(Some(request)) => return Some(Ok(request)),
                        Ok(None) => continue,
                        Err(e) => return self.fail(Err(e)),
                    }
                }
                Stage::FirstModule | Stage::AnotherModule => {
                    let prompt = if self.stage == Stage::FirstModule {
                        "Do you want to create a module?"
                    } else {
                        "Do you want to create another module?"
                    };
                    match self.confirm(prompt) {
                        Ok(true) => {
                            self.stage = Stage::AnotherModule;
                            let request = self.ask_module();
                            return self.fail(request);
                        }
                        Ok(false) => {
                            self.stage = Stage::Done;
                            return None;
                        }
                        Err(e) => return self.fail(Err(e)),
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}
