//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `requests`: Interactive source of module requests
//! - `variant`: Interactive selection of a remote template variant

pub mod dialoguer;
pub mod interface;
pub mod requests;
pub mod variant;

#[cfg(test)]
pub(crate) mod scripted;

pub use interface::*;
pub use requests::InteractiveModuleRequests;
pub use variant::{select_variant, VariantSelection};

use crate::prompt::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
