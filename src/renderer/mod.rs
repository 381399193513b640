pub mod interface;
pub mod placeholder;

pub use interface::TemplateRenderer;
pub use placeholder::PlaceholderRenderer;

use crate::constants::PROJECT_NAME_VAR;
use serde_json::{Map, Value};

/// Creates the default renderer.
pub fn get_template_engine() -> Box<dyn TemplateRenderer> {
    Box::new(PlaceholderRenderer::new())
}

/// Placeholder bindings for a project.
pub fn project_context(project_name: &str) -> Value {
    let mut context = Map::new();
    context.insert(PROJECT_NAME_VAR.to_string(), Value::String(project_name.to_string()));
    Value::Object(context)
}
