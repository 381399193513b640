use crate::error::Result;
use std::path::Path;

/// Trait for placeholder rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering (a JSON object)
    ///
    /// # Returns
    /// * `String` - Rendered template string; tokens without a binding stay verbatim
    fn render(&self, template: &str, context: &serde_json::Value) -> String;

    /// Renders a path with the given context.
    ///
    /// # Arguments
    /// * `template_path` - Path to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered path as string
    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String>;
}
