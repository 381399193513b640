use crate::{error::Result, ext::PathExt, renderer::interface::TemplateRenderer};
use serde_json::Value;
use std::path::Path;

/// Literal `{name}` substitution.
///
/// Only scalar bindings are substituted; anything else, including unknown names and
/// unbalanced braces, is copied through untouched. Substituted values are never
/// rescanned, so a value containing `{...}` is written as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }

    fn lookup(context: &Value, name: &str) -> Option<String> {
        match context.get(name)? {
            Value::String(s) => Some(s.clone()),
            value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, context: &Value) -> String {
        let mut rendered = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            match after.find(['{', '}']) {
                Some(end) if after[end..].starts_with('}') => {
                    let name = &after[..end];
                    match Self::lookup(context, name) {
                        Some(value) => rendered.push_str(&value),
                        None => {
                            rendered.push('{');
                            rendered.push_str(name);
                            rendered.push('}');
                        }
                    }
                    rest = &after[end + 1..];
                }
                _ => {
                    rendered.push('{');
                    rest = after;
                }
            }
        }

        rendered.push_str(rest);
        rendered
    }

    fn render_path(&self, template_path: &Path, context: &Value) -> Result<String> {
        let path_str = template_path.to_str_checked()?;
        Ok(self.render(path_str, context))
    }
}
