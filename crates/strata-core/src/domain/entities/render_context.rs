//! Variable substitution context for artifact templates.

use std::collections::BTreeMap;

use crate::domain::value_objects::Identifier;

/// Variables available to a template.
///
/// All built-in variables are `SCREAMING_SNAKE_CASE`.
///
/// | Variable         | Example (`billing`, `my_page`) |
/// |------------------|--------------------------------|
/// | `FEATURE`        | `billing`                      |
/// | `NAME`           | `my_page`                      |
/// | `NAME_PASCAL`    | `MyPage`                       |
/// | `NAME_CAMEL`     | `myPage`                       |
/// | `PROVIDER`       | `billing` (pages only)         |
/// | `PROVIDER_CAMEL` | `billing` (pages only)         |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(feature: &Identifier, name: &Identifier) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("FEATURE", feature.to_string());
        variables.insert("NAME", name.to_string());
        variables.insert("NAME_PASCAL", name.pascal());
        variables.insert("NAME_CAMEL", name.camel());
        Self { variables }
    }

    /// Record the state provider a page should watch.
    pub fn with_provider(mut self, provider: &Identifier) -> Self {
        self.variables.insert("PROVIDER", provider.to_string());
        self.variables.insert("PROVIDER_CAMEL", provider.camel());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
