//! Greeting resource template (`greeting://{name}`).

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

pub struct GreetingTemplate;

impl GreetingTemplate {
    pub const URI_TEMPLATE: &'static str = "greeting://{name}";
    const PREFIX: &'static str = "greeting://";

    pub fn template() -> ResourceTemplate {
        RawResourceTemplate {
            uri_template: Self::URI_TEMPLATE.to_string(),
            name: "Greeting".to_string(),
            title: Some("Personalized Greeting".to_string()),
            description: Some("Get a personalized greeting".to_string()),
            mime_type: Some("text/plain".to_string()),
        }
        .no_annotation()
    }

    /// Render the greeting for a concrete URI, or `None` if the URI does not
    /// match the template. `{name}` is a single path segment.
    pub fn render(uri: &str) -> Option<String> {
        let name = uri.strip_prefix(Self::PREFIX)?;
        if name.is_empty() || name.contains('/') {
            return None;
        }
        Some(format!("Hello, {name}! Welcome to the Terra MCP server!"))
    }
}
