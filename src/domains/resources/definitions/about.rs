//! Static description of the Terra platform.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct AboutResource;

impl ResourceDefinition for AboutResource {
    const URI: &'static str = "config://about";
    const NAME: &'static str = "About Terra";
    const DESCRIPTION: &'static str = "Get about information";
    const MIME_TYPE: &'static str = "text/plain";

    fn content() -> ResourceContent {
        ResourceContent::Text(ABOUT.to_string())
    }
}

const ABOUT: &str = "The Terra API standardizes health and fitness data, allowing you to use it in a structured and efficient manner, no matter the source. \
It allows developers to integrate and manage their data sources easily.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_about_content() {
        match AboutResource::content() {
            ResourceContent::Text(text) => {
                assert!(text.starts_with("The Terra API standardizes"));
                assert!(text.contains("source. It allows"));
            }
            _ => panic!("Expected Text content"),
        }
    }
}
