//! AI documentation search tool.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::TerraTool;
use crate::domains::terra::{ApiRequest, Params};

/// Returned when the search function answers without a `content` field.
pub const NO_RESPONSE_FALLBACK: &str = "No response was received.";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocumentationParams {
    /// Natural-language question about the Terra API.
    #[schemars(description = "The search query, written in natural language")]
    pub query: String,
}

/// Searches the Terra documentation with an AI model.
#[derive(Debug, Clone)]
pub struct SearchDocumentationTool;

impl TerraTool for SearchDocumentationTool {
    const NAME: &'static str = "search_documentation";
    const DESCRIPTION: &'static str = "Search documentation using AI. Use this whenever you are unsure about the API or how to use it. Ask questions like \"How do I build an application that integrates with Terra?\" or \"What is the best way to integrate with the API?\". Returns the answer from the AI model.";

    type Params = SearchDocumentationParams;

    fn build_request(params: Self::Params, _dev_id: Option<&str>) -> ApiRequest {
        ApiRequest::docs_search().body(Params::new().with("query", params.query))
    }

    fn unwrap_response(body: Value) -> Value {
        match body {
            Value::Object(mut map) => map
                .remove("content")
                .unwrap_or_else(|| Value::String(NO_RESPONSE_FALLBACK.to_string())),
            _ => Value::String(NO_RESPONSE_FALLBACK.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::terra::{Method, Origin};
    use crate::domains::tools::definitions::common::execute;
    use crate::domains::tools::definitions::common::test_support::{first_text, mock_client};
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_search_request_shape() {
        let params = SearchDocumentationParams {
            query: "x".to_string(),
        };
        let request = SearchDocumentationTool::build_request(params, Some("dev"));

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.origin, Origin::DocsSearch);
        assert_eq!(request.body.unwrap().to_json(), json!({ "query": "x" }));
    }

    #[test]
    fn test_unwrap_extracts_content() {
        let value = SearchDocumentationTool::unwrap_response(json!({ "content": "answer" }));
        assert_eq!(value, json!("answer"));
    }

    #[test]
    fn test_unwrap_falls_back_when_missing() {
        let value = SearchDocumentationTool::unwrap_response(json!({}));
        assert_eq!(value, json!("No response was received."));
    }

    #[test]
    fn test_search_end_to_end() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/search")
            .match_header("x-api-key", "test-api-key")
            .match_body(Matcher::Json(json!({ "query": "How do webhooks work?" })))
            .with_status(200)
            .with_body(r#"{"content":"Add a webhook destination."}"#)
            .create();

        let client = mock_client(&server.url());
        let result = execute::<SearchDocumentationTool>(
            SearchDocumentationParams {
                query: "How do webhooks work?".to_string(),
            },
            &client,
        );

        assert_eq!(first_text(&result), "Add a webhook destination.");
        mock.assert();
    }

    #[test]
    fn test_search_empty_response_uses_fallback() {
        let mut server = Server::new();
        server.mock("POST", "/search").with_status(200).with_body("{}").create();

        let client = mock_client(&server.url());
        let result = execute::<SearchDocumentationTool>(
            SearchDocumentationParams {
                query: "x".to_string(),
            },
            &client,
        );

        assert_eq!(first_text(&result), NO_RESPONSE_FALLBACK);
    }
}
