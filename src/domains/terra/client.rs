//! Blocking Terra API client.
//!
//! The client only holds configuration. A `reqwest::blocking::Client` is
//! built for each call, on whichever thread performs it, so callers must run
//! [`TerraClient::execute`] and [`TerraClient::fetch_documentation`] outside
//! the async runtime (tool routes use `spawn_blocking`).

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::error::ApiError;
use super::request::{ApiRequest, Origin};
use crate::core::config::{ApiConfig, Config, CredentialsConfig};

/// Client identifier sent with every authenticated call.
pub const CLIENT_USER_AGENT: &str = "Terra-MCP/1.0.0";

const API_KEY_HEADER: &str = "x-api-key";
const DEV_ID_HEADER: &str = "dev-id";

/// Terra API client.
#[derive(Debug, Clone)]
pub struct TerraClient {
    api: ApiConfig,
    credentials: CredentialsConfig,
}

impl TerraClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api: config.api.clone(),
            credentials: config.credentials.clone(),
        }
    }

    /// Configured credentials.
    pub fn credentials(&self) -> &CredentialsConfig {
        &self.credentials
    }

    /// Configured developer id, used as the default `dev_id` parameter.
    pub fn dev_id(&self) -> Option<&str> {
        self.credentials.dev_id.as_deref()
    }

    /// Full URL for a request, including its query string.
    pub fn url_for(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let mut url = match request.origin {
            Origin::Api => format!("{}{}", self.api.base_url, request.path),
            Origin::DocsSearch => self.api.docs_search_url.clone(),
        };

        if let Some(query) = request.query.as_ref().filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&serde_urlencoded::to_string(query.to_query_pairs())?);
        }

        Ok(url)
    }

    /// Static headers: API key, developer id and client identifier.
    ///
    /// A credential that is not configured is left out rather than sent empty.
    pub fn default_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        for (name, value) in [
            (API_KEY_HEADER, &self.credentials.api_key),
            (DEV_ID_HEADER, &self.credentials.dev_id),
        ] {
            if let Some(value) = value {
                let value = HeaderValue::from_str(value)
                    .map_err(|e| ApiError::Client(format!("invalid {name} header: {e}")))?;
                headers.insert(HeaderName::from_static(name), value);
            }
        }

        Ok(headers)
    }

    fn http_client(&self) -> Result<Client, ApiError> {
        Client::builder()
            .timeout(Duration::from_secs(self.api.timeout_secs))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))
    }

    /// Perform one authenticated call and parse the body as JSON.
    ///
    /// Non-2xx statuses and network failures are returned as errors; nothing
    /// is retried. A success body that is not JSON (including an empty one)
    /// is a [`ApiError::MalformedResponse`].
    #[instrument(skip(self, request), fields(method = request.method.as_str(), path = request.path))]
    pub fn execute(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let url = self.url_for(request)?;
        let client = self.http_client()?;

        let mut builder = client
            .request(request.method.into(), &url)
            .headers(self.default_headers()?);
        if let Some(body) = &request.body {
            builder = builder.json(&body.to_json());
        }

        debug!("Sending Terra request");
        let response = builder.send().map_err(|e| ApiError::network(&url, e))?;
        let status = response.status();
        let text = response.text().map_err(|e| ApiError::network(&url, e))?;

        if !status.is_success() {
            warn!("Terra API returned HTTP {}", status.as_u16());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Fetch a plain-text documentation chunk (e.g. `v5`, `rt`).
    ///
    /// Unauthenticated. Anything but HTTP 200 is an error; the body of a
    /// failed response is never returned.
    #[instrument(skip(self))]
    pub fn fetch_documentation(&self, chunk: &str) -> Result<String, ApiError> {
        let url = format!("{}/{}.txt", self.api.docs_base_url, chunk);
        let client = self.http_client()?;

        let response = client.get(&url).send().map_err(|e| ApiError::network(&url, e))?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("Documentation fetch returned HTTP {}", status.as_u16());
            return Err(ApiError::DocumentationUnavailable {
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| ApiError::network(&url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::terra::request::Params;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn client_for(server: &Server, api_key: Option<&str>, dev_id: Option<&str>) -> TerraClient {
        let mut config = Config::default();
        config.api.base_url = server.url();
        config.api.docs_search_url = format!("{}/search", server.url());
        config.api.docs_base_url = format!("{}/chunked", server.url());
        config.credentials.api_key = api_key.map(String::from);
        config.credentials.dev_id = dev_id.map(String::from);
        TerraClient::new(&config)
    }

    #[test]
    fn test_url_for_api_and_query() {
        let server = Server::new();
        let client = client_for(&server, None, None);

        let request = ApiRequest::get("/integrations/detailed")
            .query(Params::new().with("sdk", true));
        assert_eq!(
            client.url_for(&request).unwrap(),
            format!("{}/integrations/detailed?sdk=true", server.url())
        );

        let request = ApiRequest::get("/integrations").query(Params::new());
        assert_eq!(
            client.url_for(&request).unwrap(),
            format!("{}/integrations", server.url())
        );
    }

    #[test]
    fn test_execute_sends_static_headers() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/integrations")
            .match_header("x-api-key", "key-1")
            .match_header("dev-id", "dev-1")
            .match_header("user-agent", CLIENT_USER_AGENT)
            .with_status(200)
            .with_body(r#"{"providers":["GARMIN"]}"#)
            .create();

        let client = client_for(&server, Some("key-1"), Some("dev-1"));
        let value = client.execute(&ApiRequest::get("/integrations")).unwrap();

        assert_eq!(value, json!({ "providers": ["GARMIN"] }));
        mock.assert();
    }

    #[test]
    fn test_execute_omits_unset_credentials() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/integrations")
            .match_header("x-api-key", Matcher::Missing)
            .match_header("dev-id", Matcher::Missing)
            .with_status(200)
            .with_body("{}")
            .create();

        let client = client_for(&server, None, None);
        client.execute(&ApiRequest::get("/integrations")).unwrap();
        mock.assert();
    }

    #[test]
    fn test_execute_sends_exact_json_body() {
        let mut server = Server::new();
        let mock = server
            .mock("PATCH", "/dashboard/providers")
            .match_body(Matcher::Json(json!({ "provider": "FITBIT", "active": false })))
            .with_status(200)
            .with_body(r#"{"status":"success"}"#)
            .create();

        let client = client_for(&server, Some("k"), Some("d"));
        let request = ApiRequest::patch("/dashboard/providers")
            .body(Params::new().with("provider", "FITBIT").with("active", false));
        let value = client.execute(&request).unwrap();

        assert_eq!(value["status"], "success");
        mock.assert();
    }

    #[test]
    fn test_execute_non_success_status_fails() {
        let mut server = Server::new();
        server
            .mock("GET", "/dashboard/providers/ranked")
            .with_status(401)
            .with_body(r#"{"message":"unauthorized"}"#)
            .create();

        let client = client_for(&server, None, None);
        let err = client
            .execute(&ApiRequest::get("/dashboard/providers/ranked"))
            .unwrap_err();

        match err {
            ApiError::Status { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("unauthorized"));
            }
            other => panic!("Expected status error, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_malformed_json_fails() {
        let mut server = Server::new();
        server
            .mock("GET", "/integrations")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let client = client_for(&server, None, None);
        let err = client.execute(&ApiRequest::get("/integrations")).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn test_execute_empty_success_body_fails() {
        let mut server = Server::new();
        server
            .mock("DELETE", "/dashboard/providers")
            .with_status(200)
            .with_body("")
            .create();

        let client = client_for(&server, Some("k"), Some("dev"));
        let request = ApiRequest::delete("/dashboard/providers")
            .body(Params::new().with("provider", "OURA"));
        let err = client.execute(&request).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse(_)));
    }

    #[test]
    fn test_execute_docs_search_origin() {
        let mut server = Server::new();
        let mock = server
            .mock("POST", "/search")
            .match_body(Matcher::Json(json!({ "query": "webhooks" })))
            .with_status(200)
            .with_body(r#"{"content":"Use destinations."}"#)
            .create();

        let client = client_for(&server, Some("k"), Some("d"));
        let request = ApiRequest::docs_search().body(Params::new().with("query", "webhooks"));
        let value = client.execute(&request).unwrap();

        assert_eq!(value["content"], "Use destinations.");
        mock.assert();
    }

    #[test]
    fn test_fetch_documentation_success() {
        let mut server = Server::new();
        server
            .mock("GET", "/chunked/v5.txt")
            .with_status(200)
            .with_body("openapi: 3.0.0")
            .create();

        let client = client_for(&server, None, None);
        assert_eq!(client.fetch_documentation("v5").unwrap(), "openapi: 3.0.0");
    }

    #[test]
    fn test_fetch_documentation_non_200_is_error() {
        let mut server = Server::new();
        server
            .mock("GET", "/chunked/rt.txt")
            .with_status(404)
            .with_body("404: Not Found")
            .create();

        let client = client_for(&server, None, None);
        let err = client.fetch_documentation("rt").unwrap_err();

        assert!(matches!(err, ApiError::DocumentationUnavailable { status: 404 }));
        assert!(!err.to_string().contains("Not Found"));
    }
}
