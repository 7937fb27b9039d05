//! Request descriptors for the Terra API.
//!
//! An [`ApiRequest`] is fully formed before any network activity: method,
//! target origin and path, and the query/body parameter maps. [`Params`] is
//! the only way parameters get into a request, and it never records an
//! absent optional value.

use serde_json::{Map, Value};

/// HTTP methods used by the Terra API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Which upstream origin a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// The Terra REST API (`base_url` + path).
    Api,
    /// The AI documentation search function (path is ignored).
    DocsSearch,
}

/// Flat parameter map with omission semantics for optional values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that is always present.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Add a parameter only if it was provided.
    pub fn with_opt<V: Into<Value>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Add a string parameter only if it was provided and is non-empty.
    pub fn with_non_empty(self, key: &str, value: Option<String>) -> Self {
        self.with_opt(key, value.filter(|v| !v.is_empty()))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render values as query-string pairs.
    ///
    /// Strings are used verbatim; other scalars use their JSON text, so
    /// `true` becomes `"true"` and `8080` becomes `"8080"`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(k, v)| {
                let rendered = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (k.clone(), rendered)
            })
            .collect()
    }

    /// The parameters as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.clone())
    }
}

/// A fully formed upstream request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub origin: Origin,
    pub path: &'static str,
    pub query: Option<Params>,
    pub body: Option<Params>,
}

impl ApiRequest {
    fn new(method: Method, path: &'static str) -> Self {
        Self {
            method,
            origin: Origin::Api,
            path,
            query: None,
            body: None,
        }
    }

    pub fn get(path: &'static str) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: &'static str) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: &'static str) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: &'static str) -> Self {
        Self::new(Method::Delete, path)
    }

    /// A POST to the documentation search origin.
    pub fn docs_search() -> Self {
        Self {
            origin: Origin::DocsSearch,
            ..Self::new(Method::Post, "")
        }
    }

    /// Route parameters to the query string.
    pub fn query(mut self, params: Params) -> Self {
        self.query = Some(params);
        self
    }

    /// Route parameters to the JSON body.
    pub fn body(mut self, params: Params) -> Self {
        self.body = Some(params);
        self
    }
}
