use std::collections::BTreeMap;

use derive_setters::Setters;
use serde_json::Value;
use strum_macros::{Display, EnumString};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text(String),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Text(_) => "text/plain",
        }
    }
}

/// One fully-formed call to z/OSMF, built per operation and dropped once the
/// response status has been checked.
#[derive(Debug, Clone, PartialEq, Setters)]
#[setters(strip_option)]
pub struct OperationRequest {
    pub method: Method,
    /// Absolute URL, query string included.
    pub url: Url,
    /// Headers specific to this operation. Session-wide headers are added by
    /// the transport.
    pub headers: BTreeMap<String, String>,
    pub body: Option<RequestBody>,
    /// Status codes that count as success.
    pub expected: Vec<u16>,
}

impl OperationRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: BTreeMap::new(),
            body: None,
            expected: vec![200],
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn json(self, value: Value) -> Self {
        self.body(RequestBody::Json(value))
    }

    pub fn text(self, value: impl Into<String>) -> Self {
        self.body(RequestBody::Text(value.into()))
    }

    pub fn accepts(&self, status: u16) -> bool {
        self.expected.contains(&status)
    }

    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }
}
