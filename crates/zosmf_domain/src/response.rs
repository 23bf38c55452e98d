use std::collections::BTreeMap;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Bytes(Vec<u8>),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZosmfResponse {
    pub status: u16,
    /// Header names are lower-cased.
    pub headers: BTreeMap<String, String>,
    pub body: ResponseBody,
}

impl ZosmfResponse {
    /// Decodes `body` according to the `content-type` header: JSON, any
    /// `text/*`, or raw bytes.
    pub fn from_parts(status: u16, headers: BTreeMap<String, String>, body: Vec<u8>) -> Self {
        let content_type = headers
            .get("content-type")
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        let body = if body.is_empty() {
            ResponseBody::Empty
        } else if content_type.contains("json") {
            serde_json::from_slice(&body).map(ResponseBody::Json).unwrap_or_else(|_| {
                ResponseBody::Text(String::from_utf8_lossy(&body).into_owned())
            })
        } else if content_type.starts_with("text/") {
            ResponseBody::Text(String::from_utf8_lossy(&body).into_owned())
        } else {
            ResponseBody::Bytes(body)
        };

        Self { status, headers, body }
    }

    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Body rendered for error messages and display.
    pub fn body_string(&self) -> String {
        match &self.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            ResponseBody::Empty => String::new(),
        }
    }
}
