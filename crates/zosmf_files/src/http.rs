use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use zosmf_domain::{ConnectionProfile, Method, OperationRequest, RequestBody, ZosmfResponse};

use crate::error::Result;
use crate::transport::Transport;

/// z/OSMF refuses state-changing requests that lack this header.
const CSRF_HEADER: &str = "X-CSRF-ZOSMF-HEADER";

/// [`Transport`] over a pooled `reqwest` client with basic auth.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    user: String,
    password: String,
}

impl HttpTransport {
    pub fn new(profile: &ConnectionProfile) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CSRF_HEADER, HeaderValue::from_static(""));

        let mut builder = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!profile.reject_unauthorized())
            .redirect(Policy::limited(10));
        if let Some(timeout) = profile.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            user: profile.user().to_string(),
            password: profile.password().to_string(),
        })
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &OperationRequest) -> Result<ZosmfResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), request.url.clone())
            .basic_auth(&self.user, Some(&self.password));

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_TYPE, body.content_type());
            builder = match body {
                RequestBody::Json(value) => builder.body(value.to_string()),
                RequestBody::Text(text) => builder.body(text.clone()),
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(ZosmfResponse::from_parts(status, headers, body))
    }
}
