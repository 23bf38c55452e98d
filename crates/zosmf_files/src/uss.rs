//! Requests against `/zosmf/restfiles/fs`, the z/OS UNIX file tree.

use serde_json::json;
use zosmf_domain::{Method, OperationRequest, UssCreateOptions};

use crate::endpoint::Endpoint;
use crate::error::Result;

const FS: &str = "fs";

pub(crate) fn delete(endpoint: &Endpoint, path: &str, recursive: bool) -> Result<OperationRequest> {
    let request =
        OperationRequest::new(Method::Delete, endpoint.url(&[FS, path])?).expected(vec![204]);
    if recursive {
        Ok(request.header("X-IBM-Option", "recursive"))
    } else {
        Ok(request)
    }
}

pub(crate) fn list(endpoint: &Endpoint, path: &str) -> Result<OperationRequest> {
    let url = endpoint.url_with_query(&[FS], &[("path", path)])?;
    Ok(OperationRequest::new(Method::Get, url))
}

pub(crate) fn read(endpoint: &Endpoint, path: &str) -> Result<OperationRequest> {
    Ok(OperationRequest::new(Method::Get, endpoint.url(&[FS, path])?))
}

pub(crate) fn write(endpoint: &Endpoint, path: &str, data: &str) -> Result<OperationRequest> {
    Ok(OperationRequest::new(Method::Put, endpoint.url(&[FS, path])?)
        .text(data)
        .expected(vec![201, 204]))
}

pub(crate) fn create(
    endpoint: &Endpoint,
    path: &str,
    options: &UssCreateOptions,
) -> Result<OperationRequest> {
    Ok(OperationRequest::new(Method::Post, endpoint.url(&[FS, path])?)
        .json(json!(options))
        .expected(vec![201]))
}
