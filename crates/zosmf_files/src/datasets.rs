//! Requests against `/zosmf/restfiles/ds`: sequential and partitioned
//! datasets and their members.

use serde::Serialize;
use serde_json::json;
use zosmf_domain::validate::{validate_default_dataset_type, validate_enq};
use zosmf_domain::{
    DatasetName, DatasetOptions, EnqMode, MemberListOptions, MemberName, Method, OperationRequest,
};

use crate::endpoint::Endpoint;
use crate::error::Result;

const DS: &str = "ds";

#[derive(Serialize)]
struct FromDataset<'a> {
    dsn: &'a DatasetName,
    #[serde(skip_serializing_if = "Option::is_none")]
    member: Option<&'a MemberName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enq: Option<EnqMode>,
}

#[derive(Serialize)]
struct RenameBody<'a> {
    request: &'static str,
    #[serde(rename = "from-dataset")]
    from_dataset: FromDataset<'a>,
}

impl<'a> RenameBody<'a> {
    fn new(from_dataset: FromDataset<'a>) -> Self {
        Self { request: "rename", from_dataset }
    }
}

pub(crate) fn rename(endpoint: &Endpoint, old: &str, new: &str) -> Result<OperationRequest> {
    let old = DatasetName::new(old);
    let new = DatasetName::new(new);
    let body = RenameBody::new(FromDataset { dsn: &old, member: None, enq: None });

    Ok(OperationRequest::new(Method::Put, endpoint.url(&[DS, new.as_str()])?)
        .json(json!(body))
        .expected(vec![200]))
}

/// `enq` is checked first; an unknown mode fails before any URL or body is
/// built.
pub(crate) fn rename_member(
    endpoint: &Endpoint,
    dsn: &str,
    old_member: &str,
    new_member: &str,
    enq: Option<&str>,
) -> Result<OperationRequest> {
    let enq = validate_enq(enq)?;
    let dsn = DatasetName::new(dsn);
    let old_member = MemberName::new(old_member);
    let new_member = MemberName::new(new_member);
    let body = RenameBody::new(FromDataset { dsn: &dsn, member: Some(&old_member), enq });

    let resource = dsn.with_member(&new_member);
    Ok(OperationRequest::new(Method::Put, endpoint.url(&[DS, resource.as_str()])?)
        .json(json!(body))
        .expected(vec![200]))
}

pub(crate) fn create(
    endpoint: &Endpoint,
    name: &str,
    options: DatasetOptions,
) -> Result<OperationRequest> {
    let options = options.validate()?;
    let name = DatasetName::new(name);
    Ok(OperationRequest::new(Method::Post, endpoint.url(&[DS, name.as_str()])?)
        .json(json!(options))
        .expected(vec![201]))
}

pub(crate) fn create_default(
    endpoint: &Endpoint,
    name: &str,
    default_type: &str,
) -> Result<OperationRequest> {
    let default_type = validate_default_dataset_type(default_type)?;
    create(endpoint, name, default_type.template())
}

pub(crate) fn list(
    endpoint: &Endpoint,
    pattern: &str,
    return_attributes: bool,
) -> Result<OperationRequest> {
    let url = endpoint.url_with_query(&[DS], &[("dslevel", pattern.trim())])?;
    let request = OperationRequest::new(Method::Get, url);
    if return_attributes {
        Ok(request.header("X-IBM-Attributes", "base"))
    } else {
        Ok(request)
    }
}

pub(crate) fn list_members(
    endpoint: &Endpoint,
    dsn: &str,
    options: &MemberListOptions,
) -> Result<OperationRequest> {
    let dsn = DatasetName::new(dsn);
    let url = endpoint.url_with_query(&[DS, dsn.as_str(), "member"], &options.query_pairs())?;
    let request = OperationRequest::new(Method::Get, url);
    match options.max_items {
        Some(max_items) => Ok(request.header("X-IBM-Max-Items", max_items.to_string())),
        None => Ok(request),
    }
}

pub(crate) fn read(endpoint: &Endpoint, dsn: &str) -> Result<OperationRequest> {
    let dsn = DatasetName::new(dsn);
    Ok(OperationRequest::new(Method::Get, endpoint.url(&[DS, dsn.as_str()])?))
}

pub(crate) fn write(endpoint: &Endpoint, dsn: &str, data: &str) -> Result<OperationRequest> {
    let dsn = DatasetName::new(dsn);
    Ok(OperationRequest::new(Method::Put, endpoint.url(&[DS, dsn.as_str()])?)
        .text(data)
        .expected(vec![201, 204]))
}

/// `ds/[-(VOLUME)/]DSN[(MEMBER)]`
pub(crate) fn delete(
    endpoint: &Endpoint,
    dsn: &str,
    volume: Option<&str>,
    member: Option<&str>,
) -> Result<OperationRequest> {
    let dsn = DatasetName::new(dsn);
    let resource = match member.map(MemberName::new) {
        Some(member) => dsn.with_member(&member),
        None => dsn.to_string(),
    };
    let volume = volume.map(|volume| format!("-({})", volume.trim()));

    let mut segments = vec![DS];
    if let Some(volume) = &volume {
        segments.push(volume);
    }
    segments.push(&resource);

    Ok(OperationRequest::new(Method::Delete, endpoint.url(&segments)?)
        .expected(vec![200, 202, 204]))
}
