//! Requests against `/zosmf/restfiles/mfs`: zFS aggregates and mounts.

use serde::Serialize;
use serde_json::json;
use zosmf_domain::{FileSystemFilter, Method, MountOptions, OperationRequest, ZfsOptions};

use crate::endpoint::Endpoint;
use crate::error::Result;

const MFS: &str = "mfs";
const ZFS: &str = "zfs";

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct MountBody<'a> {
    action: &'static str,
    mount_point: &'a str,
    #[serde(flatten)]
    options: &'a MountOptions,
}

/// Fails before building anything when `options` are out of range.
pub(crate) fn create(
    endpoint: &Endpoint,
    name: &str,
    options: &ZfsOptions,
) -> Result<OperationRequest> {
    options.validate()?;
    Ok(OperationRequest::new(Method::Post, endpoint.url(&[MFS, ZFS, name])?)
        .json(json!(options))
        .expected(vec![201]))
}

pub(crate) fn delete(endpoint: &Endpoint, name: &str) -> Result<OperationRequest> {
    Ok(OperationRequest::new(Method::Delete, endpoint.url(&[MFS, ZFS, name])?).expected(vec![204]))
}

pub(crate) fn mount(
    endpoint: &Endpoint,
    name: &str,
    mount_point: &str,
    options: &MountOptions,
) -> Result<OperationRequest> {
    let body = MountBody { action: "mount", mount_point, options };
    Ok(OperationRequest::new(Method::Put, endpoint.url(&[MFS, name])?)
        .json(json!(body))
        .expected(vec![204]))
}

pub(crate) fn unmount(endpoint: &Endpoint, name: &str) -> Result<OperationRequest> {
    Ok(OperationRequest::new(Method::Put, endpoint.url(&[MFS, name])?)
        .json(json!({"action": "unmount"}))
        .expected(vec![204]))
}

pub(crate) fn list(endpoint: &Endpoint, filter: &FileSystemFilter) -> Result<OperationRequest> {
    let url = endpoint.url_with_query(&[MFS], &filter.query_pairs())?;
    Ok(OperationRequest::new(Method::Get, url))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;
    use zosmf_domain::MountMode;

    use super::*;
    use crate::Error;

    fn endpoint() -> Endpoint {
        Endpoint::new(Url::parse("https://mock-url.com/zosmf/restfiles/").unwrap())
    }

    #[test]
    fn test_create_body() {
        let fixture = ZfsOptions::new(16_777_213, 16_777_215).perms(100);
        let actual = create(&endpoint(), "file_system_name", &fixture).unwrap();

        assert_eq!(actual.method, Method::Post);
        assert_eq!(actual.url.path(), "/zosmf/restfiles/mfs/zfs/file_system_name");
        assert_eq!(
            actual.json_body(),
            Some(&json!({"perms": 100, "cylsPri": 16777213, "cylsSec": 16777215}))
        );
        assert_eq!(actual.expected, vec![201]);
    }

    #[test]
    fn test_create_rejects_negative_perms() {
        let fixture = ZfsOptions::new(16_777_213, 16_777_215).perms(-1);
        let actual = create(&endpoint(), "file_system_name", &fixture).unwrap_err();

        assert!(matches!(actual, Error::Validation(_)));
        assert_eq!(
            actual.to_string(),
            "Invalid zos-files create command 'perms' option: -1"
        );
    }

    #[test]
    fn test_create_rejects_large_allocation() {
        let fixture = ZfsOptions::new(16_777_213, 16_777_216).perms(775);
        let actual = create(&endpoint(), "file_system_name", &fixture).unwrap_err();
        assert_eq!(actual.to_string(), "Maximum allocation quantity of 16777215 exceeded");
    }

    #[test]
    fn test_mount_body() {
        let options = MountOptions::default().mode(MountMode::Rdwr);
        let actual = mount(&endpoint(), "OMVS.ZFS", "/u/mnt", &options).unwrap();

        assert_eq!(actual.method, Method::Put);
        assert_eq!(actual.url.path(), "/zosmf/restfiles/mfs/OMVS.ZFS");
        assert_eq!(
            actual.json_body(),
            Some(&json!({
                "action": "mount",
                "mount-point": "/u/mnt",
                "fs-type": "zFS",
                "mode": "rdwr"
            }))
        );
        assert_eq!(actual.expected, vec![204]);
    }

    #[test]
    fn test_unmount_body() {
        let actual = unmount(&endpoint(), "OMVS.ZFS").unwrap();
        assert_eq!(actual.json_body(), Some(&json!({"action": "unmount"})));
        assert_eq!(actual.expected, vec![204]);
    }

    #[test]
    fn test_delete() {
        let actual = delete(&endpoint(), "OMVS.ZFS").unwrap();
        assert_eq!(actual.method, Method::Delete);
        assert_eq!(actual.url.path(), "/zosmf/restfiles/mfs/zfs/OMVS.ZFS");
        assert_eq!(actual.expected, vec![204]);
    }

    #[test]
    fn test_list_filters() {
        let actual = list(&endpoint(), &FileSystemFilter::fsname_only("OMVS.ZFS")).unwrap();
        assert_eq!(actual.url.query(), Some("fsname=OMVS.ZFS"));

        let actual = list(&endpoint(), &FileSystemFilter::default()).unwrap();
        assert_eq!(actual.url.as_str(), "https://mock-url.com/zosmf/restfiles/mfs");
    }
}
