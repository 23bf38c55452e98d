use tracing::instrument;
use zosmf_domain::{
    ConnectionProfile, DatasetOptions, FileSystemFilter, MemberListOptions, MountOptions,
    UssCreateOptions, ZfsOptions, ZosmfResponse,
};

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::handler::RequestHandler;
use crate::http::HttpTransport;
use crate::transport::Transport;
use crate::{datasets, uss, zfs};

/// Entry point for every file, filesystem and dataset operation.
///
/// Each method validates its arguments, builds one request and awaits exactly
/// one transport call. Nothing is cached between calls.
pub struct Files<T = HttpTransport> {
    profile: ConnectionProfile,
    endpoint: Endpoint,
    handler: RequestHandler<T>,
}

impl Files<HttpTransport> {
    pub fn new(profile: ConnectionProfile) -> Result<Self> {
        let transport = HttpTransport::new(&profile)?;
        Self::with_transport(profile, transport)
    }
}

impl<T: Transport> Files<T> {
    pub fn with_transport(profile: ConnectionProfile, transport: T) -> Result<Self> {
        let endpoint = Endpoint::new(profile.base_url()?);
        Ok(Self { profile, endpoint, handler: RequestHandler::new(transport) })
    }

    pub fn profile(&self) -> &ConnectionProfile {
        &self.profile
    }

    pub fn transport(&self) -> &T {
        self.handler.transport()
    }

    #[instrument(skip(self))]
    pub async fn delete_uss(&self, path: &str, recursive: bool) -> Result<ZosmfResponse> {
        let request = uss::delete(&self.endpoint, path, recursive)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_files(&self, path: &str) -> Result<ZosmfResponse> {
        let request = uss::list(&self.endpoint, path)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_file_content(&self, path: &str) -> Result<ZosmfResponse> {
        let request = uss::read(&self.endpoint, path)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self, data))]
    pub async fn write_to_uss(&self, path: &str, data: &str) -> Result<ZosmfResponse> {
        let request = uss::write(&self.endpoint, path, data)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn create_uss(
        &self,
        path: &str,
        options: &UssCreateOptions,
    ) -> Result<ZosmfResponse> {
        let request = uss::create(&self.endpoint, path, options)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn create_zfs_file_system(
        &self,
        name: &str,
        options: &ZfsOptions,
    ) -> Result<ZosmfResponse> {
        let request = zfs::create(&self.endpoint, name, options)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_zfs_file_system(&self, name: &str) -> Result<ZosmfResponse> {
        let request = zfs::delete(&self.endpoint, name)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn mount_file_system(
        &self,
        name: &str,
        mount_point: &str,
        options: &MountOptions,
    ) -> Result<ZosmfResponse> {
        let request = zfs::mount(&self.endpoint, name, mount_point, options)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn unmount_file_system(&self, name: &str) -> Result<ZosmfResponse> {
        let request = zfs::unmount(&self.endpoint, name)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_unix_file_systems(&self, filter: &FileSystemFilter) -> Result<ZosmfResponse> {
        let request = zfs::list(&self.endpoint, filter)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn rename_dataset(&self, old: &str, new: &str) -> Result<ZosmfResponse> {
        let request = datasets::rename(&self.endpoint, old, new)?;
        self.handler.perform_request(request).await
    }

    /// `enq` is `EXCLU` or `SHRW`; `None` leaves it out of the request.
    #[instrument(skip(self))]
    pub async fn rename_dataset_member(
        &self,
        dsn: &str,
        old_member: &str,
        new_member: &str,
        enq: Option<&str>,
    ) -> Result<ZosmfResponse> {
        let request = datasets::rename_member(&self.endpoint, dsn, old_member, new_member, enq)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn create_data_set(
        &self,
        name: &str,
        options: DatasetOptions,
    ) -> Result<ZosmfResponse> {
        let request = datasets::create(&self.endpoint, name, options)?;
        self.handler.perform_request(request).await
    }

    /// Creates a dataset from one of the preset templates: `partitioned`,
    /// `sequential`, `classic`, `c` or `binary`.
    #[instrument(skip(self))]
    pub async fn create_default_data_set(
        &self,
        name: &str,
        default_type: &str,
    ) -> Result<ZosmfResponse> {
        let request = datasets::create_default(&self.endpoint, name, default_type)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_dsn(&self, pattern: &str, return_attributes: bool) -> Result<ZosmfResponse> {
        let request = datasets::list(&self.endpoint, pattern, return_attributes)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn list_dsn_members(
        &self,
        dsn: &str,
        options: &MemberListOptions,
    ) -> Result<ZosmfResponse> {
        let request = datasets::list_members(&self.endpoint, dsn, options)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn get_dsn_content(&self, dsn: &str) -> Result<ZosmfResponse> {
        let request = datasets::read(&self.endpoint, dsn)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self, data))]
    pub async fn write_to_dsn(&self, dsn: &str, data: &str) -> Result<ZosmfResponse> {
        let request = datasets::write(&self.endpoint, dsn, data)?;
        self.handler.perform_request(request).await
    }

    #[instrument(skip(self))]
    pub async fn delete_data_set(
        &self,
        dsn: &str,
        volume: Option<&str>,
        member: Option<&str>,
    ) -> Result<ZosmfResponse> {
        let request = datasets::delete(&self.endpoint, dsn, volume, member)?;
        self.handler.perform_request(request).await
    }
}
