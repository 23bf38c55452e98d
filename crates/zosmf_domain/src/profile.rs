use std::fmt;
use std::time::Duration;

use derive_setters::Setters;
use url::Url;

use crate::{Error, Result};

pub const RESTFILES_PATH: &str = "/zosmf/restfiles/";

/// Where and as whom to reach z/OSMF.
#[derive(Clone, PartialEq, Eq, Setters)]
#[setters(strip_option, prefix = "with_")]
pub struct ConnectionProfile {
    /// Host name, optionally with a scheme prefix. Without one `https` is used.
    #[setters(skip)]
    host: String,
    port: u16,
    #[setters(skip)]
    user: String,
    #[setters(skip)]
    password: String,
    /// When `false`, server certificates are not verified.
    reject_unauthorized: bool,
    timeout: Option<Duration>,
}

impl ConnectionProfile {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
            reject_unauthorized: true,
            timeout: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn reject_unauthorized(&self) -> bool {
        self.reject_unauthorized
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// `{scheme}://{host}:{port}/zosmf/restfiles/`. A scheme already present
    /// in `host` is kept rather than prefixed a second time.
    pub fn base_url(&self) -> Result<Url> {
        let host = self.host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(Error::InvalidProfile("host is empty".to_string()));
        }

        let origin = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{host}")
        };

        let mut url = Url::parse(&origin)
            .map_err(|e| Error::InvalidProfile(format!("{}: {e}", self.host)))?;
        url.set_port(Some(self.port))
            .map_err(|_| Error::InvalidProfile(format!("{} cannot carry a port", self.host)))?;
        url.set_path(RESTFILES_PATH);
        url.set_query(None);
        Ok(url)
    }
}

impl fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("reject_unauthorized", &self.reject_unauthorized)
            .field("timeout", &self.timeout)
            .finish()
    }
}
