//! Client for the z/OSMF REST files interface.
//!
//! ```no_run
//! use zosmf_domain::ConnectionProfile;
//! use zosmf_files::Files;
//!
//! # async fn run() -> zosmf_files::Result<()> {
//! let profile = ConnectionProfile::new("zos.example.com", 443, "IBMUSER", "secret");
//! let files = Files::new(profile)?;
//! files.rename_dataset("MY.OLD.DSN", "MY.NEW.DSN").await?;
//! # Ok(())
//! # }
//! ```

mod datasets;
mod endpoint;
mod error;
mod files;
mod handler;
mod http;
mod mock;
mod transport;
mod uss;
mod zfs;

pub use error::*;
pub use files::*;
pub use handler::*;
pub use http::*;
pub use mock::*;
pub use transport::*;
