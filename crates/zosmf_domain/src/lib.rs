mod dataset;
mod enq;
mod error;
mod member;
mod name;
mod profile;
mod request;
mod response;
mod uss;
pub mod validate;
mod zfs;

pub use dataset::*;
pub use enq::*;
pub use error::*;
pub use member::*;
pub use name::*;
pub use profile::*;
pub use request::*;
pub use response::*;
pub use uss::*;
pub use zfs::*;
