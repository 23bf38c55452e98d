mod cli;
mod config;
mod log;
mod run;

pub use cli::*;
pub use config::*;
pub use log::*;
pub use run::*;
