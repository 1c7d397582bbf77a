mod config;
mod error;

pub(crate) use config::*;
pub use error::*;
