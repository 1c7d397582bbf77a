pub mod common;
pub mod records;
pub mod service;

pub use common::{Error, Result};
