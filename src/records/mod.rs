mod kind;
mod models;
mod record;

pub(crate) use kind::*;
pub use models::*;
pub use record::*;
