use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{method} {url} failed: {source}"))]
    RequestError {
        url: String,
        method: String,
        source: ureq::Error,
    },
    #[snafu(display("{message}"))]
    ResponseError { message: String },
    #[snafu(display("{message}: {source}"))]
    ServiceError {
        message: String,
        source: Box<dyn std::error::Error>,
    },
    #[snafu(display("Invalid record type [{kind}], must be PTR"))]
    RecordTypeError { kind: String },
    #[snafu(display("{operation} on a PTR record requires a server"))]
    ServerRequiredError { operation: String },
    #[snafu(display("{operation} is not supported for {kind} records"))]
    UnsupportedOperationError { operation: String, kind: String },
    #[snafu(display("{operation} requires a record id"))]
    MissingIdError { operation: String },
    #[snafu(display("{prefix}: {message}"))]
    ConfigError { message: String, prefix: String },
}

pub type Result<T> = std::result::Result<T, Error>;
