use serde::de::DeserializeOwned;
use snafu::prelude::*;

use crate::common::{key_file_or_string, RequestSnafu, Result, ServiceSnafu};

use super::config::Config;

pub const SERVICE_NAME: &str = "cloudDNS";

pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl ToString for Method {
    fn to_string(&self) -> String {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
        .to_string()
    }
}

impl From<Method> for String {
    fn from(value: Method) -> Self {
        value.to_string()
    }
}

/// Synchronous client for one tenant's Cloud DNS endpoint.
pub struct DnsService {
    endpoint: url::Url,
    token: String,
    name: String,
}

impl DnsService {
    pub fn new(endpoint: url::Url, token: impl Into<String>) -> Self {
        Self {
            endpoint,
            token: token.into(),
            name: SERVICE_NAME.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        return &self.name;
    }

    pub fn endpoint(&self) -> &url::Url {
        return &self.endpoint;
    }

    fn with_headers(&self, req: ureq::Request) -> ureq::Request {
        req.set("X-Auth-Token", &self.token)
            .set("Content-Type", "application/json; charset=utf8")
            .set("Accept", "application/json")
    }

    /// Composes a URL under the tenant endpoint.
    pub(crate) fn url(&self, segments: &[&str], params: &[(&str, &str)]) -> url::Url {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .expect("endpoint should be a HTTP URL")
            .extend(segments);
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }
        url
    }

    pub(crate) fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &url::Url,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        tracing::debug!(
            url = url.as_str(),
            method = method.to_string(),
            service = self.name.as_str(),
            "Sending request"
        );
        let req = self.with_headers(match &method {
            Method::Get => ureq::get(url.as_str()),
            Method::Post => ureq::post(url.as_str()),
            Method::Put => ureq::put(url.as_str()),
            Method::Delete => ureq::delete(url.as_str()),
        });

        let resp = match body {
            Some(body) => req.send_json(body),
            None => req.call(),
        }
        .context(RequestSnafu {
            url: url.as_str(),
            method,
        })?;

        resp.into_json().boxed_local().context(ServiceSnafu {
            message: "Failed to deserialize response",
        })
    }
}

impl TryFrom<Config> for DnsService {
    type Error = crate::common::Error;

    fn try_from(value: Config) -> Result<Self> {
        let token = key_file_or_string(value.token, SERVICE_NAME.into())?;
        Ok(Self {
            endpoint: value.endpoint,
            token,
            name: value.service_name,
        })
    }
}
