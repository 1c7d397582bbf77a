use super::service::SERVICE_NAME;

fn default_service_name() -> String {
    SERVICE_NAME.to_string()
}

#[derive(Clone, serde::Deserialize)]
pub struct Config {
    /// Tenant-scoped API endpoint, e.g. https://dns.api.rackspacecloud.com/v1.0/123456
    pub endpoint: url::Url,
    /// Auth token, or @path-to-a-file holding it.
    pub token: String,
    #[serde(default = "default_service_name")]
    pub service_name: String,
}
