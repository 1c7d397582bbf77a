use crate::service::DnsService;

pub const RECORD_KIND_PTR: &str = "PTR";

/// Field set for one DNS resource record. Callers hydrate a record from an
/// existing id or a response payload by filling in whatever they hold.
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordData {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub data: Option<String>,
    pub ttl: Option<u32>,
    pub priority: Option<u32>,
    pub comment: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
}

/// Wire entry serialized into request bodies. Unset fields are omitted.
#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct RecordEntry {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RecordData {
    /// Creatable field set. The id never goes into a create body.
    pub(crate) fn create_entry(&self) -> RecordEntry {
        RecordEntry {
            kind: self.kind.clone(),
            name: self.name.clone(),
            data: self.data.clone(),
            ttl: self.ttl,
            priority: self.priority,
            comment: self.comment.clone(),
            id: None,
        }
    }

    /// Updatable field set. The record type cannot change after creation.
    pub(crate) fn update_entry(&self) -> RecordEntry {
        RecordEntry {
            kind: None,
            ..self.create_entry()
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
}

impl From<&Server> for Link {
    fn from(server: &Server) -> Self {
        Self {
            href: server.url().to_string(),
            rel: server.service_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct RecordsList {
    pub records: Vec<RecordEntry>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct PtrWritePayload {
    #[serde(rename = "recordsList")]
    pub records_list: RecordsList,
    pub link: Link,
}

/// Thin descriptor of the parent domain. The full domain object model
/// lives outside this crate.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
}

/// Thin descriptor of the compute server a PTR record hangs off: just what
/// link derivation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    service_name: String,
    url: url::Url,
}

impl Server {
    pub fn new(service_name: impl Into<String>, url: url::Url) -> Self {
        Self {
            service_name: service_name.into(),
            url,
        }
    }

    pub fn service_name(&self) -> &str {
        return &self.service_name;
    }

    pub fn url(&self) -> &url::Url {
        return &self.url;
    }
}

/// The allowed parent kinds, fixed at construction. Each variant carries its
/// own URL resolution rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Parent {
    /// Records collected under a domain: {endpoint}/domains/{id}/...
    Domain(Domain),
    /// Records rooted at the service endpoint itself (the PTR case).
    Service,
}

impl Parent {
    pub(crate) fn url(&self, dns: &DnsService, resource: &[&str], params: &[(&str, &str)]) -> url::Url {
        match self {
            Parent::Domain(domain) => {
                let mut segments = vec!["domains", domain.id.as_str()];
                segments.extend_from_slice(resource);
                dns.url(&segments, params)
            }
            Parent::Service => dns.url(resource, params),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> RecordData {
        RecordData {
            id: Some("A-6817754".into()),
            kind: Some("MX".into()),
            name: Some("example.com".into()),
            data: Some("mail.example.com".into()),
            ttl: Some(3600),
            priority: Some(10),
            comment: Some("mail relay".into()),
            created: Some("2026-01-01T00:00:00Z".into()),
            updated: None,
        }
    }

    #[test]
    fn create_entry_carries_the_creatable_set_only() {
        let entry = serde_json::to_value(data().create_entry()).unwrap();
        assert_eq!(
            entry,
            serde_json::json!({
                "type": "MX",
                "name": "example.com",
                "data": "mail.example.com",
                "ttl": 3600,
                "priority": 10,
                "comment": "mail relay"
            })
        );
    }

    #[test]
    fn update_entry_drops_the_record_type() {
        let entry = serde_json::to_value(data().update_entry()).unwrap();
        assert_eq!(
            entry,
            serde_json::json!({
                "name": "example.com",
                "data": "mail.example.com",
                "ttl": 3600,
                "priority": 10,
                "comment": "mail relay"
            })
        );
    }

    #[test]
    fn unset_fields_are_omitted_from_the_wire() {
        let entry = serde_json::to_value(
            RecordData {
                kind: Some("A".into()),
                name: Some("www.example.com".into()),
                data: Some("203.0.113.10".into()),
                ..Default::default()
            }
            .create_entry(),
        )
        .unwrap();
        assert_eq!(
            entry,
            serde_json::json!({
                "type": "A",
                "name": "www.example.com",
                "data": "203.0.113.10"
            })
        );
    }

    #[test]
    fn link_derives_from_the_server() {
        let server = Server::new(
            "cloudServersOpenStack",
            url::Url::parse("https://servers.api.example.com/v2/9999/servers/abc").unwrap(),
        );
        let link = Link::from(&server);
        assert_eq!(link.rel, "cloudServersOpenStack");
        assert_eq!(
            link.href,
            "https://servers.api.example.com/v2/9999/servers/abc"
        );
    }

    #[test]
    fn record_data_hydrates_from_a_response_payload() {
        let data: RecordData = serde_json::from_value(serde_json::json!({
            "id": "A-6817754",
            "type": "A",
            "name": "www.example.com",
            "data": "203.0.113.10",
            "ttl": 300,
            "created": "2026-01-01T00:00:00.000+0000",
            "updated": "2026-01-02T00:00:00.000+0000"
        }))
        .unwrap();
        assert_eq!(data.kind.as_deref(), Some("A"));
        assert_eq!(data.ttl, Some(300));
        assert_eq!(data.priority, None);
    }
}
