use snafu::prelude::*;

use crate::common::{MissingIdSnafu, Result, ServerRequiredSnafu, ServiceSnafu, UnsupportedOperationSnafu};
use crate::service::{AsyncJob, DnsService, Method};

use super::models::{PtrWritePayload, RecordEntry, RecordsList};
use super::record::Record;

/// Capability set that varies between record kinds: URL derivation, request
/// payload shape, and deletion. Implemented once for standard records and
/// once for PTR records.
pub(crate) trait RecordKind: std::fmt::Debug {
    fn name(&self) -> &'static str;
    fn requires_server(&self) -> bool;
    fn read_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url>;
    fn create_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url>;
    fn update_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url>;
    fn create_body(&self, record: &Record) -> Result<serde_json::Value>;
    fn update_body(&self, record: &Record) -> Result<serde_json::Value>;
    fn delete(&self, record: &Record, dns: &DnsService) -> Result<AsyncJob>;
}

fn to_body(payload: impl serde::Serialize) -> Result<serde_json::Value> {
    serde_json::to_value(payload)
        .boxed_local()
        .context(ServiceSnafu {
            message: "Failed to serialize request body",
        })
}

/// URL of one persisted record under its parent collection.
fn item_url(record: &Record, dns: &DnsService, operation: &str) -> Result<url::Url> {
    let id = record
        .data()
        .id
        .as_deref()
        .context(MissingIdSnafu { operation })?;
    Ok(record.parent().url(dns, &["records", id], &[]))
}

/// Records collected under their parent domain.
#[derive(Debug)]
pub(crate) struct StandardKind;

impl RecordKind for StandardKind {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn requires_server(&self) -> bool {
        false
    }

    fn read_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        item_url(record, dns, "Refresh")
    }

    fn create_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        Ok(record.parent().url(dns, &["records"], &[]))
    }

    fn update_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        item_url(record, dns, "Update")
    }

    fn create_body(&self, record: &Record) -> Result<serde_json::Value> {
        to_body(RecordsList {
            records: vec![record.data().create_entry()],
        })
    }

    fn update_body(&self, record: &Record) -> Result<serde_json::Value> {
        to_body(record.data().update_entry())
    }

    fn delete(&self, record: &Record, dns: &DnsService) -> Result<AsyncJob> {
        let url = item_url(record, dns, "Delete")?;
        dns.request(Method::Delete, &url, None)
    }
}

/// Reverse-DNS records. There is no independent collection endpoint; every
/// URL derives from the parent, and writes carry a link to the owning server.
#[derive(Debug)]
pub(crate) struct PtrKind;

impl PtrKind {
    fn linked_payload(&self, record: &Record, entry: RecordEntry, operation: &str) -> Result<PtrWritePayload> {
        let link = record
            .link()
            .cloned()
            .context(ServerRequiredSnafu { operation })?;
        Ok(PtrWritePayload {
            records_list: RecordsList {
                records: vec![entry],
            },
            link,
        })
    }

    /// Without an ip filter the provider removes every PTR record for the
    /// device named by href.
    pub(crate) fn delete_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        let link = record
            .link()
            .context(ServerRequiredSnafu { operation: "Delete" })?;
        let mut params = vec![("href", link.href.as_str())];
        if let Some(ip) = record.data().data.as_deref() {
            params.push(("ip", ip));
        }
        Ok(record
            .parent()
            .url(dns, &["rdns", link.rel.as_str()], &params))
    }
}

impl RecordKind for PtrKind {
    fn name(&self) -> &'static str {
        "PTR"
    }

    fn requires_server(&self) -> bool {
        true
    }

    fn read_url(&self, _record: &Record, _dns: &DnsService) -> Result<url::Url> {
        UnsupportedOperationSnafu {
            operation: "Refresh",
            kind: self.name(),
        }
        .fail()
    }

    fn create_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        Ok(record.parent().url(dns, &["rdns"], &[]))
    }

    fn update_url(&self, record: &Record, dns: &DnsService) -> Result<url::Url> {
        Ok(record.parent().url(dns, &["rdns"], &[]))
    }

    fn create_body(&self, record: &Record) -> Result<serde_json::Value> {
        let payload = self.linked_payload(record, record.data().create_entry(), "Create")?;
        to_body(payload)
    }

    /// Same shape as the create body, with the record id stamped into the
    /// first list entry so the provider knows which record to modify.
    fn update_body(&self, record: &Record) -> Result<serde_json::Value> {
        let id = record
            .data()
            .id
            .clone()
            .context(MissingIdSnafu { operation: "Update" })?;
        let mut entry = record.data().create_entry();
        entry.id = Some(id);
        let payload = self.linked_payload(record, entry, "Update")?;
        to_body(payload)
    }

    fn delete(&self, record: &Record, dns: &DnsService) -> Result<AsyncJob> {
        let url = self.delete_url(record, dns)?;
        dns.request(Method::Delete, &url, None)
    }
}
