use snafu::prelude::*;

use crate::common::{RecordTypeSnafu, Result, ServerRequiredSnafu, UnsupportedOperationSnafu};
use crate::service::{AsyncJob, DnsService, Method};

use super::kind::{PtrKind, RecordKind, StandardKind};
use super::models::{Link, Parent, RecordData, Server, RECORD_KIND_PTR};

/// One DNS resource record, bound to the parent chosen at construction.
#[derive(Debug)]
pub struct Record {
    parent: Parent,
    data: RecordData,
    link: Option<Link>,
    kind: Box<dyn RecordKind>,
}

impl Record {
    pub fn new(parent: Parent, data: RecordData) -> Self {
        Self {
            parent,
            data,
            link: None,
            kind: Box::new(StandardKind),
        }
    }

    /// A PTR record always carries the PTR type. A payload claiming any
    /// other type fails here rather than reaching the provider.
    pub fn ptr(parent: Parent, mut data: RecordData) -> Result<Self> {
        if let Some(kind) = &data.kind {
            ensure!(kind == RECORD_KIND_PTR, RecordTypeSnafu { kind: kind.clone() });
        }
        data.kind = Some(RECORD_KIND_PTR.to_string());
        Ok(Self {
            parent,
            data,
            link: None,
            kind: Box::new(PtrKind),
        })
    }

    /// The parent given at construction.
    pub fn parent(&self) -> &Parent {
        return &self.parent;
    }

    pub fn data(&self) -> &RecordData {
        return &self.data;
    }

    pub fn data_mut(&mut self) -> &mut RecordData {
        return &mut self.data;
    }

    pub(crate) fn link(&self) -> Option<&Link> {
        return self.link.as_ref();
    }

    /// Captures the owning server as the link association used by PTR writes.
    pub(crate) fn bind_server(&mut self, server: &Server) {
        self.link = Some(Link::from(server));
    }

    /// Creates the record under its parent domain.
    pub fn create(&mut self, dns: &DnsService) -> Result<AsyncJob> {
        ensure!(
            !self.kind.requires_server(),
            ServerRequiredSnafu { operation: "Create" }
        );
        self.submit_create(dns)
    }

    /// Creates a PTR record for the given server.
    pub fn create_for(&mut self, dns: &DnsService, server: &Server) -> Result<AsyncJob> {
        ensure!(
            self.kind.requires_server(),
            UnsupportedOperationSnafu {
                operation: "Create for a server",
                kind: self.kind.name(),
            }
        );
        self.bind_server(server);
        self.submit_create(dns)
    }

    /// Updates the record in place under its parent domain.
    pub fn update(&mut self, dns: &DnsService) -> Result<AsyncJob> {
        ensure!(
            !self.kind.requires_server(),
            ServerRequiredSnafu { operation: "Update" }
        );
        self.submit_update(dns)
    }

    /// Updates a PTR record for the given server.
    pub fn update_for(&mut self, dns: &DnsService, server: &Server) -> Result<AsyncJob> {
        ensure!(
            self.kind.requires_server(),
            UnsupportedOperationSnafu {
                operation: "Update for a server",
                kind: self.kind.name(),
            }
        );
        self.bind_server(server);
        self.submit_update(dns)
    }

    /// Deletes the record under its parent domain.
    pub fn delete(&mut self, dns: &DnsService) -> Result<AsyncJob> {
        ensure!(
            !self.kind.requires_server(),
            ServerRequiredSnafu { operation: "Delete" }
        );
        self.submit_delete(dns)
    }

    /// Deletes PTR records for the given server. Without a data value every
    /// PTR record for the device is removed; with one, only the matching IP.
    pub fn delete_for(&mut self, dns: &DnsService, server: &Server) -> Result<AsyncJob> {
        ensure!(
            self.kind.requires_server(),
            UnsupportedOperationSnafu {
                operation: "Delete for a server",
                kind: self.kind.name(),
            }
        );
        self.bind_server(server);
        self.submit_delete(dns)
    }

    /// Re-reads the persisted record and replaces the local field set.
    pub fn refresh(&mut self, dns: &DnsService) -> Result<()> {
        let url = self.kind.read_url(self, dns)?;
        self.data = dns.request(Method::Get, &url, None)?;
        Ok(())
    }

    fn submit_create(&self, dns: &DnsService) -> Result<AsyncJob> {
        let url = self.kind.create_url(self, dns)?;
        let body = self.kind.create_body(self)?;
        tracing::info!(
            kind = self.kind.name(),
            name = self.data.name.as_deref().unwrap_or(""),
            "Creating record"
        );
        dns.request(Method::Post, &url, Some(body))
    }

    fn submit_update(&self, dns: &DnsService) -> Result<AsyncJob> {
        let url = self.kind.update_url(self, dns)?;
        let body = self.kind.update_body(self)?;
        tracing::info!(
            kind = self.kind.name(),
            name = self.data.name.as_deref().unwrap_or(""),
            record_id = self.data.id.as_deref().unwrap_or(""),
            "Updating record"
        );
        dns.request(Method::Put, &url, Some(body))
    }

    fn submit_delete(&self, dns: &DnsService) -> Result<AsyncJob> {
        tracing::info!(
            kind = self.kind.name(),
            name = self.data.name.as_deref().unwrap_or(""),
            record_id = self.data.id.as_deref().unwrap_or(""),
            "Deleting record"
        );
        self.kind.delete(self, dns)
    }
}
