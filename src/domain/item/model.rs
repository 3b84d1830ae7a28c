//! Item domain entity

use crate::domain::auditing::{AuditMetadata, Auditable};
use crate::domain::repositories::Persistable;

/// Item identified by a key the client chooses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    pub audit: AuditMetadata,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            audit: AuditMetadata::default(),
        }
    }

    pub fn restore(id: String, audit: AuditMetadata) -> Self {
        Self { id, audit }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Persistable for Item {
    type Id = String;

    fn id(&self) -> Option<String> {
        Some(self.id.clone())
    }

    // The key is always present, so only a missing creation stamp marks an
    // item that has never been stored.
    fn is_new(&self) -> bool {
        self.audit.created_date().is_none()
    }
}

impl Auditable for Item {
    fn audit_metadata_mut(&mut self) -> &mut AuditMetadata {
        &mut self.audit
    }
}
