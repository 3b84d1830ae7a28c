//! Audit components shared by entities
//!
//! [`AuditMetadata`] carries creation/modification timestamps and actors and
//! is stamped by [`AuditingHandler`] right before a repository writes.
//! [`TimeAudit`] only carries timestamps and is stamped by the storage
//! lifecycle hook of the entity that embeds it.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use super::repositories::Persistable;

/// Current time at the precision the store keeps (microseconds).
pub fn audit_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Supplies the identity of the actor performing a write.
pub trait AuditorProvider: Send + Sync {
    /// `None` when no actor is known; audit actor columns stay empty.
    fn current_auditor(&self) -> Option<String>;
}

/// Created/modified timestamps and actors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditMetadata {
    created_date: Option<DateTime<Utc>>,
    last_modified_date: Option<DateTime<Utc>>,
    created_by: Option<String>,
    last_modified_by: Option<String>,
}

impl AuditMetadata {
    /// Rebuild metadata loaded from storage.
    pub fn restore(
        created_date: Option<DateTime<Utc>>,
        last_modified_date: Option<DateTime<Utc>>,
        created_by: Option<String>,
        last_modified_by: Option<String>,
    ) -> Self {
        Self {
            created_date,
            last_modified_date,
            created_by,
            last_modified_by,
        }
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    pub fn last_modified_date(&self) -> Option<DateTime<Utc>> {
        self.last_modified_date
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn last_modified_by(&self) -> Option<&str> {
        self.last_modified_by.as_deref()
    }

    /// Stamp before insert: both the created and modified pairs are set.
    pub fn mark_created(&mut self, now: DateTime<Utc>, auditor: Option<String>) {
        self.created_date = Some(now);
        self.created_by = auditor.clone();
        self.last_modified_date = Some(now);
        self.last_modified_by = auditor;
    }

    /// Stamp before update. Created fields are never rewritten.
    pub fn mark_modified(&mut self, now: DateTime<Utc>, auditor: Option<String>) {
        self.last_modified_date = Some(now);
        self.last_modified_by = auditor;
    }
}

/// Entity that embeds [`AuditMetadata`]
pub trait Auditable: Persistable {
    fn audit_metadata_mut(&mut self) -> &mut AuditMetadata;
}

/// Stamps audit metadata before insert and before update.
#[derive(Clone)]
pub struct AuditingHandler {
    auditor: Option<Arc<dyn AuditorProvider>>,
}

impl AuditingHandler {
    pub fn new(auditor: Arc<dyn AuditorProvider>) -> Self {
        Self {
            auditor: Some(auditor),
        }
    }

    /// Timestamps only; actor columns stay empty.
    pub fn without_auditor() -> Self {
        Self { auditor: None }
    }

    /// Stamp `entity` for the write about to happen.
    ///
    /// Returns whether the entity was new, decided before stamping, so the
    /// caller knows whether to insert or update.
    pub fn mark_for_save<T: Auditable>(&self, entity: &mut T) -> bool {
        let is_new = entity.is_new();
        let now = audit_timestamp();
        let auditor = self.auditor.as_ref().and_then(|a| a.current_auditor());
        if is_new {
            entity.audit_metadata_mut().mark_created(now, auditor);
        } else {
            entity.audit_metadata_mut().mark_modified(now, auditor);
        }
        is_new
    }
}

/// Created/updated timestamps without actors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeAudit {
    created_date: Option<DateTime<Utc>>,
    updated_date: Option<DateTime<Utc>>,
}

impl TimeAudit {
    pub fn restore(created_date: Option<DateTime<Utc>>, updated_date: Option<DateTime<Utc>>) -> Self {
        Self {
            created_date,
            updated_date,
        }
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        self.created_date
    }

    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_date
    }
}
