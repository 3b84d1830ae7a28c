//! Auditor providers selected by configuration

use std::sync::Arc;

use crate::config::{AuditingConfig, AuditorKind};
use crate::domain::{AuditingHandler, AuditorProvider};

/// Always reports the same configured actor.
pub struct StaticAuditor {
    name: String,
}

impl StaticAuditor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AuditorProvider for StaticAuditor {
    fn current_auditor(&self) -> Option<String> {
        Some(self.name.clone())
    }
}

/// Reports a fresh random id on every call. Stands in for a session user
/// until requests carry an identity.
pub struct RandomAuditor;

impl AuditorProvider for RandomAuditor {
    fn current_auditor(&self) -> Option<String> {
        Some(uuid::Uuid::new_v4().to_string())
    }
}

/// Build the handler repositories use to stamp audit columns.
pub fn auditing_handler(config: &AuditingConfig) -> AuditingHandler {
    match config.auditor {
        AuditorKind::None => AuditingHandler::without_auditor(),
        AuditorKind::Static => AuditingHandler::new(Arc::new(StaticAuditor::new(&config.name))),
        AuditorKind::Random => AuditingHandler::new(Arc::new(RandomAuditor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_auditor_changes_per_call() {
        let auditor = RandomAuditor;
        assert_ne!(auditor.current_auditor(), auditor.current_auditor());
    }

    #[test]
    fn static_auditor_uses_configured_name() {
        assert_eq!(
            StaticAuditor::new("admin").current_auditor().as_deref(),
            Some("admin")
        );
    }
}
