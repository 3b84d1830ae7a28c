//! Domain layer
//!
//! Entities, projections and the repository traits the infrastructure
//! layer implements.

pub mod auditing;
pub mod item;
pub mod member;
pub mod repositories;
pub mod team;

pub use auditing::{
    audit_timestamp, AuditMetadata, Auditable, AuditingHandler, AuditorProvider, TimeAudit,
};
pub use item::{Item, ItemRepository};
pub use member::{
    Member, MemberCustomRepository, MemberDto, MemberRepository, TeamRef, UsernameOnly,
    UsernameOnlyDto,
};
pub use repositories::{CrudRepository, DomainResult, Persistable, ReadOnly, RepositoryProvider};
pub use team::{MemberRef, Team, TeamRepository};

pub use crate::shared::errors::DomainError;
