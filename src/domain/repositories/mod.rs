//! Repository traits for the domain layer
//!
//! Contains:
//! - `CrudRepository`: operations every aggregate repository offers
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `Persistable` / `ReadOnly`: newness detection and untracked loads
//! - `DomainResult`: standard result type for domain operations

use std::ops::Deref;

use async_trait::async_trait;

use super::item::ItemRepository;
use super::member::MemberRepository;
use super::team::TeamRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Decides whether `save` inserts or updates an entity.
pub trait Persistable {
    type Id;

    fn id(&self) -> Option<Self::Id>;

    /// Default: an entity without a key has never been stored.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// Basic CRUD shared by every aggregate repository.
#[async_trait]
pub trait CrudRepository<T, ID>: Send + Sync
where
    T: Send + Sync + 'static,
    ID: Send + Sync + 'static,
{
    /// Insert when the entity is new, update otherwise. Returns the stored state.
    async fn save(&self, entity: T) -> DomainResult<T>;

    async fn find_by_id(&self, id: ID) -> DomainResult<Option<T>>;

    async fn find_all(&self) -> DomainResult<Vec<T>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Delete the stored row for `entity`; a missing row is ignored.
    async fn delete(&self, entity: &T) -> DomainResult<()>;

    /// Delete by key; a missing row is `DomainError::NotFound`.
    async fn delete_by_id(&self, id: ID) -> DomainResult<()>;

    /// Returns the number of deleted rows.
    async fn delete_all(&self) -> DomainResult<u64>;
}

/// An entity loaded outside any unit of work.
///
/// Only shared access is possible. [`ReadOnly::into_detached`] hands out an
/// owned copy; changing that copy never reaches storage unless it is saved
/// explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOnly<T>(T);

impl<T> ReadOnly<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_detached(self) -> T {
        self.0
    }
}

impl<T> Deref for ReadOnly<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) -> DomainResult<()> {
///     let member = repos.members().find_by_id(1).await?;
///     let teams = repos.teams().find_all().await?;
///     Ok(())
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn members(&self) -> &dyn MemberRepository;
    fn teams(&self) -> &dyn TeamRepository;
    fn items(&self) -> &dyn ItemRepository;
}
