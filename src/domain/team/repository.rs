use async_trait::async_trait;

use super::Team;
use crate::domain::repositories::{CrudRepository, DomainResult};

/// Team persistence. Loaded teams carry their member back references.
#[async_trait]
pub trait TeamRepository: CrudRepository<Team, i64> {
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Team>>;
}
