use super::Item;
use crate::domain::repositories::CrudRepository;

/// Item persistence. `save` inserts without a prior lookup when the item
/// is new.
pub trait ItemRepository: CrudRepository<Item, String> {}
