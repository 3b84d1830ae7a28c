//! Item aggregate
//!
//! Items carry a client-assigned key, so newness is decided from the
//! audit timestamps instead of the key.

pub mod model;
pub mod repository;

pub use model::Item;
pub use repository::ItemRepository;
