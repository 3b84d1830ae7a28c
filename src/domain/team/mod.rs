//! Team aggregate

pub mod model;
pub mod repository;

pub use model::{MemberRef, Team};
pub use repository::TeamRepository;
