//! Database entities module

pub mod item;
pub mod member;
pub mod team;

pub use item::Entity as Item;
pub use member::Entity as Member;
pub use team::Entity as Team;
