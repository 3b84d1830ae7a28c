//! Member aggregate
//!
//! Contains the Member entity, its projections, and the repository interface.

pub mod model;
pub mod projection;
pub mod repository;

pub use model::{Member, TeamRef};
pub use projection::{MemberDto, UsernameOnly, UsernameOnlyDto};
pub use repository::{MemberCustomRepository, MemberRepository};
