//! Member endpoints

pub mod dto;
pub mod extractors;
pub mod handlers;

pub use dto::MemberResponse;
pub use extractors::LoadedMember;
pub use handlers::*;
