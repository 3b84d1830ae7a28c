//! Application layer: auditor wiring, unit of work and startup seeding

pub mod auditing;
pub mod seed;
pub mod unit_of_work;

pub use auditing::{auditing_handler, RandomAuditor, StaticAuditor};
pub use seed::seed_members;
pub use unit_of_work::{ClearMode, UnitOfWork};
