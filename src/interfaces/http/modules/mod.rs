pub mod health;
pub mod members;
pub mod metrics;
pub mod request_id;
