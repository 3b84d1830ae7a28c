//! Shared HTTP building blocks: response envelope, error mapping, extractors

mod pageable;
mod response;
mod validated_query;

pub use pageable::{PageParams, Pageable};
pub use response::{error_response, ApiResponse, OrderResponse, PageResponse};
pub use validated_query::{ValidatedQuery, ValidatedQueryRejection};
