//! Response envelope and page body

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::{Order, Page};

/// Standard API response wrapper
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Map a domain error to a status code and error body.
pub fn error_response(e: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::IncorrectResultSize { .. } | DomainError::Database(_) => {
            error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::error(e.to_string())))
}

/// One sort criterion as rendered in a page body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub property: String,
    /// `ASC` or `DESC`
    pub direction: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            property: order.property.clone(),
            direction: order.direction.as_str().to_string(),
        }
    }
}

/// Page of results with paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    /// Page index, one-based when one-indexed parameters are enabled
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: Vec<OrderResponse>,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>, one_indexed: bool, f: impl FnMut(U) -> T) -> Self {
        let number = if one_indexed {
            page.number() + 1
        } else {
            page.number()
        };
        let sort = page.sort().orders().iter().map(OrderResponse::from).collect();
        let size = page.size();
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        let first = page.is_first();
        let last = page.is_last();
        let content: Vec<T> = page.into_content().into_iter().map(f).collect();

        Self {
            number,
            size,
            number_of_elements: content.len() as u64,
            total_elements,
            total_pages,
            first,
            last,
            empty: content.is_empty(),
            sort,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{PageRequest, Sort};

    #[test]
    fn page_body_uses_camel_case() {
        let request =
            PageRequest::with_sort(0, 3, Sort::parse(["username,desc"]).unwrap()).unwrap();
        let page = Page::new(vec![1, 2, 3], request, 5);

        let body = PageResponse::from_page(page, false, |n: i32| n * 10);
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["content"], serde_json::json!([10, 20, 30]));
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["numberOfElements"], 3);
        assert_eq!(json["first"], true);
        assert_eq!(json["last"], false);
        assert_eq!(json["sort"][0]["direction"], "DESC");
    }

    #[test]
    fn one_indexed_page_number() {
        let page = Page::new(Vec::<i32>::new(), PageRequest::of(0, 5).unwrap(), 0);
        let body = PageResponse::from_page(page, true, |n| n);
        assert_eq!(body.number, 1);
        assert!(body.empty);
    }

    #[test]
    fn not_found_maps_to_404() {
        let (status, Json(body)) = error_response(DomainError::not_found("Member", "id", 1));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(!body.success);
    }
}
