//! Page request extractor
//!
//! Resolves `page`, `size` and any number of `sort=property[,property][,asc|desc]`
//! query parameters into a [`PageRequest`], applying the configured defaults.

use axum::extract::{FromRef, FromRequestParts, Query};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use super::{error_response, ValidatedQuery};
use crate::config::PagingConfig;
use crate::shared::{PageRequest, Sort};

/// Paging query parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page index. Zero-based unless one-indexed parameters are enabled.
    pub page: Option<u64>,
    /// Page size. Defaults to the configured size, capped at the maximum.
    #[validate(range(min = 1))]
    pub size: Option<u64>,
    /// Collected from the raw query pairs, see [`Pageable`]
    #[serde(skip)]
    pub sort: Vec<String>,
}

/// Resolved page request
#[derive(Debug)]
pub struct Pageable(pub PageRequest);

impl Pageable {
    fn resolve(params: PageParams, config: &PagingConfig) -> Result<PageRequest, Response> {
        let page = match params.page {
            Some(page) if config.one_indexed_parameters => page.saturating_sub(1),
            Some(page) => page,
            None => 0,
        };
        let size = params
            .size
            .unwrap_or(config.default_page_size)
            .min(config.max_page_size);
        let sort = Sort::parse(params.sort.iter().map(String::as_str))
            .map_err(|e| error_response(e).into_response())?;

        PageRequest::with_sort(page, size, sort).map_err(|e| error_response(e).into_response())
    }
}

impl<S> FromRequestParts<S> for Pageable
where
    PagingConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidatedQuery(mut params) =
            ValidatedQuery::<PageParams>::from_request_parts(parts, state)
                .await
                .map_err(IntoResponse::into_response)?;

        // Repeated keys only survive as raw pairs
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        params.sort = pairs
            .into_iter()
            .filter(|(key, _)| key == "sort")
            .map(|(_, value)| value)
            .collect();

        let config = PagingConfig::from_ref(state);
        Self::resolve(params, &config).map(Pageable)
    }
}
