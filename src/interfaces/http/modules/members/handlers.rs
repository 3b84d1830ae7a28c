//! Member API handlers

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::MemberResponse;
use super::extractors::LoadedMember;
use crate::config::PagingConfig;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    error_response, ApiResponse, PageParams, PageResponse, Pageable,
};

/// Member handler state
#[derive(Clone)]
pub struct MemberState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub paging: PagingConfig,
}

impl FromRef<MemberState> for PagingConfig {
    fn from_ref(state: &MemberState) -> Self {
        state.paging.clone()
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "Members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Username of the member", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn find_member(
    State(state): State<MemberState>,
    Path(id): Path<i64>,
) -> Result<String, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.members().find_by_id(id).await {
        Ok(Some(member)) => Ok(member.username().to_string()),
        Ok(None) => Err(error_response(DomainError::not_found("Member", "id", id))),
        Err(e) => Err(error_response(e)),
    }
}

/// Same as `/members/{id}`, with the member resolved by the extractor.
#[utoipa::path(
    get,
    path = "/members2/{id}",
    tag = "Members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Username of the member", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found", body = ApiResponse<String>)
    )
)]
pub async fn find_member2(LoadedMember(member): LoadedMember) -> String {
    member.username().to_string()
}

#[utoipa::path(
    get,
    path = "/members",
    tag = "Members",
    params(
        PageParams,
        ("sort" = Option<Vec<String>>, Query, description = "`property[,asc|desc]`, may be repeated")
    ),
    responses(
        (status = 200, description = "Page of members", body = PageResponse<MemberResponse>),
        (status = 400, description = "Invalid sort", body = ApiResponse<String>),
        (status = 422, description = "Invalid page size", body = ApiResponse<String>)
    )
)]
pub async fn list_members(
    State(state): State<MemberState>,
    Pageable(request): Pageable,
) -> Result<Json<PageResponse<MemberResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let page = state
        .repos
        .members()
        .find_all_page(&request)
        .await
        .map_err(error_response)?;

    Ok(Json(PageResponse::from_page(
        page,
        state.paging.one_indexed_parameters,
        MemberResponse::from,
    )))
}
