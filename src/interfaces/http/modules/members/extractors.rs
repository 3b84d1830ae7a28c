//! Resolves a `{id}` path segment straight to a stored member.

use axum::extract::{FromRef, FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};

use super::handlers::MemberState;
use crate::domain::{DomainError, Member, ReadOnly};
use crate::interfaces::http::common::error_response;

/// Member loaded from the `{id}` path segment.
///
/// The member is read-only: handlers can look at it but changes never
/// reach storage. A missing member rejects the request with 404.
#[derive(Debug)]
pub struct LoadedMember(pub ReadOnly<Member>);

impl<S> FromRequestParts<S> for LoadedMember
where
    MemberState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let members = MemberState::from_ref(state);
        match members.repos.members().find_by_id(id).await {
            Ok(Some(member)) => Ok(LoadedMember(ReadOnly::new(member))),
            Ok(None) => {
                Err(error_response(DomainError::not_found("Member", "id", id)).into_response())
            }
            Err(e) => Err(error_response(e).into_response()),
        }
    }
}
