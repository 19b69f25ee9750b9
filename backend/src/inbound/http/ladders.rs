//! Ladder listing and membership handlers.
//!
//! ```text
//! GET /api/v1/ladders
//! POST /api/v1/ladders/{id}/join
//! ```

use actix_web::{get, post, web};
use chrono::SecondsFormat;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Ladder, LadderOverview};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_ladder_id;

/// Ladder payload shared by the listing and join responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LadderResponse {
    pub id: i32,
    pub number: i32,
    #[schema(example = "Ladder 1")]
    pub name: String,
    #[schema(example = "2025-12-31T23:59:59.000Z")]
    pub end_date: String,
    pub is_active: bool,
}

impl From<Ladder> for LadderResponse {
    fn from(value: Ladder) -> Self {
        Self {
            id: value.id.get(),
            number: value.number.get(),
            name: value.name,
            end_date: value.end_date.to_rfc3339_opts(SecondsFormat::Millis, true),
            is_active: value.is_active,
        }
    }
}

/// Response body for `GET /api/v1/ladders`.
///
/// `currentLadder` is omitted when the caller has not joined a ladder.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaddersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ladder: Option<LadderResponse>,
    pub all_ladders: Vec<LadderResponse>,
}

impl From<LadderOverview> for LaddersResponse {
    fn from(value: LadderOverview) -> Self {
        Self {
            current_ladder: value.current_ladder.map(LadderResponse::from),
            all_ladders: value
                .all_ladders
                .into_iter()
                .map(LadderResponse::from)
                .collect(),
        }
    }
}

/// Response body for `POST /api/v1/ladders/{id}/join`.
#[derive(Debug, Serialize, ToSchema)]
pub struct JoinLadderResponse {
    pub ladder: LadderResponse,
}

/// List active ladders and the caller's current ladder.
#[utoipa::path(
    get,
    path = "/api/v1/ladders",
    responses(
        (status = 200, description = "Active ladders", body = LaddersResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["ladders"],
    operation_id = "listLadders",
    security(("SessionCookie" = []))
)]
#[get("/ladders")]
pub async fn list_ladders(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<LaddersResponse>> {
    let email = session.require_email()?;
    let overview = state.ladders.list_ladders(&email).await?;
    Ok(web::Json(LaddersResponse::from(overview)))
}

/// Join an active ladder.
#[utoipa::path(
    post,
    path = "/api/v1/ladders/{id}/join",
    params(("id" = i32, Path, description = "Ladder identifier")),
    responses(
        (status = 200, description = "Joined ladder", body = JoinLadderResponse),
        (status = 400, description = "Invalid ladder id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "Ladder or user not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["ladders"],
    operation_id = "joinLadder",
    security(("SessionCookie" = []))
)]
#[post("/ladders/{id}/join")]
pub async fn join_ladder(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<JoinLadderResponse>> {
    let email = session.require_email()?;
    let ladder_id = parse_ladder_id("id", &path.into_inner())?;
    let ladder = state
        .ladder_membership
        .join_ladder(&email, ladder_id)
        .await?;
    tracing::info!(user = %email, ladder = %ladder.id, "user joined ladder");
    Ok(web::Json(JoinLadderResponse {
        ladder: LadderResponse::from(ladder),
    }))
}

#[cfg(test)]
#[path = "ladders_tests.rs"]
mod tests;
