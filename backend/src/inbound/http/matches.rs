//! Confirmed-matches listing.
//!
//! ```text
//! GET /api/v1/matches/all?ladderId=2
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{LadderId, Match};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{malformed_query, parse_ladder_id};

/// Query parameters for `GET /api/v1/matches/all`.
///
/// `ladderId` is kept as text so a non-integer value surfaces as a domain
/// validation error instead of the extractor's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchesParams {
    pub ladder_id: Option<String>,
}

impl MatchesParams {
    /// Parse the optional ladder filter; blank values mean "no filter".
    fn ladder(&self) -> ApiResult<Option<LadderId>> {
        match self.ladder_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => parse_ladder_id("ladderId", raw).map(Some),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i32,
    #[schema(example = "2024-05-01T18:30:00.000Z")]
    pub start_at: String,
    pub team1_id: String,
    pub team2_id: String,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub completed: bool,
}

impl From<Match> for MatchResponse {
    fn from(value: Match) -> Self {
        Self {
            id: value.id,
            start_at: value.start_at_iso(),
            team1_id: value.team1_id.to_string(),
            team2_id: value.team2_id.to_string(),
            team1_score: value.team1_score,
            team2_score: value.team2_score,
            completed: value.completed,
        }
    }
}

/// Response body for `GET /api/v1/matches/all`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResponse>,
}

/// List confirmed matches, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/matches/all",
    params(
        ("ladderId" = Option<i32>, Query, description = "Restrict results to one ladder")
    ),
    responses(
        (status = 200, description = "Confirmed matches", body = MatchesResponse),
        (status = 400, description = "Invalid ladder id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["matches"],
    operation_id = "listMatches",
    security(("SessionCookie" = []))
)]
#[get("/matches/all")]
pub async fn list_matches(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: Result<web::Query<MatchesParams>, actix_web::Error>,
) -> ApiResult<web::Json<MatchesResponse>> {
    let email = session.require_email()?;
    let params = params.map_err(|err| malformed_query(&err))?;
    let ladder = params.ladder()?;
    let matches = state.matches.list_matches(&email, ladder).await?;
    Ok(web::Json(MatchesResponse {
        matches: matches.into_iter().map(MatchResponse::from).collect(),
    }))
}
