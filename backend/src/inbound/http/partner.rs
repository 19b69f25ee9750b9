//! Partner handlers.
//!
//! ```text
//! GET /api/v1/partner/info
//! POST /api/v1/partner {"partnerEmail":"bob@example.com"}
//! DELETE /api/v1/partner
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::PartnerInfo;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{malformed_body, parse_email};

/// Partner identity visible to the caller; both fields are `null` when
/// unpaired.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PartnerInfoResponse {
    #[schema(example = "bob@example.com")]
    pub partner_email: Option<String>,
    #[schema(example = "Bob")]
    pub partner_name: Option<String>,
}

impl From<PartnerInfo> for PartnerInfoResponse {
    fn from(value: PartnerInfo) -> Self {
        Self {
            partner_email: value.partner_email.map(String::from),
            partner_name: value.partner_name,
        }
    }
}

/// Request body for `POST /api/v1/partner`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PairRequest {
    #[schema(example = "bob@example.com")]
    pub partner_email: String,
}

/// Fetch the caller's partner.
#[utoipa::path(
    get,
    path = "/api/v1/partner/info",
    responses(
        (status = 200, description = "Partner details", body = PartnerInfoResponse),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["partner"],
    operation_id = "getPartnerInfo",
    security(("SessionCookie" = []))
)]
#[get("/partner/info")]
pub async fn partner_info(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<PartnerInfoResponse>> {
    let email = session.require_email()?;
    let info = state.partner.partner_info(&email).await?;
    Ok(web::Json(PartnerInfoResponse::from(info)))
}

/// Pair the caller with another unpartnered user.
#[utoipa::path(
    post,
    path = "/api/v1/partner",
    request_body = PairRequest,
    responses(
        (status = 200, description = "Partnership formed", body = PartnerInfoResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "User or partner not found", body = ErrorSchema),
        (status = 409, description = "Either user is already partnered", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["partner"],
    operation_id = "pairWithPartner",
    security(("SessionCookie" = []))
)]
#[post("/partner")]
pub async fn pair_with_partner(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: Result<web::Json<PairRequest>, actix_web::Error>,
) -> ApiResult<web::Json<PartnerInfoResponse>> {
    let email = session.require_email()?;
    let payload = payload.map_err(|err| malformed_body(&err))?;
    let partner = parse_email("partnerEmail", &payload.partner_email)?;
    let info = state.partnership.pair_with(&email, &partner).await?;
    tracing::info!(user = %email, partner = %partner, "partnership formed");
    Ok(web::Json(PartnerInfoResponse::from(info)))
}

/// Dissolve the caller's partnership.
#[utoipa::path(
    delete,
    path = "/api/v1/partner",
    responses(
        (status = 204, description = "Partnership dissolved"),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No partner to remove", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["partner"],
    operation_id = "dissolvePartnership",
    security(("SessionCookie" = []))
)]
#[delete("/partner")]
pub async fn dissolve_partnership(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let email = session.require_email()?;
    state.partnership.dissolve(&email).await?;
    tracing::info!(user = %email, "partnership dissolved");
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "partner_tests.rs"]
mod tests;
