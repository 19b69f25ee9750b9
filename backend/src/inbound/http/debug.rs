//! Diagnostic credential probe, mounted only in debug builds.
//!
//! ```text
//! POST /api/v1/debug/auth-test {"email":"ada@example.com","password":"secret"}
//! ```
//!
//! Unlike every other route this one needs no session and echoes raw store
//! errors. It never logs the password or the stored hash.

use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{AuthProbeReport, ErrorCode, LoginCredentials, UserAccount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::LoginRequest;
use crate::inbound::http::validation::map_login_validation_error;

/// Non-secret account fields reported by the probe.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthProbeUserDetails {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub ladder_id: Option<i32>,
    pub has_partner: bool,
}

impl From<UserAccount> for AuthProbeUserDetails {
    fn from(value: UserAccount) -> Self {
        Self {
            id: value.id.to_string(),
            email: value.email.into(),
            name: value.name,
            ladder_id: value.ladder_id.map(|id| id.get()),
            has_partner: value.partner_id.is_some(),
        }
    }
}

/// Response body for `POST /api/v1/debug/auth-test`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthProbeResponse {
    pub found: bool,
    pub password_match: bool,
    pub user_details: Option<AuthProbeUserDetails>,
}

impl From<AuthProbeReport> for AuthProbeResponse {
    fn from(value: AuthProbeReport) -> Self {
        Self {
            found: value.found,
            password_match: value.password_match,
            user_details: value.account.map(AuthProbeUserDetails::from),
        }
    }
}

/// Report whether an email exists and whether the password matches its hash.
#[utoipa::path(
    post,
    path = "/api/v1/debug/auth-test",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Probe report", body = AuthProbeResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Raw store error", body = ErrorSchema)
    ),
    tags = ["debug"],
    operation_id = "debugAuthTest",
    security([])
)]
#[post("/debug/auth-test")]
pub async fn auth_test(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    match state.auth_probe.probe(&credentials).await {
        Ok(report) => {
            tracing::debug!(
                email = %credentials.email(),
                found = report.found,
                password_match = report.password_match,
                "auth probe completed"
            );
            Ok(HttpResponse::Ok().json(AuthProbeResponse::from(report)))
        }
        Err(err) if err.code() == ErrorCode::InternalError => {
            tracing::warn!(error = %err, "auth probe failed");
            Ok(HttpResponse::InternalServerError().json(json!({ "error": err.message() })))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::MockAuthProbe;
    use crate::domain::{Email, Error, LadderId, UserId};
    use crate::inbound::http::test_utils::read_json;

    async fn probe(auth_probe: MockAuthProbe, body: Value) -> (StatusCode, Value) {
        let state = HttpState::fixtures().with_auth_probe(Arc::new(auth_probe));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(web::scope("/api/v1").service(auth_test)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/debug/auth-test")
                .set_json(body)
                .to_request(),
        )
        .await;
        let status = response.status();
        (status, read_json(response).await)
    }

    fn credentials() -> Value {
        json!({ "email": "ada@example.com", "password": "hunter2" })
    }

    #[actix_web::test]
    async fn reports_matching_account_without_a_session() {
        let account = UserAccount {
            id: UserId::random(),
            email: Email::new("ada@example.com").expect("valid email"),
            name: Some("Ada".to_owned()),
            ladder_id: Some(LadderId::new(2).expect("valid id")),
            partner_id: Some(UserId::random()),
        };
        let id = account.id.to_string();
        let mut auth_probe = MockAuthProbe::new();
        auth_probe
            .expect_probe()
            .times(1)
            .withf(|credentials| credentials.password() == "hunter2")
            .return_once(move |_| {
                Ok(AuthProbeReport {
                    found: true,
                    password_match: true,
                    account: Some(account),
                })
            });

        let (status, body) = probe(auth_probe, credentials()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "found": true,
                "passwordMatch": true,
                "userDetails": {
                    "id": id,
                    "email": "ada@example.com",
                    "name": "Ada",
                    "ladderId": 2,
                    "hasPartner": true,
                },
            })
        );
    }

    #[actix_web::test]
    async fn reports_unknown_email() {
        let mut auth_probe = MockAuthProbe::new();
        auth_probe
            .expect_probe()
            .return_once(|_| Ok(AuthProbeReport::not_found()));

        let (status, body) = probe(auth_probe, credentials()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "found": false, "passwordMatch": false, "userDetails": null })
        );
    }

    #[actix_web::test]
    async fn echoes_raw_store_errors() {
        let mut auth_probe = MockAuthProbe::new();
        auth_probe
            .expect_probe()
            .return_once(|_| Err(Error::internal("relation \"users\" does not exist")));

        let (status, body) = probe(auth_probe, credentials()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "relation \"users\" does not exist" }));
    }

    #[actix_web::test]
    async fn rejects_blank_password_before_probing() {
        let mut auth_probe = MockAuthProbe::new();
        auth_probe.expect_probe().never();

        let (status, _) = probe(
            auth_probe,
            json!({ "email": "ada@example.com", "password": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
