//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every REST endpoint, the error schema wrappers from
//! [`crate::inbound::http::schemas`], and the session cookie security scheme.
//! Debug builds also merge in the diagnostic auth probe.
//!
//! The document backs Swagger UI (debug builds) and is exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

#[cfg(debug_assertions)]
#[derive(OpenApi)]
#[openapi(
    paths(crate::inbound::http::debug::auth_test),
    tags((name = "debug", description = "Diagnostics available in debug builds"))
)]
struct DebugApiDoc;

/// Merge debug-only routes when they are compiled in.
struct DebugAddon;

impl Modify for DebugAddon {
    #[cfg(debug_assertions)]
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.merge(DebugApiDoc::openapi());
    }

    #[cfg(not(debug_assertions))]
    fn modify(&self, _openapi: &mut utoipa::openapi::OpenApi) {}
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon, &DebugAddon),
    info(
        title = "Tennis ladder API",
        description = "Session-authenticated access to ladders, partners, matches, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::list_users,
        crate::inbound::http::ladders::list_ladders,
        crate::inbound::http::ladders::join_ladder,
        crate::inbound::http::matches::list_matches,
        crate::inbound::http::partner::partner_info,
        crate::inbound::http::partner::pair_with_partner,
        crate::inbound::http::partner::dissolve_partnership,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "Login and the partner directory"),
        (name = "ladders", description = "Ladder listing and membership"),
        (name = "matches", description = "Confirmed match results"),
        (name = "partner", description = "Partner pairing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
