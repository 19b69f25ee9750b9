//! Shared validation helpers for inbound HTTP adapters.
//!
//! Validation failures become `InvalidRequest` errors whose `details` name
//! the offending field, a machine code, and (when safe) the rejected value.

use std::fmt;

use actix_web::web;
use serde_json::json;

use crate::domain::{
    Email, Error, LadderId, LadderValidationError, LoginValidationError, UserValidationError,
};

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldErrorCode {
    InvalidEmail,
    EmptyPassword,
    InvalidLadderId,
    MalformedBody,
    MalformedQuery,
}

impl FieldErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEmail => "invalid_email",
            Self::EmptyPassword => "empty_password",
            Self::InvalidLadderId => "invalid_ladder_id",
            Self::MalformedBody => "malformed_body",
            Self::MalformedQuery => "malformed_query",
        }
    }
}

fn field_error(field: &str, code: FieldErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Parse a ladder id from a path segment or query value.
pub(crate) fn parse_ladder_id(field: &str, raw: &str) -> Result<LadderId, Error> {
    LadderId::parse(raw).map_err(|err| {
        let message = match err {
            LadderValidationError::NotAnInteger { .. } => format!("{field} must be an integer"),
            other => format!("{field}: {other}"),
        };
        Error::invalid_request(message).with_details(json!({
            "field": field,
            "value": raw,
            "code": FieldErrorCode::InvalidLadderId.as_str(),
        }))
    })
}

/// Validate an email supplied in a request body.
pub(crate) fn parse_email(field: &str, raw: &str) -> Result<Email, Error> {
    Email::new(raw).map_err(|err| email_error(field, &err))
}

fn email_error(field: &str, err: &UserValidationError) -> Error {
    field_error(field, FieldErrorCode::InvalidEmail, format!("{field}: {err}"))
}

/// Map login payload validation failures onto field errors.
pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::InvalidEmail(inner) => email_error("email", &inner),
        LoginValidationError::EmptyPassword => field_error(
            "password",
            FieldErrorCode::EmptyPassword,
            "password must not be empty",
        ),
    }
}

/// Error for a request body the JSON extractor rejected.
pub(crate) fn malformed_body(err: &impl fmt::Display) -> Error {
    field_error(
        "body",
        FieldErrorCode::MalformedBody,
        format!("invalid JSON body: {err}"),
    )
}

/// Error for a query string the query extractor rejected.
pub(crate) fn malformed_query(err: &impl fmt::Display) -> Error {
    field_error(
        "query",
        FieldErrorCode::MalformedQuery,
        format!("invalid query string: {err}"),
    )
}

/// JSON extractor settings turning malformed bodies into domain errors.
///
/// Without this, Actix answers with a plain-text 400 that does not follow
/// the `{error, code}` envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(|err, _req| {
            let domain = malformed_body(&err);
            actix_web::error::InternalError::from_response(
                err,
                actix_web::ResponseError::error_response(&domain),
            )
            .into()
        })
}
