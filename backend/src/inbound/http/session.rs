//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! The session cookie carries only the authenticated email. Every guarded
//! handler calls [`SessionContext::require_email`] before touching a port, so
//! a missing or tampered cookie ends the request with `401` and no store
//! access.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Email, Error};

pub(crate) const USER_EMAIL_KEY: &str = "user_email";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Persist the authenticated email, rotating the session id first.
    pub fn persist_email(&self, email: &Email) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(USER_EMAIL_KEY, email.as_ref())
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Fetch the authenticated email from the session, if present and valid.
    pub fn email(&self) -> Result<Option<Email>, Error> {
        let raw = self
            .0
            .get::<String>(USER_EMAIL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(raw.and_then(|value| match Email::new(value) {
            Ok(email) => Some(email),
            Err(error) => {
                tracing::warn!(%error, "invalid email in session cookie");
                None
            }
        }))
    }

    /// Require an authenticated email or return `401 Unauthorized`.
    pub fn require_email(&self) -> Result<Email, Error> {
        self.email()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Drop all session state; the cookie is removed on the response.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
