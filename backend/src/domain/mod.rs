//! Domain primitives, services, and ports.
//!
//! Purpose: define the ladder, partner, and match rules independently of
//! HTTP and SQL. Inbound adapters call the driving ports in [`ports`];
//! services implement them over the driven ports.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request correlation id carried in task-local storage.
//! - Email, UserId, UserAccount, UserContact, PartnerInfo: user views.
//! - Ladder, LadderId, LadderOverview, LadderSeed: ladder views and seeds.
//! - Match: confirmed match record.

pub mod auth;
pub mod error;
pub mod ladder;
pub mod ladder_seeding;
pub mod ladder_service;
pub mod login_service;
pub mod match_service;
pub mod matches;
pub mod partner_service;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::auth::{AuthProbeReport, LoginCredentials, LoginValidationError};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ladder::{
    Ladder, LadderId, LadderNumber, LadderOverview, LadderSeed, LadderValidationError,
    default_ladder_seeds,
};
pub use self::ladder_seeding::{LadderSeeder, SeedReport};
pub use self::ladder_service::LadderService;
pub use self::login_service::{CredentialAuthService, INVALID_CREDENTIALS};
pub use self::match_service::MatchService;
pub use self::matches::{Match, sort_newest_first};
pub use self::partner_service::PartnerService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    EMAIL_MAX, Email, PartnerInfo, UserAccount, UserContact, UserCredentials, UserId,
    UserValidationError,
};
pub use self::user_directory_service::UserDirectoryService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use ladder::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
