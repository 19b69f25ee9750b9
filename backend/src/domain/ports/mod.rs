//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordVerifier`]) are implemented by
//! outbound adapters. Driving ports (`*Query`, `*Command`, [`LoginService`],
//! [`AuthProbe`]) are called by inbound adapters; each ships a `Fixture*`
//! implementation used when no database is configured.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_probe;
mod ladder_query;
mod ladder_repository;
mod login_service;
mod match_query;
mod match_repository;
mod partner_command;
mod partner_query;
mod password_verifier;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use auth_probe::MockAuthProbe;
pub use auth_probe::{AuthProbe, FixtureAuthProbe};
#[cfg(test)]
pub use ladder_query::{MockLadderCommand, MockLadderQuery};
pub use ladder_query::{
    FixtureLadderCommand, FixtureLadderQuery, LadderCommand, LadderQuery, fixture_ladders,
};
#[cfg(test)]
pub use ladder_repository::MockLadderRepository;
pub use ladder_repository::{LadderRepository, LadderRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
#[cfg(test)]
pub use match_query::MockMatchQuery;
pub use match_query::{FixtureMatchQuery, MatchQuery};
#[cfg(test)]
pub use match_repository::MockMatchRepository;
pub use match_repository::{MatchRepository, MatchRepositoryError};
#[cfg(test)]
pub use partner_command::MockPartnerCommand;
pub use partner_command::{FixturePartnerCommand, PartnerCommand};
#[cfg(test)]
pub use partner_query::MockPartnerQuery;
pub use partner_query::{FixturePartnerQuery, PartnerQuery};
#[cfg(test)]
pub use password_verifier::MockPasswordVerifier;
pub use password_verifier::{PasswordVerifier, PasswordVerifierError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository, UserWithPartner};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::{FixtureUsersQuery, UsersQuery};
