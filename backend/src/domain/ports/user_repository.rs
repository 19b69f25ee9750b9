//! Port abstraction for user persistence adapters and their errors.
//!
//! Users are looked up by email because that is what the session carries.
//! Pairing writes touch two rows and must be atomic: adapters run them in a
//! single transaction with both rows locked.
use async_trait::async_trait;

use crate::domain::{Email, Ladder, LadderId, UserAccount, UserContact, UserCredentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A row targeted by a write no longer exists.
        MissingUser { id: String } => "user {id} does not exist",
        /// One side of a pairing already has a partner.
        AlreadyPartnered { id: String } => "user {id} already has a partner",
    }
}

/// A user together with the contact projection of their partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithPartner {
    pub account: UserAccount,
    pub partner: Option<UserContact>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by email.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Ladder the user is assigned to, if the user exists and has one.
    async fn find_current_ladder(
        &self,
        email: &Email,
    ) -> Result<Option<Ladder>, UserPersistenceError>;

    /// Fetch a user joined with only their partner's email and name.
    async fn find_with_partner(
        &self,
        email: &Email,
    ) -> Result<Option<UserWithPartner>, UserPersistenceError>;

    /// Users other than `email` without a partner, ordered by email.
    async fn list_unpartnered_except(
        &self,
        email: &Email,
    ) -> Result<Vec<UserContact>, UserPersistenceError>;

    /// Fetch the account and stored password hash for `email`.
    async fn find_credentials(
        &self,
        email: &Email,
    ) -> Result<Option<UserCredentials>, UserPersistenceError>;

    /// Assign the user to a ladder.
    async fn assign_ladder(
        &self,
        user: &UserId,
        ladder: LadderId,
    ) -> Result<(), UserPersistenceError>;

    /// Pair two users symmetrically.
    ///
    /// Fails with [`UserPersistenceError::AlreadyPartnered`] when either side
    /// is already paired; in that case neither row changes.
    async fn pair(&self, first: &UserId, second: &UserId) -> Result<(), UserPersistenceError>;

    /// Clear the partnership of `user` on both sides.
    ///
    /// Returns `false` when the user had no partner.
    async fn unpair(&self, user: &UserId) -> Result<bool, UserPersistenceError>;
}
