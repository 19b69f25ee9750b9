//! Partner lookup and pairing service.
//!
//! Pairing pre-checks both users so callers get a precise error, then relies
//! on the repository's transactional [`UserRepository::pair`] to settle
//! races: a concurrent pairing surfaces as a conflict, never as a half-written
//! relation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    PartnerCommand, PartnerQuery, UserPersistenceError, UserRepository, UserWithPartner,
};
use crate::domain::{Email, Error, PartnerInfo, UserAccount};

/// Partner service implementing the partner driving ports.
#[derive(Clone)]
pub struct PartnerService<U> {
    users: Arc<U>,
}

impl<U> PartnerService<U> {
    /// Create a new service over the user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U> PartnerService<U>
where
    U: UserRepository,
{
    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::AlreadyPartnered { .. } => {
                Error::conflict("one of the users already has a partner")
            }
            UserPersistenceError::MissingUser { .. } => Error::not_found("user not found"),
            other => Error::internal(format!("user repository error: {other}")),
        }
    }

    async fn require_account(&self, email: &Email, missing: &str) -> Result<UserAccount, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::not_found(missing))
    }
}

#[async_trait]
impl<U> PartnerQuery for PartnerService<U>
where
    U: UserRepository,
{
    async fn partner_info(&self, caller: &Email) -> Result<PartnerInfo, Error> {
        let UserWithPartner { partner, .. } = self
            .users
            .find_with_partner(caller)
            .await
            .map_err(Self::map_user_error)?
            .ok_or_else(|| Error::not_found("user not found"))?;
        Ok(PartnerInfo::from_contact(partner))
    }
}

#[async_trait]
impl<U> PartnerCommand for PartnerService<U>
where
    U: UserRepository,
{
    async fn pair_with(&self, caller: &Email, partner: &Email) -> Result<PartnerInfo, Error> {
        if caller == partner {
            return Err(Error::invalid_request("cannot partner with yourself"));
        }
        let me = self.require_account(caller, "user not found").await?;
        let them = self.require_account(partner, "partner not found").await?;
        if me.partner_id.is_some() {
            return Err(Error::conflict("you already have a partner"));
        }
        if them.partner_id.is_some() {
            return Err(Error::conflict("that user already has a partner"));
        }

        self.users
            .pair(&me.id, &them.id)
            .await
            .map_err(Self::map_user_error)?;

        Ok(PartnerInfo {
            partner_email: Some(them.email),
            partner_name: them.name,
        })
    }

    async fn dissolve(&self, caller: &Email) -> Result<(), Error> {
        let me = self.require_account(caller, "user not found").await?;
        if me.partner_id.is_none() {
            return Err(Error::not_found("no partner to remove"));
        }
        let cleared = self
            .users
            .unpair(&me.id)
            .await
            .map_err(Self::map_user_error)?;
        if cleared {
            Ok(())
        } else {
            Err(Error::not_found("no partner to remove"))
        }
    }
}

#[cfg(test)]
#[path = "partner_service_tests.rs"]
mod tests;
