//! Driving port for forming and dissolving partnerships.

use async_trait::async_trait;

use crate::domain::{Email, Error, PartnerInfo};

/// Use-case port for partnership changes.
///
/// Implementations keep the relation symmetric: both users reference each
/// other after a pairing and neither does after a dissolution.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartnerCommand: Send + Sync {
    /// Pair the caller with `partner` and return the new partner details.
    async fn pair_with(&self, caller: &Email, partner: &Email) -> Result<PartnerInfo, Error>;

    /// Dissolve the caller's current partnership.
    async fn dissolve(&self, caller: &Email) -> Result<(), Error>;
}

/// Fixture command that echoes the requested partner without persisting.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePartnerCommand;

#[async_trait]
impl PartnerCommand for FixturePartnerCommand {
    async fn pair_with(&self, caller: &Email, partner: &Email) -> Result<PartnerInfo, Error> {
        if caller == partner {
            return Err(Error::invalid_request("cannot partner with yourself"));
        }
        Ok(PartnerInfo {
            partner_email: Some(partner.clone()),
            partner_name: None,
        })
    }

    async fn dissolve(&self, _caller: &Email) -> Result<(), Error> {
        Err(Error::not_found("no partner to remove"))
    }
}
