//! Driving port for reading the caller's partner.

use async_trait::async_trait;

use crate::domain::{Email, Error, PartnerInfo};

/// Use-case port for partner lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartnerQuery: Send + Sync {
    /// Partner email and name for the caller; both empty when unpaired.
    async fn partner_info(&self, caller: &Email) -> Result<PartnerInfo, Error>;
}

/// Fixture query reporting that the caller has no partner.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePartnerQuery;

#[async_trait]
impl PartnerQuery for FixturePartnerQuery {
    async fn partner_info(&self, _caller: &Email) -> Result<PartnerInfo, Error> {
        Ok(PartnerInfo::none())
    }
}
