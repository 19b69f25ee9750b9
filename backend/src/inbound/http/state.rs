//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AuthProbe, FixtureAuthProbe, FixtureLadderCommand, FixtureLadderQuery, FixtureLoginService,
    FixtureMatchQuery, FixturePartnerCommand, FixturePartnerQuery, FixtureUsersQuery,
    LadderCommand, LadderQuery, LoginService, MatchQuery, PartnerCommand, PartnerQuery, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub auth_probe: Arc<dyn AuthProbe>,
    pub ladders: Arc<dyn LadderQuery>,
    pub ladder_membership: Arc<dyn LadderCommand>,
    pub partner: Arc<dyn PartnerQuery>,
    pub partnership: Arc<dyn PartnerCommand>,
    pub matches: Arc<dyn MatchQuery>,
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// State backed entirely by in-memory fixtures.
    ///
    /// Used when no database is configured and as a baseline in handler
    /// tests, which replace the ports under test with the `with_*` methods.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use ladder::domain::ports::FixtureUsersQuery;
    /// use ladder::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::fixtures().with_users(Arc::new(FixtureUsersQuery));
    /// let _users = state.users.clone();
    /// ```
    pub fn fixtures() -> Self {
        Self {
            login: Arc::new(FixtureLoginService),
            auth_probe: Arc::new(FixtureAuthProbe),
            ladders: Arc::new(FixtureLadderQuery),
            ladder_membership: Arc::new(FixtureLadderCommand),
            partner: Arc::new(FixturePartnerQuery),
            partnership: Arc::new(FixturePartnerCommand),
            matches: Arc::new(FixtureMatchQuery),
            users: Arc::new(FixtureUsersQuery),
        }
    }

    #[must_use]
    pub fn with_login(mut self, login: Arc<dyn LoginService>) -> Self {
        self.login = login;
        self
    }

    #[must_use]
    pub fn with_auth_probe(mut self, auth_probe: Arc<dyn AuthProbe>) -> Self {
        self.auth_probe = auth_probe;
        self
    }

    /// Replace both ladder ports, typically with one service implementing both.
    #[must_use]
    pub fn with_ladders(
        mut self,
        ladders: Arc<dyn LadderQuery>,
        membership: Arc<dyn LadderCommand>,
    ) -> Self {
        self.ladders = ladders;
        self.ladder_membership = membership;
        self
    }

    /// Replace both partner ports, typically with one service implementing both.
    #[must_use]
    pub fn with_partner(
        mut self,
        partner: Arc<dyn PartnerQuery>,
        partnership: Arc<dyn PartnerCommand>,
    ) -> Self {
        self.partner = partner;
        self.partnership = partnership;
        self
    }

    #[must_use]
    pub fn with_matches(mut self, matches: Arc<dyn MatchQuery>) -> Self {
        self.matches = matches;
        self
    }

    #[must_use]
    pub fn with_users(mut self, users: Arc<dyn UsersQuery>) -> Self {
        self.users = users;
        self
    }
}
