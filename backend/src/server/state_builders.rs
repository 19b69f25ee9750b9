//! Builders wiring Diesel adapters into the HTTP port bundle.

use std::sync::Arc;

use actix_web::web;

use ladder::domain::{
    CredentialAuthService, LadderService, MatchService, PartnerService, UserDirectoryService,
};
use ladder::inbound::http::state::HttpState;
use ladder::outbound::persistence::{
    DbPool, DieselLadderRepository, DieselMatchRepository, DieselUserRepository,
};
use ladder::outbound::security::Argon2PasswordVerifier;

use super::ServerConfig;

/// Build handler state from the configured pool, or fixtures without one.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => persistent_state(pool),
        None => HttpState::fixtures(),
    };
    web::Data::new(state)
}

fn persistent_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let ladder_repo = Arc::new(DieselLadderRepository::new(pool.clone()));
    let match_repo = Arc::new(DieselMatchRepository::new(pool.clone()));

    let auth = Arc::new(CredentialAuthService::new(
        users.clone(),
        Arc::new(Argon2PasswordVerifier),
    ));
    let ladders = Arc::new(LadderService::new(users.clone(), ladder_repo));
    let partner = Arc::new(PartnerService::new(users.clone()));

    HttpState::fixtures()
        .with_login(auth.clone())
        .with_auth_probe(auth)
        .with_ladders(ladders.clone(), ladders)
        .with_partner(partner.clone(), partner)
        .with_matches(Arc::new(MatchService::new(match_repo)))
        .with_users(Arc::new(UserDirectoryService::new(users)))
}
