//! HTTP inbound adapter exposing REST endpoints.

#[cfg(debug_assertions)]
pub mod debug;
pub mod error;
pub mod health;
pub mod ladders;
pub mod matches;
pub mod partner;
pub mod schemas;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
