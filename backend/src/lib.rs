//! Tennis ladder backend library.
//!
//! Hexagonal layout: [`domain`] holds entities, services, and ports;
//! [`inbound`] adapts HTTP requests onto driving ports; [`outbound`] provides
//! the PostgreSQL and password-hashing adapters behind driven ports;
//! [`seeding`] and [`settings`] carry process configuration.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod seeding;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
