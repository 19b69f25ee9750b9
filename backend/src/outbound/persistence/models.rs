//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; adapters convert them into
//! domain values, validating as they go.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{ladders, matches, users};

/// Row struct for reading from the ladders table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = ladders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct LadderRow {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Insertable struct for seeding ladders.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = ladders)]
pub(crate) struct NewLadderRow<'a> {
    pub number: i32,
    pub name: &'a str,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Row struct for reading from the users table, without the password.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub ladder_id: Option<i32>,
    pub partner_id: Option<Uuid>,
}

/// Contact projection of a user row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserContactRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
}

/// Row struct for reading from the matches table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MatchRow {
    pub id: i32,
    pub start_at: DateTime<Utc>,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    pub completed: bool,
    pub confirmed: bool,
    pub ladder_id: Option<i32>,
}
