//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Numbered ladders; `number` is unique.
    ladders (id) {
        id -> Int4,
        number -> Int4,
        #[max_length = 64]
        name -> Varchar,
        end_date -> Timestamptz,
        is_active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Players. `partner_id` is unique and never equals `id`.
    users (id) {
        id -> Uuid,
        #[max_length = 254]
        email -> Varchar,
        #[max_length = 128]
        name -> Nullable<Varchar>,
        /// Argon2 PHC hash string.
        password -> Text,
        ladder_id -> Nullable<Int4>,
        partner_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Match results; only confirmed rows are ever read by the API.
    matches (id) {
        id -> Int4,
        start_at -> Timestamptz,
        team1_id -> Uuid,
        team2_id -> Uuid,
        team1_score -> Nullable<Int4>,
        team2_score -> Nullable<Int4>,
        completed -> Bool,
        confirmed -> Bool,
        ladder_id -> Nullable<Int4>,
    }
}

diesel::joinable!(users -> ladders (ladder_id));
diesel::joinable!(matches -> ladders (ladder_id));

diesel::allow_tables_to_appear_in_same_query!(ladders, matches, users);
