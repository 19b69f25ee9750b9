//! Match records as exposed by the confirmed-matches listing.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{LadderId, UserId};

/// A played or scheduled match between two teams.
///
/// `team1_id`/`team2_id` reference the registering player of each side.
/// Scores stay `None` until a result is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Store-assigned identifier.
    pub id: i32,
    /// Scheduled start time.
    pub start_at: DateTime<Utc>,
    /// Player who registered the first team.
    pub team1_id: UserId,
    /// Player who registered the second team.
    pub team2_id: UserId,
    pub team1_score: Option<i32>,
    pub team2_score: Option<i32>,
    /// Set once a result has been reported.
    pub completed: bool,
    /// Set once both sides agreed on the result; only confirmed matches
    /// are listed.
    pub confirmed: bool,
    /// Ladder the match counts towards, if any.
    pub ladder_id: Option<LadderId>,
}

impl Match {
    /// Start time as an ISO-8601 UTC string with millisecond precision,
    /// e.g. `2024-05-01T18:30:00.000Z`.
    pub fn start_at_iso(&self) -> String {
        self.start_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Order matches newest first, breaking ties by descending id.
pub fn sort_newest_first(matches: &mut [Match]) {
    matches.sort_by(|a, b| b.start_at.cmp(&a.start_at).then(b.id.cmp(&a.id)));
}
