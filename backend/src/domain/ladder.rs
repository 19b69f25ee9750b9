//! Ladder entities, the caller's ladder overview, and seed definitions.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors returned by ladder value constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderValidationError {
    /// Id was zero or negative.
    #[error("ladder id must be a positive integer")]
    NonPositiveId,
    /// Raw id text did not parse as an integer.
    #[error("ladder id must be an integer, got {raw:?}")]
    NotAnInteger { raw: String },
    /// Ladder number was zero or negative.
    #[error("ladder number must be a positive integer")]
    NonPositiveNumber,
}

/// Store-assigned ladder identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LadderId(i32);

impl LadderId {
    /// Validate a raw identifier.
    pub fn new(raw: i32) -> Result<Self, LadderValidationError> {
        if raw <= 0 {
            return Err(LadderValidationError::NonPositiveId);
        }
        Ok(Self(raw))
    }

    /// Parse an identifier from a query-string or path value.
    ///
    /// # Examples
    /// ```
    /// use ladder::domain::LadderId;
    ///
    /// assert_eq!(LadderId::parse(" 2 ").map(|id| id.get()), Ok(2));
    /// assert!(LadderId::parse("two").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, LadderValidationError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<i32>()
            .map_err(|_| LadderValidationError::NotAnInteger {
                raw: trimmed.to_owned(),
            })?;
        Self::new(value)
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for LadderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public ladder number, unique across all ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LadderNumber(i32);

impl LadderNumber {
    /// Validate a ladder number.
    pub fn new(raw: i32) -> Result<Self, LadderValidationError> {
        if raw <= 0 {
            return Err(LadderValidationError::NonPositiveNumber);
        }
        Ok(Self(raw))
    }

    /// Raw integer value.
    pub fn get(self) -> i32 {
        self.0
    }
}

/// A numbered competitive bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    pub id: LadderId,
    pub number: LadderNumber,
    pub name: String,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Result of listing ladders for a caller.
///
/// `current_ladder` is `None` when the caller has not joined a ladder or the
/// caller record no longer exists. `all_ladders` holds active ladders only,
/// ordered by ascending number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderOverview {
    pub current_ladder: Option<Ladder>,
    pub all_ladders: Vec<Ladder>,
}

/// One ladder the bootstrap guarantees exists, keyed by `number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LadderSeed {
    pub number: LadderNumber,
    pub name: String,
    pub end_date: DateTime<Utc>,
}

/// The three fixed ladders created by the seed bootstrap.
///
/// Seeds are always active when inserted. Existing rows with the same number
/// are left untouched.
pub fn default_ladder_seeds() -> Result<Vec<LadderSeed>, LadderValidationError> {
    const SEEDS: [(i32, &str); 3] = [(1, "Ladder 1"), (2, "Ladder 2"), (3, "Ladder 3")];
    let end_date = season_end();
    SEEDS
        .iter()
        .map(|(number, name)| {
            Ok(LadderSeed {
                number: LadderNumber::new(*number)?,
                name: (*name).to_owned(),
                end_date,
            })
        })
        .collect()
}

fn season_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 59)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
