//! User identity, contact projections, and partner views.
//!
//! Users are created out-of-band; this service only reads them, assigns them
//! to ladders, and pairs them with partners. Contact projections carry just
//! the fields other players may see so partner ids and password hashes never
//! reach a response by construction.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::LadderId;

/// Maximum length of an email address accepted by the store.
pub const EMAIL_MAX: usize = 254;

/// Validation errors returned by user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Email was blank after trimming.
    EmptyEmail,
    /// Email exceeded the `max` length the store accepts.
    EmailTooLong { max: usize },
    /// Email was not a single `name@domain` pair free of whitespace.
    MalformedEmail,
    /// User id was not a UUID.
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::MalformedEmail => write!(f, "email must look like name@domain"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a [`UserId`] from its textual UUID form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Uuid::parse_str(id.as_ref())
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an existing UUID, typically read back from the store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Email address identifying a user and their session.
///
/// ## Invariants
/// - Surrounding whitespace is trimmed; the remainder is non-empty.
/// - Exactly one `@` separates a non-empty local part from a non-empty domain.
/// - At most [`EMAIL_MAX`] characters.
///
/// Comparison is exact; the store holds addresses as they were registered.
///
/// # Examples
/// ```
/// use ladder::domain::Email;
///
/// let email = Email::new("  ada@example.com ").expect("valid email");
/// assert_eq!(email.as_ref(), "ada@example.com");
/// assert!(Email::new("ada").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if trimmed.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        let mut parts = trimmed.split('@');
        let well_formed = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
        );
        if !well_formed || trimmed.chars().any(char::is_whitespace) {
            return Err(UserValidationError::MalformedEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A user row as the domain sees it, without credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    /// Stable identifier.
    pub id: UserId,
    /// Unique login email.
    pub email: Email,
    /// Optional display name.
    pub name: Option<String>,
    /// Ladder the user currently plays in.
    pub ladder_id: Option<LadderId>,
    /// Current partner, if paired.
    pub partner_id: Option<UserId>,
}

/// Public contact projection of a user: only `email` and `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContact {
    /// Login email.
    pub email: Email,
    /// Optional display name.
    pub name: Option<String>,
}

/// Stored credential material for one user.
///
/// The hash is a PHC string; it is zeroed when dropped and never serialized.
#[derive(Clone)]
pub struct UserCredentials {
    /// The account the credentials belong to.
    pub account: UserAccount,
    /// PHC-formatted password hash.
    pub password_hash: Zeroizing<String>,
}

impl fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCredentials")
            .field("account", &self.account)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

/// Partner details visible to the caller.
///
/// Both fields are `None` when the caller has no partner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerInfo {
    /// Partner's email.
    pub partner_email: Option<Email>,
    /// Partner's display name.
    pub partner_name: Option<String>,
}

impl PartnerInfo {
    /// Partner info for a user without a partner.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build partner info from the partner's contact projection.
    pub fn from_contact(contact: Option<UserContact>) -> Self {
        match contact {
            Some(UserContact { email, name }) => Self {
                partner_email: Some(email),
                partner_name: name,
            },
            None => Self::none(),
        }
    }
}
