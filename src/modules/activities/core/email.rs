use std::fmt;

pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_LOCAL_PART_LEN: usize = 64;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email is empty")]
    Empty,

    #[error("email is longer than {} characters", MAX_EMAIL_LEN)]
    TooLong,

    #[error("email must contain exactly one '@'")]
    MissingAt,

    #[error("local part is missing")]
    MissingLocalPart,

    #[error("local part is longer than {} characters", MAX_LOCAL_PART_LEN)]
    LocalPartTooLong,

    #[error("domain is missing")]
    MissingDomain,

    #[error("domain '{0}' is not valid")]
    InvalidDomain(String),

    #[error("email contains whitespace or control characters")]
    InvalidCharacter,
}

/// A participant email that passed format and length checks.
///
/// Stored exactly as given; two emails are the same participant only when
/// the strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if raw.chars().count() > MAX_EMAIL_LEN {
            return Err(EmailError::TooLong);
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(EmailError::InvalidCharacter);
        }

        let (local, domain) = match raw.split_once('@') {
            Some((local, domain)) if !domain.contains('@') => (local, domain),
            _ => return Err(EmailError::MissingAt),
        };
        if local.is_empty() {
            return Err(EmailError::MissingLocalPart);
        }
        if local.chars().count() > MAX_LOCAL_PART_LEN {
            return Err(EmailError::LocalPartTooLong);
        }
        if domain.is_empty() {
            return Err(EmailError::MissingDomain);
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(EmailError::InvalidDomain(domain.to_string()));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParticipantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
