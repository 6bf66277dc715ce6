use thiserror::Error;

/// Client-side mistakes: the request is rejected and the roster is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Player name cannot be empty or whitespace.")]
    EmptyName,

    #[error("Player name contains invalid characters. Only letters, numbers, hyphens, and apostrophes are allowed.")]
    InvalidCharacters,

    #[error("Player name contains inappropriate content: '{term}'.")]
    InappropriateContent { term: String },

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid skill name: {0}")]
    InvalidSkill(String),

    #[error("{0}")]
    MalformedRequest(String),
}

/// Top-level error type for roster operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Player '{identifier}' not found.")]
    PlayerNotFound { identifier: String },

    #[error("No suitable player found.")]
    NoSuitablePlayer,
}

pub type RosterResult<T> = Result<T, RosterError>;

impl RosterError {
    pub fn not_found(identifier: impl Into<String>) -> Self {
        Self::PlayerNotFound {
            identifier: identifier.into(),
        }
    }

    pub fn malformed(details: impl Into<String>) -> Self {
        Self::Validation(ValidationError::MalformedRequest(details.into()))
    }
}
