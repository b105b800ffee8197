use thiserror::Error as ThisError;

/// Errors raised while building a tree from external data.
///
/// The calculators themselves are total and never fail; only the
/// construction helpers in [`crate::cs::tree`] return these.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Level-order text must be wrapped in `[` and `]`.
    #[error("level-order input must be enclosed in brackets")]
    MissingBrackets,

    /// A token was neither an integer nor `null`.
    #[error("invalid token `{token}` at position {position}")]
    InvalidToken { position: usize, token: String },

    /// A value no parent slot can hold: it follows a `null` root, or every
    /// child slot of the nodes listed before it is already used.
    #[error("value at position {position} has no parent node")]
    DetachedNode { position: usize },
}

impl Error {
    pub fn invalid_token(position: usize, token: impl Into<String>) -> Self {
        Error::InvalidToken {
            position,
            token: token.into(),
        }
    }

    pub fn detached_node(position: usize) -> Self {
        Error::DetachedNode { position }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
