//! Error type for questlog commands

/// Errors returned by session, roster and progression operations.
///
/// Every variant is a broken caller contract, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestError {
    #[error("No task with id {id}")]
    NotFound { id: u32 },

    #[error("Cannot claim rewards: {remaining} task(s) still incomplete")]
    PreconditionFailed { remaining: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, QuestError>;
