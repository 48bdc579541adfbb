use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("not initialized: run 'agentdesk init'")]
    NotInitialized,

    #[error("client not found: {0}")]
    ClientNotFound(String),

    #[error("demo link not found: {0}")]
    LinkNotFound(String),

    #[error("demo link expired: {0}")]
    LinkExpired(String),

    #[error("demo link deactivated: {0}")]
    LinkInactive(String),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid tone: {0}")]
    InvalidTone(String),

    #[error("invalid after-hours goal: {0}")]
    InvalidGoal(String),

    #[error("could not mint a unique slug for '{0}'")]
    SlugGeneration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeskError>;
