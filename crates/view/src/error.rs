//! User-facing view errors.
//!
//! Both kinds carry the text that was shown in the message slot, so callers
//! can report it without reformatting.

use inventory_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A root, record, metadata or reference fetch failed.
    #[error("{message}")]
    FetchFailure {
        message: String,
        #[source]
        source: ClientError,
    },

    /// Persisting a project failed. `message` is the server detail verbatim.
    #[error("{message}")]
    SaveFailure {
        message: String,
        #[source]
        source: ClientError,
    },
}

impl ViewError {
    pub fn fetch(what: &str, source: ClientError) -> Self {
        Self::FetchFailure {
            message: format!("Failed to load {what}: {}", source.user_detail()),
            source,
        }
    }

    pub fn save(source: ClientError) -> Self {
        Self::SaveFailure {
            message: source.user_detail(),
            source,
        }
    }

    /// Text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailure { message, .. } | Self::SaveFailure { message, .. } => message,
        }
    }

    /// The underlying client error.
    pub fn client_error(&self) -> &ClientError {
        match self {
            Self::FetchFailure { source, .. } | Self::SaveFailure { source, .. } => source,
        }
    }
}
