use thiserror::Error;

use crate::export::ExportError;
use crate::store::StoreError;
use crate::wizard::validator::ValidationErrors;

/// Application-level error type surfaced to the hosting page shell.
///
/// Propagation policy: validation and export errors are returned
/// synchronously to the caller; persistence errors during autosave are
/// logged and swallowed at the boundary (`autosave::SaveOutcome`), so
/// `Persistence` only appears when a caller persists explicitly. A
/// fetch failure is terminal for the edit view — there is no content to
/// edit without it.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Persistence error: {0}")]
    Persistence(StoreError),

    #[error("Failed to load resume: {0}")]
    Fetch(StoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

impl BuilderError {
    /// True when the hosting view can keep running (show the error
    /// inline) rather than replacing the screen with a blocking state.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, BuilderError::Fetch(_) | BuilderError::Config(_))
    }
}
