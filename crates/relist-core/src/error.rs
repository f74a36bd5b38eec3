use thiserror::Error;

/// Everything the list reports to its host. None of these are fatal: the
/// failing step is skipped and the previous layout stays in place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    #[error("item count must not be negative (got {0})")]
    NegativeItemCount(i64),

    #[error("row/column count must be at least 1 (got {0})")]
    InvalidRowOrCol(usize),

    #[error("prototype cell size must be positive (got {width}x{height})")]
    InvalidCellSize { width: f32, height: f32 },

    #[error("prototype cell not set")]
    MissingPrototype,

    #[error("scroll container not found")]
    MissingScrollContainer,

    #[error("viewport not found")]
    MissingViewport,

    #[error("list has not been initialized")]
    NotInitialized,

    #[error("list has been disposed")]
    Disposed,

    #[error("list re-entered while an update was in progress")]
    Reentrant,
}

impl ListError {
    /// Configuration problems, as opposed to bad input or misuse.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            ListError::InvalidRowOrCol(_)
                | ListError::InvalidCellSize { .. }
                | ListError::MissingPrototype
                | ListError::MissingScrollContainer
                | ListError::MissingViewport
        )
    }
}
