use thiserror::Error;

/// Reasons a media viewer operation was refused.
///
/// None of these are shown to the visitor. Callers log them and leave the
/// viewer where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewerError {
    #[error("item has no media to show")]
    EmptyMediaList,
    #[error("viewer is closed")]
    Closed,
}
