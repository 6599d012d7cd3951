use thiserror::Error;

/// Coarse classification of a [`SectionMapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke an input contract (rebuild arguments).
    InvalidArgument,
    /// A positional or strict identity lookup had nothing to return.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionMapError {
    #[error("rebuild got {items} items but {controllers} controllers")]
    LengthMismatch { items: usize, controllers: usize },

    #[error("item at section {second} has the same identity as the item at section {first}")]
    DuplicateItem { first: usize, second: usize },

    #[error("controller at section {second} is already used by section {first}")]
    DuplicateController { first: usize, second: usize },

    #[error("section {section} out of bounds (len {len})")]
    SectionOutOfBounds { section: usize, len: usize },

    #[error("no stored item has the identity of the update")]
    ItemNotFound,
}

impl SectionMapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SectionMapError::LengthMismatch { .. }
            | SectionMapError::DuplicateItem { .. }
            | SectionMapError::DuplicateController { .. } => ErrorKind::InvalidArgument,
            SectionMapError::SectionOutOfBounds { .. } | SectionMapError::ItemNotFound => {
                ErrorKind::NotFound
            }
        }
    }
}
