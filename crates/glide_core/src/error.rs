//! Navigation error types

use thiserror::Error;

/// Errors raised by the navigation core.
///
/// Reaching an edge, an empty visible set, or a request dropped while a
/// transition is in flight are ordinary outcomes and never show up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliderError {
    /// Item index outside `[0, len - 1]`
    #[error("Item index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// Item handle not present in the provider
    #[error("Item is not part of this slider")]
    ItemNotFound,

    /// Engine or surface already torn down
    #[error("Slider has been destroyed")]
    Destroyed,
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, SliderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SliderError::IndexOutOfRange { index: 7, len: 5 };
        assert_eq!(err.to_string(), "Item index 7 out of range for 5 items");
        assert_eq!(SliderError::Destroyed.to_string(), "Slider has been destroyed");
    }
}
