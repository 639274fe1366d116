use thiserror::Error;

/// Errors returned by cursor creation and by cursor operations.
///
/// These are contract violations, not transient faults: the caller either
/// checks the matching precondition (`len`, [`has_next`], [`has_previous`],
/// a preceding read) or abandons the operation. A failed operation performs
/// no mutation.
///
/// [`has_next`]: crate::Cursor::has_next
/// [`has_previous`]: crate::Cursor::has_previous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested cursor position lies outside `0..=len`.
    #[error("position {position} out of range for a list of {len} elements")]
    OutOfRange {
        /// The position that was requested.
        position: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },

    /// A read was attempted where no element remains in that direction.
    #[error("no element remains in the direction of the read")]
    NoSuchElement,

    /// A removal or replacement was attempted although no element has been
    /// read since the cursor was created or last modified the list.
    #[error("no element has been read since the cursor was created or last modified the list")]
    IllegalState,
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::OutOfRange { position: 4, len: 3 }.to_string(),
            "position 4 out of range for a list of 3 elements"
        );
        assert_eq!(
            Error::NoSuchElement.to_string(),
            "no element remains in the direction of the read"
        );
    }
}
