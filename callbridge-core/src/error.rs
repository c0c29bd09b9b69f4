/// Errors produced by the `callbridge-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A destination phone number was empty.
    #[error("phone number must not be empty")]
    EmptyPhoneNumber,

    /// A server-side identifier was empty.
    #[error("{field} must not be empty")]
    EmptyIdentifier { field: &'static str },
}
