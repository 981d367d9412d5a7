use thiserror::Error;

/// Everything that can go wrong while constructing or mutating an
/// [`OwnedValue`](crate::OwnedValue).
///
/// Both variants are stateless tags: the failure site constructs a fresh
/// value, reports it to the caller, and the wrapper is left in a
/// well-defined state (see the reject policy on [`OwnedValue::set`]).
///
/// [`OwnedValue::set`]: crate::OwnedValue::set
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedValueError {
    #[error("Failed to allocate owned storage")]
    AllocationFailure,

    #[error("Negative value rejected: owned values must be non-negative")]
    NegativeValue,
}
