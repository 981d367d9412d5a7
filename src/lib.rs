//! Exclusive-ownership wrapper exercise.
//!
//! One type, [`OwnedValue<T>`]: it owns a single heap-allocated numeric
//! value, guards it with a non-negativity invariant, and overloads `+`, `-`
//! and `*` so that combining two instances allocates a third.
//!
//! The interesting parts, pattern by pattern:
//!
//! - **RAII ownership**: storage is acquired in the constructor through the
//!   global allocator and released exactly once in `Drop`, on every exit
//!   path. Allocation failure is a recoverable [`OwnedValueError`], not an
//!   abort.
//! - **Fallible construction instead of exceptions**: `with_value`, `set`
//!   and the operators return `Result`, so the reject policy is visible to
//!   callers instead of hidden behind a printed diagnostic. A rejected
//!   construction produces no instance; a rejected `set` keeps the previous
//!   value.
//! - **Operator overloading on references**: `&a + &b` leaves both operands
//!   alive and produces an independently owned result.
//!
//! This is an exercise, not a general-purpose smart-pointer library: no
//! shared or weak ownership, no arrays, no custom deleters.

pub mod error;
pub mod owned;

pub use error::OwnedValueError;
pub use owned::OwnedValue;
