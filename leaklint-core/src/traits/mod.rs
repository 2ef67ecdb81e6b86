//! Shared traits.

pub mod cancellation;

pub use cancellation::{Cancellable, CancellationToken, NeverCancelled};
