//! Analysis passes of the attest generator.
//!
//! Two passes run per candidate type, both pure functions over descriptor
//! data:
//!
//! - [`classify`]: decide which declared mandatory fields can actually be
//!   verified, warning about the rest
//! - [`chain`]: decide the type's role in its inheritance chain -- the
//!   root that owns the cache flag, or a continuation that delegates to
//!   its nearest participating ancestor

pub mod chain;
pub mod classify;

pub use chain::{resolve, ChainRole};
pub use classify::{classify, Classified};
