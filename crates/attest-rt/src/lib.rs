//! Reference runtime semantics for generated verification units.
//!
//! Generated units are structured descriptions, not executable code; this
//! crate executes them. The [`Evaluator`] walks a unit's members against a
//! simulated [`Instance`] and produces exactly the outcomes the emitted
//! code would: the first-unset-field lookup with ancestor delegation, the
//! unconditional strict check, and the cached idempotent check with its
//! sticky per-instance flag.
//!
//! This is both the executable form of the verification contract (used by
//! the scenario tests) and a harness for hosts that want to validate units
//! without compiling emitted text.

pub mod error;
pub mod eval;
pub mod instance;

pub use error::NotInitialized;
pub use eval::{EvalError, Evaluator};
pub use instance::Instance;
