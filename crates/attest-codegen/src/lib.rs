//! Verification-unit synthesis for the attest generator.
//!
//! - [`unit`]: the generated verification unit as structured IR -- a member
//!   list whose bodies are a small abstract syntax, never literal text
//! - [`synth`]: synthesis of one unit from a descriptor, its chain role,
//!   and its checkable fields
//! - [`driver`]: the single-pass [`generate`] entry point over a whole
//!   descriptor set
//!
//! Emission to source text lives in `attest-emit`; executing a unit's
//! semantics against simulated instances lives in `attest-rt`.

pub mod driver;
pub mod synth;
pub mod unit;

pub use driver::{generate, Generation};
pub use synth::synthesize;
pub use unit::{
    Dispatch, FlagMember, GeneratedUnit, LookupTail, Member, MethodBody, MethodMember, Visibility,
};
