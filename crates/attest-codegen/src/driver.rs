//! The generation driver.
//!
//! One pass over the descriptor set: classify, resolve, synthesize, and
//! collect. Each type's role depends only on structural ancestor metadata,
//! never on another type's generated output, so processing order cannot
//! change any unit; input order is kept for deterministic results.
//!
//! Warnings never suppress a unit and never abort the run. Duplicate
//! descriptors cannot reach this layer -- the descriptor set rejects them
//! at construction -- so no fatal condition exists here.

use attest_common::Diagnostic;
use attest_descriptor::DescriptorSet;

use crate::synth::synthesize;
use crate::unit::GeneratedUnit;
use attest_analysis::{classify, resolve};

/// The outcome of one generation run: one unit per opted-in type, plus all
/// accumulated diagnostics.
#[derive(Debug)]
pub struct Generation {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Generation {
    /// Find a unit by its type's qualified name.
    pub fn unit(&self, qualified_name: &str) -> Option<&GeneratedUnit> {
        self.units.iter().find(|u| u.qualified_name == qualified_name)
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Generate verification units for every opted-in type in the set.
///
/// Non-opted-in descriptors participate in chain resolution but receive no
/// unit of their own.
pub fn generate(set: &DescriptorSet) -> Generation {
    let mut units = Vec::new();
    let mut diagnostics = Vec::new();

    for ty in set.iter().filter(|ty| ty.opts_in) {
        let classified = classify(ty);
        diagnostics.extend(classified.diagnostics);
        let role = resolve(ty, set);
        units.push(synthesize(ty, role, &classified.checkable));
    }

    Generation { units, diagnostics }
}
