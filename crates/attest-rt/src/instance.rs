//! A simulated object instance.

use rustc_hash::FxHashSet;

/// One simulated instance of a generated type.
///
/// Holds the set of assigned mandatory fields (its own and any inherited
/// ones -- an object has one storage for the whole chain) and the sticky
/// verified flag. Every instance owns its state alone; two instances never
/// share a flag or field assignments.
#[derive(Debug, Clone)]
pub struct Instance {
    qualified_name: String,
    assigned: FxHashSet<String>,
    verified: bool,
}

impl Instance {
    /// A fresh instance of the named type with no fields assigned.
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Instance {
            qualified_name: qualified_name.into(),
            assigned: FxHashSet::default(),
            verified: false,
        }
    }

    /// Qualified name of the instance's type.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Record a construction-time assignment of a mandatory field.
    pub fn assign(&mut self, field: impl Into<String>) -> &mut Self {
        self.assigned.insert(field.into());
        self
    }

    /// Make a field unset again, modeling unrelated later mutation. Does
    /// not touch the verified flag: verification is sticky.
    pub fn unassign(&mut self, field: &str) {
        self.assigned.remove(field);
    }

    /// Whether the field currently holds a value.
    pub fn is_assigned(&self, field: &str) -> bool {
        self.assigned.contains(field)
    }

    /// Whether a successful idempotent check has run on this instance.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// `Fresh -> Verified`, exactly once, triggered by the evaluator on a
    /// successful idempotent check. Terminal: nothing ever clears it.
    pub(crate) fn mark_verified(&mut self) {
        self.verified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_are_per_instance() {
        let mut a = Instance::new("Ex.Point");
        let b = Instance::new("Ex.Point");
        a.assign("x");
        assert!(a.is_assigned("x"));
        assert!(!b.is_assigned("x"));
    }

    #[test]
    fn unassign_leaves_the_flag_alone() {
        let mut a = Instance::new("Ex.Base");
        a.assign("x");
        a.mark_verified();
        a.unassign("x");
        assert!(!a.is_assigned("x"));
        assert!(a.is_verified());
    }
}
