//! Execution of generated units against simulated instances.

use std::fmt;

use rustc_hash::FxHashMap;

use attest_codegen::unit::{
    GeneratedUnit, LookupTail, MethodBody, FIRST_UNSET_FIELD, IDEMPOTENT_CHECK, STRICT_CHECK,
};
use attest_codegen::Generation;

use crate::error::NotInitialized;
use crate::instance::Instance;

/// Misuse of the evaluator or a malformed unit. Distinct from the runtime
/// verification failure, which is the modeled outcome, not an evaluator
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// No unit is registered for the instance's type (or a delegation
    /// target).
    UnknownType { qualified_name: String },
    /// The unit has no member with this name; e.g. asking a value kind for
    /// its idempotent check.
    NoSuchMember {
        qualified_name: String,
        member: &'static str,
    },
    /// A member exists but its body has an unexpected shape.
    MalformedUnit {
        qualified_name: String,
        member: &'static str,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnknownType { qualified_name } => {
                write!(f, "no generated unit for type '{}'", qualified_name)
            }
            EvalError::NoSuchMember {
                qualified_name,
                member,
            } => write!(
                f,
                "type '{}' has no generated member '{}'",
                qualified_name, member
            ),
            EvalError::MalformedUnit {
                qualified_name,
                member,
            } => write!(
                f,
                "member '{}' of type '{}' has an unexpected body",
                member, qualified_name
            ),
        }
    }
}

impl std::error::Error for EvalError {}

/// Executes unit semantics. Holds the run's units indexed by qualified
/// type name so delegation can follow a chain across units.
pub struct Evaluator<'a> {
    units: FxHashMap<&'a str, &'a GeneratedUnit>,
}

impl<'a> Evaluator<'a> {
    pub fn new(units: impl IntoIterator<Item = &'a GeneratedUnit>) -> Self {
        Evaluator {
            units: units
                .into_iter()
                .map(|u| (u.qualified_name.as_str(), u))
                .collect(),
        }
    }

    pub fn from_generation(generation: &'a Generation) -> Self {
        Self::new(&generation.units)
    }

    fn unit(&self, qualified_name: &str) -> Result<&'a GeneratedUnit, EvalError> {
        self.units
            .get(qualified_name)
            .copied()
            .ok_or_else(|| EvalError::UnknownType {
                qualified_name: qualified_name.to_string(),
            })
    }

    /// Run the instance type's first-unset-field lookup.
    ///
    /// Local checks run in declaration order; when none matches, a
    /// continuation's lookup delegates to its ancestor's and returns that
    /// result unchanged. The chain is walked exactly once, root-ward.
    pub fn first_unset_field_name(
        &self,
        instance: &Instance,
    ) -> Result<Option<String>, EvalError> {
        let mut unit = self.unit(instance.qualified_name())?;
        loop {
            let method =
                unit.method(FIRST_UNSET_FIELD)
                    .ok_or_else(|| EvalError::NoSuchMember {
                        qualified_name: unit.qualified_name.clone(),
                        member: FIRST_UNSET_FIELD,
                    })?;
            let MethodBody::Lookup { checks, tail } = &method.body else {
                return Err(EvalError::MalformedUnit {
                    qualified_name: unit.qualified_name.clone(),
                    member: FIRST_UNSET_FIELD,
                });
            };
            for field in checks {
                if !instance.is_assigned(field) {
                    return Ok(Some(field.clone()));
                }
            }
            match tail {
                LookupTail::None => return Ok(None),
                LookupTail::Delegate { ancestor } => unit = self.unit(ancestor)?,
            }
        }
    }

    /// Run the strict check: the unconditional entry point.
    ///
    /// The outer `Result` is evaluator usage; the inner one is the modeled
    /// runtime outcome. Repeating a successful strict check always
    /// succeeds again; it reads only the fields and ignores the flag.
    pub fn strict_check(
        &self,
        instance: &Instance,
    ) -> Result<Result<(), NotInitialized>, EvalError> {
        let unit = self.unit(instance.qualified_name())?;
        let method = unit
            .method(STRICT_CHECK)
            .ok_or_else(|| EvalError::NoSuchMember {
                qualified_name: unit.qualified_name.clone(),
                member: STRICT_CHECK,
            })?;
        if !matches!(method.body, MethodBody::StrictCheck { .. }) {
            return Err(EvalError::MalformedUnit {
                qualified_name: unit.qualified_name.clone(),
                member: STRICT_CHECK,
            });
        }
        match self.first_unset_field_name(instance)? {
            Some(field) => Ok(Err(NotInitialized::new(field))),
            None => Ok(Ok(())),
        }
    }

    /// Run the idempotent check: strict check at most effectively once.
    ///
    /// On the first successful run the instance transitions
    /// `Fresh -> Verified` and every later call is a no-op, regardless of
    /// field mutation in between. A failed run leaves the instance fresh.
    /// Value kinds have no such member, and asking for it is an
    /// [`EvalError::NoSuchMember`].
    pub fn idempotent_check(
        &self,
        instance: &mut Instance,
    ) -> Result<Result<(), NotInitialized>, EvalError> {
        let unit = self.unit(instance.qualified_name())?;
        let method = unit
            .method(IDEMPOTENT_CHECK)
            .ok_or_else(|| EvalError::NoSuchMember {
                qualified_name: unit.qualified_name.clone(),
                member: IDEMPOTENT_CHECK,
            })?;
        if !matches!(method.body, MethodBody::IdempotentCheck { .. }) {
            return Err(EvalError::MalformedUnit {
                qualified_name: unit.qualified_name.clone(),
                member: IDEMPOTENT_CHECK,
            });
        }
        if instance.is_verified() {
            return Ok(Ok(()));
        }
        match self.strict_check(instance)? {
            Ok(()) => {
                instance.mark_verified();
                Ok(Ok(()))
            }
            Err(err) => Ok(Err(err)),
        }
    }
}
