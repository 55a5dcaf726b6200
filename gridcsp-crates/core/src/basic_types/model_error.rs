use thiserror::Error;

/// Errors which can occur when variables or constraints are added to a [`crate::Csp`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("The variable {0} was created with an empty domain")]
    EmptyDomain(String),
    #[error("The value {value} occurs more than once in the domain of {variable}")]
    DuplicateDomainValue { variable: String, value: i32 },
    #[error("The constraint {0} has an empty scope")]
    EmptyScope(String),
    #[error("The variable {variable} occurs more than once in the scope of {constraint}")]
    DuplicateScopeVariable {
        constraint: String,
        variable: String,
    },
    #[error("The constraint {0} refers to a variable which is not part of the problem")]
    UnknownVariable(String),
    #[error("The constraint {constraint} has a tuple of arity {found}, expected {expected}")]
    TupleArityMismatch {
        constraint: String,
        expected: usize,
        found: usize,
    },
    #[error("The constraint {constraint} allows {value} for {variable}, which is not in its domain")]
    ValueOutsideDomain {
        constraint: String,
        variable: String,
        value: i32,
    },
}
