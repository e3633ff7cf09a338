//! src/domain/outcome.rs

/// Result of running a validator against one input.
///
/// Failure is data: `Invalid` carries exactly one reason drawn from the
/// closed reason enumeration of the validator's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationOutcome<R> {
    Valid,
    Invalid(R),
}

impl<R> ValidationOutcome<R> {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// reason of an invalid outcome, `None` if valid
    pub fn reason(&self) -> Option<&R> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(reason) => Some(reason),
        }
    }

    /// Left-biased combination of two outcomes.
    ///
    /// The first invalid outcome wins, so the operation is associative but
    /// not commutative.
    pub fn combine(self, other: Self) -> Self {
        match self {
            ValidationOutcome::Invalid(_) => self,
            ValidationOutcome::Valid => other,
        }
    }

    pub fn into_result(self) -> Result<(), R> {
        self.into()
    }
}

impl<R> From<ValidationOutcome<R>> for Result<(), R> {
    fn from(outcome: ValidationOutcome<R>) -> Self {
        match outcome {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(reason) => Err(reason),
        }
    }
}

impl<R> From<Result<(), R>> for ValidationOutcome<R> {
    fn from(result: Result<(), R>) -> Self {
        match result {
            Ok(()) => ValidationOutcome::Valid,
            Err(reason) => ValidationOutcome::Invalid(reason),
        }
    }
}

impl<R: std::fmt::Display> std::fmt::Display for ValidationOutcome<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationOutcome::Valid => write!(f, "valid"),
            ValidationOutcome::Invalid(reason) => write!(f, "invalid: {}", reason),
        }
    }
}
