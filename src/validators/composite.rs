//! src/validators/composite.rs

use crate::domain::ValidationOutcome;
use crate::validators::Validator;

/// Type-erased validator as stored inside a [`CompositeValidator`].
pub type BoxedValidator<R> = Box<dyn Validator<Reason = R> + Send + Sync>;

/// Ordered sequence of validators reporting the first failure.
///
/// The outcome is `Valid` iff every member is valid. Members after the first
/// failing one are not evaluated. An empty composite accepts every input.
pub struct CompositeValidator<R> {
    validators: Vec<BoxedValidator<R>>,
}

impl<R> CompositeValidator<R> {
    pub fn new(validators: Vec<BoxedValidator<R>>) -> Self {
        Self { validators }
    }

    /// Append `validator` as the last member.
    pub fn with<V>(mut self, validator: V) -> Self
    where
        V: Validator<Reason = R> + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<R> Default for CompositeValidator<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R> std::fmt::Debug for CompositeValidator<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeValidator")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl<R> Validator for CompositeValidator<R> {
    type Reason = R;

    fn validate(&self, input: &str) -> ValidationOutcome<R> {
        self.validators
            .iter()
            .map(|validator| validator.validate(input))
            .find(ValidationOutcome::is_invalid)
            .unwrap_or(ValidationOutcome::Valid)
    }
}
