//! Submission-time validation.

use std::fmt;

pub type ValidatorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Verdict returned by a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Invalid; show the configured error message.
    Invalid,
    /// Invalid; show this message instead (it also replaces the configured one).
    Message(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Validation {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

impl From<String> for Validation {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Validation {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<Result<(), String>> for Validation {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(message) => Self::Message(message),
        }
    }
}

type ValidateFn = dyn FnMut(&str) -> Result<Validation, ValidatorError>;

/// Pluggable predicate run against the effective value on submit.
pub struct Validator {
    check: Box<ValidateFn>,
}

impl Validator {
    /// Infallible validator. The closure may return `bool`, a message, or a `Validation`.
    pub fn new<F, R>(mut check: F) -> Self
    where
        F: FnMut(&str) -> R + 'static,
        R: Into<Validation>,
    {
        Self {
            check: Box::new(move |value| Ok(check(value).into())),
        }
    }

    /// Validator that can fail outright; an `Err` aborts the submit and reaches the caller.
    pub fn fallible<F, R>(mut check: F) -> Self
    where
        F: FnMut(&str) -> Result<R, ValidatorError> + 'static,
        R: Into<Validation>,
    {
        Self {
            check: Box::new(move |value| check(value).map(Into::into)),
        }
    }

    pub fn always_valid() -> Self {
        Self::new(|_| true)
    }

    pub fn check(&mut self, value: &str) -> Result<Validation, ValidatorError> {
        (self.check)(value)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::always_valid()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Validation, Validator};

    #[test]
    fn default_accepts_everything() {
        let mut validator = Validator::default();
        assert_eq!(validator.check("").expect("infallible"), Validation::Valid);
    }

    #[test]
    fn closures_may_return_bool_or_message() {
        let mut by_bool = Validator::new(|value: &str| value.len() > 2);
        assert_eq!(by_bool.check("ab").expect("infallible"), Validation::Invalid);

        let mut by_message = Validator::new(|value: &str| {
            if value.len() > 2 {
                Validation::Valid
            } else {
                "too short".into()
            }
        });
        assert_eq!(
            by_message.check("ab").expect("infallible"),
            Validation::Message("too short".to_string())
        );
        assert!(by_message.check("abc").expect("infallible").is_valid());
    }

    #[test]
    fn fallible_errors_surface() {
        let mut validator = Validator::fallible(|value: &str| {
            if value == "boom" {
                Err("backend unavailable".into())
            } else {
                Ok(true)
            }
        });
        assert!(validator.check("ok").expect("ok").is_valid());
        let err = validator.check("boom").expect_err("fault");
        assert_eq!(err.to_string(), "backend unavailable");
    }
}
