use super::verification_failure::VerificationFailure;

/// Result of a single verification: the verified purchase, or the reason it
/// was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome<T> {
    Success(T),
    Failure(VerificationFailure),
}

impl<T> VerificationOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&VerificationFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<T, VerificationFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}
