use crate::shared::messages::{ru, MessageId};

pub const ADULT_AGE: i32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AgeRestrictionError(pub String);

/// The registration age gate, shared by account creation and profile
/// editing.
///
/// An explicit value below 18 is rejected with the fixed localized
/// message. A missing value passes: absence is not a validation
/// failure, only a too-low value is.
pub fn validate_age(age: Option<i32>) -> Result<Option<i32>, AgeRestrictionError> {
    match age {
        Some(age) if age < ADULT_AGE => Err(AgeRestrictionError(
            ru(MessageId::AgeRestriction).to_string(),
        )),
        other => Ok(other),
    }
}
