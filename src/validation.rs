//! Light parameter checks run before a request leaves the client.
//!
//! The platform validates everything again server-side; these only catch the
//! obvious mistakes early with a readable message.

use std::fmt::Display;

use crate::error::SdkError;

/// `value` must be one of `choices`.
pub fn check_choice<T>(name: &str, value: &T, choices: &[T]) -> Result<(), SdkError>
where
    T: PartialEq + Display,
{
    if choices.contains(value) {
        return Ok(());
    }
    let allowed = choices
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(SdkError::Validation(format!(
        "{} has value {}; expected one of [{}]",
        name, value, allowed
    )))
}

/// `value` must contain something other than whitespace.
pub fn check_not_empty(name: &str, value: &str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} cannot be empty", name)));
    }
    Ok(())
}

/// `value` must lie in `min..=max`.
pub fn check_range<T>(name: &str, value: T, min: T, max: T) -> Result<(), SdkError>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(SdkError::Validation(format!(
            "{} must be {}-{}, got {}",
            name, min, max, value
        )));
    }
    Ok(())
}
