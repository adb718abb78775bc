use validator::Validate;

use crate::error::ApiError;

pub fn validate<T: Validate>(value: &T) -> Result<(), ApiError> {
    value.validate().map_err(|err| {
        tracing::debug!(error = %err, "request payload rejected");
        ApiError::Validation(err.to_string())
    })
}
