//! Errors shared by the catalog kinds and the shopping cart.

use crate::framework::FrameworkError;
use crate::model::ShoppingCartId;
use thiserror::Error;

/// Longest value accepted by the short text columns (names, emails, phone numbers).
pub const MAX_SHORT_TEXT: usize = 255;

/// Errors returned by the entity stores.
///
/// Hook errors cross the actor boundary boxed inside [`FrameworkError::EntityError`]; the
/// `From<FrameworkError>` impl below recovers the original variant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No row with that id.
    #[error("{0} not found")]
    NotFound(String),

    /// A field is missing, blank or out of range.
    #[error("{0}")]
    Validation(String),

    /// A referenced parent row does not exist.
    #[error("{0} does not exist")]
    MissingReference(String),

    /// The cart is closed and can no longer change.
    #[error("Error! Cart already closed!")]
    CartClosed(ShoppingCartId),

    /// The actor behind the store is gone or failed unexpectedly.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<FrameworkError> for StoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(what) => StoreError::NotFound(what),
            FrameworkError::EntityError(inner) => match inner.downcast::<StoreError>() {
                Ok(store_error) => *store_error,
                Err(other) => StoreError::Unavailable(other.to_string()),
            },
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

/// Rejects blank values and values longer than [`MAX_SHORT_TEXT`].
pub(crate) fn check_short_text(field: &str, value: &str) -> Result<(), StoreError> {
    check_text(field, value)?;
    if value.chars().count() > MAX_SHORT_TEXT {
        return Err(StoreError::Validation(format!(
            "{field} must be at most {MAX_SHORT_TEXT} characters"
        )));
    }
    Ok(())
}

/// Rejects blank values.
pub(crate) fn check_text(field: &str, value: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(format!("{field} may not be blank")));
    }
    Ok(())
}

/// Rejects negative amounts.
pub(crate) fn check_non_negative(field: &str, value: f64) -> Result<(), StoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(StoreError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}
