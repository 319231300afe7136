//! Service catalog constants and validation.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_MANICURE: &str = "manicure";
pub const CATEGORY_PEDICURE: &str = "pedicure";
pub const CATEGORY_NAIL_ART: &str = "nail_art";
pub const CATEGORY_EXTENSIONS: &str = "extensions";
pub const CATEGORY_CARE: &str = "care";

/// All valid service categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MANICURE,
    CATEGORY_PEDICURE,
    CATEGORY_NAIL_ART,
    CATEGORY_EXTENSIONS,
    CATEGORY_CARE,
];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a service name.
pub const MAX_SERVICE_NAME_LEN: usize = 120;

/// Maximum length for a service description.
pub const MAX_DESCRIPTION_LEN: usize = 2_000;

/// Appointment durations are booked on a 5-minute grid.
pub const DURATION_GRID_MINS: i32 = 5;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that `category` is one of the allowed values.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid service category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

/// Validate a service name: non-empty and within the length limit.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Service name cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_SERVICE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Service name exceeds maximum length of {MAX_SERVICE_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an optional service description length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a price in cents: must not be negative.
pub fn validate_price_cents(price_cents: i32) -> Result<(), CoreError> {
    if price_cents < 0 {
        Err(CoreError::Validation(format!(
            "Price cannot be negative, got {price_cents}"
        )))
    } else {
        Ok(())
    }
}

/// Validate an appointment duration: positive and on the 5-minute grid.
pub fn validate_duration_mins(duration_mins: i32) -> Result<(), CoreError> {
    if duration_mins <= 0 {
        return Err(CoreError::Validation(format!(
            "Duration must be positive, got {duration_mins}"
        )));
    }
    if duration_mins % DURATION_GRID_MINS != 0 {
        return Err(CoreError::Validation(format!(
            "Duration must be a multiple of {DURATION_GRID_MINS} minutes, got {duration_mins}"
        )));
    }
    Ok(())
}
