//! Gallery categories and the built-in nail shape/style option sets.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Gallery categories
// ---------------------------------------------------------------------------

pub const CATEGORY_MANICURE: &str = "manicure";
pub const CATEGORY_PEDICURE: &str = "pedicure";
pub const CATEGORY_NAIL_ART: &str = "nail_art";
pub const CATEGORY_EXTENSIONS: &str = "extensions";
pub const CATEGORY_SEASONAL: &str = "seasonal";

/// All valid gallery categories.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_MANICURE,
    CATEGORY_PEDICURE,
    CATEGORY_NAIL_ART,
    CATEGORY_EXTENSIONS,
    CATEGORY_SEASONAL,
];

// ---------------------------------------------------------------------------
// Built-in options (matching the seed data)
// ---------------------------------------------------------------------------

/// Nail shapes seeded into the `nail_shapes` option table.
pub const BUILT_IN_SHAPES: &[&str] =
    &["square", "round", "oval", "almond", "stiletto", "coffin"];

/// Nail styles seeded into the `nail_styles` option table.
pub const BUILT_IN_STYLES: &[&str] =
    &["classic", "french", "gel", "acrylic", "chrome", "ombre"];

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length for a gallery item title.
pub const MAX_TITLE_LENGTH: usize = 150;

/// Maximum length for an image URL.
pub const MAX_IMAGE_URL_LENGTH: usize = 2_000;

/// Maximum length for an option name (shapes and styles).
pub const MAX_OPTION_NAME_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that `category` is one of the allowed gallery categories.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid gallery category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        )))
    }
}

/// Validate a gallery item title: non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title cannot be empty".to_string()));
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an image URL: non-empty, http(s) scheme, length-bounded.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    if url.is_empty() {
        return Err(CoreError::Validation(
            "Image URL cannot be empty".to_string(),
        ));
    }
    if url.len() > MAX_IMAGE_URL_LENGTH {
        return Err(CoreError::Validation(format!(
            "Image URL exceeds maximum length of {MAX_IMAGE_URL_LENGTH} characters"
        )));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") && !url.starts_with('/') {
        return Err(CoreError::Validation(format!(
            "Image URL '{url}' must be absolute (http/https) or site-relative"
        )));
    }
    Ok(())
}

/// Validate an option name (nail shape or style): lowercase snake, bounded.
pub fn validate_option_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() || name.len() > MAX_OPTION_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Option name must be 1-{MAX_OPTION_NAME_LENGTH} characters"
        )));
    }
    let well_formed = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "Option name '{name}' must be lowercase snake_case"
        )));
    }
    Ok(())
}
