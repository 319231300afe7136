//! Site content rules: banners, hero settings, and business opening hours.

use serde::Deserialize;

use crate::booking;
use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Banner placements
// ---------------------------------------------------------------------------

pub const PLACEMENT_HERO: &str = "hero";
pub const PLACEMENT_PROMO_STRIP: &str = "promo_strip";
pub const PLACEMENT_FOOTER: &str = "footer";

/// All valid banner placements.
pub const VALID_PLACEMENTS: &[&str] = &[PLACEMENT_HERO, PLACEMENT_PROMO_STRIP, PLACEMENT_FOOTER];

/// Validate that `placement` is one of the allowed banner slots.
pub fn validate_placement(placement: &str) -> Result<(), CoreError> {
    if VALID_PLACEMENTS.contains(&placement) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid banner placement '{placement}'. Must be one of: {}",
            VALID_PLACEMENTS.join(", ")
        )))
    }
}

/// Validate an optional banner activity window: when both ends are set,
/// the window must not be inverted.
pub fn validate_window(
    starts_at: Option<Timestamp>,
    ends_at: Option<Timestamp>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (starts_at, ends_at) {
        if start >= end {
            return Err(CoreError::Validation(format!(
                "Banner window is inverted: {start} >= {end}"
            )));
        }
    }
    Ok(())
}

/// Whether a banner is live: active and `now` inside its window.
///
/// An unset end of the window is open-ended on that side.
pub fn is_live(
    is_active: bool,
    starts_at: Option<Timestamp>,
    ends_at: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    if !is_active {
        return false;
    }
    if let Some(start) = starts_at {
        if now < start {
            return false;
        }
    }
    if let Some(end) = ends_at {
        if now >= end {
            return false;
        }
    }
    true
}

// ---------------------------------------------------------------------------
// Hero settings
// ---------------------------------------------------------------------------

/// Maximum length of the hero headline.
pub const MAX_HEADLINE_LENGTH: usize = 150;

/// Maximum length of the hero subheadline.
pub const MAX_SUBHEADLINE_LENGTH: usize = 300;

/// Maximum length of the call-to-action label.
pub const MAX_CTA_LABEL_LENGTH: usize = 40;

/// Validate a hero headline: non-empty and within the length limit.
pub fn validate_headline(headline: &str) -> Result<(), CoreError> {
    let trimmed = headline.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Headline cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_HEADLINE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Headline exceeds maximum length of {MAX_HEADLINE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the hero overlay opacity: must be within `0.0..=1.0`.
pub fn validate_overlay_opacity(opacity: f64) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&opacity) || opacity.is_nan() {
        Err(CoreError::Validation(format!(
            "Overlay opacity must be between 0.0 and 1.0, got {opacity}"
        )))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Opening hours
// ---------------------------------------------------------------------------

/// Weekday keys in the `business_info.opening_hours` JSON object, in
/// display order.
pub const WEEKDAYS: &[&str] = &["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// One day's opening hours; `None` in the JSON map means closed that day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct DayHours {
    pub open: String,
    pub close: String,
}

/// Validate the full opening-hours JSON object.
///
/// Expects an object with exactly the [`WEEKDAYS`] keys, each mapped to
/// `null` (closed) or `{"open": "HH:MM", "close": "HH:MM"}` with
/// `open < close`.
pub fn validate_opening_hours(hours: &serde_json::Value) -> Result<(), CoreError> {
    let map = hours.as_object().ok_or_else(|| {
        CoreError::Validation("Opening hours must be a JSON object".to_string())
    })?;

    for key in map.keys() {
        if !WEEKDAYS.contains(&key.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown weekday key '{key}' in opening hours"
            )));
        }
    }

    for day in WEEKDAYS {
        let value = map.get(*day).ok_or_else(|| {
            CoreError::Validation(format!("Opening hours missing weekday '{day}'"))
        })?;
        if value.is_null() {
            continue; // closed that day
        }
        let parsed: DayHours = serde_json::from_value(value.clone()).map_err(|_| {
            CoreError::Validation(format!(
                "Opening hours for '{day}' must be null or {{\"open\", \"close\"}}"
            ))
        })?;
        booking::validate_time(&parsed.open)?;
        booking::validate_time(&parsed.close)?;
        if parsed.open >= parsed.close {
            return Err(CoreError::Validation(format!(
                "Opening hours for '{day}' are inverted: {} >= {}",
                parsed.open, parsed.close
            )));
        }
    }
    Ok(())
}

/// Extract one weekday's hours from a validated opening-hours object.
///
/// Returns `None` when the salon is closed that day or the key is absent.
pub fn hours_for_day(hours: &serde_json::Value, day: &str) -> Option<DayHours> {
    let value = hours.as_object()?.get(day)?;
    serde_json::from_value(value.clone()).ok()
}

/// Map a chrono weekday to the JSON key used in opening hours.
pub fn weekday_key(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => "mon",
        chrono::Weekday::Tue => "tue",
        chrono::Weekday::Wed => "wed",
        chrono::Weekday::Thu => "thu",
        chrono::Weekday::Fri => "fri",
        chrono::Weekday::Sat => "sat",
        chrono::Weekday::Sun => "sun",
    }
}
