//! Booking constants, validation, status state machine, and the time-slot
//! model used by the availability endpoint.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API/repository layer and any future worker or CLI tooling.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::CoreError;

/// Regex matching a 24-hour `HH:MM` time string.
static TIME_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a customer name.
pub const MAX_CUSTOMER_NAME_LENGTH: usize = 120;

/// Maximum length of the freeform notes field.
pub const MAX_NOTES_LENGTH: usize = 2_000;

/// Width of the availability grid in minutes.
pub const SLOT_STEP_MINS: u32 = 30;

/// Appointment duration assumed when no service is selected.
pub const DEFAULT_DURATION_MINS: u32 = 30;

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Newly submitted, awaiting staff confirmation.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";
pub const STATUS_NO_SHOW: &str = "no_show";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
    STATUS_NO_SHOW,
];

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Returns the set of valid target statuses reachable from `from`.
///
/// Terminal states (`completed`, `cancelled`, `no_show`) return an empty
/// slice because no further transitions are allowed.
pub fn valid_transitions(from: &str) -> &'static [&'static str] {
    match from {
        STATUS_PENDING => &[STATUS_CONFIRMED, STATUS_CANCELLED],
        STATUS_CONFIRMED => &[STATUS_COMPLETED, STATUS_CANCELLED, STATUS_NO_SHOW],
        _ => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: &str, to: &str) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate a status transition, returning a `CoreError` for invalid ones.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    validate_status(to)?;
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid booking transition: {from} -> {to}"
        )))
    }
}

/// Validate that `status` is one of the accepted booking statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid booking status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate a 24-hour `HH:MM` booking time string.
pub fn validate_time(time: &str) -> Result<(), CoreError> {
    if TIME_RE.is_match(time) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid time '{time}'. Expected 24-hour HH:MM"
        )))
    }
}

/// Validate that a booking time sits on the slot grid the availability
/// endpoint offers. Off-grid times would never show as taken there.
pub fn validate_slot_alignment(time: &str) -> Result<(), CoreError> {
    let mins = minutes_from_midnight(time)?;
    if mins % SLOT_STEP_MINS != 0 {
        return Err(CoreError::Validation(format!(
            "Booking time {time} must be on the {SLOT_STEP_MINS}-minute grid"
        )));
    }
    Ok(())
}

/// Validate that the booking date is today or later.
///
/// `today` is passed in rather than read from the clock so the check is
/// deterministic under test.
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), CoreError> {
    if date < today {
        Err(CoreError::Validation(format!(
            "Booking date {date} is in the past"
        )))
    } else {
        Ok(())
    }
}

/// Validate the customer name: non-empty and within the length limit.
pub fn validate_customer_name(name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Customer name cannot be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_CUSTOMER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Customer name exceeds maximum length of {MAX_CUSTOMER_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the optional notes field length.
pub fn validate_notes(notes: &str) -> Result<(), CoreError> {
    if notes.len() > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Time-slot model
// ---------------------------------------------------------------------------

/// A single offerable appointment slot on the availability grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    /// Slot start in `HH:MM`.
    pub time: String,
    /// Whether a non-cancelled booking already occupies this start time.
    pub booked: bool,
}

/// Generate the slot grid for one day of opening hours.
///
/// Slots start at `open` and advance in [`SLOT_STEP_MINS`] increments; a
/// slot is offered only if `start + duration_mins` still fits before
/// `close`. `booked_times` holds the `HH:MM` start times of existing
/// non-cancelled bookings and only affects the `booked` flag -- taken
/// slots are still listed so the caller can render them greyed out.
pub fn generate_slots(
    open: &str,
    close: &str,
    duration_mins: u32,
    booked_times: &[String],
) -> Result<Vec<Slot>, CoreError> {
    let open_m = minutes_from_midnight(open)?;
    let close_m = minutes_from_midnight(close)?;
    if open_m >= close_m {
        return Err(CoreError::Validation(format!(
            "Opening hours are inverted: {open} >= {close}"
        )));
    }

    // Plain minute arithmetic: `NaiveTime` addition wraps at midnight,
    // which would offer slots ending past close on late opening hours.
    let duration = duration_mins.max(1);
    let mut slots = Vec::new();
    let mut cursor = open_m;
    while cursor + duration <= close_m {
        let time = format!("{:02}:{:02}", cursor / 60, cursor % 60);
        let booked = booked_times.contains(&time);
        slots.push(Slot { time, booked });
        cursor += SLOT_STEP_MINS;
    }
    Ok(slots)
}

/// Parse a `HH:MM` string into whole minutes from midnight.
fn minutes_from_midnight(time: &str) -> Result<u32, CoreError> {
    validate_time(time)?;
    let t = NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|e| CoreError::Validation(format!("Invalid time '{time}': {e}")))?;
    Ok(t.hour() * 60 + t.minute())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
