// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use cadence_rrule::{EndCondition, decode};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::EngineError;
use crate::event::{AnchorEvent, Occurrence};
use crate::generator::{SkipPolicy, generate};
use crate::limits::{RANGE_QUERY_LIMIT, SafetyLimit};

/// All occurrences of the event overlapping `[range_start, range_end]`,
/// minus those falling on an exception date.
///
/// This is the resilient entry point for calendar rendering: an inverted
/// range or an undecodable stored rule yields an empty result with a logged
/// warning, never an error. Use [`try_occurrences_in_range`] to observe the
/// failure instead.
pub fn occurrences_in_range(
    event: &AnchorEvent,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
    exceptions: &BTreeSet<NaiveDate>,
) -> Vec<Occurrence> {
    match try_occurrences_in_range(event, range_start, range_end, exceptions) {
        Ok(occurrences) => occurrences,
        Err(e) => {
            tracing::warn!(uid = %event.uid, error = %e,
                "range query degraded to empty result");
            Vec::new()
        }
    }
}

/// Strict variant of [`occurrences_in_range`].
///
/// A non-recurring event yields at most one occurrence, included when its
/// span overlaps the range in any way. A recurring event is expanded over a
/// window widened by one day on each side (absorbing all-day boundary
/// effects), bounded by [`RANGE_QUERY_LIMIT`] and by overriding the end
/// condition to the widened range end.
///
/// # Errors
///
/// Returns [`EngineError::RangeInverted`] when `range_end < range_start` and
/// [`EngineError::Rule`] when the stored rule fails to decode.
pub fn try_occurrences_in_range(
    event: &AnchorEvent,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
    exceptions: &BTreeSet<NaiveDate>,
) -> Result<Vec<Occurrence>, EngineError> {
    if range_end < range_start {
        return Err(EngineError::RangeInverted);
    }

    let Some(rule) = &event.rrule else {
        return Ok(non_recurring(event, range_start, range_end));
    };

    let mut pattern = decode(rule)?;

    // Widen the window by one day on each side, then bound the expansion by
    // it: the generator never runs past what the query can use
    let expanded_start = range_start - TimeDelta::days(1);
    let expanded_end = range_end + TimeDelta::days(1);
    pattern.end = EndCondition::OnDate(expanded_end.date());

    let occurrences = generate(
        event,
        &pattern,
        &SkipPolicy::default(),
        SafetyLimit::new(RANGE_QUERY_LIMIT),
    )?;

    Ok(occurrences
        .into_iter()
        .filter(|o| overlaps(o.start, o.end, expanded_start, expanded_end))
        .filter(|o| !exceptions.contains(&o.start.date()))
        .collect())
}

/// Whether any occurrence of the event falls on the given date.
///
/// Used for calendar-cell highlighting. An exception date is `false`
/// immediately, bypassing generation; a missing or undecodable rule is also
/// `false` (with a logged warning for the latter).
pub fn is_recurring_date(
    date: NaiveDate,
    event: &AnchorEvent,
    exceptions: &BTreeSet<NaiveDate>,
) -> bool {
    if exceptions.contains(&date) {
        return false;
    }

    let Some(rule) = &event.rrule else {
        return false;
    };

    let pattern = match decode(rule) {
        Ok(pattern) => pattern,
        Err(e) => {
            tracing::warn!(uid = %event.uid, error = %e,
                "stored recurrence rule failed to decode");
            return false;
        }
    };

    match generate(
        event,
        &pattern,
        &SkipPolicy::default(),
        SafetyLimit::new(RANGE_QUERY_LIMIT),
    ) {
        Ok(occurrences) => occurrences.iter().any(|o| o.start.date() == date),
        Err(e) => {
            tracing::warn!(uid = %event.uid, error = %e,
                "membership test degraded to false");
            false
        }
    }
}

/// Single overlap test for an event without a recurrence rule: any partial
/// overlap counts, including full containment either direction.
fn non_recurring(
    event: &AnchorEvent,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> Vec<Occurrence> {
    if !overlaps(event.start, event.end, range_start, range_end) {
        return Vec::new();
    }

    vec![Occurrence {
        id: event.uid.clone(),
        start: event.start,
        end: event.end,
        is_recurring: false,
        recurrence_id: event.uid.clone(),
        rrule: None,
        original_uid: event.uid.clone(),
    }]
}

fn overlaps(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> bool {
    start <= range_end && end >= range_start
}
