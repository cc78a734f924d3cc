// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDateTime, TimeDelta};

use crate::datetime::STABLE_FORMAT_INSTANT;

/// The first, defining occurrence of a series: it supplies the canonical
/// duration and the default weekday / day-of-month for stepping.
///
/// A non-recurring event is simply an anchor without a stored rule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnchorEvent {
    /// The unique identifier for the event.
    pub uid: String,

    /// Start of the first occurrence.
    pub start: NaiveDateTime,

    /// End of the first occurrence; `end - start` is preserved for every
    /// generated occurrence.
    pub end: NaiveDateTime,

    /// The stored RRULE string, if the event recurs.
    #[serde(default)]
    pub rrule: Option<String>,

    /// Correlates all occurrences of this series. Defaults to the anchor's
    /// start instant when absent.
    #[serde(default)]
    pub recurrence_id: Option<String>,
}

impl AnchorEvent {
    /// The canonical duration of every occurrence in the series.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Whether the event carries a recurrence rule.
    pub fn is_recurring(&self) -> bool {
        self.rrule.is_some()
    }

    /// The correlation identifier for occurrences of this series.
    pub(crate) fn series_id(&self) -> String {
        self.recurrence_id
            .clone()
            .unwrap_or_else(|| self.start.format(STABLE_FORMAT_INSTANT).to_string())
    }
}

/// One concrete materialized instance of an event.
///
/// Occurrences are read-only values: edits to the underlying pattern produce
/// a new expansion, never in-place mutation of previously returned instances.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Occurrence {
    /// Identifier for this instance, derived as `"{event_uid}_{start}"` for
    /// recurring occurrences so callers can correlate them unambiguously.
    pub id: String,

    /// Start of this instance.
    pub start: NaiveDateTime,

    /// End of this instance.
    pub end: NaiveDateTime,

    /// Whether this instance was produced by a recurrence rule.
    pub is_recurring: bool,

    /// Correlates all instances of one series.
    pub recurrence_id: String,

    /// The rule that produced this instance, if any.
    pub rrule: Option<String>,

    /// The identifier of the originating anchor event.
    pub original_uid: String,
}

pub(crate) fn derived_id(uid: &str, start: NaiveDateTime) -> String {
    format!("{uid}_{}", start.format(STABLE_FORMAT_INSTANT))
}
