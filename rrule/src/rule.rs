// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use chrono::NaiveDate;

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Frequency {
    /// Repeats every `interval` days.
    Daily,

    /// Repeats every `interval` weeks, optionally on a set of weekdays.
    Weekly,

    /// Repeats every `interval` months.
    Monthly,

    /// Repeats every `interval` years.
    Yearly,
}

const FREQ_DAILY: &str = "DAILY";
const FREQ_WEEKLY: &str = "WEEKLY";
const FREQ_MONTHLY: &str = "MONTHLY";
const FREQ_YEARLY: &str = "YEARLY";

impl AsRef<str> for Frequency {
    fn as_ref(&self) -> &str {
        match self {
            Frequency::Daily => FREQ_DAILY,
            Frequency::Weekly => FREQ_WEEKLY,
            Frequency::Monthly => FREQ_MONTHLY,
            Frequency::Yearly => FREQ_YEARLY,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Frequency {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case(FREQ_DAILY) {
            Ok(Frequency::Daily)
        } else if value.eq_ignore_ascii_case(FREQ_WEEKLY) {
            Ok(Frequency::Weekly)
        } else if value.eq_ignore_ascii_case(FREQ_MONTHLY) {
            Ok(Frequency::Monthly)
        } else if value.eq_ignore_ascii_case(FREQ_YEARLY) {
            Ok(Frequency::Yearly)
        } else {
            Err(())
        }
    }
}

/// How a monthly recurrence locates the next occurrence.
///
/// Not carried on the wire: an RRULE in the supported subset always decodes
/// to [`MonthlyMode::DayOfMonth`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MonthlyMode {
    /// Same day of the month (e.g. the 15th), clamped to shorter months.
    #[default]
    DayOfMonth,

    /// Same nth weekday of the month (e.g. the second Tuesday).
    NthWeekday,
}

/// When a recurrence stops producing occurrences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EndCondition {
    /// Never ends; expansion is bounded only by the caller's safety limit.
    #[default]
    Never,

    /// Ends after the given number of included occurrences.
    AfterCount(u32),

    /// Ends after the given date.
    OnDate(NaiveDate),
}

/// A compact recurrence description: frequency, interval, weekday set and
/// end condition.
///
/// This is a plain value exchanged with editors and the storage layer; it
/// carries no behavior beyond validation. Expansion lives in `cadence-core`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RulePattern {
    /// The base repetition unit.
    pub frequency: Frequency,

    /// Every N units; must be at least 1.
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Weekday indices 0-6 (0 = Sunday). Meaningful for weekly recurrence;
    /// empty means "same weekday as the anchor".
    #[serde(default)]
    pub days_of_week: BTreeSet<u8>,

    /// Monthly disambiguation; meaningful for monthly recurrence only.
    #[serde(default)]
    pub monthly_mode: MonthlyMode,

    /// When the recurrence stops.
    #[serde(default)]
    pub end: EndCondition,
}

fn default_interval() -> u32 {
    1
}

impl RulePattern {
    /// Creates a pattern with the given frequency and all other fields at
    /// their defaults: every 1 unit, no weekday set, day-of-month monthly
    /// mode, never ending.
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: BTreeSet::new(),
            monthly_mode: MonthlyMode::default(),
            end: EndCondition::default(),
        }
    }

    /// Checks the structural invariants of the pattern.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the interval is zero, a weekday index
    /// falls outside 0-6, or an `AfterCount` end condition asks for zero
    /// occurrences.
    pub fn validate(&self) -> Result<(), PatternError> {
        if self.interval < 1 {
            return Err(PatternError::ZeroInterval);
        }

        if let Some(&day) = self.days_of_week.iter().find(|&&day| day > 6) {
            return Err(PatternError::InvalidWeekday(day));
        }

        if self.end == EndCondition::AfterCount(0) {
            return Err(PatternError::ZeroCount);
        }

        Ok(())
    }
}

/// Structural errors in a [`RulePattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// The interval is zero.
    #[error("interval must be at least 1")]
    ZeroInterval,

    /// A weekday index falls outside 0-6.
    #[error("weekday index out of range 0-6: {0}")]
    InvalidWeekday(u8),

    /// An `AfterCount` end condition asks for zero occurrences.
    #[error("occurrence count must be at least 1")]
    ZeroCount,
}
