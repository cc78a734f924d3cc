// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use cadence_rrule::{EndCondition, Frequency, MonthlyMode, RulePattern, encode};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::datetime::{
    add_months_clamped, add_years_clamped, is_weekend, nth_weekday_of_month, week_of_month,
    weekday_index,
};
use crate::error::EngineError;
use crate::event::{AnchorEvent, Occurrence, derived_id};
use crate::limits::SafetyLimit;

/// Candidate dates matching the pattern can still be excluded by policy:
/// weekends and an externally supplied holiday list.
///
/// Excluded candidates do not count toward an `AfterCount` end condition.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkipPolicy {
    /// Exclude Saturdays and Sundays.
    #[serde(default)]
    pub skip_weekends: bool,

    /// Exclude dates in `holidays`.
    #[serde(default)]
    pub skip_holidays: bool,

    /// The holiday list, supplied by an external collaborator.
    #[serde(default)]
    pub holidays: BTreeSet<NaiveDate>,
}

impl SkipPolicy {
    /// Whether a candidate date survives the policy.
    pub fn admits(&self, date: NaiveDate) -> bool {
        if self.skip_weekends && is_weekend(date) {
            return false;
        }

        if self.skip_holidays && self.holidays.contains(&date) {
            return false;
        }

        true
    }
}

/// Expands an anchor event and a pattern into an ordered, finite sequence of
/// occurrences.
///
/// The anchor's own start is the first candidate. Every occurrence carries
/// the canonical duration `anchor.end - anchor.start`, the series
/// correlation id and the re-encoded rule string. Candidates rejected by the
/// skip policy are generated internally but never emitted and never counted
/// toward an `AfterCount` end condition.
///
/// Expansion stops when the included count reaches `limit`, when the end
/// condition is met, or when the step budget runs out. A step that fails to
/// move the date forward aborts immediately, returning the occurrences
/// produced so far.
///
/// # Errors
///
/// Returns [`EngineError::InvalidAnchor`] when the anchor ends before it
/// starts, and [`EngineError::Pattern`] when the pattern violates its
/// structural invariants.
pub fn generate(
    anchor: &AnchorEvent,
    pattern: &RulePattern,
    skip: &SkipPolicy,
    limit: SafetyLimit,
) -> Result<Vec<Occurrence>, EngineError> {
    if anchor.end < anchor.start {
        return Err(EngineError::InvalidAnchor);
    }
    pattern.validate()?;

    let duration = anchor.duration();
    let rule = encode(pattern);
    let series_id = anchor.series_id();

    let mut occurrences = Vec::new();
    let mut current = anchor.start;
    let mut first = true;
    let mut steps = 0;

    while occurrences.len() < limit.occurrences() && steps < limit.step_budget() {
        steps += 1;

        if first {
            first = false;
        } else {
            match advance(current, pattern) {
                Some(next) if next > current => current = next,
                Some(_) | None => {
                    tracing::warn!(uid = %anchor.uid, current = %current,
                        "recurrence step failed to advance, aborting expansion");
                    break;
                }
            }
        }

        if let EndCondition::OnDate(end_date) = pattern.end
            && current.date() > end_date
        {
            break;
        }

        if !skip.admits(current.date()) {
            continue;
        }

        occurrences.push(Occurrence {
            id: derived_id(&anchor.uid, current),
            start: current,
            end: current + duration,
            is_recurring: true,
            recurrence_id: series_id.clone(),
            rrule: Some(rule.clone()),
            original_uid: anchor.uid.clone(),
        });

        if let EndCondition::AfterCount(n) = pattern.end
            && occurrences.len() >= n as usize
        {
            break;
        }
    }

    Ok(occurrences)
}

/// One step of the pattern from the current occurrence, preserving the
/// time of day. Returns `None` when the date arithmetic leaves chrono's
/// representable range.
fn advance(current: NaiveDateTime, pattern: &RulePattern) -> Option<NaiveDateTime> {
    let date = current.date();
    let interval = pattern.interval;

    let next = match pattern.frequency {
        Frequency::Daily => date.checked_add_days(Days::new(u64::from(interval)))?,

        Frequency::Weekly if pattern.days_of_week.is_empty() => {
            date.checked_add_days(Days::new(7 * u64::from(interval)))?
        }

        Frequency::Weekly => {
            let today = weekday_index(date);
            match pattern.days_of_week.iter().copied().find(|&d| d > today) {
                // Next selected weekday within the same week
                Some(day) => date.checked_add_days(Days::new(u64::from(day - today)))?,

                // First selected weekday after skipping to the next cycle
                None => {
                    let first = *pattern.days_of_week.iter().next()?;
                    let days = u64::from(7 - today)
                        + u64::from(first)
                        + 7 * u64::from(interval - 1);
                    date.checked_add_days(Days::new(days))?
                }
            }
        }

        Frequency::Monthly => match pattern.monthly_mode {
            MonthlyMode::DayOfMonth => add_months_clamped(date, interval)?,

            MonthlyMode::NthWeekday => {
                let nth = week_of_month(date);
                let weekday = weekday_index(date);
                let target = add_months_clamped(date, interval)?;
                nth_weekday_of_month(target.year(), target.month(), weekday, nth)?
            }
        },

        Frequency::Yearly => add_years_clamped(date, interval)?,
    };

    Some(NaiveDateTime::new(next, current.time()))
}
