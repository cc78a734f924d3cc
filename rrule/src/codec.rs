// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::rule::{EndCondition, Frequency, MonthlyMode, RulePattern};

const RRULE_PREFIX: &str = "RRULE:";

/// Two-letter weekday codes, indexed 0 = Sunday as in the pattern itself.
const DAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

/// The UNTIL token stores a UTC midnight: `yyyyMMddT000000Z`.
const UNTIL_DATE_FORMAT: &str = "%Y%m%d";

/// Serializes a pattern as an RRULE string.
///
/// `INTERVAL` is omitted when 1, `BYDAY` is emitted only for a weekly
/// pattern with a non-empty weekday set, and exactly one of `COUNT`/`UNTIL`
/// is emitted to match the end condition (neither for a never-ending rule).
pub fn encode(pattern: &RulePattern) -> String {
    let mut parts = vec![format!("FREQ={}", pattern.frequency.as_ref())];

    if pattern.interval > 1 {
        parts.push(format!("INTERVAL={}", pattern.interval));
    }

    if pattern.frequency == Frequency::Weekly && !pattern.days_of_week.is_empty() {
        let days: Vec<&str> = pattern
            .days_of_week
            .iter()
            .filter_map(|&day| DAY_CODES.get(usize::from(day)).copied())
            .collect();
        parts.push(format!("BYDAY={}", days.join(",")));
    }

    match pattern.end {
        EndCondition::Never => {}
        EndCondition::AfterCount(n) => parts.push(format!("COUNT={n}")),
        EndCondition::OnDate(d) => {
            parts.push(format!("UNTIL={}T000000Z", d.format(UNTIL_DATE_FORMAT)));
        }
    }

    format!("{RRULE_PREFIX}{}", parts.join(";"))
}

/// Parses an RRULE string back into a pattern.
///
/// Tokens degrade individually for forward compatibility: unknown keys are
/// ignored, a malformed `INTERVAL` falls back to 1, a malformed `COUNT` or
/// `UNTIL` leaves the end condition untouched, and unrecognized `BYDAY`
/// codes are dropped from the set. Only the prefix and the `FREQ` token are
/// required.
///
/// # Errors
///
/// Returns [`RRuleError::NotARule`] if the string does not start with
/// `RRULE:`, and [`RRuleError::MissingFrequency`] /
/// [`RRuleError::UnknownFrequency`] for an absent or unrecognized `FREQ`.
pub fn decode(input: &str) -> Result<RulePattern, RRuleError> {
    let Some(body) = input.strip_prefix(RRULE_PREFIX) else {
        return Err(RRuleError::NotARule);
    };

    let mut frequency = None;
    let mut interval = 1;
    let mut days_of_week = BTreeSet::new();
    let mut end = EndCondition::Never;

    for token in body.split(';') {
        let Some((key, value)) = token.split_once('=') else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match key {
            "FREQ" => match value.parse::<Frequency>() {
                Ok(freq) => frequency = Some(freq),
                Err(()) => return Err(RRuleError::UnknownFrequency(value.to_owned())),
            },

            "INTERVAL" => interval = value.parse::<u32>().unwrap_or(1).max(1),

            "BYDAY" => {
                days_of_week = value.split(',').filter_map(weekday_code_index).collect();
            }

            "COUNT" => {
                if let Ok(n) = value.parse::<u32>()
                    && n >= 1
                {
                    end = EndCondition::AfterCount(n);
                }
            }

            "UNTIL" => {
                if let Some(date) = parse_until(value) {
                    end = EndCondition::OnDate(date);
                }
            }

            // Unknown keys are ignored for forward compatibility
            _ => {}
        }
    }

    let Some(frequency) = frequency else {
        return Err(RRuleError::MissingFrequency);
    };

    Ok(RulePattern {
        frequency,
        interval,
        days_of_week,
        monthly_mode: MonthlyMode::default(),
        end,
    })
}

fn weekday_code_index(code: &str) -> Option<u8> {
    DAY_CODES
        .iter()
        .position(|&c| c == code)
        .and_then(|i| u8::try_from(i).ok())
}

/// Parses the leading `yyyyMMdd` of an UNTIL value; the time-of-day suffix
/// is always `T000000Z` in this subset and is not inspected.
fn parse_until(value: &str) -> Option<NaiveDate> {
    let digits = value.get(..8)?;
    NaiveDate::parse_from_str(digits, UNTIL_DATE_FORMAT).ok()
}

/// Errors that can occur when decoding an RRULE string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RRuleError {
    /// The string does not start with `RRULE:`.
    #[error("not an RRULE string")]
    NotARule,

    /// The rule carries no `FREQ` token.
    #[error("RRULE is missing a FREQ token")]
    MissingFrequency,

    /// The `FREQ` value is outside the supported set.
    #[error("unknown FREQ value: {0}")]
    UnknownFrequency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_minimal_daily() {
        let pattern = RulePattern::new(Frequency::Daily);
        assert_eq!(encode(&pattern), "RRULE:FREQ=DAILY");
    }

    #[test]
    fn test_encode_omits_interval_of_one() {
        let mut pattern = RulePattern::new(Frequency::Monthly);
        pattern.interval = 1;
        assert_eq!(encode(&pattern), "RRULE:FREQ=MONTHLY");

        pattern.interval = 3;
        assert_eq!(encode(&pattern), "RRULE:FREQ=MONTHLY;INTERVAL=3");
    }

    #[test]
    fn test_encode_byday_only_for_weekly() {
        let mut pattern = RulePattern::new(Frequency::Weekly);
        pattern.days_of_week = BTreeSet::from([1, 3, 5]);
        assert_eq!(encode(&pattern), "RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR");

        pattern.frequency = Frequency::Daily;
        assert_eq!(encode(&pattern), "RRULE:FREQ=DAILY");
    }

    #[test]
    fn test_encode_count() {
        let mut pattern = RulePattern::new(Frequency::Daily);
        pattern.end = EndCondition::AfterCount(10);
        assert_eq!(encode(&pattern), "RRULE:FREQ=DAILY;COUNT=10");
    }

    #[test]
    fn test_encode_until() {
        let mut pattern = RulePattern::new(Frequency::Weekly);
        pattern.end = EndCondition::OnDate(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(encode(&pattern), "RRULE:FREQ=WEEKLY;UNTIL=20241231T000000Z");
    }

    #[test]
    fn test_decode_monthly_count_example() {
        let pattern = decode("RRULE:FREQ=MONTHLY;INTERVAL=1;COUNT=3").unwrap();
        assert_eq!(pattern.frequency, Frequency::Monthly);
        assert_eq!(pattern.interval, 1);
        assert_eq!(pattern.monthly_mode, MonthlyMode::DayOfMonth);
        assert_eq!(pattern.end, EndCondition::AfterCount(3));
    }

    #[test]
    fn test_decode_until() {
        let pattern = decode("RRULE:FREQ=DAILY;UNTIL=20250115T000000Z").unwrap();
        assert_eq!(
            pattern.end,
            EndCondition::OnDate(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_decode_byday() {
        let pattern = decode("RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR").unwrap();
        assert_eq!(pattern.days_of_week, BTreeSet::from([1, 3, 5]));
    }

    #[test]
    fn test_decode_rejects_missing_prefix() {
        assert_eq!(decode("FREQ=DAILY"), Err(RRuleError::NotARule));
        assert_eq!(decode(""), Err(RRuleError::NotARule));
    }

    #[test]
    fn test_decode_rejects_missing_or_unknown_freq() {
        assert_eq!(decode("RRULE:COUNT=3"), Err(RRuleError::MissingFrequency));
        assert_eq!(
            decode("RRULE:FREQ=SECONDLY"),
            Err(RRuleError::UnknownFrequency("SECONDLY".into()))
        );
    }

    #[test]
    fn test_decode_ignores_unknown_keys() {
        let pattern = decode("RRULE:FREQ=DAILY;BYSETPOS=1;WKST=MO").unwrap();
        assert_eq!(pattern, RulePattern::new(Frequency::Daily));
    }

    #[test]
    fn test_decode_degrades_malformed_tokens() {
        // Malformed INTERVAL falls back to 1
        let pattern = decode("RRULE:FREQ=DAILY;INTERVAL=abc").unwrap();
        assert_eq!(pattern.interval, 1);

        // Malformed COUNT leaves the end condition untouched
        let pattern = decode("RRULE:FREQ=DAILY;COUNT=many").unwrap();
        assert_eq!(pattern.end, EndCondition::Never);

        // Malformed UNTIL leaves the end condition untouched
        let pattern = decode("RRULE:FREQ=DAILY;UNTIL=someday").unwrap();
        assert_eq!(pattern.end, EndCondition::Never);

        // Unrecognized BYDAY codes are dropped
        let pattern = decode("RRULE:FREQ=WEEKLY;BYDAY=MO,XX,FR").unwrap();
        assert_eq!(pattern.days_of_week, BTreeSet::from([1, 5]));
    }

    #[test]
    fn test_decode_ignores_tokens_without_value() {
        let pattern = decode("RRULE:FREQ=DAILY;COUNT=;INTERVAL").unwrap();
        assert_eq!(pattern, RulePattern::new(Frequency::Daily));
    }
}
