// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Round-trip tests for the RRULE codec.
//!
//! These tests verify that encoding a pattern and decoding the result
//! produces a field-for-field equal pattern for the supported subset.

use std::collections::BTreeSet;

use cadence_rrule::{EndCondition, Frequency, RulePattern, decode, encode};
use chrono::NaiveDate;

fn assert_round_trip(pattern: &RulePattern) {
    let encoded = encode(pattern);
    let decoded = decode(&encoded)
        .unwrap_or_else(|e| panic!("failed to decode {encoded:?}: {e}"));
    assert_eq!(&decoded, pattern, "round-trip mismatch for {encoded:?}");
}

#[test]
fn round_trip_defaults_every_frequency() {
    for frequency in [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ] {
        assert_round_trip(&RulePattern::new(frequency));
    }
}

#[test]
fn round_trip_with_interval() {
    let mut pattern = RulePattern::new(Frequency::Daily);
    pattern.interval = 4;
    assert_round_trip(&pattern);
}

#[test]
fn round_trip_weekly_with_weekday_set() {
    let mut pattern = RulePattern::new(Frequency::Weekly);
    pattern.interval = 2;
    pattern.days_of_week = BTreeSet::from([0, 2, 4, 6]);
    assert_round_trip(&pattern);
}

#[test]
fn round_trip_with_count() {
    let mut pattern = RulePattern::new(Frequency::Monthly);
    pattern.end = EndCondition::AfterCount(12);
    assert_round_trip(&pattern);
}

#[test]
fn round_trip_with_until() {
    let mut pattern = RulePattern::new(Frequency::Yearly);
    pattern.interval = 2;
    pattern.end = EndCondition::OnDate(NaiveDate::from_ymd_opt(2030, 6, 15).unwrap());
    assert_round_trip(&pattern);
}

#[test]
fn round_trip_every_field_combined() {
    let mut pattern = RulePattern::new(Frequency::Weekly);
    pattern.interval = 3;
    pattern.days_of_week = BTreeSet::from([1, 3, 5]);
    pattern.end = EndCondition::OnDate(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    assert_round_trip(&pattern);
}
