// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Represent recurrence patterns and serialize them as iCalendar RRULE strings.
//!
//! This crate covers the RRULE subset actually exchanged with storage:
//! `FREQ`, `INTERVAL`, `BYDAY`, `COUNT` and `UNTIL`. Expansion of a pattern
//! into concrete occurrences lives in `cadence-core`.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::single_match_else, clippy::match_bool)]

mod codec;
mod rule;

pub use crate::codec::{RRuleError, decode, encode};
pub use crate::rule::{EndCondition, Frequency, MonthlyMode, PatternError, RulePattern};
