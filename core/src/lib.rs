// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Expand recurrence patterns into concrete calendar occurrences.
//!
//! The engine is synchronous and side-effect-free: every public operation is
//! a pure computation over immutable inputs, bounded by an explicit
//! [`SafetyLimit`] so that even a never-ending rule terminates.

mod datetime;
mod error;
mod event;
mod generator;
mod limits;
mod query;

pub use cadence_rrule::{
    EndCondition, Frequency, MonthlyMode, PatternError, RRuleError, RulePattern, decode, encode,
};

pub use crate::error::EngineError;
pub use crate::event::{AnchorEvent, Occurrence};
pub use crate::generator::{SkipPolicy, generate};
pub use crate::limits::{
    DEFAULT_EXPANSION_LIMIT, HARD_OCCURRENCE_CEILING, RANGE_QUERY_LIMIT, SafetyLimit,
};
pub use crate::query::{is_recurring_date, occurrences_in_range, try_occurrences_in_range};
