// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Named bounds that keep every expansion path terminating.
//!
//! Every caller of the generator passes an explicit [`SafetyLimit`]; this is
//! the mechanism that turns a never-ending rule into a bounded computation.

/// Default bound on included occurrences for creation-time expansion.
pub const DEFAULT_EXPANSION_LIMIT: usize = 365;

/// Bound on included occurrences for range queries and membership tests.
pub const RANGE_QUERY_LIMIT: usize = 1000;

/// Hard, non-overridable ceiling on included occurrences per call.
pub const HARD_OCCURRENCE_CEILING: usize = 10_000;

/// Rejected candidates (weekends, holidays) consume step budget without
/// counting toward the occurrence limit; this factor bounds them.
const STEP_BUDGET_FACTOR: usize = 16;

/// A per-call bound on generated occurrences, clamped to
/// [`HARD_OCCURRENCE_CEILING`] on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafetyLimit(usize);

impl SafetyLimit {
    /// Creates a limit of at least 1 and at most the hard ceiling.
    pub fn new(limit: usize) -> Self {
        Self(limit.clamp(1, HARD_OCCURRENCE_CEILING))
    }

    /// The maximum number of included occurrences.
    pub fn occurrences(self) -> usize {
        self.0
    }

    /// The maximum number of stepping iterations, counting rejected
    /// candidates as well as included ones.
    pub fn step_budget(self) -> usize {
        self.0.saturating_mul(STEP_BUDGET_FACTOR)
    }
}

impl Default for SafetyLimit {
    fn default() -> Self {
        Self(DEFAULT_EXPANSION_LIMIT)
    }
}
