// SPDX-FileCopyrightText: 2026 Cadence contributors
//
// SPDX-License-Identifier: Apache-2.0

use cadence_rrule::{PatternError, RRuleError};

/// Errors surfaced by the recurrence engine.
///
/// Creation paths report these to the caller so editors can show validation
/// feedback; the query paths in [`crate::query`] catch them, log a warning
/// and degrade to an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The anchor event ends before it starts.
    #[error("anchor event ends before it starts")]
    InvalidAnchor,

    /// The recurrence pattern violates a structural invariant.
    #[error("invalid recurrence pattern: {0}")]
    Pattern(#[from] PatternError),

    /// The stored RRULE string could not be decoded.
    #[error("invalid recurrence rule: {0}")]
    Rule(#[from] RRuleError),

    /// The query range ends before it starts.
    #[error("query range ends before it starts")]
    RangeInverted,
}
