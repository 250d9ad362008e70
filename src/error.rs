// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types shared across the crate.
//!
//! Every variant reports a malformed input.  The crate performs pure
//! in-memory computation, so there are no transient failure modes and
//! nothing to retry: errors surface immediately to the caller.

use chrono::NaiveDate;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid-input conditions rejected by interval construction and
/// coverage queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The day range length was negative.
    #[error("day count must be non-negative, got {0}")]
    NegativeDayCount(i64),

    /// An interval was given with its start after its end.
    #[error("interval start day {start} is after end day {end}")]
    StartAfterEnd { start: i64, end: i64 },

    /// An interval was given starting before day 1, the first day of
    /// the range.
    #[error("interval [{start}, {end}] starts before day 1")]
    BeforeDayOne { start: i64, end: i64 },

    /// A calendar date range was given with its start after its end.
    #[error("date range starts {start} but ends {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}
