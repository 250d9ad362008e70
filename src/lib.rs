// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day Coverage Module
//!
//! This crate counts free days: given a range of days numbered `1..=days`
//! and a collection of inclusive meeting intervals, it computes how many
//! days are covered by no meeting at all.
//!
//! # Core types
//!
//! - [`DayInterval`] — inclusive closed range of integer days.
//! - [`Error`] / [`Result`] — invalid-input reporting.
//!
//! # Operations
//!
//! | Function | Answer |
//! |----------|--------|
//! | [`count_free_days`] | how many days of `1..=days` are uncovered |
//! | [`free_intervals`] | which spans are uncovered |
//! | [`merge_intervals`] | the meetings coalesced into disjoint spans |
//! | [`covered_day_count`] | clamped total length of merged spans |
//! | [`count_free_days_between`] | free-day count for `chrono` date ranges |
//! | [`free_dates_between`] | free gaps as `chrono` date pairs |
//!
//! Coverage is measured strictly within `[1, days]`: interval endpoints
//! past the range are clamped rather than rejected.
//!
//! # Example
//!
//! ```
//! // Meetings merge into [2, 8]: 7 busy days out of 10.
//! let free = daycover::count_free_days(10, &[(3, 4), (4, 8), (2, 5), (3, 8)])?;
//! assert_eq!(free, 3);
//! # Ok::<(), daycover::Error>(())
//! ```

mod calendar;
mod coverage;
mod error;
mod interval;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{count_free_days_between, free_dates_between};
pub use coverage::{count_free_days, covered_day_count, free_intervals, merge_intervals};
pub use error::{Error, Result};
pub use interval::DayInterval;
