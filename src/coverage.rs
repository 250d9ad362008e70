// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Busy-day counting over inclusive day intervals.
//!
//! This module provides:
//! - [`count_free_days`]: days of `1..=days` covered by no meeting
//! - [`free_intervals`]: the uncovered spans themselves
//! - [`merge_intervals`]: sort-then-sweep coalescing into disjoint spans
//! - [`covered_day_count`]: clamped total length of merged spans
//!
//! The sweep sorts intervals by start day and folds each one into the
//! current merged span when its start does not exceed the span's end.
//! With inclusive endpoints that predicate (`s <= b`) merges intervals
//! sharing a day, such as `[1,3]` and `[3,5]`, without double-counting
//! the shared day, while merely adjacent intervals stay separate.

use crate::error::{Error, Result};
use crate::interval::DayInterval;

/// Counts the days in `1..=days` not covered by any meeting.
///
/// Each meeting is an inclusive `(start, end)` day pair.  Meetings may
/// overlap, nest, duplicate each other, or arrive in any order.  Coverage
/// is measured strictly within `[1, days]`: endpoints past `days` are
/// clamped, and a meeting lying entirely above `days` contributes
/// nothing.
///
/// The result always satisfies `0 <= result <= days`.
///
/// # Errors
///
/// Returns [`Error::NegativeDayCount`] when `days < 0`, and the
/// [`DayInterval::new`] errors for any malformed pair.
///
/// # Examples
///
/// ```
/// use daycover::count_free_days;
///
/// // Merged coverage is [2, 8]: 7 busy days out of 10.
/// let free = count_free_days(10, &[(3, 4), (4, 8), (2, 5), (3, 8)])?;
/// assert_eq!(free, 3);
///
/// assert_eq!(count_free_days(10, &[])?, 10);
/// # Ok::<(), daycover::Error>(())
/// ```
pub fn count_free_days(days: i64, meetings: &[(i64, i64)]) -> Result<i64> {
    let merged = merge_intervals(&validate(days, meetings)?);
    Ok(days - covered_day_count(days, &merged))
}

/// Returns the free spans of `1..=days`: the complement of the meetings'
/// coverage, as disjoint intervals in ascending order.
///
/// The sum of the returned lengths equals [`count_free_days`] for the
/// same input.
///
/// # Errors
///
/// Same conditions as [`count_free_days`].
///
/// # Examples
///
/// ```
/// use daycover::{free_intervals, DayInterval};
///
/// let gaps = free_intervals(10, &[(2, 3), (6, 7)])?;
/// assert_eq!(
///     gaps,
///     vec![
///         DayInterval::new(1, 1)?,
///         DayInterval::new(4, 5)?,
///         DayInterval::new(8, 10)?,
///     ]
/// );
/// # Ok::<(), daycover::Error>(())
/// ```
pub fn free_intervals(days: i64, meetings: &[(i64, i64)]) -> Result<Vec<DayInterval>> {
    let merged = merge_intervals(&validate(days, meetings)?);

    let mut gaps = Vec::new();
    // First day not yet known to be covered.
    let mut cursor = 1i64;
    for span in &merged {
        if span.start() > days {
            break;
        }
        if span.start() > cursor {
            gaps.push(DayInterval::new_unchecked(cursor, span.start() - 1));
        }
        // A span reaching `days` covers the rest of the range; no later
        // gap exists and the cursor advance would overflow for endpoints
        // near `i64::MAX`.
        if span.end() >= days {
            return Ok(gaps);
        }
        if span.end() >= cursor {
            cursor = span.end() + 1;
        }
    }
    if cursor <= days {
        gaps.push(DayInterval::new_unchecked(cursor, days));
    }
    Ok(gaps)
}

/// Coalesces intervals into maximal disjoint spans, ascending by start.
///
/// Two spans are merged when they share at least one day; adjacent spans
/// (`[1,3]` and `[4,5]`) remain separate.  The output covers exactly the
/// same set of days as the input.
pub fn merge_intervals(intervals: &[DayInterval]) -> Vec<DayInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<DayInterval> = Vec::with_capacity(sorted.len());
    for ivl in sorted {
        match merged.last_mut() {
            Some(last) if ivl.start() <= last.end() => *last = last.merge(&ivl),
            _ => merged.push(ivl),
        }
    }
    merged
}

/// Total number of covered days within `[1, days]` for already-merged,
/// disjoint spans.
///
/// Each span contributes `min(end, days) - start + 1` when positive;
/// spans entirely above `days` contribute nothing.
pub fn covered_day_count(days: i64, merged: &[DayInterval]) -> i64 {
    merged
        .iter()
        .map(|span| (span.end().min(days) - span.start() + 1).max(0))
        .sum()
}

fn validate(days: i64, meetings: &[(i64, i64)]) -> Result<Vec<DayInterval>> {
    if days < 0 {
        return Err(Error::NegativeDayCount(days));
    }
    meetings.iter().map(|&pair| pair.try_into()).collect()
}
