// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-date layer over the day-numbered counter.
//!
//! Callers holding `chrono::NaiveDate` meetings can count free days
//! directly: the bounding range `first..=last` is numbered from day 1 and
//! each meeting is mapped onto that axis before delegating to the
//! coverage sweep.  Meetings reaching past the bounds are clamped; those
//! lying entirely outside are ignored.

use crate::coverage::{count_free_days, free_intervals};
use crate::error::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Counts the days of `first..=last` not covered by any meeting.
///
/// Both the bounding range and each meeting are inclusive date ranges.
///
/// # Errors
///
/// Returns [`Error::InvertedDateRange`] when `first > last` or when any
/// meeting's start date is after its end date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use daycover::count_free_days_between;
///
/// let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let last = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let meetings = [(
///     NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 6, 8).unwrap(),
/// )];
///
/// assert_eq!(count_free_days_between(first, last, &meetings)?, 3);
/// # Ok::<(), daycover::Error>(())
/// ```
pub fn count_free_days_between(
    first: NaiveDate,
    last: NaiveDate,
    meetings: &[(NaiveDate, NaiveDate)],
) -> Result<i64> {
    let days = range_len(first, last)?;
    let mapped = map_meetings(first, last, meetings)?;
    count_free_days(days, &mapped)
}

/// Returns the free gaps of `first..=last` as inclusive date pairs, in
/// chronological order.
///
/// # Errors
///
/// Same conditions as [`count_free_days_between`].
pub fn free_dates_between(
    first: NaiveDate,
    last: NaiveDate,
    meetings: &[(NaiveDate, NaiveDate)],
) -> Result<Vec<(NaiveDate, NaiveDate)>> {
    let days = range_len(first, last)?;
    let mapped = map_meetings(first, last, meetings)?;
    let gaps = free_intervals(days, &mapped)?;

    Ok(gaps
        .iter()
        .map(|gap| (date_at(first, gap.start()), date_at(first, gap.end())))
        .collect())
}

fn range_len(first: NaiveDate, last: NaiveDate) -> Result<i64> {
    if first > last {
        return Err(Error::InvertedDateRange {
            start: first,
            end: last,
        });
    }
    Ok(last.signed_duration_since(first).num_days() + 1)
}

/// Maps date meetings onto the 1-based day axis of `first..=last`.
///
/// Starts before `first` clamp to day 1; ends past `last` are left to the
/// coverage layer's clamp.  Meetings entirely outside the range map to
/// nothing.
fn map_meetings(
    first: NaiveDate,
    last: NaiveDate,
    meetings: &[(NaiveDate, NaiveDate)],
) -> Result<Vec<(i64, i64)>> {
    let mut mapped = Vec::with_capacity(meetings.len());
    for &(start, end) in meetings {
        if start > end {
            return Err(Error::InvertedDateRange { start, end });
        }
        if end < first || start > last {
            continue;
        }
        let start_day = (start.signed_duration_since(first).num_days() + 1).max(1);
        let end_day = end.signed_duration_since(first).num_days() + 1;
        mapped.push((start_day, end_day));
    }
    Ok(mapped)
}

fn date_at(first: NaiveDate, day: i64) -> NaiveDate {
    first + Duration::days(day - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_count_matches_day_numbered_input() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let meetings = [
            (d(2024, 6, 3), d(2024, 6, 4)),
            (d(2024, 6, 4), d(2024, 6, 8)),
            (d(2024, 6, 2), d(2024, 6, 5)),
            (d(2024, 6, 3), d(2024, 6, 8)),
        ];

        // Same shape as count_free_days(10, [(3,4),(4,8),(2,5),(3,8)]).
        assert_eq!(count_free_days_between(first, last, &meetings).unwrap(), 3);
    }

    #[test]
    fn test_no_meetings() {
        assert_eq!(
            count_free_days_between(d(2024, 6, 1), d(2024, 6, 30), &[]).unwrap(),
            30
        );
    }

    #[test]
    fn test_single_day_range() {
        let day = d(2024, 6, 1);
        assert_eq!(count_free_days_between(day, day, &[]).unwrap(), 1);
        assert_eq!(count_free_days_between(day, day, &[(day, day)]).unwrap(), 0);
    }

    #[test]
    fn test_meeting_crossing_range_start_is_clamped() {
        let first = d(2024, 6, 10);
        let last = d(2024, 6, 19);
        let meetings = [(d(2024, 6, 5), d(2024, 6, 12))];

        // Only June 10-12 fall inside the range.
        assert_eq!(count_free_days_between(first, last, &meetings).unwrap(), 7);
    }

    #[test]
    fn test_meeting_crossing_range_end_is_clamped() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let meetings = [(d(2024, 6, 8), d(2024, 6, 20))];

        assert_eq!(count_free_days_between(first, last, &meetings).unwrap(), 7);
    }

    #[test]
    fn test_meeting_outside_range_is_ignored() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let meetings = [
            (d(2024, 5, 1), d(2024, 5, 20)),
            (d(2024, 7, 1), d(2024, 7, 2)),
        ];

        assert_eq!(count_free_days_between(first, last, &meetings).unwrap(), 10);
    }

    #[test]
    fn test_range_spanning_month_boundary() {
        let first = d(2024, 1, 30);
        let last = d(2024, 2, 2);
        let meetings = [(d(2024, 1, 31), d(2024, 2, 1))];

        assert_eq!(count_free_days_between(first, last, &meetings).unwrap(), 2);
    }

    #[test]
    fn test_inverted_bounding_range_rejected() {
        assert_eq!(
            count_free_days_between(d(2024, 6, 10), d(2024, 6, 1), &[]),
            Err(Error::InvertedDateRange {
                start: d(2024, 6, 10),
                end: d(2024, 6, 1),
            })
        );
    }

    #[test]
    fn test_inverted_meeting_rejected() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let meetings = [(d(2024, 6, 8), d(2024, 6, 2))];

        assert_eq!(
            count_free_days_between(first, last, &meetings),
            Err(Error::InvertedDateRange {
                start: d(2024, 6, 8),
                end: d(2024, 6, 2),
            })
        );
    }

    #[test]
    fn test_free_dates_between_gaps() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let meetings = [
            (d(2024, 6, 2), d(2024, 6, 3)),
            (d(2024, 6, 6), d(2024, 6, 7)),
        ];

        let gaps = free_dates_between(first, last, &meetings).unwrap();
        assert_eq!(
            gaps,
            vec![
                (d(2024, 6, 1), d(2024, 6, 1)),
                (d(2024, 6, 4), d(2024, 6, 5)),
                (d(2024, 6, 8), d(2024, 6, 10)),
            ]
        );
    }

    #[test]
    fn test_free_dates_between_fully_covered() {
        let first = d(2024, 6, 1);
        let last = d(2024, 6, 10);
        let gaps = free_dates_between(first, last, &[(first, last)]).unwrap();
        assert!(gaps.is_empty());
    }
}
