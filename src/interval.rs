// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inclusive day interval implementation.
//!
//! This module provides [`DayInterval`]: a closed integer range of days
//! `[start, end]` where both endpoints belong to the interval.  Days are
//! numbered from 1, so `[3, 3]` is a single day and `[1, 3]` spans three.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// An inclusive range of integer days `[start, end]`.
///
/// Construction is validated: `start <= end` and `start >= 1` always hold
/// for a live value.  There is no upper bound at construction time — an
/// interval may reach past the day range it is later measured against, and
/// the coverage layer clamps it there.
///
/// The derived ordering sorts by `(start, end)`, which is exactly the
/// order the merge sweep consumes.
///
/// # Examples
///
/// ```
/// use daycover::DayInterval;
///
/// let meeting = DayInterval::new(2, 5)?;
/// assert_eq!(meeting.len(), 4);
/// assert!(meeting.contains(3));
/// # Ok::<(), daycover::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayInterval {
    start: i64,
    end: i64,
}

impl DayInterval {
    /// Creates a new interval spanning `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StartAfterEnd`] when `start > end` and
    /// [`Error::BeforeDayOne`] when `start < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycover::{DayInterval, Error};
    ///
    /// assert!(DayInterval::new(1, 3).is_ok());
    /// assert_eq!(
    ///     DayInterval::new(5, 2),
    ///     Err(Error::StartAfterEnd { start: 5, end: 2 })
    /// );
    /// assert_eq!(
    ///     DayInterval::new(0, 2),
    ///     Err(Error::BeforeDayOne { start: 0, end: 2 })
    /// );
    /// ```
    pub const fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::StartAfterEnd { start, end });
        }
        if start < 1 {
            return Err(Error::BeforeDayOne { start, end });
        }
        Ok(Self { start, end })
    }

    /// Internal constructor for values already known to satisfy the
    /// invariants (e.g. gaps between validated spans).
    pub(crate) const fn new_unchecked(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// First day of the interval.
    #[inline]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// Last day of the interval (inclusive).
    #[inline]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// Number of days in the interval.
    ///
    /// Both endpoints count, so `[2, 5]` has length 4 and `[3, 3]` has
    /// length 1.
    #[inline]
    pub const fn len(&self) -> i64 {
        self.end - self.start + 1
    }

    /// Returns true if `day` falls inside the interval.
    #[inline]
    pub const fn contains(&self, day: i64) -> bool {
        self.start <= day && day <= self.end
    }

    /// Returns true if the two intervals share at least one day.
    ///
    /// Inclusive semantics: `[1, 3]` and `[3, 5]` overlap on day 3.
    /// `[1, 3]` and `[4, 5]` are adjacent but do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use daycover::DayInterval;
    ///
    /// let a = DayInterval::new(1, 3)?;
    /// assert!(a.overlaps(&DayInterval::new(3, 5)?));
    /// assert!(!a.overlaps(&DayInterval::new(4, 5)?));
    /// # Ok::<(), daycover::Error>(())
    /// ```
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Smallest interval covering both `self` and `other` (the union
    /// hull).
    ///
    /// When the inputs overlap the hull is their exact union; when they
    /// are disjoint it also spans the gap between them, so callers that
    /// need an exact union must check [`overlaps`](Self::overlaps) first.
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl TryFrom<(i64, i64)> for DayInterval {
    type Error = Error;

    fn try_from((start, end): (i64, i64)) -> Result<Self> {
        Self::new(start, end)
    }
}

impl fmt::Display for DayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} to day {}", self.start, self.end)
    }
}

// Serde support.
//
// Uses the explicit field names `start_day` / `end_day` so serialized data
// stays self-describing; deserialization revalidates the invariants.
#[cfg(feature = "serde")]
impl Serialize for DayInterval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DayInterval", 2)?;
        s.serialize_field("start_day", &self.start)?;
        s.serialize_field("end_day", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DayInterval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_day: i64,
            end_day: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        DayInterval::new(raw.start_day, raw.end_day).map_err(serde::de::Error::custom)
    }
}
