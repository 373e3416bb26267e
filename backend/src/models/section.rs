use serde::Serialize;

use super::{DaySet, MinuteOfDay};
use crate::api::Crn;

/// One scheduled meeting-time block for a course.
///
/// Immutable after construction; the course code is normalized to uppercase
/// and `start < end` is enforced. The day set may be empty (an asynchronous
/// section), in which case the section never clashes with anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    course: String,
    crn: Crn,
    days: DaySet,
    start: MinuteOfDay,
    end: MinuteOfDay,
}

/// Error from constructing an invalid [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionError {
    #[error("section {crn} of {course}: start {start} is not before end {end}")]
    EmptyInterval {
        course: String,
        crn: Crn,
        start: MinuteOfDay,
        end: MinuteOfDay,
    },
}

impl Section {
    pub fn new(
        course: impl Into<String>,
        crn: Crn,
        days: DaySet,
        start: MinuteOfDay,
        end: MinuteOfDay,
    ) -> Result<Self, SectionError> {
        let course = course.into().trim().to_ascii_uppercase();
        if start >= end {
            return Err(SectionError::EmptyInterval {
                course,
                crn,
                start,
                end,
            });
        }
        Ok(Section {
            course,
            crn,
            days,
            start,
            end,
        })
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn crn(&self) -> Crn {
        self.crn
    }

    pub fn days(&self) -> DaySet {
        self.days
    }

    pub fn start(&self) -> MinuteOfDay {
        self.start
    }

    pub fn end(&self) -> MinuteOfDay {
        self.end
    }

    /// True if the two sections meet at the same time on a shared day.
    ///
    /// Intervals are half-open, so back-to-back sections sharing an endpoint
    /// do not clash. Symmetric in its arguments.
    pub fn clashes(&self, other: &Section) -> bool {
        self.days.intersects(other.days) && self.start < other.end && other.start < self.end
    }

    /// True if the whole meeting interval lies within `[earliest, latest)`.
    pub fn within_window(&self, earliest: MinuteOfDay, latest: MinuteOfDay) -> bool {
        self.start >= earliest && self.end <= latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(days: &str, start: &str, end: &str) -> Section {
        Section::new(
            "CS100",
            Crn::new(1),
            DaySet::parse(days).unwrap(),
            MinuteOfDay::parse(start).unwrap(),
            MinuteOfDay::parse(end).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_normalizes_course_code() {
        let s = Section::new(
            " math333 ",
            Crn::new(7),
            DaySet::EMPTY,
            MinuteOfDay::parse("09:00").unwrap(),
            MinuteOfDay::parse("10:00").unwrap(),
        )
        .unwrap();
        assert_eq!(s.course(), "MATH333");
    }

    #[test]
    fn test_new_rejects_empty_interval() {
        let start = MinuteOfDay::parse("10:00").unwrap();
        for end in ["10:00", "09:00"] {
            let end = MinuteOfDay::parse(end).unwrap();
            let result = Section::new("CS100", Crn::new(1), DaySet::EMPTY, start, end);
            assert!(matches!(result, Err(SectionError::EmptyInterval { .. })));
        }
    }

    #[test]
    fn test_clash_overlapping_same_day() {
        let a = section("M", "09:00", "10:00");
        let b = section("M", "09:30", "10:30");
        assert!(a.clashes(&b));
        assert!(b.clashes(&a));
    }

    #[test]
    fn test_no_clash_on_disjoint_days() {
        let a = section("M", "09:00", "10:00");
        let b = section("T", "09:00", "10:00");
        assert!(!a.clashes(&b));
        assert!(!b.clashes(&a));
    }

    #[test]
    fn test_no_clash_back_to_back() {
        // Half-open intervals: sharing an endpoint is not a clash.
        let a = section("MW", "09:00", "10:15");
        let b = section("MW", "10:15", "11:30");
        assert!(!a.clashes(&b));
        assert!(!b.clashes(&a));
    }

    #[test]
    fn test_empty_day_set_never_clashes() {
        let online = section("", "09:00", "10:00");
        let other = section("MTWRF", "09:00", "10:00");
        assert!(!online.clashes(&other));
        assert!(!other.clashes(&online));
        assert!(!online.clashes(&online.clone()));
    }

    #[test]
    fn test_containment_clash() {
        let outer = section("R", "09:00", "12:00");
        let inner = section("R", "10:00", "11:00");
        assert!(outer.clashes(&inner));
        assert!(inner.clashes(&outer));
    }

    #[test]
    fn test_within_window() {
        let s = section("M", "09:00", "10:15");
        let at = |t: &str| MinuteOfDay::parse(t).unwrap();
        assert!(s.within_window(at("09:00"), at("10:15")));
        assert!(s.within_window(at("08:00"), at("17:00")));
        assert!(!s.within_window(at("09:30"), at("17:00")));
        assert!(!s.within_window(at("08:00"), at("10:00")));
    }
}
