//! Schedule enumeration engine.
//!
//! Given the section pools of the requested courses, the enumerator walks
//! their Cartesian product in odometer order (first pool slowest, last pool
//! fastest) without ever materializing it, filters each combination against
//! the day, time-window, and pairwise-clash constraints, and stops after a
//! caller-supplied cap. The cap is the backpressure mechanism: six courses
//! with ten sections each already mean a million raw combinations.
//!
//! Enumeration is a pure function of the catalogue snapshot and the request
//! parameters. There is no I/O and no shared mutable state, so concurrent
//! solves against the same `Arc<Catalogue>` are safe without locking, and
//! identical inputs always yield the identical sequence.


use crate::catalogue::Catalogue;
use crate::models::{DaySet, MinuteOfDay, Section};

/// Default solution cap, matching the serving layer's safety limit.
pub const DEFAULT_MAX_SOLUTIONS: usize = 50;

/// One valid combination: exactly one section per requested course, in
/// request order.
pub type Schedule<'a> = Vec<&'a Section>;

/// Validated solve constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    earliest: MinuteOfDay,
    latest: MinuteOfDay,
    allowed_days: DaySet,
}

/// Request-level errors raised before any enumeration work begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// One or more requested course codes have no pool in the catalogue.
    /// Lists every offender.
    #[error("unknown course(s): {}", .0.join(", "))]
    UnknownCourses(Vec<String>),

    #[error("earliest time {earliest} must be before latest time {latest}")]
    EmptyWindow {
        earliest: MinuteOfDay,
        latest: MinuteOfDay,
    },

    #[error("allowed day set is empty")]
    NoDaysAllowed,

    #[error("solution cap must be at least 1")]
    ZeroCap,
}

impl Constraints {
    /// Build constraints, rejecting an empty time window or day set.
    pub fn new(
        earliest: MinuteOfDay,
        latest: MinuteOfDay,
        allowed_days: DaySet,
    ) -> Result<Self, SolveError> {
        if earliest >= latest {
            return Err(SolveError::EmptyWindow { earliest, latest });
        }
        if allowed_days.is_empty() {
            return Err(SolveError::NoDaysAllowed);
        }
        Ok(Constraints {
            earliest,
            latest,
            allowed_days,
        })
    }

    pub fn earliest(&self) -> MinuteOfDay {
        self.earliest
    }

    pub fn latest(&self) -> MinuteOfDay {
        self.latest
    }

    pub fn allowed_days(&self) -> DaySet {
        self.allowed_days
    }

    fn admits(&self, schedule: &[&Section]) -> bool {
        // Cheap per-section checks first, the quadratic clash check last.
        if schedule
            .iter()
            .any(|s| !s.days().is_subset_of(self.allowed_days))
        {
            return false;
        }
        if schedule
            .iter()
            .any(|s| !s.within_window(self.earliest, self.latest))
        {
            return false;
        }
        for (i, a) in schedule.iter().enumerate() {
            for b in &schedule[i + 1..] {
                if a.clashes(b) {
                    return false;
                }
            }
        }
        true
    }
}

/// Lazy iterator over valid schedules.
///
/// Duplicate course codes in the request are independent Cartesian slots: a
/// combination that picks the same section twice clashes with itself and is
/// filtered, so a duplicated code effectively requires two distinct,
/// non-clashing sections of that course.
pub struct Enumerator<'a> {
    pools: Vec<&'a [Section]>,
    constraints: Constraints,
    cap: usize,
    cursor: Vec<usize>,
    remaining: bool,
    emitted: usize,
}

impl<'a> Enumerator<'a> {
    /// Resolve every course code and set up the odometer.
    ///
    /// Codes are case-normalized before lookup. All unresolved codes are
    /// reported together, before any enumeration work.
    pub fn new<S: AsRef<str>>(
        catalogue: &'a Catalogue,
        courses: &[S],
        constraints: Constraints,
        cap: usize,
    ) -> Result<Self, SolveError> {
        if cap == 0 {
            return Err(SolveError::ZeroCap);
        }

        let mut pools = Vec::with_capacity(courses.len());
        let mut unknown = Vec::new();
        for course in courses {
            match catalogue.get(course.as_ref()) {
                Some(pool) => pools.push(pool),
                None => unknown.push(course.as_ref().trim().to_ascii_uppercase()),
            }
        }
        if !unknown.is_empty() {
            return Err(SolveError::UnknownCourses(unknown));
        }

        let remaining = pools.iter().all(|pool| !pool.is_empty());
        let cursor = vec![0; pools.len()];
        Ok(Enumerator {
            pools,
            constraints,
            cap,
            cursor,
            remaining,
            emitted: 0,
        })
    }

    /// Number of schedules yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Conservative truncation flag: true whenever the yielded count equals
    /// the cap, regardless of whether more valid combinations remained.
    pub fn truncated(&self) -> bool {
        self.emitted == self.cap
    }

    /// Advance the odometer one step; the last pool varies fastest.
    /// Returns false once the product is exhausted.
    fn advance(&mut self) -> bool {
        for i in (0..self.cursor.len()).rev() {
            self.cursor[i] += 1;
            if self.cursor[i] < self.pools[i].len() {
                return true;
            }
            self.cursor[i] = 0;
        }
        false
    }

    fn current(&self) -> Schedule<'a> {
        self.cursor
            .iter()
            .zip(&self.pools)
            .map(|(&i, &pool)| &pool[i])
            .collect()
    }
}

impl<'a> Iterator for Enumerator<'a> {
    type Item = Schedule<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.cap {
            return None;
        }
        while self.remaining {
            let candidate = self.current();
            self.remaining = self.advance();
            if self.constraints.admits(&candidate) {
                self.emitted += 1;
                return Some(candidate);
            }
        }
        None
    }
}

/// The drained result of one enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solutions<'a> {
    pub schedules: Vec<Schedule<'a>>,
    /// True iff the enumeration stopped at the cap.
    pub truncated: bool,
}

/// Enumerate up to `cap` valid schedules for the requested courses.
///
/// Zero resulting schedules is a normal, successful outcome, distinct from
/// the request-level [`SolveError`]s.
pub fn solve<'a, S: AsRef<str>>(
    catalogue: &'a Catalogue,
    courses: &[S],
    constraints: Constraints,
    cap: usize,
) -> Result<Solutions<'a>, SolveError> {
    let mut enumerator = Enumerator::new(catalogue, courses, constraints, cap)?;
    let schedules: Vec<Schedule<'a>> = enumerator.by_ref().collect();
    Ok(Solutions {
        schedules,
        truncated: enumerator.truncated(),
    })
}
