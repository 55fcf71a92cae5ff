use crate::{
    search::{Direction, SearchSpace},
    CronError, Result,
};
use chrono::{DateTime, TimeZone, Utc};
use std::{
    cmp::Ordering,
    fmt::Display,
    hash::{Hash, Hasher},
    str::FromStr,
};
use tracing::debug;

/// Represents a compiled cron expression with its fire time queries.
///
/// Equality, ordering and hashing consider the source text only,
/// so `"0 0 * * * ?"` and `"0  0 * * * ?"` are different schedules even though they fire at the same times.
///
/// For the expression syntax and usage examples, please refer to the [crate documentation](crate).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(into = "String"))]
pub struct Schedule {
    source: String,
    space: SearchSpace,
}

impl Schedule {
    /// Parses and validates provided `expression` and constructs [`Schedule`] instance.
    ///
    /// Alternative way to construct [`Schedule`] is to use one of `try_from` or `from_str` methods.
    ///
    /// Returns [`CronError`] in a case provided expression is unparsable or has format errors.
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let source = expression.into();
        let space = SearchSpace::compile(&source)?;
        debug!(expression = %source, "schedule compiled");

        Ok(Self { source, space })
    }

    /// Returns `true` if `expression` compiles and a forward search from the Unix epoch completes without error.
    ///
    /// It doesn't guarantee the schedule ever fires, e.g. `0 0 0 1 1 ? 1970` is valid.
    pub fn is_valid(expression: &str) -> bool {
        Self::new(expression)
            .map(|schedule| schedule.next_fire_time(&DateTime::<Utc>::UNIX_EPOCH))
            .is_ok()
    }

    /// Returns the closest fire time strictly after `reference`, with sub-second part set to zero.
    ///
    /// The schedule is evaluated in the timezone of `reference`.
    /// Returns `None` if there is no such time up to the end of [`MAX_YEAR`](crate::MAX_YEAR).
    #[inline]
    pub fn next_fire_time<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.space.find(reference, Direction::Forward)
    }

    /// Returns the closest fire time strictly before `reference`, with sub-second part set to zero.
    ///
    /// Returns `None` if there is no such time since the beginning of [`MIN_YEAR`](crate::MIN_YEAR).
    #[inline]
    pub fn previous_fire_time<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.space.find(reference, Direction::Backward)
    }

    /// Returns up to `n` successive fire times after `reference`, in ascending order.
    ///
    /// The result is shorter than `n` if the schedule runs out of fire times.
    /// Returns [`CronError::InvalidArgument`] if `n` is zero.
    pub fn next_n_fire_times<Tz: TimeZone>(&self, reference: &DateTime<Tz>, n: usize) -> Result<Vec<DateTime<Tz>>> {
        check_count(n)?;
        Ok(self.iter(reference).take(n).collect())
    }

    /// Returns up to `n` successive fire times before `reference`, in descending order.
    ///
    /// Returns [`CronError::InvalidArgument`] if `n` is zero.
    pub fn previous_n_fire_times<Tz: TimeZone>(
        &self,
        reference: &DateTime<Tz>,
        n: usize,
    ) -> Result<Vec<DateTime<Tz>>> {
        check_count(n)?;
        Ok(self.iter_before(reference).take(n).collect())
    }

    /// Returns iterator of fire times after `reference` (exclusively).
    #[inline]
    pub fn iter<'a, Tz: TimeZone + 'a>(&'a self, reference: &DateTime<Tz>) -> impl Iterator<Item = DateTime<Tz>> + 'a {
        ScheduleIterator {
            schedule: self,
            direction: Direction::Forward,
            next: self.next_fire_time(reference),
        }
    }

    /// Returns iterator of fire times before `reference` (exclusively), from the latest to the earliest.
    #[inline]
    pub fn iter_before<'a, Tz: TimeZone + 'a>(
        &'a self,
        reference: &DateTime<Tz>,
    ) -> impl Iterator<Item = DateTime<Tz>> + 'a {
        ScheduleIterator {
            schedule: self,
            direction: Direction::Backward,
            next: self.previous_fire_time(reference),
        }
    }
}

fn check_count(n: usize) -> Result<()> {
    if n == 0 {
        Err(CronError::InvalidArgument(format!("n should be > 0, but given {n}")))
    } else {
        Ok(())
    }
}

/// Contains iterator state.
#[derive(Debug, Clone)]
struct ScheduleIterator<'a, Tz: TimeZone> {
    schedule: &'a Schedule,
    direction: Direction,
    next: Option<DateTime<Tz>>,
}

impl<Tz: TimeZone> Iterator for ScheduleIterator<'_, Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.schedule.space.find(&current, self.direction);
        Some(current)
    }
}

impl PartialEq for Schedule {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Schedule {}

impl Hash for Schedule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl PartialOrd for Schedule {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Schedule {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl From<Schedule> for String {
    fn from(value: Schedule) -> Self {
        value.source
    }
}

impl From<&Schedule> for String {
    fn from(value: &Schedule) -> Self {
        value.source.clone()
    }
}

impl TryFrom<String> for Schedule {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&String> for Schedule {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Schedule {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl FromStr for Schedule {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
