use crate::{
    calendar,
    field::CronField,
    pattern::{Pattern, PatternValueType, ValueSet},
    validate,
    Result,
};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use tracing::{debug, trace};

// Search levels, the most significant first.
const YEAR: usize = 0;
const MONTH: usize = 1;
const DAY: usize = 2;
const HOUR: usize = 3;
const MINUTE: usize = 4;
const SECOND: usize = 5;
const LEVELS: usize = 6;

/// Direction of the fire time search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction {
    /// The closest time strictly after the reference.
    Forward,
    /// The closest time strictly before the reference.
    Backward,
}

/// Compiled fields of the expression.
///
/// Everything except days is resolved once, days depend on the month and are resolved at search time.
#[derive(Debug, Clone)]
pub(crate) struct SearchSpace {
    years: ValueSet,
    months: ValueSet,
    days: Pattern,
    hours: ValueSet,
    minutes: ValueSet,
    seconds: ValueSet,
}

impl SearchSpace {
    pub(crate) fn compile(expression: &str) -> Result<Self> {
        let fields = validate::split_fields(expression)?;
        let parse = |field: CronField| Pattern::parse(field, fields[field.index()]);

        let seconds = parse(CronField::Second)?.values();
        let minutes = parse(CronField::Minute)?.values();
        let hours = parse(CronField::Hour)?.values();
        let dom = if validate::is_dow_driven(&fields) {
            None
        } else {
            Some(parse(CronField::DayOfMonth)?)
        };
        let months = parse(CronField::Month)?.values();
        let days = match dom {
            Some(dom) => dom,
            None => parse(CronField::DayOfWeek)?,
        };
        let years = parse(CronField::Year)?.values();

        Ok(Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        })
    }

    #[inline]
    fn values(&self, level: usize) -> &ValueSet {
        match level {
            YEAR => &self.years,
            MONTH => &self.months,
            HOUR => &self.hours,
            MINUTE => &self.minutes,
            SECOND => &self.seconds,
            _ => unreachable!("days are resolved per month"),
        }
    }

    /// Returns the closest fire time in the specified direction, strictly after or before the `reference`.
    ///
    /// Candidates are built in the timezone of the `reference`, nonexistent local times are skipped.
    pub(crate) fn find<Tz: TimeZone>(&self, reference: &DateTime<Tz>, direction: Direction) -> Option<DateTime<Tz>> {
        trace!(?direction, "search started");

        let cursor = Cursor {
            space: self,
            reference,
            direction,
            origin: [
                i64::from(reference.year()),
                i64::from(reference.month()),
                i64::from(reference.day()),
                i64::from(reference.hour()),
                i64::from(reference.minute()),
                i64::from(reference.second()),
            ],
        };

        let found = cursor.descend(YEAR, true, &mut [0; LEVELS]);
        if found.is_none() {
            debug!(?direction, "no fire time within years range");
        }

        found
    }
}

struct Cursor<'a, Tz: TimeZone> {
    space: &'a SearchSpace,
    reference: &'a DateTime<Tz>,
    direction: Direction,
    origin: [i64; LEVELS],
}

impl<Tz: TimeZone> Cursor<'_, Tz> {
    /// Walks through the values of the `level` in search order.
    ///
    /// While `exact` is true all higher levels equal to the reference, so the walk starts from the reference's value.
    fn descend(&self, level: usize, exact: bool, assigned: &mut [PatternValueType; LEVELS]) -> Option<DateTime<Tz>> {
        let days;
        let values = if level == DAY {
            days = self.space.days.resolve(assigned[YEAR], assigned[MONTH]);
            &days
        } else {
            self.space.values(level)
        };

        let origin = self.origin[level];
        match self.direction {
            Direction::Forward => {
                let lower = if exact { origin.max(0) } else { 0 };
                let lower = PatternValueType::try_from(lower).ok()?;
                self.walk(level, exact, assigned, values.range(lower..))
            }
            Direction::Backward => {
                if exact && origin < 0 {
                    return None;
                }
                let upper = if exact {
                    PatternValueType::try_from(origin).unwrap_or(PatternValueType::MAX)
                } else {
                    PatternValueType::MAX
                };
                self.walk(level, exact, assigned, values.range(..=upper).rev())
            }
        }
    }

    fn walk<'v>(
        &self,
        level: usize,
        exact: bool,
        assigned: &mut [PatternValueType; LEVELS],
        values: impl Iterator<Item = &'v PatternValueType>,
    ) -> Option<DateTime<Tz>> {
        for &value in values {
            if level == DAY && value > calendar::days_in_month(assigned[YEAR], assigned[MONTH]) {
                // days are ascending when moving forward
                match self.direction {
                    Direction::Forward => break,
                    Direction::Backward => continue,
                }
            }

            assigned[level] = value;
            let exact = exact && i64::from(value) == self.origin[level];

            let found = if level == SECOND {
                self.candidate(assigned)
            } else {
                self.descend(level + 1, exact, assigned)
            };
            if found.is_some() {
                return found;
            }
        }

        None
    }

    fn candidate(&self, assigned: &[PatternValueType; LEVELS]) -> Option<DateTime<Tz>> {
        let local = self.reference.timezone().with_ymd_and_hms(
            i32::from(assigned[YEAR]),
            u32::from(assigned[MONTH]),
            u32::from(assigned[DAY]),
            u32::from(assigned[HOUR]),
            u32::from(assigned[MINUTE]),
            u32::from(assigned[SECOND]),
        );

        match self.direction {
            Direction::Forward => local.earliest().filter(|candidate| candidate > self.reference),
            Direction::Backward => local.latest().filter(|candidate| candidate < self.reference),
        }
    }
}
