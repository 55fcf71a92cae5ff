use crate::{calendar, field::CronField, CronError, Result, MIN_YEAR};
use std::collections::BTreeSet;

pub(crate) type PatternValueType = u16;

/// Ascending set of values admissible for a single field.
pub(crate) type ValueSet = BTreeSet<PatternValueType>;

/// Compiled field of the cron expression: all comma-separated tokens matched against the field's variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Pattern {
    field: CronField,
    items: Vec<PatternItem>,
}

impl Pattern {
    pub(crate) fn parse(field: CronField, input: &str) -> Result<Self> {
        let items = input
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                Variant::chain(field)
                    .iter()
                    .find_map(|variant| variant.try_match(field, token))
                    .unwrap_or_else(|| Err(CronError::field_value(field, token)))
            })
            .collect::<Result<Vec<_>>>()?;

        if items.is_empty() {
            return Err(CronError::field_value(field, input));
        }

        Ok(Self { field, items })
    }

    /// Values of the field which don't depend on the date: everything except days.
    pub(crate) fn values(&self) -> ValueSet {
        debug_assert!(
            !matches!(self.field, CronField::DayOfMonth | CronField::DayOfWeek),
            "days depend on year and month"
        );
        // any valid month works here
        self.resolve(MIN_YEAR, 1)
    }

    /// Days of the specified month admissible by the day of month or day of week pattern.
    ///
    /// For the day of month field result may contain days beyond the end of the month,
    /// it's up to the caller to skip them.
    pub(crate) fn resolve(&self, year: PatternValueType, month: PatternValueType) -> ValueSet {
        self.items
            .iter()
            .flat_map(|item| item.resolve(self.field, year, month))
            .collect()
    }
}

/// Single token of the field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum PatternItem {
    All,
    Particular(PatternValueType),
    // start-finish
    Range(PatternValueType, PatternValueType),
    // start/step or start-end/step
    Step {
        start: PatternValueType,
        end: PatternValueType,
        step: PatternValueType,
    },
    // weekday#nth
    NthDow(PatternValueType, PatternValueType),
    // nth day from the end of the month, 1 is the last one
    LastDom(PatternValueType),
    // weekday
    LastDow(PatternValueType),
    // day of month
    NearestWeekday(PatternValueType),
}

impl PatternItem {
    fn resolve(&self, field: CronField, year: PatternValueType, month: PatternValueType) -> ValueSet {
        let (min, max) = field.min_max();

        let values: ValueSet = match *self {
            Self::All => (min..=max).collect(),
            Self::Particular(value) => ValueSet::from([value]),
            Self::Range(start, end) => (start..=end).collect(),
            Self::Step { start, end, step } => (start..=end).step_by(step as usize).collect(),
            Self::NthDow(dow, n) => return calendar::nth_dow(year, month, dow, n).into_iter().collect(),
            Self::LastDom(n) => {
                return calendar::days_in_month(year, month)
                    .checked_sub(n - 1)
                    .filter(|day| *day > 0)
                    .into_iter()
                    .collect()
            }
            Self::LastDow(dow) => return ValueSet::from([calendar::last_dow(year, month, dow)]),
            Self::NearestWeekday(day) => return calendar::nearest_weekday(year, month, day).into_iter().collect(),
        };

        if field == CronField::DayOfWeek {
            calendar::days_of_week(year, month, &values)
        } else {
            values
        }
    }
}

/// Syntax variant of a token.
///
/// The first variant in the field's chain which recognizes the token's shape decides the outcome,
/// even if the token breaks the variant's constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Wildcard,
    Single,
    Range,
    Step,
    NthDow,
    Last,
    NearestWeekday,
}

impl Variant {
    fn chain(field: CronField) -> &'static [Variant] {
        match field {
            CronField::DayOfMonth => &[
                Self::Wildcard,
                Self::Single,
                Self::Range,
                Self::Step,
                Self::Last,
                Self::NearestWeekday,
            ],
            CronField::DayOfWeek => &[
                Self::Wildcard,
                Self::Single,
                Self::Range,
                Self::Step,
                Self::NthDow,
                Self::Last,
            ],
            _ => &[Self::Wildcard, Self::Single, Self::Range, Self::Step],
        }
    }

    /// Returns `None` if the token has a different shape.
    fn try_match(self, field: CronField, token: &str) -> Option<Result<PatternItem>> {
        let item = match self {
            Self::Wildcard => {
                if token != "*" {
                    return None;
                }
                Some(PatternItem::All)
            }
            Self::Single => {
                if !field.is_value_literal(token) {
                    return None;
                }
                field.parse_value(token).map(PatternItem::Particular)
            }
            Self::Range => {
                let (start, end) = token.split_once('-')?;
                if !field.is_value_literal(start) || !field.is_value_literal(end) {
                    return None;
                }
                parse_range(field, start, end).map(|(start, end)| PatternItem::Range(start, end))
            }
            Self::Step => {
                let (base, step) = token.split_once('/')?;
                let base_is_range = base
                    .split_once('-')
                    .is_some_and(|(start, end)| field.is_value_literal(start) && field.is_value_literal(end));
                if !(base == "*" || base_is_range || field.is_value_literal(base)) || !is_number(step) {
                    return None;
                }
                parse_step(field, base, step)
            }
            Self::NthDow => {
                let (dow, n) = token.split_once('#')?;
                if !field.is_value_literal(dow) || !is_number(n) {
                    return None;
                }
                let n = n.parse().ok().filter(|n| (1..=5).contains(n));
                field.parse_value(dow).zip(n).map(|(dow, n)| PatternItem::NthDow(dow, n))
            }
            Self::Last => {
                let prefix = token.strip_suffix('L')?;
                if field == CronField::DayOfWeek {
                    if !field.is_value_literal(prefix) {
                        return None;
                    }
                    field.parse_value(prefix).map(PatternItem::LastDow)
                } else if prefix.is_empty() {
                    Some(PatternItem::LastDom(1))
                } else if is_number(prefix) {
                    field.parse_value(prefix).map(PatternItem::LastDom)
                } else {
                    return None;
                }
            }
            Self::NearestWeekday => {
                let day = token.strip_suffix('W')?;
                if !is_number(day) {
                    return None;
                }
                field.parse_value(day).map(PatternItem::NearestWeekday)
            }
        };

        Some(item.ok_or_else(|| CronError::field_value(field, token)))
    }
}

#[inline]
fn is_number(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn parse_range(field: CronField, start: &str, end: &str) -> Option<(PatternValueType, PatternValueType)> {
    let start = field.parse_value(start)?;
    let end = field.parse_value(end)?;

    (start <= end).then_some((start, end))
}

fn parse_step(field: CronField, base: &str, step: &str) -> Option<PatternItem> {
    let (min, max) = field.min_max();
    let step = step.parse::<PatternValueType>().ok().filter(|step| *step > 0)?;

    let (start, end) = if base == "*" {
        (min, max)
    } else if let Some((start, end)) = base.split_once('-') {
        parse_range(field, start, end)?
    } else {
        (field.parse_value(base)?, max)
    };

    Some(PatternItem::Step { start, end, step })
}
