use crate::{field::CronField, CronError, Result};
use tracing::trace;

pub(crate) const FIELDS_COUNT: usize = 7;

const ALIASES: &[(&str, [&str; FIELDS_COUNT])] = &[
    ("@yearly", ["0", "0", "0", "1", "1", "?", "*"]),
    ("@annually", ["0", "0", "0", "1", "1", "?", "*"]),
    ("@monthly", ["0", "0", "0", "1", "*", "?", "*"]),
    ("@weekly", ["0", "0", "0", "?", "*", "7", "*"]),
    ("@daily", ["0", "0", "0", "*", "*", "?", "*"]),
    ("@midnight", ["0", "0", "0", "*", "*", "?", "*"]),
    ("@hourly", ["0", "0", "*", "*", "*", "?", "*"]),
];

const ANY: &str = "?";
const MAX_FEBRUARY_DAY: u16 = 29;

/// Splits expression into the seven fields and checks relations between them.
///
/// Fields content isn't checked here, it's the job of [`Pattern::parse`](crate::pattern::Pattern::parse).
pub(crate) fn split_fields(expression: &str) -> Result<[&str; FIELDS_COUNT]> {
    let elements: Vec<&str> = expression.split_whitespace().collect();

    let fields = match elements.as_slice() {
        [alias] if alias.starts_with('@') => ALIASES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(alias))
            .map(|(_, fields)| *fields)
            .ok_or_else(|| CronError::InvalidCronSchedule(expression.to_owned()))?,
        [second, minute, hour, dom, month, dow] => [*second, *minute, *hour, *dom, *month, *dow, "*"],
        [second, minute, hour, dom, month, dow, year] => [*second, *minute, *hour, *dom, *month, *dow, *year],
        _ => return Err(CronError::InvalidCronSchedule(expression.to_owned())),
    };
    trace!(?fields, "expression split");

    let dom = fields[CronField::DayOfMonth.index()];
    let dow = fields[CronField::DayOfWeek.index()];
    if (dom == ANY) == (dow == ANY) {
        return Err(CronError::InvalidDaysPattern(expression.to_owned()));
    }

    let month = fields[CronField::Month.index()];
    if month == "2" && !dom.is_empty() && dom.bytes().all(|b| b.is_ascii_digit()) {
        // too long number is out of range anyway
        let day = dom.parse::<u16>().unwrap_or(u16::MAX);
        if day > MAX_FEBRUARY_DAY {
            return Err(CronError::InvalidDaysPattern(expression.to_owned()));
        }
    }

    Ok(fields)
}

/// Returns `true` if the day of month field is `?`, so days are defined by the day of week field.
#[inline]
pub(crate) fn is_dow_driven(fields: &[&str; FIELDS_COUNT]) -> bool {
    fields[CronField::DayOfMonth.index()] == ANY
}
