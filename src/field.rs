use crate::pattern::PatternValueType;
use std::fmt::Display;

/// Minimum valid year.
pub const MIN_YEAR: u16 = 1970;
/// Maximum valid year.
pub const MAX_YEAR: u16 = 2099;

/// Field of the cron expression, in the order the fields appear in the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronField {
    /// Seconds, `0-59`.
    Second = 0,
    /// Minutes, `0-59`.
    Minute = 1,
    /// Hours, `0-23`.
    Hour = 2,
    /// Day of month, `1-31`.
    DayOfMonth = 3,
    /// Month, `1-12` or `JAN-DEC`.
    Month = 4,
    /// Day of week, `1-7` (Monday is `1`, Sunday is `7`) or `MON-SUN`.
    DayOfWeek = 5,
    /// Year, `1970-2099`.
    Year = 6,
}

impl CronField {
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    const DAYS_OF_WEEK: [&str; 7] = ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"];

    /// Position of the field in a 7-fields expression.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inclusive range of the legal values.
    pub fn min_max(self) -> (u16, u16) {
        match self {
            Self::Second => (0, 59),
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (1, 7),
            Self::Year => (MIN_YEAR, MAX_YEAR),
        }
    }

    /// Mnemonic names accepted in place of numbers, the first one maps to the field's minimum.
    pub(crate) fn mnemonics(self) -> &'static [&'static str] {
        match self {
            Self::Month => &Self::MONTHS,
            Self::DayOfWeek => &Self::DAYS_OF_WEEK,
            _ => &[],
        }
    }

    /// Converts a numeric or mnemonic literal into a value with bounds validation.
    ///
    /// Returns `None` if the literal isn't a value of this field.
    pub(crate) fn parse_value(self, input: &str) -> Option<PatternValueType> {
        let (min, max) = self.min_max();

        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            return input
                .parse::<PatternValueType>()
                .ok()
                .filter(|value| (min..=max).contains(value));
        }

        self.mnemonics()
            .iter()
            .position(|name| name.eq_ignore_ascii_case(input))
            .map(|index| min + index as PatternValueType)
    }

    /// Returns `true` if `input` has the shape of a single value: digits or a three-letters name.
    ///
    /// The value itself may be out of range, [`parse_value`](Self::parse_value) decides that.
    pub(crate) fn is_value_literal(self, input: &str) -> bool {
        let is_number = !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit());
        let is_name = !self.mnemonics().is_empty() && input.len() == 3 && input.bytes().all(|b| b.is_ascii_alphabetic());

        is_number || is_name
    }
}

impl Display for CronField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}
