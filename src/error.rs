use crate::field::CronField;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum CronError {
    /// Unknown alias or wrong number of fields in the expression.
    #[error("invalid cron schedule: {0}")]
    InvalidCronSchedule(String),
    /// Day of month and day of week fields conflict with each other,
    /// or day of month can't exist in February.
    #[error("invalid days pattern: {0}")]
    InvalidDaysPattern(String),
    /// Token of the field doesn't match any allowed syntax or violates its constraints.
    #[error("invalid value of {field}: {value}")]
    InvalidFieldValue {
        /// Field the offending token belongs to.
        field: CronField,
        /// Offending token.
        value: String,
    },
    /// Invalid argument passed to a query.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CronError {
    pub(crate) fn field_value(field: CronField, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field,
            value: value.into(),
        }
    }
}
