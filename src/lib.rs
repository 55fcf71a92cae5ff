//! Quartz-style cron expression parser with forward and backward fire time search.
#![deny(unsafe_code, missing_docs)]

//! This crate is intended to:
//! - parse and validate 6 or 7 fields cron expressions, including `L`, `W` and `#` special characters;
//! - find the closest fire time after or before any moment;
//! - produce series of fire times in both directions.
//!
//! _This is not a cron jobs scheduler or runner._ It never waits and never runs anything,
//! it only answers "when" questions about a schedule.
//!
//! ## Cron expression format
//!
//! Expression consists of 6 or 7 whitespace-separated fields: seconds, minutes, hours, days of month,
//! months, days of week and an optional year. If the year is omitted, `*` is assumed.
//!
//! The table below describes valid values and patterns of each field:
//!
//! | Field        | Required | Allowed values  | Allowed special characters |
//! |--------------|----------|-----------------|----------------------------|
//! | Seconds      | Yes      | 0-59            | * , - /                    |
//! | Minutes      | Yes      | 0-59            | * , - /                    |
//! | Hours        | Yes      | 0-23            | * , - /                    |
//! | Day of Month | Yes      | 1-31            | * , - / ? L W              |
//! | Month        | Yes      | 1-12 or JAN-DEC | * , - /                    |
//! | Day of Week  | Yes      | 1-7 or MON-SUN  | * , - / ? L #              |
//! | Year         | No       | 1970-2099       | * , - /                    |
//!
//! Days of week are numbered from Monday (`1`) to Sunday (`7`). Names are case-insensitive.
//!
//! Patterns meanings:
//! - `*` - each possible value, i.e. `0,1,2,...,59` for minutes;
//! - `,` - list of values or patterns, i.e. `1,7,12`, `SAT,SUN`; empty list items are ignored;
//! - `-` - range of values, i.e. `0-15`, `JAN-MAR`; ranges never wrap around, so `5-1` is an error;
//! - `/` - repeating values, i.e. `*/12`, `10/5`, `30-59/2`;
//! - `L` - for day of month: the last day of the month (`L`) or n-th day from the end (`3L`);
//!   for day of week: the last particular weekday of the month (`5L`, `friL`);
//! - `W` - the weekday (Monday to Friday) nearest to the specified day of month in the same month, i.e. `15W`;
//! - `#` - n-th weekday of the month, i.e. `fri#1`, `1#4`, `n` is `1-5`;
//! - `?` - day of month or day of week doesn't matter: exactly one of them must be `?`.
//!
//! Also, short aliases for well-known expressions are allowed:
//!
//! | Alias                      | Expression    |
//! |----------------------------|---------------|
//! | `@yearly` (or `@annually`) | 0 0 0 1 1 ? * |
//! | `@monthly`                 | 0 0 0 1 * ? * |
//! | `@weekly`                  | 0 0 0 ? * 7 * |
//! | `@daily` (or `@midnight`)  | 0 0 0 * * ? * |
//! | `@hourly`                  | 0 0 * * * ? * |
//!
//! ### Time zones
//! Schedule has no time zone of its own: it's evaluated in the time zone of the reference time
//! passed to the query, and results are returned in the same time zone.
//! Local times which don't exist because of DST transitions are skipped,
//! ambiguous ones resolve to the earliest instant when searching forward and to the latest one backward.
//!
//! ## How to use
//!
//! The single public entity of the crate is a [`Schedule`] structure:
//! - [new()](Schedule::new): constructor to parse and validate provided expression;
//! - [next_fire_time()](Schedule::next_fire_time) and [previous_fire_time()](Schedule::previous_fire_time):
//!   the closest fire time strictly after or before the reference time;
//! - [next_n_fire_times()](Schedule::next_n_fire_times) and [previous_n_fire_times()](Schedule::previous_n_fire_times):
//!   several successive fire times at once;
//! - [iter()](Schedule::iter) and [iter_before()](Schedule::iter_before): lazy series of fire times;
//! - [is_valid()](Schedule::is_valid): quick check of the expression.
//!
//! ### Example with `next_fire_time`
//! ```rust
//! use chrono::DateTime;
//! use cron_seek::{Result, Schedule};
//!
//! fn next() -> Result<()> {
//!     let schedule = Schedule::new("0 0 0 L * ?")?;
//!     let reference = DateTime::parse_from_rfc3339("2024-02-12T10:00:00Z").unwrap();
//!
//!     let next = schedule.next_fire_time(&reference);
//!     assert_eq!(next.unwrap().to_rfc3339(), "2024-02-29T00:00:00+00:00");
//!
//!     let previous = schedule.previous_fire_time(&reference);
//!     assert_eq!(previous.unwrap().to_rfc3339(), "2024-01-31T00:00:00+00:00");
//!
//!     Ok(())
//! }
//! # next().unwrap();
//! ```
//!
//! ### Example with `iter`
//! ```rust
//! use chrono::Utc;
//! use cron_seek::{Result, Schedule};
//!
//! fn iterator() -> Result<()> {
//!     let schedule = Schedule::new("0 30 9 ? * MON-FRI")?;
//!     let now = Utc::now();
//!
//!     // Get the next 10 timestamps starting from now
//!     schedule.iter(&now).take(10).for_each(|t| println!("next: {t}"));
//!
//!     // And the last 3 ones
//!     for t in schedule.previous_n_fire_times(&now, 3)? {
//!         println!("previous: {t}");
//!     }
//!
//!     Ok(())
//! }
//! # iterator().unwrap();
//! ```
//!
//! ### Validation
//! ```rust
//! use cron_seek::{CronError, CronField, Schedule};
//!
//! assert!(Schedule::is_valid("0 0 12 ? * 5#3"));
//! assert!(!Schedule::is_valid("0 0 12 * * 5#3"));
//! assert_eq!(
//!     Schedule::new("* * 5-1 * * ?").unwrap_err(),
//!     CronError::InvalidFieldValue { field: CronField::Hour, value: "5-1".to_string() }
//! );
//! ```
//!
//! # Logging
//! The crate emits [`tracing`](https://docs.rs/tracing) events at `debug` and `trace` levels,
//! it never installs a subscriber.
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementation for [`Schedule`].

mod calendar;
/// Crate specific Error implementation.
pub mod error;
/// Fields of the cron expression.
pub mod field;
mod pattern;
/// Cron expression parser and fire time queries.
pub mod schedule;
mod search;
mod validate;

// Re-export of public entities.
pub use error::CronError;
pub use field::{CronField, MAX_YEAR, MIN_YEAR};
pub use schedule::Schedule;

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
