//! Error types for workdays.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The `ensure!` and
//! `fail!` macros give constructors a terse way to reject bad input.

use thiserror::Error;

/// The top-level error type used throughout workdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No working day exists within the search horizon.
    ///
    /// Callers surface this to the user (e.g. "no available start date
    /// found") instead of defaulting to an arbitrary date.
    #[error("no working day found within {horizon_days} days of {from}")]
    NoWorkingDayFound {
        /// ISO-8601 form of the date the search started from.
        from: String,
        /// Number of days scanned after `from`.
        horizon_days: u32,
    },

    /// Date out of range or otherwise invalid.
    #[error("date error: {0}")]
    Date(String),

    /// Text could not be parsed (ISO dates, weekday names).
    #[error("parse error: {0}")]
    Parse(String),

    /// Precondition violated (produced by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Settings could not be loaded or decoded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error (produced by [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),
}

impl Error {
    /// Return `true` for the horizon-exhaustion error of the next-working-day
    /// search.
    pub fn is_no_working_day(&self) -> bool {
        matches!(self, Error::NoWorkingDayFound { .. })
    }
}

/// Shorthand `Result` type used throughout workdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use wd_core::{fail, errors::Error};
/// fn always_err() -> wd_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert_eq!(always_err(), Err(Error::Runtime("something went wrong".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
