//! `WorkingDayConfig` — an organization's working weekdays.

use crate::weekday::{Weekday, WeekdaySet};
use serde::{Deserialize, Serialize};
use wd_core::ensure;
use wd_core::errors::{Error, Result};

/// Which weekdays an organization works by default, and which weekday
/// calendars start on.
///
/// `week_start_day` only orders calendar display; it never affects duration
/// math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingDayConfig", into = "RawWorkingDayConfig")]
pub struct WorkingDayConfig {
    working_weekdays: WeekdaySet,
    week_start_day: Weekday,
}

impl WorkingDayConfig {
    /// Create a configuration.
    ///
    /// # Errors
    /// Returns a precondition error if `working_weekdays` is empty.
    pub fn new(working_weekdays: WeekdaySet, week_start_day: Weekday) -> Result<Self> {
        ensure!(
            !working_weekdays.is_empty(),
            "an organization must work at least one weekday"
        );
        Ok(Self {
            working_weekdays,
            week_start_day,
        })
    }

    /// The working weekdays.
    pub fn working_weekdays(&self) -> WeekdaySet {
        self.working_weekdays
    }

    /// The first day of the week for display.
    pub fn week_start_day(&self) -> Weekday {
        self.week_start_day
    }

    /// Return `true` if `weekday` is a working weekday.
    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.working_weekdays.contains(weekday)
    }

    /// The seven weekdays in display order, starting at `week_start_day`.
    pub fn week_order(&self) -> [Weekday; 7] {
        let first = self.week_start_day.ordinal() as usize - 1;
        std::array::from_fn(|i| Weekday::ALL[(first + i) % 7])
    }

    /// Column (0–6) of `weekday` in [`week_order`](Self::week_order).
    pub fn column_of(&self, weekday: Weekday) -> usize {
        (weekday.ordinal() as usize + 7 - self.week_start_day.ordinal() as usize) % 7
    }
}

impl Default for WorkingDayConfig {
    /// Monday to Friday, weeks starting on Monday.
    fn default() -> Self {
        Self {
            working_weekdays: WeekdaySet::MONDAY_TO_FRIDAY,
            week_start_day: Weekday::Monday,
        }
    }
}

/// Serialized shape: `{ working_weekdays = [...], week_start_day = "..." }`.
#[derive(Serialize, Deserialize)]
struct RawWorkingDayConfig {
    working_weekdays: Vec<Weekday>,
    #[serde(default = "default_week_start")]
    week_start_day: Weekday,
}

fn default_week_start() -> Weekday {
    Weekday::Monday
}

impl TryFrom<RawWorkingDayConfig> for WorkingDayConfig {
    type Error = Error;

    fn try_from(raw: RawWorkingDayConfig) -> Result<Self> {
        WorkingDayConfig::new(raw.working_weekdays.into_iter().collect(), raw.week_start_day)
    }
}

impl From<WorkingDayConfig> for RawWorkingDayConfig {
    fn from(config: WorkingDayConfig) -> Self {
        Self {
            working_weekdays: config.working_weekdays.iter().collect(),
            week_start_day: config.week_start_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monday_to_friday() {
        let config = WorkingDayConfig::default();
        assert!(config.is_working_weekday(Weekday::Monday));
        assert!(config.is_working_weekday(Weekday::Friday));
        assert!(!config.is_working_weekday(Weekday::Saturday));
        assert!(!config.is_working_weekday(Weekday::Sunday));
        assert_eq!(config.week_start_day(), Weekday::Monday);
    }

    #[test]
    fn empty_working_set_is_rejected() {
        let err = WorkingDayConfig::new(WeekdaySet::EMPTY, Weekday::Monday).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn week_order_starts_at_configured_day() {
        let config =
            WorkingDayConfig::new(WeekdaySet::MONDAY_TO_FRIDAY, Weekday::Sunday).unwrap();
        let order = config.week_order();
        assert_eq!(order[0], Weekday::Sunday);
        assert_eq!(order[1], Weekday::Monday);
        assert_eq!(order[6], Weekday::Saturday);
        for (column, wd) in order.iter().enumerate() {
            assert_eq!(config.column_of(*wd), column);
        }
    }

    #[test]
    fn deserializes_with_validation() {
        let config: WorkingDayConfig = serde_json::from_str(
            r#"{"working_weekdays":["Sunday","Mon","tue","Wednesday","Thursday"]}"#,
        )
        .unwrap();
        assert!(config.is_working_weekday(Weekday::Sunday));
        assert!(!config.is_working_weekday(Weekday::Friday));
        assert_eq!(config.week_start_day(), Weekday::Monday);

        let empty = serde_json::from_str::<WorkingDayConfig>(r#"{"working_weekdays":[]}"#);
        assert!(empty.is_err());
    }

    #[test]
    fn serializes_weekday_names() {
        let json = serde_json::to_string(&WorkingDayConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"working_weekdays":["Monday","Tuesday","Wednesday","Thursday","Friday"],"week_start_day":"Monday"}"#
        );
    }
}
