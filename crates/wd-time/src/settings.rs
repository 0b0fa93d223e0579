//! Engine settings.
//!
//! [`Settings`] is an explicit value handed to whatever owns a
//! [`WorkCalendar`]; there is no process-wide instance.  Settings can be
//! decoded from TOML text or a settings file through the `config` crate.
//! Every field is optional in the source.
//!
//! ```toml
//! horizon_days = 20
//! duration_policy = "calendar_days_minus_holidays"
//! holidays = ["2024-01-01", "2024-12-25"]
//!
//! [organization]
//! working_weekdays = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
//! week_start_day = "Monday"
//! ```

use crate::calculator::{DurationPolicy, DEFAULT_HORIZON_DAYS};
use crate::calendar::WorkCalendar;
use crate::holiday_set::HolidaySet;
use crate::working_day_config::WorkingDayConfig;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wd_core::errors::{Error, Result};

/// Settings of the working-day engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Days scanned past the start date when searching a working day.
    pub horizon_days: u32,
    /// How leave durations are counted.
    pub duration_policy: DurationPolicy,
    /// The organization's working weekdays.
    pub organization: WorkingDayConfig,
    /// Holidays known up front; usually empty and fetched per year instead.
    pub holidays: HolidaySet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            duration_policy: DurationPolicy::default(),
            organization: WorkingDayConfig::default(),
            holidays: HolidaySet::new(),
        }
    }
}

impl Settings {
    /// Decode settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::load(Config::builder().add_source(File::from_str(text, FileFormat::Toml)))
    }

    /// Load settings from a file; the format follows the extension
    /// (`.toml`, `.json`, `.yaml`, …).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading settings");
        Self::load(Config::builder().add_source(File::from(path).required(true)))
    }

    fn load(builder: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))?;
        tracing::debug!(
            horizon_days = settings.horizon_days,
            policy = ?settings.duration_policy,
            working_weekdays = ?settings.organization.working_weekdays(),
            holidays = settings.holidays.len(),
            "settings loaded"
        );
        Ok(settings)
    }

    /// A calendar using these settings and `holidays` in addition to the
    /// ones listed in the settings.
    pub fn calendar(&self, holidays: &HolidaySet) -> WorkCalendar {
        WorkCalendar::builder(self.organization)
            .holidays(self.holidays.union(holidays))
            .horizon_days(self.horizon_days)
            .duration_policy(self.duration_policy)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    #[test]
    fn empty_source_gives_defaults() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn decodes_all_fields() {
        let settings = Settings::from_toml_str(
            r#"
            horizon_days = 30
            duration_policy = "working_days_only"
            holidays = ["2024-01-01"]

            [organization]
            working_weekdays = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"]
            week_start_day = "Sunday"
            "#,
        )
        .unwrap();
        assert_eq!(settings.horizon_days, 30);
        assert_eq!(settings.duration_policy, DurationPolicy::WorkingDaysOnly);
        assert_eq!(settings.holidays.len(), 1);
        assert_eq!(settings.organization.week_start_day(), Weekday::Sunday);
        assert!(!settings.organization.is_working_weekday(Weekday::Friday));
    }

    #[test]
    fn invalid_weekday_is_a_config_error() {
        let err = Settings::from_toml_str(
            r#"
            [organization]
            working_weekdays = ["Moonday"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Settings::from_file("/nonexistent/workdays.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
