use calendr_core::models::{EventMarker, FirstDayOfWeek};
use calendr_core::{CalendarConfig, CalendarError, RangeCalendars, SelectionMode};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Calendar configuration shared by every command.
/// Values given as flags override the same fields from `--config`.
#[derive(clap::Args, Debug, Default)]
pub struct ConfigArgs {
    /// YAML file holding any of the calendar options
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Form field name the selection is reported under
    #[arg(long)]
    pub name: Option<String>,

    /// single or range
    #[arg(long, short)]
    pub mode: Option<SelectionMode>,

    /// Initially selected date (single mode), YYYY-MM-DD
    #[arg(long)]
    pub value: Option<String>,

    /// Initial range start (range mode), YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,

    /// Initial range end (range mode), YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,

    /// Earliest selectable date
    #[arg(long)]
    pub min_date: Option<String>,

    /// Latest selectable date
    #[arg(long)]
    pub max_date: Option<String>,

    /// A date that cannot be selected. Repeat for more dates
    #[arg(long)]
    pub disabled_date: Vec<String>,

    /// Disable every date
    #[arg(long)]
    pub disabled: bool,

    /// Locale code for labels and announcements, e.g. en, fr, pt-BR
    #[arg(long, short)]
    pub locale: Option<String>,

    /// sunday or monday
    #[arg(long)]
    pub first_day_of_week: Option<FirstDayOfWeek>,

    /// Panes shown in range mode: 1, 2 or auto
    #[arg(long)]
    pub range_calendars: Option<RangeCalendars>,

    /// JSON or YAML file with a list of event markers
    #[arg(long)]
    pub markers: Option<PathBuf>,

    #[arg(long)]
    pub no_keyboard: bool,

    #[arg(long)]
    pub no_announce: bool,

    #[arg(long)]
    pub hide_today: bool,

    #[arg(long)]
    pub min_year: Option<i32>,

    #[arg(long)]
    pub max_year: Option<i32>,
}

impl ConfigArgs {
    /// Build the calendar configuration: file first, then flags on top
    pub fn load_config(&self) -> Result<CalendarConfig, CalendarError> {
        let mut config = match &self.config {
            Some(path) => read_config_file(path)?,
            None => CalendarConfig::default(),
        };

        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        override_opt(&mut config.value, &self.value);
        override_opt(&mut config.start_date, &self.start_date);
        override_opt(&mut config.end_date, &self.end_date);
        override_opt(&mut config.min_date, &self.min_date);
        override_opt(&mut config.max_date, &self.max_date);
        if !self.disabled_date.is_empty() {
            config.disabled_dates = self.disabled_date.clone();
        }
        config.disabled |= self.disabled;
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(first_day) = self.first_day_of_week {
            config.first_day_of_week = first_day;
        }
        if let Some(range_calendars) = self.range_calendars {
            config.range_calendars = range_calendars;
        }
        if let Some(path) = &self.markers {
            config.event_markers = read_markers_file(path)?;
        }
        config.disable_keyboard_navigation |= self.no_keyboard;
        config.disable_announce_selections |= self.no_announce;
        config.hide_today |= self.hide_today;
        if let Some(min_year) = self.min_year {
            config.min_year = min_year;
        }
        if let Some(max_year) = self.max_year {
            config.max_year = max_year;
        }
        if config.min_year > config.max_year {
            return Err(CalendarError::Config(format!(
                "min_year {} is after max_year {}",
                config.min_year, config.max_year
            )));
        }

        debug!("Loaded calendar config: {:?}", config);
        Ok(config)
    }
}

fn override_opt(field: &mut Option<String>, flag: &Option<String>) {
    if flag.is_some() {
        *field = flag.clone();
    }
}

fn read_to_string(path: &Path) -> Result<String, CalendarError> {
    fs::read_to_string(path).map_err(|e| {
        CalendarError::Config(format!("Unable to read {}: {}", path.display(), e))
    })
}

pub fn read_config_file(path: &Path) -> Result<CalendarConfig, CalendarError> {
    let contents = read_to_string(path)?;
    serde_norway::from_str::<CalendarConfig>(&contents).map_err(|e| {
        CalendarError::Config(format!(
            "Failed to parse config {}. Error: {}",
            path.display(),
            e
        ))
    })
}

pub fn read_markers_file(path: &Path) -> Result<Vec<EventMarker>, CalendarError> {
    let contents = read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let parsed = if is_json {
        serde_json::from_str::<Vec<EventMarker>>(&contents).map_err(|e| e.to_string())
    } else {
        serde_norway::from_str::<Vec<EventMarker>>(&contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| {
        CalendarError::Config(format!(
            "Failed to parse markers {}. Error: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let config = ConfigArgs::default().load_config().unwrap();
        assert_eq!(config, CalendarConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("calendar.yml");
        File::create(&path)
            .unwrap()
            .write_all(
                b"mode: range\nrange_calendars: \"2\"\nstart_date: 2024-03-02\nlocale: fr\ndisabled_dates: [2024-03-05]\n",
            )
            .unwrap();

        let args = ConfigArgs {
            config: Some(path),
            locale: Some("de".to_string()),
            hide_today: true,
            ..Default::default()
        };
        let config = args.load_config().unwrap();
        assert_eq!(config.mode, SelectionMode::Range);
        assert_eq!(config.range_calendars, RangeCalendars::Two);
        assert_eq!(config.start_date.as_deref(), Some("2024-03-02"));
        assert_eq!(config.disabled_dates, vec!["2024-03-05".to_string()]);
        assert_eq!(config.locale, "de");
        assert!(config.hide_today);
    }

    #[test]
    fn test_bad_file_is_a_config_error() {
        let tmp_dir = tempdir().unwrap();
        let path = tmp_dir.path().join("calendar.yml");
        File::create(&path)
            .unwrap()
            .write_all(b"mode: [not, a, mode]\n")
            .unwrap();
        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, CalendarError::Config(_)));

        let missing = read_config_file(&tmp_dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(missing, CalendarError::Config(_)));
    }

    #[test]
    fn test_markers_from_json_and_yaml() {
        let tmp_dir = tempdir().unwrap();
        let json = tmp_dir.path().join("markers.json");
        File::create(&json)
            .unwrap()
            .write_all(br#"[{"date": "2024-01-22", "tooltip": "launch", "background_color": "red"}]"#)
            .unwrap();
        let yaml = tmp_dir.path().join("markers.yml");
        File::create(&yaml)
            .unwrap()
            .write_all(b"- date: 2024-02-01\n  foreground_color: yellow\n")
            .unwrap();

        let from_json = read_markers_file(&json).unwrap();
        assert_eq!(from_json[0].tooltip.as_deref(), Some("launch"));
        let from_yaml = read_markers_file(&yaml).unwrap();
        assert_eq!(from_yaml[0].date, "2024-02-01");
        assert_eq!(from_yaml[0].foreground_color.as_deref(), Some("yellow"));
    }

    #[test]
    fn test_inverted_year_bounds_rejected() {
        let args = ConfigArgs {
            min_year: Some(2030),
            max_year: Some(2020),
            ..Default::default()
        };
        assert!(args.load_config().is_err());
    }
}
