//! Analysis configuration for both pipeline variants.
//!
//! The defaults carry the literals the reports are built on (filter sets,
//! category labels, column names, input files). A run may replace any part of
//! them from a JSON file; after loading, the configuration is validated and
//! then only read.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::{CategoryRule, Matcher};
use crate::error::{ModelError, Result};

/// The two source layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Venue-management database export, keyed by status, room and organizer.
    Bookings,
    /// Calendar-tool export, keyed by subject, calendar, date/time and location.
    Calendar,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Bookings => "bookings",
            Variant::Calendar => "calendar",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSpec {
    /// File name, relative to the input directory unless absolute.
    pub file: PathBuf,
    /// Year label used in titles and output file names.
    pub year: String,
    /// Text encoding label for delimited files (e.g. `latin-1`, `utf-8-sig`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl InputSpec {
    pub fn new(file: impl Into<PathBuf>, year: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            year: year.into(),
            encoding: None,
        }
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}

impl FromStr for InputSpec {
    type Err = ModelError;

    /// Parses `FILE:YEAR` or `FILE:YEAR:ENCODING`.
    ///
    /// Fields are split from the right so `FILE` may itself contain colons,
    /// as Windows drive paths do. A numeric last field is the year.
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidInputSpec(value.to_string());
        let (head, last) = value.rsplit_once(':').ok_or_else(invalid)?;
        let last = last.trim();
        let spec = if !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()) {
            InputSpec::new(head.trim(), last)
        } else if last.is_empty() {
            return Err(invalid());
        } else {
            let (file, year) = head.rsplit_once(':').ok_or_else(invalid)?;
            InputSpec::new(file.trim(), year.trim()).with_encoding(last)
        };
        if spec.file.as_os_str().is_empty() || spec.year.is_empty() {
            return Err(invalid());
        }
        Ok(spec)
    }
}

/// Source column names of the booking export.
///
/// Each attribute lists the names it may appear under; the first one present in
/// a loaded table wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingColumns {
    pub status: Vec<String>,
    pub room: Vec<String>,
    pub name: Vec<String>,
    pub organizer: Vec<String>,
    pub duration: Vec<String>,
}

impl Default for BookingColumns {
    fn default() -> Self {
        Self {
            status: strings(&["Buchungsstatus"]),
            room: strings(&["VA_Raum0", "VA_Raum"]),
            name: strings(&["VA_Buchung_Name"]),
            organizer: strings(&["Veranstalter_1"]),
            duration: strings(&["Dauer"]),
        }
    }
}

/// Configuration of the booking-export variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Report title; the year is appended.
    pub title: String,
    /// Output file stem; `_<year>.md` / `_<year>.csv` is appended.
    pub output_stem: String,
    pub inputs: Vec<InputSpec>,
    /// Field delimiter when the export is delimited text instead of a workbook.
    pub csv_delimiter: char,
    pub columns: BookingColumns,
    pub required_status: String,
    pub excluded_rooms: BTreeSet<String>,
    pub excluded_name_keywords: Vec<String>,
    pub categories: Vec<CategoryRule>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            title: "Auswertung Nutzungszeiten FFK".to_string(),
            output_stem: "nutzungszeiten".to_string(),
            inputs: vec![InputSpec::new("VA_Buchungen_evis_2025.xlsx", "2025")],
            csv_delimiter: ',',
            columns: BookingColumns::default(),
            required_status: "Vtg ok".to_string(),
            excluded_rooms: ["Salon Godet", "Rotunde", "Restaurant Hugo & Notte"]
                .into_iter()
                .map(String::from)
                .collect(),
            excluded_name_keywords: strings(&[
                "Umbauten",
                "Betriebsferien",
                "Catering",
                "Flügelnutzung",
                "grobe Reservierung",
                "Nutzung",
                "Technik",
            ]),
            categories: vec![
                CategoryRule::new(
                    "Evangelische Akademie zu Berlin gGmbH",
                    Matcher::Exact("Evangelische Akademie zu Berlin gGmbH".to_string()),
                ),
                CategoryRule::new(
                    EKD_DELEGATE,
                    Matcher::Exact(EKD_DELEGATE.to_string()),
                ),
                CategoryRule::new("Externe Veranstalter (alle übrigen)", Matcher::CatchAll),
            ],
        }
    }
}

const EKD_DELEGATE: &str = "Bevollmächtigte des Rates der EKD bei der Bundesrepublik \
                            Deutschland und der Europäischen Union";

impl BookingConfig {
    /// Literal statement of the filters, one line per criterion.
    pub fn criteria(&self) -> Vec<String> {
        let rooms: Vec<&str> = self.excluded_rooms.iter().map(String::as_str).collect();
        vec![
            format!("Buchungsstatus = \"{}\"", self.required_status),
            format!("Ausgeschlossene Räume: {}", rooms.join(", ")),
            format!(
                "Ausgeschlossene Buchungsnamen (Schlüsselwörter): {}",
                self.excluded_name_keywords.join(", ")
            ),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        validate_categories("bookings", &self.categories)?;
        validate_keywords("bookings.excluded_name_keywords", &self.excluded_name_keywords)?;
        validate_columns(
            "bookings.columns",
            &[
                ("status", &self.columns.status),
                ("room", &self.columns.room),
                ("name", &self.columns.name),
                ("organizer", &self.columns.organizer),
                ("duration", &self.columns.duration),
            ],
        )
    }
}

/// Source column names of the calendar export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarColumns {
    pub subject: Vec<String>,
    pub start_date: Vec<String>,
    pub start_time: Vec<String>,
    pub end_date: Vec<String>,
    pub end_time: Vec<String>,
    pub calendar: Vec<String>,
    pub location: Vec<String>,
}

impl Default for CalendarColumns {
    fn default() -> Self {
        Self {
            subject: strings(&["Subject"]),
            start_date: strings(&["Start Date"]),
            start_time: strings(&["Start Time"]),
            end_date: strings(&["End Date"]),
            end_time: strings(&["End Time"]),
            calendar: strings(&["Calendar Name"]),
            location: strings(&["Wo"]),
        }
    }
}

/// An included calendar and the short label reports show for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarAlias {
    pub name: String,
    pub label: String,
}

impl CalendarAlias {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Configuration of the calendar-export variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub title: String,
    pub output_stem: String,
    pub inputs: Vec<InputSpec>,
    pub csv_delimiter: char,
    /// Encoding used when an input does not name one.
    pub default_encoding: String,
    /// `chrono` format of `<date> <time>`.
    pub datetime_format: String,
    pub columns: CalendarColumns,
    /// Included calendars, in report order.
    pub included_calendars: Vec<CalendarAlias>,
    pub excluded_subject_keywords: Vec<String>,
    /// Target rooms, in report column order.
    pub target_rooms: Vec<String>,
    pub location_separator: char,
    pub categories: Vec<CategoryRule>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            title: "Auswertung TeamUp-Nutzungszeiten FFK".to_string(),
            output_stem: "teamup_nutzungszeiten".to_string(),
            inputs: vec![
                InputSpec::new("teamup_2024-raw.xlsx.csv", "2024").with_encoding("latin-1"),
                InputSpec::new("team-up_2025-raw.csv", "2025").with_encoding("utf-8-sig"),
            ],
            csv_delimiter: ';',
            default_encoding: "utf-8".to_string(),
            datetime_format: "%d.%m.%Y %H:%M".to_string(),
            columns: CalendarColumns::default(),
            included_calendars: vec![
                CalendarAlias::new("EAzB > EAzB - Festbuchung", "EAzB"),
                CalendarAlias::new("Kirche > Frz. Kirche - Festbuchung", "Frz. Kirche"),
                CalendarAlias::new("Kirche > Kirchenmusik", "Kirchenmusik"),
            ],
            excluded_subject_keywords: strings(&[
                "Aufbau",
                "Besichtigung",
                "Besichtigungstermin",
                "Flügel",
                "Rückbau",
                "Orgelstimmung",
            ]),
            target_rooms: strings(&["Kirchensaal", "Georges-Casalis-Saal", "Entrée"]),
            location_separator: ',',
            categories: vec![
                CategoryRule::new("Offene Kirche", Matcher::Exact("Offene Kirche".to_string())),
                CategoryRule::new("Orgelprobe", Matcher::Contains("Orgelprobe".to_string())),
                CategoryRule::new("Alle verbleibenden Einträge", Matcher::CatchAll),
            ],
        }
    }
}

impl CalendarConfig {
    /// Display label of an included calendar, `None` when the calendar is not included.
    pub fn calendar_label(&self, name: &str) -> Option<&str> {
        self.included_calendars
            .iter()
            .find(|alias| alias.name == name)
            .map(|alias| alias.label.as_str())
    }

    pub fn is_target_room(&self, room: &str) -> bool {
        self.target_rooms.iter().any(|target| target == room)
    }

    pub fn criteria(&self) -> Vec<String> {
        let labels: Vec<&str> = self
            .included_calendars
            .iter()
            .map(|alias| alias.label.as_str())
            .collect();
        vec![
            format!("Calendar Names: {}", labels.join(", ")),
            format!(
                "Ausgeschlossene Subjects (Schlüsselwörter): {}",
                self.excluded_subject_keywords.join(", ")
            ),
            format!("Räume: {}", self.target_rooms.join(", ")),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        validate_categories("calendar", &self.categories)?;
        validate_keywords(
            "calendar.excluded_subject_keywords",
            &self.excluded_subject_keywords,
        )?;
        if self.included_calendars.is_empty() {
            return Err(ModelError::InvalidConfig(
                "calendar.included_calendars must not be empty".to_string(),
            ));
        }
        if self.target_rooms.is_empty() {
            return Err(ModelError::InvalidConfig(
                "calendar.target_rooms must not be empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for room in &self.target_rooms {
            if !seen.insert(room.as_str()) {
                return Err(ModelError::InvalidConfig(format!(
                    "calendar.target_rooms lists '{room}' twice"
                )));
            }
        }
        validate_columns(
            "calendar.columns",
            &[
                ("subject", &self.columns.subject),
                ("start_date", &self.columns.start_date),
                ("start_time", &self.columns.start_time),
                ("end_date", &self.columns.end_date),
                ("end_time", &self.columns.end_time),
                ("calendar", &self.columns.calendar),
                ("location", &self.columns.location),
            ],
        )
    }
}

/// Configuration of a whole run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub bookings: BookingConfig,
    pub calendar: CalendarConfig,
}

impl AnalysisConfig {
    /// Parses and validates a JSON configuration. Missing sections keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.bookings.validate()?;
        self.calendar.validate()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn validate_categories(section: &str, rules: &[CategoryRule]) -> Result<()> {
    let Some(last) = rules.last() else {
        return Err(ModelError::InvalidConfig(format!(
            "{section}.categories must not be empty"
        )));
    };
    if !last.matcher.is_catch_all() {
        return Err(ModelError::InvalidConfig(format!(
            "{section}.categories must end with a catch_all rule"
        )));
    }
    if rules[..rules.len() - 1]
        .iter()
        .any(|rule| rule.matcher.is_catch_all())
    {
        return Err(ModelError::InvalidConfig(format!(
            "{section}.categories may only contain one catch_all rule, as the last entry"
        )));
    }
    let mut labels = HashSet::new();
    for rule in rules {
        if !labels.insert(rule.label.as_str()) {
            return Err(ModelError::InvalidConfig(format!(
                "{section}.categories uses label '{}' twice",
                rule.label
            )));
        }
    }
    Ok(())
}

fn validate_keywords(field: &str, keywords: &[String]) -> Result<()> {
    if keywords.iter().any(|keyword| keyword.trim().is_empty()) {
        return Err(ModelError::InvalidConfig(format!(
            "{field} contains an empty keyword"
        )));
    }
    Ok(())
}

fn validate_columns(section: &str, columns: &[(&str, &Vec<String>)]) -> Result<()> {
    for (name, aliases) in columns {
        if aliases.is_empty() {
            return Err(ModelError::InvalidConfig(format!(
                "{section}.{name} needs at least one column name"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        AnalysisConfig::default().validate().expect("defaults validate");
    }

    #[test]
    fn input_spec_parses_optional_encoding() {
        let spec: InputSpec = "team-up_2025-raw.csv:2025:utf-8-sig".parse().unwrap();
        assert_eq!(spec.file, PathBuf::from("team-up_2025-raw.csv"));
        assert_eq!(spec.year, "2025");
        assert_eq!(spec.encoding.as_deref(), Some("utf-8-sig"));

        let spec: InputSpec = "bookings.xlsx:2024".parse().unwrap();
        assert!(spec.encoding.is_none());

        assert!("bookings.xlsx".parse::<InputSpec>().is_err());
        assert!("bookings.xlsx:".parse::<InputSpec>().is_err());
        assert!(":2024".parse::<InputSpec>().is_err());
        assert!("bookings.xlsx::latin-1".parse::<InputSpec>().is_err());
    }

    #[test]
    fn input_spec_keeps_drive_letter_in_file() {
        let spec: InputSpec = r"C:\data\bookings.xlsx:2025".parse().unwrap();
        assert_eq!(spec.file, PathBuf::from(r"C:\data\bookings.xlsx"));
        assert_eq!(spec.year, "2025");
        assert!(spec.encoding.is_none());

        let spec: InputSpec = r"C:\data\teamup.csv:2024:latin-1".parse().unwrap();
        assert_eq!(spec.file, PathBuf::from(r"C:\data\teamup.csv"));
        assert_eq!(spec.year, "2024");
        assert_eq!(spec.encoding.as_deref(), Some("latin-1"));
    }

    #[test]
    fn rejects_categories_without_trailing_catch_all() {
        let mut config = BookingConfig::default();
        config.categories.pop();
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("catch_all"));
    }

    #[test]
    fn rejects_catch_all_before_last_rule() {
        let mut config = CalendarConfig::default();
        config
            .categories
            .insert(0, CategoryRule::new("Alles", Matcher::CatchAll));
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AnalysisConfig::from_json_str(
            r#"{"calendar": {"target_rooms": ["Kirchensaal"]}}"#,
        )
        .expect("parse config");
        assert_eq!(config.calendar.target_rooms, vec!["Kirchensaal"]);
        assert_eq!(config.calendar.csv_delimiter, ';');
        assert_eq!(config.bookings, BookingConfig::default());
    }

    #[test]
    fn criteria_list_sorted_excluded_rooms() {
        let criteria = BookingConfig::default().criteria();
        assert_eq!(criteria[0], "Buchungsstatus = \"Vtg ok\"");
        assert_eq!(
            criteria[1],
            "Ausgeschlossene Räume: Restaurant Hugo & Notte, Rotunde, Salon Godet"
        );
    }

    #[test]
    fn calendar_label_resolves_alias() {
        let config = CalendarConfig::default();
        assert_eq!(
            config.calendar_label("Kirche > Kirchenmusik"),
            Some("Kirchenmusik")
        );
        assert_eq!(config.calendar_label("Privat"), None);
    }
}
