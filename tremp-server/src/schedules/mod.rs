//! Static bus schedule reference data.
//!
//! The settlement is served by a handful of fixed lines whose timetables
//! change rarely; they ship with the server and are never mutated at
//! runtime. A deployment with different data can load its own JSON file
//! instead of the bundled defaults.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::{BusLine, DayTime, TimeError};

/// The static collection of bus lines the board shows.
#[derive(Debug, Clone, Default)]
pub struct BusSchedules {
    lines: Vec<Arc<BusLine>>,
}

impl BusSchedules {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines, in display order.
    pub fn lines(&self) -> &[Arc<BusLine>] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if no lines are loaded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Load schedules from a JSON file.
    ///
    /// The file holds an array of `{line, operator, origin, destination,
    /// schedule}` records with "HH:MM" schedule entries; a malformed time
    /// anywhere fails the whole load, since silently dropping departures
    /// from a timetable is worse than refusing to start.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ScheduleLoadError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path)
            .map_err(|e| ScheduleLoadError::Io(format!("{}: {}", path.display(), e)))?;

        let records: Vec<BusLineRecord> = serde_json::from_str(&json)
            .map_err(|e| ScheduleLoadError::Json(e.to_string()))?;

        let mut builder = BusSchedulesBuilder::new();
        for record in records {
            builder = builder.line_checked(
                &record.line,
                &record.operator,
                &record.origin,
                &record.destination,
                &record.schedule.iter().map(String::as_str).collect::<Vec<_>>(),
            )?;
        }
        Ok(builder.build())
    }
}

/// Error loading a schedules file.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleLoadError {
    /// Reading the file failed
    #[error("failed to read schedules file: {0}")]
    Io(String),

    /// The file is not valid JSON of the expected shape
    #[error("failed to parse schedules file: {0}")]
    Json(String),

    /// A schedule entry is not a valid "HH:MM" time
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// On-disk record shape for a bus line.
#[derive(Debug, Deserialize)]
struct BusLineRecord {
    line: String,
    operator: String,
    origin: String,
    destination: String,
    schedule: Vec<String>,
}

/// Builder for assembling bus schedules.
#[derive(Debug, Default)]
pub struct BusSchedulesBuilder {
    inner: BusSchedules,
}

impl BusSchedulesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, validating every schedule entry.
    pub fn line_checked(
        mut self,
        line: &str,
        operator: &str,
        origin: &str,
        destination: &str,
        schedule: &[&str],
    ) -> Result<Self, TimeError> {
        let times = schedule
            .iter()
            .map(|t| DayTime::parse(t))
            .collect::<Result<Vec<_>, _>>()?;

        self.inner.lines.push(Arc::new(BusLine {
            line: line.to_string(),
            operator: operator.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            schedule: times,
        }));
        Ok(self)
    }

    /// Add a line whose times are known-good literals.
    ///
    /// Panics on a malformed time; only for bundled data.
    fn line(self, line: &str, operator: &str, origin: &str, dest: &str, schedule: &[&str]) -> Self {
        self.line_checked(line, operator, origin, dest, schedule)
            .expect("bundled schedule literal is malformed")
    }

    /// Build the schedules.
    pub fn build(self) -> BusSchedules {
        self.inner
    }
}

/// The bundled Ma'ale Amos timetable.
pub fn maale_amos_lines() -> BusSchedules {
    const OPERATOR: &str = "אלקטרה אפיקים";

    BusSchedulesBuilder::new()
        .line(
            "409",
            OPERATOR,
            "מעלה עמוס",
            "ירושלים",
            &[
                "06:00", "06:45", "07:30", "08:15", "09:00", "12:00", "14:30", "16:15", "18:00",
                "20:30", "22:15",
            ],
        )
        .line(
            "44",
            OPERATOR,
            "מעלה עמוס",
            "ביתר עילית",
            &[
                "07:00", "08:00", "09:00", "13:00", "14:00", "15:00", "16:00", "17:00", "19:00",
                "21:00",
            ],
        )
        .line(
            "409",
            OPERATOR,
            "ירושלים",
            "מעלה עמוס",
            &["08:00", "10:00", "13:00", "15:00", "17:00", "19:00", "23:00"],
        )
        .line("365", OPERATOR, "מעלה עמוס", "מיצד", &["08:30", "12:30", "16:30"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_lines_exist() {
        let schedules = maale_amos_lines();
        assert_eq!(schedules.len(), 4);

        let jerusalem: Vec<_> = schedules
            .lines()
            .iter()
            .filter(|l| l.destination == "ירושלים")
            .collect();
        assert_eq!(jerusalem.len(), 1);
        assert_eq!(jerusalem[0].schedule.len(), 11);
    }

    #[test]
    fn bundled_schedules_are_ascending() {
        for line in maale_amos_lines().lines() {
            for pair in line.schedule.windows(2) {
                assert!(pair[0] < pair[1], "line {} out of order", line.line);
            }
        }
    }

    #[test]
    fn builder_rejects_bad_time() {
        let result = BusSchedulesBuilder::new().line_checked(
            "1",
            "op",
            "a",
            "b",
            &["06:00", "25:00"],
        );
        assert!(result.is_err());
    }

    #[test]
    fn load_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.json");
        std::fs::write(
            &path,
            r#"[{"line": "99", "operator": "op", "origin": "a",
                 "destination": "b", "schedule": ["06:00", "07:30"]}]"#,
        )
        .unwrap();

        let schedules = BusSchedules::load_file(&path).unwrap();
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules.lines()[0].line, "99");
        assert_eq!(schedules.lines()[0].schedule.len(), 2);
    }

    #[test]
    fn load_file_rejects_bad_schedule_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.json");
        std::fs::write(
            &path,
            r#"[{"line": "99", "operator": "op", "origin": "a",
                 "destination": "b", "schedule": ["6am"]}]"#,
        )
        .unwrap();

        assert!(matches!(
            BusSchedules::load_file(&path),
            Err(ScheduleLoadError::Time(_))
        ));
    }

    #[test]
    fn load_file_missing_file_errors() {
        assert!(matches!(
            BusSchedules::load_file("/no/such/file.json"),
            Err(ScheduleLoadError::Io(_))
        ));
    }
}
