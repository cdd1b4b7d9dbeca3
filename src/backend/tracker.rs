use super::models::{GradeSummary, StudentRecord};
use super::roster::Roster;
use super::validation::validate_entry;

use anyhow::anyhow;
use anyhow::Result;
use tracing::{info, warn};

/// One interactive session: the roster plus the activity log the original
/// form kept in its result area. The log is wiped together with the
/// roster on clear.
pub struct GradeTracker {
    roster: Roster,
    activity_log: Vec<String>,
}

// Public methods
impl GradeTracker {
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            activity_log: Vec::new(),
        }
    }

    /// Validates the raw form fields and appends a record on success.
    /// On any validation failure the roster is left untouched and the
    /// error message is the exact text to surface to the user.
    pub fn add_student(&mut self, name_text: &str, grade_text: &str) -> Result<StudentRecord> {
        let (name, grade) = validate_entry(name_text, grade_text).map_err(|e| {
            warn!(name = name_text, grade = grade_text, "rejected entry: {e}");
            anyhow!("{e}")
        })?;

        let record = StudentRecord::new(name, grade);
        self.roster.append(record.clone());
        self.log(format!(
            "Added student: {} with grade: {}",
            record.name, record.grade
        ));
        info!("added {record}, roster size {}", self.roster.len());

        Ok(record)
    }

    pub fn calculate(&mut self) -> Result<GradeSummary> {
        if self.roster.is_empty() {
            self.log("No students to calculate.".to_string());
            return Err(anyhow!("No students to calculate."));
        }

        let summary = GradeSummary::compute(&self.roster);
        self.log(format!(
            "Results: average {}, highest {}, lowest {}",
            summary.average, summary.highest, summary.lowest
        ));
        info!(
            "calculated over {} records: avg {}, high {}, low {}",
            self.roster.len(),
            summary.average,
            summary.highest,
            summary.lowest
        );

        Ok(summary)
    }

    pub fn clear_results(&mut self) {
        self.roster.clear();
        self.activity_log.clear();
        info!("cleared roster and activity log");
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn activity_log(&self) -> &[String] {
        &self.activity_log
    }
}

// Private methods
impl GradeTracker {
    fn log(&mut self, line: String) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        self.activity_log.push(format!("[{stamp}] {line}"));
    }
}

impl Default for GradeTracker {
    fn default() -> Self {
        Self::new()
    }
}
