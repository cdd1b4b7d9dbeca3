use super::models::StudentRecord;

/// The in-memory collection of student records for the current session.
/// Insertion order is preserved and duplicate names are allowed.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    // inputs are pre-validated by the caller, so append cannot fail
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}
