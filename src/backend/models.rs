use std::fmt::{Display, Formatter};
use serde_derive::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub grade: i32,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, grade: i32) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }
}

impl Display for StudentRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.grade)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub average: f64,
    pub highest: i32,
    pub lowest: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_display_shows_name_and_grade() {
        let r = StudentRecord::new("Ann Lee", 88);
        assert_eq!(r.to_string(), "Ann Lee (88)");
    }

    #[test]
    fn record_serializes_to_json() {
        let r = StudentRecord::new("Alice", 90);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"name":"Alice","grade":90}"#);
    }
}
