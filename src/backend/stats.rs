use super::models::GradeSummary;
use super::roster::Roster;

/// Arithmetic mean of all grades, 0.0 for an empty roster. The sum is
/// taken over integers and only the final division is floating point.
pub fn average(roster: &Roster) -> f64 {
    if roster.is_empty() {
        return 0.0;
    }

    let sum: i64 = roster.records().iter().map(|r| r.grade as i64).sum();
    sum as f64 / roster.len() as f64
}

/// Maximum grade, or -1 for an empty roster.
pub fn highest(roster: &Roster) -> i32 {
    if roster.is_empty() {
        return -1;
    }

    let mut highest = i32::MIN;
    for record in roster.records() {
        if record.grade > highest {
            highest = record.grade;
        }
    }
    highest
}

/// Minimum grade, or -1 for an empty roster.
pub fn lowest(roster: &Roster) -> i32 {
    if roster.is_empty() {
        return -1;
    }

    let mut lowest = i32::MAX;
    for record in roster.records() {
        if record.grade < lowest {
            lowest = record.grade;
        }
    }
    lowest
}

impl GradeSummary {
    pub fn compute(roster: &Roster) -> Self {
        Self {
            average: average(roster),
            highest: highest(roster),
            lowest: lowest(roster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::models::StudentRecord;

    fn roster_of(grades: &[i32]) -> Roster {
        let mut roster = Roster::new();
        for (i, g) in grades.iter().enumerate() {
            roster.append(StudentRecord::new(format!("Student {}", i), *g));
        }
        roster
    }

    #[test]
    fn empty_roster_sentinels() {
        let roster = Roster::new();
        assert_eq!(average(&roster), 0.0);
        assert_eq!(highest(&roster), -1);
        assert_eq!(lowest(&roster), -1);
    }

    #[test]
    fn average_uses_floating_point_division() {
        let roster = roster_of(&[90, 70, 81]);
        let avg = average(&roster);
        assert!((avg - 241.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn summary_over_three_students() {
        let roster = roster_of(&[90, 70, 80]);
        let summary = GradeSummary::compute(&roster);
        assert_eq!(summary.average, 80.0);
        assert_eq!(summary.highest, 90);
        assert_eq!(summary.lowest, 70);
    }

    #[test]
    fn negative_grades_are_handled() {
        let roster = roster_of(&[-5, 0, 10]);
        assert_eq!(highest(&roster), 10);
        assert_eq!(lowest(&roster), -5);
        assert!((average(&roster) - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_record_is_its_own_max_and_min() {
        let roster = roster_of(&[42]);
        assert_eq!(highest(&roster), 42);
        assert_eq!(lowest(&roster), 42);
        assert_eq!(average(&roster), 42.0);
    }

    #[test]
    fn cleared_roster_behaves_like_a_fresh_one() {
        let mut roster = roster_of(&[90, 70]);
        roster.clear();
        assert_eq!(average(&roster), 0.0);
        assert_eq!(highest(&roster), -1);
        assert_eq!(lowest(&roster), -1);
    }
}
