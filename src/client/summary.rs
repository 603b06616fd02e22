//! # Summary and Search
//!
//! Figures shown above the table and the search filter. Both work on the
//! cached list only.

use serde::Serialize;

use crate::records::Student;

/// Summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    pub total: usize,
    pub grade_a: usize,
    pub avg_age: i64,
}

impl Summary {
    /// Count, grade-A count and average age rounded half up (0 when empty)
    pub fn of(students: &[Student]) -> Self {
        let total = students.len();
        let grade_a = students.iter().filter(|s| s.grade == "A").count();
        let avg_age = if total == 0 {
            0
        } else {
            let sum: i128 = students.iter().map(|s| i128::from(s.age)).sum();
            (sum as f64 / total as f64 + 0.5).floor() as i64
        };

        Self {
            total,
            grade_a,
            avg_age,
        }
    }
}

/// Records whose name, email or grade contains `query`, ignoring case
pub fn filter_students(students: &[Student], query: &str) -> Vec<Student> {
    let needle = query.to_lowercase();
    students
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.email.to_lowercase().contains(&needle)
                || s.grade.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
