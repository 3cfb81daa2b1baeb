use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One employee's participation window on one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub employee_id: String,
    pub project_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl AssignmentRecord {
    pub fn new(employee_id: &str, project_id: &str, date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            project_id: project_id.to_string(),
            date_from,
            date_to,
        }
    }
}

/// An assignment as stored inside its project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAssignment {
    pub employee_id: String,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    /// Inclusive length of the window
    pub days_worked: i64,
}

/// All assignments of a single project, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub assignments: Vec<ProjectAssignment>,
}

impl Project {
    /// First assignment of the employee on this project
    pub fn assignment_of(&self, employee_id: &str) -> Option<&ProjectAssignment> {
        self.assignments.iter().find(|a| a.employee_id == employee_id)
    }
}

/// Total days two employees spent together on shared projects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOverlap {
    pub employee_a: String,
    pub employee_b: String,
    pub total_days_together: i64,
}

/// Totals of one employee against every other employee, in enumeration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeOverlaps {
    pub employee_id: String,
    pub worked_with: Vec<PartnerTotal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerTotal {
    pub other_employee_id: String,
    pub total_days_together: i64,
}

/// The pair with the greatest total overlap
pub type BestPair = PairOverlap;

/// One line of the final report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    #[serde(rename = "Employee ID #1")]
    pub employee_a: String,
    #[serde(rename = "Employee ID #2")]
    pub employee_b: String,
    #[serde(rename = "Project ID")]
    pub project_id: String,
    #[serde(rename = "Days worked")]
    pub days_worked: i64,
}

/// Column titles of the report, in field order
pub const DISPLAY_HEADERS: [&str; 4] = ["Employee ID #1", "Employee ID #2", "Project ID", "Days worked"];
