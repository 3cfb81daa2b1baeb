use std::collections::{HashMap, HashSet};

use super::types::{AssignmentRecord, Project, ProjectAssignment};

/// Groups records by project, keeping first-seen project order
pub fn group_by_project(records: &[AssignmentRecord]) -> Vec<Project> {
    let mut projects: Vec<Project> = Vec::new();
    let mut index_by_id: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let assignment = ProjectAssignment {
            employee_id: record.employee_id.clone(),
            date_from: record.date_from,
            date_to: record.date_to,
            days_worked: inclusive_days(record),
        };

        match index_by_id.get(record.project_id.as_str()) {
            Some(&index) => projects[index].assignments.push(assignment),
            None => {
                index_by_id.insert(record.project_id.as_str(), projects.len());
                projects.push(Project {
                    project_id: record.project_id.clone(),
                    assignments: vec![assignment],
                });
            }
        }
    }

    projects
}

/// Distinct employee ids in order of first appearance
pub fn distinct_employees(records: &[AssignmentRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.employee_id.as_str()))
        .map(|r| r.employee_id.clone())
        .collect()
}

fn inclusive_days(record: &AssignmentRecord) -> i64 {
    (record.date_to - record.date_from).num_days() + 1
}
