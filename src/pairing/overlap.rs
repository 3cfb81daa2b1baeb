use chrono::NaiveDate;

use super::types::{EmployeeOverlaps, PartnerTotal, Project};

/// Days two windows intersect, counting both boundary days.
/// Windows that only touch on a single day do not count as overlapping.
pub fn interval_overlap_days(
    (from_a, to_a): (NaiveDate, NaiveDate),
    (from_b, to_b): (NaiveDate, NaiveDate),
) -> i64 {
    let start = from_a.max(from_b);
    let end = to_a.min(to_b);

    if start < end {
        (end - start).num_days() + 1
    } else {
        0
    }
}

/// Overlap of two employees on one project, 0 if either is absent
pub fn project_overlap_days(project: &Project, first_employee: &str, second_employee: &str) -> i64 {
    match (project.assignment_of(first_employee), project.assignment_of(second_employee)) {
        (Some(first), Some(second)) => interval_overlap_days(
            (first.date_from, first.date_to),
            (second.date_from, second.date_to),
        ),
        _ => 0,
    }
}

/// Sum of overlaps of two employees across all projects
pub fn total_overlap_days(projects: &[Project], first_employee: &str, second_employee: &str) -> i64 {
    projects
        .iter()
        .map(|project| project_overlap_days(project, first_employee, second_employee))
        .sum()
}

/// Totals of every employee against every other employee
///
/// Both orderings of a pair are computed, so each employee carries its full
/// partner list in enumeration order.
pub fn aggregate_pair_totals(employees: &[String], projects: &[Project]) -> Vec<EmployeeOverlaps> {
    employees
        .iter()
        .map(|first| EmployeeOverlaps {
            employee_id: first.clone(),
            worked_with: employees
                .iter()
                .filter(|second| *second != first)
                .map(|second| PartnerTotal {
                    other_employee_id: second.clone(),
                    total_days_together: total_overlap_days(projects, first, second),
                })
                .collect(),
        })
        .collect()
}
