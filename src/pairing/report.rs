use chrono::NaiveDate;
use log::{debug, info};

use super::grouping::{distinct_employees, group_by_project};
use super::normalize::normalize_records;
use super::overlap::{aggregate_pair_totals, project_overlap_days};
use super::selection::select_best_pair;
use super::types::{AssignmentRecord, BestPair, DisplayRow, Project};
use crate::error::PairResult;
use crate::parser::{read_table_from_str, RawTable};

/// Per-project breakdown of the selected pair
///
/// Overlaps are recomputed here for the winning pair only; the aggregator
/// keeps totals alone.
pub fn project_contributions(projects: &[Project], best_pair: &BestPair) -> Vec<DisplayRow> {
    projects
        .iter()
        .filter(|project| {
            project.assignment_of(&best_pair.employee_a).is_some()
                && project.assignment_of(&best_pair.employee_b).is_some()
        })
        .filter_map(|project| {
            let days = project_overlap_days(project, &best_pair.employee_a, &best_pair.employee_b);
            (days > 0).then(|| DisplayRow {
                employee_a: best_pair.employee_a.clone(),
                employee_b: best_pair.employee_b.clone(),
                project_id: project.project_id.clone(),
                days_worked: days,
            })
        })
        .collect()
}

/// Finds the pair of employees that worked together the longest and lists
/// the projects they shared
///
/// Returns an empty report when no two employees ever overlapped.
pub fn compute_best_working_pair(records: &[AssignmentRecord]) -> Vec<DisplayRow> {
    let projects = group_by_project(records);
    let employees = distinct_employees(records);
    debug!("{} employees across {} projects", employees.len(), projects.len());

    let totals = aggregate_pair_totals(&employees, &projects);
    match select_best_pair(&totals) {
        Ok(best_pair) => project_contributions(&projects, &best_pair),
        Err(_) => Vec::new(),
    }
}

/// Full pipeline from parsed CSV rows
///
/// `today` stands in for every open-ended assignment.
pub fn pair_projects_from_table(table: &RawTable, today: NaiveDate) -> PairResult<Vec<DisplayRow>> {
    let records = normalize_records(table, today)?;
    let rows = compute_best_working_pair(&records);
    info!("Processed {} assignments, {} report rows", records.len(), rows.len());
    Ok(rows)
}

/// Full pipeline from CSV text
pub fn pair_projects_from_csv(text: &str, today: NaiveDate) -> PairResult<Vec<DisplayRow>> {
    let table = read_table_from_str(text)?;
    pair_projects_from_table(&table, today)
}

/// Like [`compute_best_working_pair`] but surfaces the "no pair" outcome
/// together with the chosen pair
pub fn best_pair_report(records: &[AssignmentRecord]) -> PairResult<(BestPair, Vec<DisplayRow>)> {
    let projects = group_by_project(records);
    let totals = aggregate_pair_totals(&distinct_employees(records), &projects);
    let best_pair = select_best_pair(&totals)?;
    let rows = project_contributions(&projects, &best_pair);
    Ok((best_pair, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairError;

    fn d(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn record(emp: &str, project: &str, from: &str, to: &str) -> AssignmentRecord {
        AssignmentRecord::new(emp, project, d(from), d(to))
    }

    fn row(a: &str, b: &str, project: &str, days: i64) -> DisplayRow {
        DisplayRow {
            employee_a: a.to_string(),
            employee_b: b.to_string(),
            project_id: project.to_string(),
            days_worked: days,
        }
    }

    #[test]
    fn reports_each_shared_project_of_the_best_pair() {
        let records = vec![
            record("E1", "P1", "2023-01-01", "2023-01-10"),
            record("E2", "P1", "2023-01-05", "2023-01-15"),
            record("E1", "P2", "2023-02-01", "2023-02-05"),
            record("E2", "P2", "2023-02-03", "2023-02-10"),
        ];
        assert_eq!(
            compute_best_working_pair(&records),
            vec![row("E1", "E2", "P1", 6), row("E1", "E2", "P2", 3)]
        );

        let (best, _) = best_pair_report(&records).unwrap();
        assert_eq!(best.total_days_together, 9);
    }

    #[test]
    fn skips_shared_projects_without_overlap() {
        let records = vec![
            record("1", "A", "2020-01-01", "2020-01-31"),
            record("2", "A", "2020-01-10", "2020-02-10"),
            record("1", "B", "2020-03-01", "2020-03-10"),
            record("2", "B", "2020-04-01", "2020-04-10"),
            record("3", "C", "2020-01-01", "2020-12-31"),
        ];
        assert_eq!(compute_best_working_pair(&records), vec![row("1", "2", "A", 22)]);
    }

    #[test]
    fn longest_cumulative_pair_wins_over_single_longest_project() {
        let records = vec![
            record("1", "A", "2020-01-01", "2020-01-20"),
            record("2", "A", "2020-01-01", "2020-01-20"),
            record("3", "B", "2020-01-01", "2020-01-15"),
            record("4", "B", "2020-01-01", "2020-01-15"),
            record("3", "C", "2020-02-01", "2020-02-10"),
            record("4", "C", "2020-02-01", "2020-02-10"),
        ];
        assert_eq!(
            compute_best_working_pair(&records),
            vec![row("3", "4", "B", 15), row("3", "4", "C", 10)]
        );
    }

    #[test]
    fn empty_input_gives_empty_report() {
        assert!(compute_best_working_pair(&[]).is_empty());
        assert!(matches!(best_pair_report(&[]), Err(PairError::NoPairFound)));
    }

    #[test]
    fn employees_never_sharing_a_project_give_empty_report() {
        let records = vec![
            record("1", "A", "2020-01-01", "2020-12-31"),
            record("2", "B", "2020-01-01", "2020-12-31"),
        ];
        assert!(compute_best_working_pair(&records).is_empty());
    }

    #[test]
    fn open_ended_assignments_run_until_today() {
        let text = "EmpID,ProjectID,DateFrom,DateTo\n1,X,2024-01-01,NULL\n2,X,2024-03-01,NULL\n";
        let today = d("2024-03-31");
        let rows = pair_projects_from_csv(text, today).unwrap();
        assert_eq!(rows, vec![row("1", "2", "X", 31)]);
    }

    #[test]
    fn running_twice_gives_the_same_report() {
        let text = "EmpID,ProjectID,DateFrom,DateTo\n1,X,2024-01-01,2024-02-01\n2,X,2024-01-15,NULL\n3,X,2023-12-01,2024-01-20\n";
        let today = d("2024-06-01");
        assert_eq!(pair_projects_from_csv(text, today).unwrap(), pair_projects_from_csv(text, today).unwrap());
    }

    #[test]
    fn parse_errors_abort_the_pipeline() {
        let text = "EmpID,ProjectID,DateFrom,DateTo\n1,X,2024-01-01,2024-02-01\n2,X,not a date,NULL\n";
        assert!(matches!(
            pair_projects_from_csv(text, d("2024-06-01")),
            Err(PairError::MalformedDate { line: 3, .. })
        ));
    }
}
