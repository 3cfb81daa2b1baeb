pub mod types;
pub mod normalize;
pub mod grouping;
pub mod overlap;
pub mod selection;
pub mod report;

pub use types::{AssignmentRecord, BestPair, DisplayRow, PairOverlap, Project, DISPLAY_HEADERS};
pub use normalize::{normalize_records, parse_date};
pub use grouping::{distinct_employees, group_by_project};
pub use overlap::{aggregate_pair_totals, interval_overlap_days, project_overlap_days};
pub use selection::select_best_pair;
pub use report::{
    best_pair_report, compute_best_working_pair, pair_projects_from_csv, pair_projects_from_table,
    project_contributions,
};
