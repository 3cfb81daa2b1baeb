//! Finds the pair of employees who spent the most days together on shared
//! projects and lists the projects behind that total.
//!
//! The pipeline reads CSV rows ([`parser`]), turns them into typed
//! assignments, groups them by project, sums pairwise date overlaps and
//! reports the winning pair ([`pairing`]). [`display`], [`export`] and
//! [`web`] present the result.

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod pairing;
pub mod parser;
pub mod web;

pub use error::{PairError, PairResult};
pub use pairing::{compute_best_working_pair, pair_projects_from_csv, AssignmentRecord, DisplayRow};
