use log::debug;

use super::types::{BestPair, EmployeeOverlaps, PairOverlap, PartnerTotal};
use crate::error::{PairError, PairResult};

/// Each employee's strongest partner, in employee enumeration order.
/// On equal totals the partner enumerated first wins.
pub fn best_partners(totals: &[EmployeeOverlaps]) -> Vec<PairOverlap> {
    totals
        .iter()
        .filter_map(|employee| {
            let mut best: Option<&PartnerTotal> = None;
            for partner in &employee.worked_with {
                if best.map_or(true, |b| partner.total_days_together > b.total_days_together) {
                    best = Some(partner);
                }
            }
            best.map(|partner| PairOverlap {
                employee_a: employee.employee_id.clone(),
                employee_b: partner.other_employee_id.clone(),
                total_days_together: partner.total_days_together,
            })
        })
        .collect()
}

/// The pair with the greatest total overlap
///
/// On equal totals the employee enumerated first wins. Fails with
/// [`PairError::NoPairFound`] when there are fewer than two employees or no
/// pair ever overlapped.
pub fn select_best_pair(totals: &[EmployeeOverlaps]) -> PairResult<BestPair> {
    let mut best: Option<PairOverlap> = None;
    for candidate in best_partners(totals) {
        if best
            .as_ref()
            .map_or(true, |b| candidate.total_days_together > b.total_days_together)
        {
            best = Some(candidate);
        }
    }

    match best {
        Some(pair) if pair.total_days_together > 0 => {
            debug!(
                "Best pair {} / {} with {} days together",
                pair.employee_a, pair.employee_b, pair.total_days_together
            );
            Ok(pair)
        }
        _ => Err(PairError::NoPairFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, partners: &[(&str, i64)]) -> EmployeeOverlaps {
        EmployeeOverlaps {
            employee_id: id.to_string(),
            worked_with: partners
                .iter()
                .map(|(other, days)| PartnerTotal {
                    other_employee_id: other.to_string(),
                    total_days_together: *days,
                })
                .collect(),
        }
    }

    #[test]
    fn picks_greatest_total() {
        let totals = vec![
            employee("1", &[("2", 4), ("3", 10)]),
            employee("2", &[("1", 4), ("3", 2)]),
            employee("3", &[("1", 10), ("2", 2)]),
        ];
        let best = select_best_pair(&totals).unwrap();
        assert_eq!((best.employee_a.as_str(), best.employee_b.as_str(), best.total_days_together), ("1", "3", 10));
    }

    #[test]
    fn ties_go_to_first_enumerated() {
        let totals = vec![
            employee("1", &[("2", 7), ("3", 7)]),
            employee("2", &[("1", 7), ("3", 0)]),
            employee("3", &[("1", 7), ("2", 0)]),
        ];
        let partners = best_partners(&totals);
        assert_eq!(partners[0].employee_b, "2");
        assert_eq!(partners[2].employee_b, "1");

        let best = select_best_pair(&totals).unwrap();
        assert_eq!((best.employee_a.as_str(), best.employee_b.as_str()), ("1", "2"));
    }

    #[test]
    fn all_zero_totals_is_no_pair() {
        let totals = vec![employee("1", &[("2", 0)]), employee("2", &[("1", 0)])];
        assert!(matches!(select_best_pair(&totals), Err(PairError::NoPairFound)));
    }

    #[test]
    fn single_employee_is_no_pair() {
        let totals = vec![employee("1", &[])];
        assert!(best_partners(&totals).is_empty());
        assert!(matches!(select_best_pair(&totals), Err(PairError::NoPairFound)));
        assert!(matches!(select_best_pair(&[]), Err(PairError::NoPairFound)));
    }
}
