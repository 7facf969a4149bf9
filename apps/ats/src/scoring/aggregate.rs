//! Aggregation math shared by the data scorer and the markup validator.
//!
//! The two scorers flatten issues into recommendations with different
//! predicates: the data scorer only visits checks that reported issues, the
//! markup validator visits every check. The outputs coincide, but both
//! functions are kept so each scorer's behavior stays independently owned.

use crate::models::report::{CheckResult, Issue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_score: u32,
    pub max_score: u32,
    /// `round(100 * total_score / max_score)`, 0 when nothing was scorable.
    pub percentage: u32,
}

pub fn tally(checks: &[CheckResult]) -> Totals {
    let total_score: u32 = checks.iter().map(|c| c.score).sum();
    let max_score: u32 = checks.iter().map(|c| c.max_score).sum();
    Totals {
        total_score,
        max_score,
        percentage: percentage(total_score, max_score),
    }
}

pub fn percentage(total_score: u32, max_score: u32) -> u32 {
    if max_score == 0 {
        return 0;
    }
    ((total_score as f64 / max_score as f64) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u32
}

/// Data scorer flattening: issues of checks that reported any, in check order.
pub fn reported_issues(checks: &[CheckResult]) -> Vec<Issue> {
    checks
        .iter()
        .filter(|c| !c.issues.is_empty())
        .flat_map(|c| c.issues.iter().cloned())
        .collect()
}

/// Markup validator flattening: issues of every check, in check order.
pub fn all_issues(checks: &[CheckResult]) -> Vec<Issue> {
    checks.iter().flat_map(|c| c.issues.iter().cloned()).collect()
}

/// `(passed, failed)` counts by each check's own verdict.
pub fn pass_fail_counts(checks: &[CheckResult]) -> (usize, usize) {
    let passed = checks.iter().filter(|c| c.passed).count();
    (passed, checks.len() - passed)
}

/// Names of failed checks, in check order.
pub fn failed_check_names(checks: &[CheckResult]) -> Vec<&str> {
    checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::Severity;

    fn check(name: &str, score: u32, max: u32, passed: bool, issues: &[&str]) -> CheckResult {
        CheckResult::new(
            name,
            score,
            max,
            passed,
            issues
                .iter()
                .map(|m| Issue::new(Severity::Warning, "test", *m))
                .collect(),
        )
    }

    #[test]
    fn test_tally_sums_and_rounds() {
        let checks = vec![check("a", 13, 20, false, &[]), check("b", 10, 10, true, &[])];
        let totals = tally(&checks);
        assert_eq!(totals.total_score, 23);
        assert_eq!(totals.max_score, 30);
        // 76.67 rounds up
        assert_eq!(totals.percentage, 77);
    }

    #[test]
    fn test_percentage_half_rounds_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(0, 100), 0);
        assert_eq!(percentage(100, 100), 100);
    }

    #[test]
    fn test_percentage_of_empty_is_zero() {
        assert_eq!(tally(&[]).percentage, 0);
    }

    #[test]
    fn test_issue_flattening_keeps_order() {
        let checks = vec![
            check("a", 0, 5, false, &["a1", "a2"]),
            check("b", 5, 5, true, &[]),
            check("c", 0, 5, false, &["c1"]),
        ];
        let messages = |issues: Vec<Issue>| -> Vec<String> {
            issues.into_iter().map(|i| i.message).collect()
        };
        assert_eq!(messages(reported_issues(&checks)), vec!["a1", "a2", "c1"]);
        assert_eq!(messages(all_issues(&checks)), vec!["a1", "a2", "c1"]);
    }

    #[test]
    fn test_pass_fail_counts_and_names() {
        let checks = vec![
            check("a", 0, 5, false, &[]),
            check("b", 5, 5, true, &[]),
            check("c", 0, 5, false, &[]),
        ];
        assert_eq!(pass_fail_counts(&checks), (1, 2));
        assert_eq!(failed_check_names(&checks), vec!["a", "c"]);
    }
}
