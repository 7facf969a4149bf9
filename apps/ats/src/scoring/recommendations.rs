//! Human-readable recommendation lines for either report type.

use crate::models::report::{CheckResult, DataReport, MarkupReport, Severity};

/// What the recommendation export needs from a report.
pub trait ScoredReport {
    fn score(&self) -> u32;
    fn checks(&self) -> &[CheckResult];
}

impl ScoredReport for DataReport {
    fn score(&self) -> u32 {
        self.score
    }

    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
}

impl ScoredReport for MarkupReport {
    fn score(&self) -> u32 {
        self.score
    }

    fn checks(&self) -> &[CheckResult] {
        &self.checks
    }
}

/// Flat, ordered advice lines for a report.
///
/// The "critical errors" line counts `Severity::Error` issues only, which the
/// markup checks emit. Data checks report blockers as `Severity::Critical`, so
/// a [`DataReport`] never produces that line.
pub fn recommendations_for<R: ScoredReport + ?Sized>(report: &R) -> Vec<String> {
    let score = report.score();
    let checks = report.checks();
    let mut lines = Vec::new();

    if score < 60 {
        lines.push(format!(
            "Warning: ATS compatibility is low ({score}/100). Address the failed checks below before submitting."
        ));
    }

    for check in checks.iter().filter(|c| !c.passed) {
        lines.push(format!(
            "Improve {}: scored {}/{}.",
            check.name, check.score, check.max_score
        ));
    }

    let errors = checks
        .iter()
        .flat_map(|c| &c.issues)
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        let noun = if errors == 1 { "error" } else { "errors" };
        lines.push(format!("Fix {errors} critical {noun} that may block ATS parsing."));
    }

    if score >= 80 {
        lines.push("Great job! Your resume is well-structured for ATS systems.".to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{Issue, Rating};

    fn report(score: u32, checks: Vec<CheckResult>) -> DataReport {
        DataReport {
            score,
            rating: Rating::Fair,
            checks,
            recommendations: vec![],
            summary: String::new(),
        }
    }

    #[test]
    fn test_low_score_gets_warning_line_first() {
        let lines = recommendations_for(&report(40, vec![]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Warning"));
    }

    #[test]
    fn test_failed_checks_listed_with_scores() {
        let checks = vec![
            CheckResult::new("Skills", 7, 15, false, vec![]),
            CheckResult::new("Education", 15, 15, true, vec![]),
        ];
        let lines = recommendations_for(&report(70, checks));
        assert_eq!(lines, vec!["Improve Skills: scored 7/15.".to_string()]);
    }

    #[test]
    fn test_error_issues_counted() {
        let checks = vec![CheckResult::new(
            "No Table Layouts",
            0,
            15,
            false,
            vec![
                Issue::new(Severity::Error, "layout", "Tables detected"),
                Issue::new(Severity::Error, "layout", "Layout table"),
                Issue::new(Severity::Critical, "contact", "not an error"),
            ],
        )];
        let lines = recommendations_for(&report(70, checks));
        assert!(lines.contains(&"Fix 2 critical errors that may block ATS parsing.".to_string()));
    }

    #[test]
    fn test_critical_issues_do_not_count_as_errors() {
        let checks = vec![CheckResult::new(
            "Contact Information",
            0,
            20,
            false,
            vec![
                Issue::new(Severity::Critical, "contact", "Missing full name"),
                Issue::new(Severity::Critical, "contact", "Missing email address"),
            ],
        )];
        let lines = recommendations_for(&report(70, checks));
        assert_eq!(lines, vec!["Improve Contact Information: scored 0/20.".to_string()]);
    }

    #[test]
    fn test_high_score_gets_closing_line() {
        let lines = recommendations_for(&report(85, vec![]));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Great job"));
    }

    #[test]
    fn test_middle_score_with_clean_checks_is_empty() {
        assert!(recommendations_for(&report(70, vec![])).is_empty());
    }
}
