//! Result envelope shared by both scorers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Superset of both check families' vocabularies.
///
/// Data checks report `critical/warning/info`; markup checks report
/// `error/warning/info`. Variants are declared most to least severe, so the
/// derived `Ord` sorts the most pressing issues first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: &str, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.to_string(),
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub passed: bool,
    pub issues: Vec<Issue>,
}

impl CheckResult {
    /// Builds a result, clamping `score` into `0..=max_score`.
    pub fn new(name: &str, score: u32, max_score: u32, passed: bool, issues: Vec<Issue>) -> Self {
        Self {
            name: name.to_string(),
            score: score.min(max_score),
            max_score,
            passed,
            issues,
        }
    }

    /// Issues grouped by severity, most severe first, original order kept within a group.
    pub fn issues_by_severity(&self) -> BTreeMap<Severity, Vec<&Issue>> {
        let mut groups: BTreeMap<Severity, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            groups.entry(issue.severity).or_default().push(issue);
        }
        groups
    }
}

/// Per-severity issue tally across a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn tally<'a>(issues: impl IntoIterator<Item = &'a Issue>) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Error => counts.error += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.critical + self.error + self.warning + self.info
    }
}

/// Word rating shared by both scorers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
            Rating::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Letter grade reported by the markup validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtsCompatibility {
    Poor,
    Fair,
    Good,
    Excellent,
}

/// Aggregate result of the data scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataReport {
    pub score: u32,
    pub rating: Rating,
    pub checks: Vec<CheckResult>,
    pub recommendations: Vec<Issue>,
    pub summary: String,
}

/// Aggregate result of the markup validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkupReport {
    pub score: u32,
    pub rating: Rating,
    pub grade: Grade,
    pub total_score: u32,
    pub max_score: u32,
    pub passed: usize,
    pub failed: usize,
    pub ats_compatibility: AtsCompatibility,
    pub checks: Vec<CheckResult>,
    pub recommendations: Vec<Issue>,
    pub summary: String,
}

impl DataReport {
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::tally(&self.recommendations)
    }
}

impl MarkupReport {
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::tally(&self.recommendations)
    }
}
