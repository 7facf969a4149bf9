//! Threshold tables mapping a 0–100 score to labels, plus summary sentences.
//! All lower bounds are inclusive.

use crate::models::report::{AtsCompatibility, CheckResult, Grade, Rating};
use crate::scoring::aggregate::failed_check_names;

pub fn rating_for(score: u32) -> Rating {
    match score {
        s if s >= 90 => Rating::Excellent,
        s if s >= 75 => Rating::Good,
        s if s >= 60 => Rating::Fair,
        s if s >= 40 => Rating::Poor,
        _ => Rating::NeedsImprovement,
    }
}

pub fn grade_for(score: u32) -> Grade {
    match score {
        s if s >= 90 => Grade::A,
        s if s >= 80 => Grade::B,
        s if s >= 70 => Grade::C,
        s if s >= 60 => Grade::D,
        _ => Grade::F,
    }
}

pub fn compatibility_for(score: u32) -> AtsCompatibility {
    match score {
        s if s >= 80 => AtsCompatibility::Excellent,
        s if s >= 60 => AtsCompatibility::Good,
        s if s >= 40 => AtsCompatibility::Fair,
        _ => AtsCompatibility::Poor,
    }
}

/// Narrative sentence for the data scorer.
pub fn data_summary(score: u32, checks: &[CheckResult]) -> String {
    let failed = failed_check_names(checks);

    if score >= 90 {
        "Excellent! Your resume is highly optimized for Applicant Tracking Systems.".to_string()
    } else if score >= 75 {
        "Your resume is well-optimized for ATS. A few minor improvements could make it even stronger."
            .to_string()
    } else if score >= 60 {
        if failed.is_empty() {
            "Your resume is ATS-compatible but has room for improvement.".to_string()
        } else {
            format!(
                "Your resume is ATS-compatible but could be improved in: {}.",
                failed.join(", ")
            )
        }
    } else {
        let priority: Vec<&str> = failed.into_iter().take(3).collect();
        if priority.is_empty() {
            "Your resume needs significant work to be ATS-friendly.".to_string()
        } else {
            format!(
                "Your resume needs significant work to be ATS-friendly. Priority areas: {}.",
                priority.join(", ")
            )
        }
    }
}

/// Narrative sentence for the markup validator.
pub fn markup_summary(score: u32, grade: Grade, checks: &[CheckResult]) -> String {
    let failed = failed_check_names(checks);
    let passed = checks.len() - failed.len();
    let head = format!(
        "Rendered HTML scored {score}/100 (grade {grade:?}); {passed} of {} checks passed.",
        checks.len()
    );
    if failed.is_empty() {
        head
    } else {
        format!("{head} Review: {}.", failed.join(", "))
    }
}
