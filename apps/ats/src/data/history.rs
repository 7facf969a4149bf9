//! Work, education and date checks: everything read from the résumé's timeline sections.

use crate::data::ResumeInput;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::models::resume::{EducationEntry, WorkEntry};
use crate::scoring::deduct;
use crate::validation::{is_iso_date, is_present};

pub const WORK_NAME: &str = "Work Experience";
pub const WORK_MAX_SCORE: u32 = 20;

pub const EDUCATION_NAME: &str = "Education";
pub const EDUCATION_MAX_SCORE: u32 = 15;

pub const DATES_NAME: &str = "Date Formatting";
pub const DATES_MAX_SCORE: u32 = 10;

const SECTION_PRESENT_POINTS: u32 = 5;
const WORK_FIELD_POINTS: u32 = 3;
const EDUCATION_FIELD_POINTS: u32 = 5;
const MISSING_WORK_START_PENALTY: u32 = 2;
const MISSING_EDUCATION_DATES_PENALTY: u32 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Work experience
// ────────────────────────────────────────────────────────────────────────────

/// +5 for having any work history, then +3 per present field per entry.
/// The sum (not each entry) is capped at the budget.
pub fn check_work_experience(input: &ResumeInput<'_>) -> CheckResult {
    let work = input.resume.work();
    let mut score = 0;
    let mut issues = Vec::new();

    if work.is_empty() {
        issues.push(
            Issue::new(Severity::Critical, "experience", "No work experience listed")
                .with_fix("Add your work history with company, position, dates and achievements"),
        );
    } else {
        score += SECTION_PRESENT_POINTS;
    }

    for (index, entry) in work.iter().enumerate() {
        let missing = missing_work_fields(entry);
        score += (4 - missing.len() as u32) * WORK_FIELD_POINTS;

        if !missing.is_empty() {
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "experience",
                    format!("{} is missing: {}", work_label(entry, index), missing.join(", ")),
                )
                .with_fix("Complete every work entry so ATS can parse your history"),
            );
        }
    }

    let score = score.min(WORK_MAX_SCORE);
    let passed = score as f64 >= WORK_MAX_SCORE as f64 * 0.8;
    CheckResult::new(WORK_NAME, score, WORK_MAX_SCORE, passed, issues)
}

fn missing_work_fields(entry: &WorkEntry) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !is_present(entry.name.as_deref()) {
        missing.push("company name");
    }
    if !is_present(entry.position.as_deref()) {
        missing.push("position");
    }
    if !is_present(entry.start_date.as_deref()) {
        missing.push("start date");
    }
    let has_highlights = entry.highlights().iter().any(|h| is_present(Some(h.as_str())));
    if !is_present(entry.summary.as_deref()) && !has_highlights {
        missing.push("summary or highlights");
    }
    missing
}

fn work_label(entry: &WorkEntry, index: usize) -> String {
    match entry.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Work entry '{name}'"),
        None => format!("Work entry #{}", index + 1),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

/// +5 for any education, +5 per institution and +5 per degree/area, capped at 15.
pub fn check_education(input: &ResumeInput<'_>) -> CheckResult {
    let education = input.resume.education();
    let mut score = 0;
    let mut issues = Vec::new();

    if education.is_empty() {
        issues.push(
            Issue::new(Severity::Info, "education", "No education listed")
                .with_fix("Add degrees, certifications or relevant training"),
        );
    } else {
        score += SECTION_PRESENT_POINTS;
    }

    for (index, entry) in education.iter().enumerate() {
        let mut missing = Vec::new();
        if is_present(entry.institution.as_deref()) {
            score += EDUCATION_FIELD_POINTS;
        } else {
            missing.push("institution");
        }
        if is_present(entry.study_type.as_deref()) || is_present(entry.area.as_deref()) {
            score += EDUCATION_FIELD_POINTS;
        } else {
            missing.push("degree or field of study");
        }

        if !missing.is_empty() {
            issues.push(Issue::new(
                Severity::Info,
                "education",
                format!("{} is missing: {}", education_label(entry, index), missing.join(", ")),
            ));
        }
    }

    let score = score.min(EDUCATION_MAX_SCORE);
    let passed = score as f64 >= EDUCATION_MAX_SCORE as f64 * 0.6;
    CheckResult::new(EDUCATION_NAME, score, EDUCATION_MAX_SCORE, passed, issues)
}

fn education_label(entry: &EducationEntry, index: usize) -> String {
    match entry.institution.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Education entry '{name}'"),
        None => format!("Education entry #{}", index + 1),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

/// Starts at 10: −2 per work entry without a start date, −1 per education entry
/// with neither date. Non-ISO dates are reported but cost nothing.
pub fn check_date_formatting(input: &ResumeInput<'_>) -> CheckResult {
    let mut score = DATES_MAX_SCORE;
    let mut issues = Vec::new();

    for (index, entry) in input.resume.work().iter().enumerate() {
        if !is_present(entry.start_date.as_deref()) {
            deduct(&mut score, MISSING_WORK_START_PENALTY);
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "dates",
                    format!("{} has no start date", work_label(entry, index)),
                )
                .with_fix("Add a start date in YYYY-MM format"),
            );
        }
        report_non_iso(
            &mut issues,
            &work_label(entry, index),
            &[&entry.start_date, &entry.end_date],
        );
    }

    for (index, entry) in input.resume.education().iter().enumerate() {
        if !is_present(entry.start_date.as_deref()) && !is_present(entry.end_date.as_deref()) {
            deduct(&mut score, MISSING_EDUCATION_DATES_PENALTY);
            issues.push(
                Issue::new(
                    Severity::Info,
                    "dates",
                    format!("{} has no dates", education_label(entry, index)),
                )
                .with_fix("Add at least a graduation date"),
            );
        }
        report_non_iso(
            &mut issues,
            &education_label(entry, index),
            &[&entry.start_date, &entry.end_date],
        );
    }

    let passed = score as f64 >= DATES_MAX_SCORE as f64 * 0.8;
    CheckResult::new(DATES_NAME, score, DATES_MAX_SCORE, passed, issues)
}

/// Open-ended markers JSON Resume exports commonly put in `endDate`.
const ONGOING_MARKERS: &[&str] = &["present", "current", "now"];

fn report_non_iso(issues: &mut Vec<Issue>, label: &str, dates: &[&Option<String>]) {
    for date in dates.iter().filter_map(|d| d.as_deref()) {
        let ongoing = ONGOING_MARKERS
            .iter()
            .any(|m| date.trim().eq_ignore_ascii_case(m));
        if is_present(Some(date)) && !ongoing && !is_iso_date(date) {
            issues.push(
                Issue::new(
                    Severity::Info,
                    "dates",
                    format!("{label} uses a non-standard date '{}'", date.trim()),
                )
                .with_fix("Use YYYY-MM-DD, YYYY-MM or YYYY so ATS can compute tenure"),
            );
        }
    }
}
