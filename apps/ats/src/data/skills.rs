//! Skills inventory and keyword/content density checks.

use crate::data::ResumeInput;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::models::resume::ResumeRecord;
use crate::validation::{char_len, is_present, join_text, word_count};

pub const SKILLS_NAME: &str = "Skills";
pub const SKILLS_MAX_SCORE: u32 = 15;

pub const CONTENT_NAME: &str = "Keywords & Content";
pub const CONTENT_MAX_SCORE: u32 = 15;

const MIN_SKILL_CATEGORIES: usize = 3;
const TARGET_SKILL_KEYWORDS: usize = 10;
const TARGET_SUMMARY_CHARS: usize = 50;
const TARGET_HIGHLIGHTS: usize = 5;
const TARGET_WORDS: usize = 200;

const FULL_CREDIT: u32 = 5;
const PARTIAL_CREDIT: u32 = 2;

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

pub fn check_skills(input: &ResumeInput<'_>) -> CheckResult {
    let skills = input.resume.skills();
    let mut score = 0;
    let mut issues = Vec::new();

    if skills.is_empty() {
        issues.push(
            Issue::new(Severity::Warning, "skills", "No skills section found")
                .with_fix("Add a skills section grouped by category with specific keywords"),
        );
    } else {
        score += FULL_CREDIT;
    }

    let categories = skills.len();
    if categories >= MIN_SKILL_CATEGORIES {
        score += FULL_CREDIT;
    } else if categories > 0 {
        issues.push(
            Issue::new(
                Severity::Info,
                "skills",
                format!("Only {categories} skill categories listed"),
            )
            .with_fix(format!(
                "Group skills into at least {MIN_SKILL_CATEGORIES} categories (e.g. languages, frameworks, tools)"
            )),
        );
    }

    let keyword_total: usize = skills.iter().map(|s| s.keywords().len()).sum();
    if keyword_total >= TARGET_SKILL_KEYWORDS {
        score += FULL_CREDIT;
    } else if keyword_total > 0 {
        score += PARTIAL_CREDIT;
        issues.push(
            Issue::new(
                Severity::Info,
                "skills",
                format!("Only {keyword_total} skill keywords listed"),
            )
            .with_fix(format!(
                "List at least {TARGET_SKILL_KEYWORDS} specific keywords that match job descriptions"
            )),
        );
    } else if !skills.is_empty() {
        issues.push(
            Issue::new(Severity::Info, "skills", "Skill categories have no keywords")
                .with_fix("Add concrete keywords (technologies, tools, methods) to each category"),
        );
    }

    let passed = score as f64 >= SKILLS_MAX_SCORE as f64 * 0.7;
    CheckResult::new(SKILLS_NAME, score, SKILLS_MAX_SCORE, passed, issues)
}

// ────────────────────────────────────────────────────────────────────────────
// Keywords & content
// ────────────────────────────────────────────────────────────────────────────

/// Rewards a substantive summary, quantified highlights and overall text volume.
pub fn check_keywords_content(input: &ResumeInput<'_>) -> CheckResult {
    let resume = input.resume;
    let mut score = 0;
    let mut issues = Vec::new();

    let summary_len = char_len(resume.basics().and_then(|b| b.summary.as_deref()));
    if summary_len >= TARGET_SUMMARY_CHARS {
        score += FULL_CREDIT;
    } else if summary_len > 0 {
        score += PARTIAL_CREDIT;
        issues.push(
            Issue::new(
                Severity::Info,
                "content",
                format!("Professional summary is short ({summary_len} characters)"),
            )
            .with_fix(format!(
                "Expand the summary to at least {TARGET_SUMMARY_CHARS} characters with role keywords"
            )),
        );
    } else {
        issues.push(
            Issue::new(Severity::Warning, "content", "Missing professional summary")
                .with_fix("Add a 2-3 sentence summary highlighting your key qualifications"),
        );
    }

    let highlights = resume
        .work()
        .iter()
        .flat_map(|w| w.highlights())
        .filter(|h| is_present(Some(h.as_str())))
        .count();
    if highlights >= TARGET_HIGHLIGHTS {
        score += FULL_CREDIT;
    } else if highlights > 0 {
        score += PARTIAL_CREDIT;
        issues.push(
            Issue::new(
                Severity::Info,
                "content",
                format!("Only {highlights} achievement highlights across all positions"),
            )
            .with_fix("Add more bullet points describing measurable achievements"),
        );
    }

    let words = word_count(&resume_text(resume));
    if words >= TARGET_WORDS {
        score += FULL_CREDIT;
    } else {
        issues.push(
            Issue::new(
                Severity::Info,
                "content",
                format!("Resume content is thin ({words} words)"),
            )
            .with_fix(format!(
                "Aim for at least {TARGET_WORDS} words so ATS keyword matching has material"
            )),
        );
    }

    let passed = score as f64 >= CONTENT_MAX_SCORE as f64 * 0.6;
    CheckResult::new(CONTENT_NAME, score, CONTENT_MAX_SCORE, passed, issues)
}

/// All free text an ATS would index: summary, label, work, education and skills.
pub fn resume_text(resume: &ResumeRecord) -> String {
    let mut parts: Vec<Option<&str>> = Vec::new();

    if let Some(basics) = resume.basics() {
        parts.push(basics.summary.as_deref());
        parts.push(basics.label.as_deref());
    }
    for work in resume.work() {
        parts.push(work.name.as_deref());
        parts.push(work.position.as_deref());
        parts.push(work.summary.as_deref());
        parts.extend(work.highlights().iter().map(|h| Some(h.as_str())));
    }
    for edu in resume.education() {
        parts.push(edu.institution.as_deref());
        parts.push(edu.area.as_deref());
        parts.push(edu.study_type.as_deref());
    }
    for skill in resume.skills() {
        parts.push(skill.name.as_deref());
        parts.extend(skill.keywords().iter().map(|k| Some(k.as_str())));
    }

    join_text(parts)
}
