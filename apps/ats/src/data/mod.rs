//! Data scorer: grades the structured résumé record.
//!
//! Seven checks worth 100 points in total run in a fixed order over a
//! [`ResumeInput`]; their results are aggregated into a [`DataReport`].

pub mod contact;
pub mod history;
pub mod skills;
pub mod theme;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::AtsError;
use crate::models::report::DataReport;
use crate::models::resume::ResumeRecord;
use crate::scoring::aggregate::{reported_issues, tally};
use crate::scoring::rating::{data_summary, rating_for};
use crate::scoring::{run_checks, CheckDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreOptions {
    /// Theme identifier the résumé will be rendered with, e.g. `jsonresume-theme-even`.
    pub theme: Option<String>,
}

impl ScoreOptions {
    pub fn with_theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: config.default_theme.clone(),
        }
    }
}

/// Everything a data check may read.
#[derive(Debug, Clone, Copy)]
pub struct ResumeInput<'a> {
    pub resume: &'a ResumeRecord,
    pub theme: Option<&'a str>,
}

impl<'a> ResumeInput<'a> {
    pub fn new(resume: &'a ResumeRecord, options: &'a ScoreOptions) -> Self {
        Self {
            resume,
            theme: options.theme.as_deref(),
        }
    }
}

/// Ordered registry of data checks.
pub fn data_checks<'a>() -> [CheckDescriptor<ResumeInput<'a>>; 7] {
    [
        CheckDescriptor {
            name: contact::NAME,
            max_score: contact::MAX_SCORE,
            run: contact::check_contact_info,
        },
        CheckDescriptor {
            name: history::WORK_NAME,
            max_score: history::WORK_MAX_SCORE,
            run: history::check_work_experience,
        },
        CheckDescriptor {
            name: history::EDUCATION_NAME,
            max_score: history::EDUCATION_MAX_SCORE,
            run: history::check_education,
        },
        CheckDescriptor {
            name: skills::SKILLS_NAME,
            max_score: skills::SKILLS_MAX_SCORE,
            run: skills::check_skills,
        },
        CheckDescriptor {
            name: skills::CONTENT_NAME,
            max_score: skills::CONTENT_MAX_SCORE,
            run: skills::check_keywords_content,
        },
        CheckDescriptor {
            name: history::DATES_NAME,
            max_score: history::DATES_MAX_SCORE,
            run: history::check_date_formatting,
        },
        CheckDescriptor {
            name: theme::NAME,
            max_score: theme::MAX_SCORE,
            run: theme::check_theme_compatibility,
        },
    ]
}

pub fn evaluate_resume_data(resume: &ResumeRecord, options: &ScoreOptions) -> DataReport {
    let input = ResumeInput::new(resume, options);
    let checks = run_checks(&data_checks(), &input);

    let totals = tally(&checks);
    let score = totals.percentage;
    let rating = rating_for(score);
    let summary = data_summary(score, &checks);
    let recommendations = reported_issues(&checks);

    tracing::debug!(
        score,
        total_score = totals.total_score,
        max_score = totals.max_score,
        rating = %rating,
        "Resume data scored"
    );

    DataReport {
        score,
        rating,
        checks,
        recommendations,
        summary,
    }
}

/// Parses a JSON résumé and scores it. The top-level value must be an object;
/// anything else is a caller contract violation.
pub fn evaluate_resume_json(json: &str, options: &ScoreOptions) -> Result<DataReport, AtsError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_object() {
        let kind = json_kind(&value);
        tracing::warn!(kind, "Rejected resume JSON that is not an object");
        return Err(AtsError::NotAnObject(kind));
    }
    let resume: ResumeRecord = serde_json::from_value(value)?;
    Ok(evaluate_resume_data(&resume, options))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
