//! ATS compatibility scoring for résumés.
//!
//! Two independent scorers share one result vocabulary:
//! - [`data::evaluate_resume_data`] grades the structured résumé record.
//! - [`markup::evaluate_markup`] grades the rendered HTML.
//!
//! Both are pure and synchronous; identical input always yields identical output.

pub mod config;
pub mod data;
pub mod errors;
pub mod markup;
pub mod models;
pub mod scoring;
pub mod telemetry;
pub mod validation;

pub use config::Config;
pub use data::{evaluate_resume_data, evaluate_resume_json, ScoreOptions};
pub use errors::AtsError;
pub use markup::{evaluate_document, evaluate_markup, HtmlDocument, MarkupQuery, MarkupValidator};
pub use models::report::{CheckResult, DataReport, Issue, MarkupReport, Severity};
pub use models::resume::ResumeRecord;
pub use scoring::recommendations::{recommendations_for, ScoredReport};
