//! Markup validator: grades the rendered HTML of a résumé.
//!
//! Eight checks worth 100 points in total run over any [`MarkupQuery`]. The
//! result carries a letter grade, a compatibility bucket and pass/fail counts
//! on top of the shared score and rating.

pub mod accessibility;
pub mod document;
pub mod structure;
pub mod typography;

pub use document::{Element, HtmlDocument, MarkupQuery};

use crate::config::{Config, DEFAULT_MAX_MARKUP_BYTES};
use crate::errors::AtsError;
use crate::models::report::MarkupReport;
use crate::scoring::aggregate::{all_issues, pass_fail_counts, tally};
use crate::scoring::rating::{compatibility_for, grade_for, markup_summary, rating_for};
use crate::scoring::{run_checks, CheckDescriptor};

/// Ordered registry of markup checks, instantiated for a document type.
pub fn markup_checks<Q: MarkupQuery + ?Sized>() -> [CheckDescriptor<Q>; 8] {
    [
        CheckDescriptor {
            name: structure::SEMANTIC_NAME,
            max_score: structure::SEMANTIC_MAX_SCORE,
            run: structure::check_semantic_html,
        },
        CheckDescriptor {
            name: typography::FONTS_NAME,
            max_score: typography::FONTS_MAX_SCORE,
            run: typography::check_fonts,
        },
        CheckDescriptor {
            name: structure::TABLES_NAME,
            max_score: structure::TABLES_MAX_SCORE,
            run: structure::check_table_layouts,
        },
        CheckDescriptor {
            name: structure::COLUMNS_NAME,
            max_score: structure::COLUMNS_MAX_SCORE,
            run: structure::check_single_column,
        },
        CheckDescriptor {
            name: structure::HEADINGS_NAME,
            max_score: structure::HEADINGS_MAX_SCORE,
            run: structure::check_heading_structure,
        },
        CheckDescriptor {
            name: accessibility::IMAGES_NAME,
            max_score: accessibility::IMAGES_MAX_SCORE,
            run: accessibility::check_images,
        },
        CheckDescriptor {
            name: typography::FONT_SIZES_NAME,
            max_score: typography::FONT_SIZES_MAX_SCORE,
            run: typography::check_font_sizes,
        },
        CheckDescriptor {
            name: accessibility::ACCESSIBILITY_NAME,
            max_score: accessibility::ACCESSIBILITY_MAX_SCORE,
            run: accessibility::check_accessibility,
        },
    ]
}

/// Runs every markup check against an already-parsed document.
pub fn evaluate_document<Q: MarkupQuery + ?Sized>(doc: &Q) -> MarkupReport {
    let checks = run_checks(&markup_checks::<Q>(), doc);

    let totals = tally(&checks);
    let score = totals.percentage;
    let grade = grade_for(score);
    let (passed, failed) = pass_fail_counts(&checks);
    let summary = markup_summary(score, grade, &checks);
    let recommendations = all_issues(&checks);

    tracing::debug!(
        score,
        grade = ?grade,
        passed,
        failed,
        "Markup scored"
    );

    MarkupReport {
        score,
        rating: rating_for(score),
        grade,
        total_score: totals.total_score,
        max_score: totals.max_score,
        passed,
        failed,
        ats_compatibility: compatibility_for(score),
        checks,
        recommendations,
        summary,
    }
}

/// Parses and validates HTML with the default size limit.
pub fn evaluate_markup(html: &str) -> Result<MarkupReport, AtsError> {
    MarkupValidator::default().validate(html)
}

/// Markup validator with an input size ceiling applied before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupValidator {
    max_markup_bytes: usize,
}

impl Default for MarkupValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MARKUP_BYTES)
    }
}

impl MarkupValidator {
    pub fn new(max_markup_bytes: usize) -> Self {
        Self { max_markup_bytes }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_markup_bytes)
    }

    pub fn validate(&self, html: &str) -> Result<MarkupReport, AtsError> {
        if html.len() > self.max_markup_bytes {
            tracing::warn!(
                bytes = html.len(),
                limit = self.max_markup_bytes,
                "Rejected oversized markup"
            );
            return Err(AtsError::MarkupTooLarge {
                actual: html.len(),
                limit: self.max_markup_bytes,
            });
        }
        let doc = HtmlDocument::parse(html);
        Ok(evaluate_document(&doc))
    }
}
