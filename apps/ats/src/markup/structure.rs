//! Document structure checks: semantic landmarks, tables, column layout and headings.

use std::sync::OnceLock;

use regex::Regex;

use crate::markup::document::HEADING_TAGS;
use crate::markup::MarkupQuery;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::scoring::deduct;
use crate::validation::static_regex;

pub const SEMANTIC_NAME: &str = "Semantic HTML";
pub const SEMANTIC_MAX_SCORE: u32 = 10;

pub const TABLES_NAME: &str = "No Table Layouts";
pub const TABLES_MAX_SCORE: u32 = 15;

pub const COLUMNS_NAME: &str = "Single-Column Layout";
pub const COLUMNS_MAX_SCORE: u32 = 15;

pub const HEADINGS_NAME: &str = "Heading Structure";
pub const HEADINGS_MAX_SCORE: u32 = 10;

/// A table with more cells than this is treated as layout scaffolding.
const LAYOUT_TABLE_CELLS: usize = 3;
const MAX_FLOATS: usize = 2;
const MIN_HEADINGS: usize = 3;
const MIN_HEADING_CHARS: usize = 3;

static COLUMNS_RE: OnceLock<Option<Regex>> = OnceLock::new();
static FLOAT_RE: OnceLock<Option<Regex>> = OnceLock::new();
static GRID_COLUMNS_RE: OnceLock<Option<Regex>> = OnceLock::new();
static SPACE_BETWEEN_RE: OnceLock<Option<Regex>> = OnceLock::new();

// ────────────────────────────────────────────────────────────────────────────
// Semantic HTML
// ────────────────────────────────────────────────────────────────────────────

pub fn check_semantic_html<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let mut score = SEMANTIC_MAX_SCORE;
    let mut issues = Vec::new();

    if !doc.exists("header") {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(Severity::Warning, "structure", "No <header> element found")
                .with_fix("Wrap the name and contact block in a <header>"),
        );
    }

    if !doc.exists("section") {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(Severity::Warning, "structure", "No <section> elements found")
                .with_fix("Wrap each resume section (experience, education, skills) in a <section>"),
        );
    }

    match doc.count("h1") {
        0 => {
            deduct(&mut score, 3);
            issues.push(
                Issue::new(Severity::Error, "structure", "No <h1> heading found")
                    .with_fix("Use exactly one <h1> for the candidate's name"),
            );
        }
        1 => {}
        n => {
            deduct(&mut score, 2);
            issues.push(
                Issue::new(Severity::Warning, "structure", format!("Found {n} <h1> headings"))
                    .with_fix("Keep a single <h1> and demote the rest to <h2>"),
            );
        }
    }

    let levels: Vec<u8> = doc
        .elements(HEADING_TAGS)
        .iter()
        .filter_map(|h| h.heading_level())
        .collect();
    if let Some(pair) = levels.windows(2).find(|pair| pair[1] > pair[0] + 1) {
        deduct(&mut score, 1);
        issues.push(
            Issue::new(
                Severity::Info,
                "structure",
                format!("Heading level jumps from h{} to h{}", pair[0], pair[1]),
            )
            .with_fix("Do not skip heading levels"),
        );
    }

    CheckResult::new(SEMANTIC_NAME, score, SEMANTIC_MAX_SCORE, score >= 7, issues)
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

pub fn check_table_layouts<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let mut score = TABLES_MAX_SCORE;
    let mut issues = Vec::new();

    let tables = doc.count("table");
    if tables > 0 {
        deduct(&mut score, 10);
        issues.push(
            Issue::new(
                Severity::Error,
                "layout",
                format!("Found {tables} table(s); many ATS read tables out of order or skip them"),
            )
            .with_fix("Replace tables with plain headings, paragraphs and lists"),
        );

        let layout_tables = doc
            .descendant_counts("table", "td")
            .into_iter()
            .filter(|&cells| cells > LAYOUT_TABLE_CELLS)
            .count();
        if layout_tables > 0 {
            deduct(&mut score, 5);
            issues.push(
                Issue::new(
                    Severity::Error,
                    "layout",
                    "Tables appear to be used for page layout",
                )
                .with_fix("Lay out content with block elements and CSS, not table cells"),
            );
        }
    }

    CheckResult::new(TABLES_NAME, score, TABLES_MAX_SCORE, score >= 13, issues)
}

// ────────────────────────────────────────────────────────────────────────────
// Single-column layout
// ────────────────────────────────────────────────────────────────────────────

pub fn check_single_column<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let style = doc.style_text().to_lowercase();
    let mut score = COLUMNS_MAX_SCORE;
    let mut issues = Vec::new();

    // `columns:` or a vendor-prefixed `-webkit-columns:`, never the tail of `grid-template-columns:`
    let columns_property = static_regex(&COLUMNS_RE, r"(?:^|[\s;{])(?:-[a-z]+-)?columns\s*:")
        .is_some_and(|re| re.is_match(&style));
    let multi_column = style.contains("column-count") || columns_property;
    if multi_column {
        deduct(&mut score, 5);
        issues.push(
            Issue::new(Severity::Warning, "layout", "CSS multi-column layout detected")
                .with_fix("Use a single column; ATS read multi-column text straight across the page"),
        );
    }

    let floats = static_regex(&FLOAT_RE, r"float\s*:\s*(?:left|right)")
        .map(|re| re.find_iter(&style).count())
        .unwrap_or(0);
    if floats > MAX_FLOATS {
        deduct(&mut score, 3);
        issues.push(
            Issue::new(
                Severity::Warning,
                "layout",
                format!("{floats} floated elements suggest a side-by-side layout"),
            )
            .with_fix("Stack content vertically instead of floating blocks"),
        );
    }

    let grid_columns = static_regex(&GRID_COLUMNS_RE, r"grid-template-columns\s*:\s*([^;}\n]+)");
    let multi_track_grid = grid_columns
        .map(|re| {
            re.captures_iter(&style)
                .filter_map(|cap| cap.get(1))
                .any(|value| grid_track_count(value.as_str()) > 1)
        })
        .unwrap_or(false);
    if multi_track_grid {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(Severity::Info, "layout", "Grid layout defines multiple columns")
                .with_fix("Use a single grid column for the main content"),
        );
    }

    let space_between = static_regex(&SPACE_BETWEEN_RE, r"justify-content\s*:\s*space-between")
        .is_some_and(|re| re.is_match(&style));
    if style.contains("flex-wrap") && space_between {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(
                Severity::Info,
                "layout",
                "Wrapping flex rows with space-between may render as columns",
            )
            .with_fix("Keep flex rows to short inline items such as contact details"),
        );
    }

    CheckResult::new(COLUMNS_NAME, score, COLUMNS_MAX_SCORE, score >= 12, issues)
}

/// Number of column tracks in a `grid-template-columns` value.
///
/// Line names (`[name]`) are ignored; `repeat(n, ...)` expands to `n` times its
/// track list, and `auto-fill`/`auto-fit` repeats count as multiple tracks.
pub fn grid_track_count(value: &str) -> usize {
    split_top_level(value.trim())
        .into_iter()
        .filter(|token| !token.starts_with('['))
        .map(|token| match token.strip_prefix("repeat(") {
            Some(rest) => repeat_track_count(rest.strip_suffix(')').unwrap_or(rest)),
            None if token == "none" => 0,
            None => 1,
        })
        .sum()
}

fn repeat_track_count(args: &str) -> usize {
    let Some((times, tracks)) = args.split_once(',') else {
        return 1;
    };
    let inner = grid_track_count(tracks).max(1);
    match times.trim().parse::<usize>() {
        Ok(n) => n * inner,
        // auto-fill / auto-fit
        Err(_) => 2 * inner,
    }
}

/// Splits on whitespace outside parentheses and brackets.
fn split_top_level(value: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (i, c) in value.char_indices() {
        match c {
            '(' | '[' => {
                depth += 1;
                start.get_or_insert(i);
            }
            ')' | ']' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&value[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&value[s..]);
    }
    tokens
}

// ────────────────────────────────────────────────────────────────────────────
// Headings
// ────────────────────────────────────────────────────────────────────────────

pub fn check_heading_structure<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let headings = doc.elements(HEADING_TAGS);
    let mut score = HEADINGS_MAX_SCORE;
    let mut issues = Vec::new();

    if headings.len() < MIN_HEADINGS {
        deduct(&mut score, 4);
        issues.push(
            Issue::new(
                Severity::Warning,
                "headings",
                format!("Only {} heading(s) found", headings.len()),
            )
            .with_fix("Give every resume section its own heading so ATS can segment it"),
        );
    }

    for heading in &headings {
        let chars = heading.text.chars().count();
        if chars == 0 {
            deduct(&mut score, 2);
            issues.push(
                Issue::new(
                    Severity::Error,
                    "headings",
                    format!("Empty <{}> heading", heading.tag),
                )
                .with_fix("Remove the heading or give it a descriptive label"),
            );
        } else if chars < MIN_HEADING_CHARS {
            deduct(&mut score, 1);
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "headings",
                    format!("Heading '{}' is too short to be descriptive", heading.text),
                )
                .with_fix("Use standard section names such as Experience, Education, Skills"),
            );
        }
    }

    CheckResult::new(HEADINGS_NAME, score, HEADINGS_MAX_SCORE, score >= 7, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlDocument;

    fn styled(style: &str) -> HtmlDocument {
        HtmlDocument::parse(&format!(
            "<html><head><style>{style}</style></head><body><p>x</p></body></html>"
        ))
    }

    #[test]
    fn test_semantic_full_marks() {
        let doc = HtmlDocument::parse(
            "<body><header><h1>Jane</h1></header><section><h2>Work</h2><h3>Acme</h3></section></body>",
        );
        let result = check_semantic_html(&doc);
        assert_eq!(result.score, 10);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_semantic_bare_document() {
        let doc = HtmlDocument::parse("<body><p>Jane</p></body>");
        let result = check_semantic_html(&doc);
        assert_eq!(result.score, 3);
        assert!(!result.passed);
        assert!(result.issues.iter().any(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_multiple_h1_is_warning() {
        let doc = HtmlDocument::parse(
            "<body><header><h1>A</h1></header><section><h1>B</h1></section></body>",
        );
        let result = check_semantic_html(&doc);
        assert_eq!(result.score, 8);
        assert!(result.passed);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_heading_skip_deducts_once() {
        let doc = HtmlDocument::parse(
            "<body><header><h1>A</h1></header><section><h3>B</h3><h2>C</h2><h5>D</h5></section></body>",
        );
        let result = check_semantic_html(&doc);
        assert_eq!(result.score, 9);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].message, "Heading level jumps from h1 to h3");
    }

    #[test]
    fn test_shallower_heading_is_not_a_jump() {
        let doc = HtmlDocument::parse(
            "<body><header><h1>A</h1></header><section><h2>B</h2><h3>C</h3><h2>D</h2></section></body>",
        );
        assert_eq!(check_semantic_html(&doc).score, 10);
    }

    #[test]
    fn test_no_tables_full_marks() {
        let result = check_table_layouts(&HtmlDocument::parse("<body><p>x</p></body>"));
        assert_eq!(result.score, 15);
        assert!(result.passed);
    }

    #[test]
    fn test_small_table_still_fails() {
        let doc = HtmlDocument::parse("<body><table><tr><td>a</td><td>b</td></tr></table></body>");
        let result = check_table_layouts(&doc);
        assert_eq!(result.score, 5);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_layout_table_extra_penalty() {
        let doc = HtmlDocument::parse(
            "<body><table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></table></body>",
        );
        let result = check_table_layouts(&doc);
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_single_column_clean() {
        let result = check_single_column(&styled("main { display: grid; grid-template-columns: 1fr; }"));
        assert_eq!(result.score, 15);
        assert!(result.passed);
    }

    #[test]
    fn test_css_columns_detected() {
        assert_eq!(check_single_column(&styled("main { column-count: 2 }")).score, 10);
        assert_eq!(check_single_column(&styled("main { columns: 2 200px }")).score, 10);
    }

    #[test]
    fn test_vendor_prefixed_columns_detected() {
        let result = check_single_column(&styled("main{-webkit-columns:2}"));
        assert_eq!(result.score, 10);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(check_single_column(&styled("main{-moz-columns: 2 200px}")).score, 10);
    }

    #[test]
    fn test_grid_columns_property_is_not_css_columns() {
        let result = check_single_column(&styled("main { grid-template-columns: 1fr 2fr; }"));
        assert_eq!(result.score, 13);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_many_floats_detected() {
        let css = ".a{float:left}.b{float: right}.c{float:left}";
        let result = check_single_column(&styled(css));
        assert_eq!(result.score, 12);
        assert!(result.passed);
        let two = ".a{float:left}.b{float:right}";
        assert_eq!(check_single_column(&styled(two)).score, 15);
    }

    #[test]
    fn test_wrapping_space_between_flex() {
        let css = ".row { display: flex; flex-wrap: wrap; justify-content: space-between; }";
        assert_eq!(check_single_column(&styled(css)).score, 13);
        let no_wrap = ".row { display: flex; justify-content: space-between; }";
        assert_eq!(check_single_column(&styled(no_wrap)).score, 15);
    }

    #[test]
    fn test_everything_wrong_fails() {
        let css = "main{column-count:2;grid-template-columns:repeat(2, 1fr)} .a{float:left}.b{float:left}.c{float:right} .r{flex-wrap:wrap;justify-content:space-between}";
        let result = check_single_column(&styled(css));
        assert_eq!(result.score, 3);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 4);
    }

    #[test]
    fn test_grid_track_counts() {
        assert_eq!(grid_track_count("1fr"), 1);
        assert_eq!(grid_track_count("200px 1fr"), 2);
        assert_eq!(grid_track_count("[main-start] 1fr [main-end]"), 1);
        assert_eq!(grid_track_count("minmax(200px, 1fr)"), 1);
        assert_eq!(grid_track_count("repeat(3, 1fr)"), 3);
        assert_eq!(grid_track_count("repeat(1, minmax(0, 1fr))"), 1);
        assert_eq!(grid_track_count("repeat(auto-fill, minmax(120px, 1fr))"), 2);
        assert_eq!(grid_track_count("none"), 0);
    }

    #[test]
    fn test_headings_full_marks() {
        let doc = HtmlDocument::parse("<body><h1>Jane Doe</h1><h2>Experience</h2><h2>Education</h2></body>");
        let result = check_heading_structure(&doc);
        assert_eq!(result.score, 10);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_too_few_headings() {
        let doc = HtmlDocument::parse("<body><h1>Jane Doe</h1></body>");
        let result = check_heading_structure(&doc);
        assert_eq!(result.score, 6);
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_and_short_headings() {
        let doc = HtmlDocument::parse(
            "<body><h1>Jane Doe</h1><h2> </h2><h2>IT</h2><h2>Skills</h2></body>",
        );
        let result = check_heading_structure(&doc);
        assert_eq!(result.score, 7);
        assert!(result.passed);
        assert_eq!(result.issues[0].severity, Severity::Error);
        assert_eq!(result.issues[1].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_heading_is_not_also_short() {
        let doc = HtmlDocument::parse(
            "<body><h1>Jane Doe</h1><h2></h2><h2>Experience</h2><h2>Skills</h2></body>",
        );
        let result = check_heading_structure(&doc);
        assert_eq!(result.score, 8);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_heading_score_floors_at_zero() {
        let doc = HtmlDocument::parse(&format!("<body>{}</body>", "<h2></h2>".repeat(6)));
        assert_eq!(check_heading_structure(&doc).score, 0);
    }
}
