//! Font family and font size checks over the document's style text.

use std::sync::OnceLock;

use regex::Regex;

use crate::markup::MarkupQuery;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::scoring::deduct;
use crate::validation::static_regex;

pub const FONTS_NAME: &str = "ATS-Friendly Fonts";
pub const FONTS_MAX_SCORE: u32 = 15;

pub const FONT_SIZES_NAME: &str = "Font Sizes";
pub const FONT_SIZES_MAX_SCORE: u32 = 10;

/// Decorative faces that OCR and ATS text extraction handle poorly.
const BAD_FONTS: &[&str] = &[
    "Comic Sans",
    "Papyrus",
    "Brush Script",
    "Lucida Handwriting",
    "Curlz",
    "Jokerman",
    "Chiller",
];

const GOOD_FONTS: &[&str] = &[
    "Arial",
    "Helvetica",
    "Calibri",
    "Cambria",
    "Georgia",
    "Garamond",
    "Times New Roman",
    "Verdana",
    "Tahoma",
    "Trebuchet MS",
];

const WEB_FONT_HOSTS: &[&str] = &[
    "fonts.googleapis.com",
    "fonts.gstatic.com",
    "use.typekit.net",
    "fonts.bunny.net",
];

const MIN_FONT_PX: f64 = 10.0;
const MAX_FONT_PX: f64 = 50.0;

static FONT_SIZE_PX_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn check_fonts<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let style = doc.style_text().to_lowercase();
    let mut score = FONTS_MAX_SCORE;
    let mut issues = Vec::new();

    let offenders: Vec<&str> = BAD_FONTS
        .iter()
        .copied()
        .filter(|font| style.contains(&font.to_lowercase()))
        .collect();
    if !offenders.is_empty() {
        deduct(&mut score, 10);
        issues.push(
            Issue::new(
                Severity::Error,
                "fonts",
                format!("Non-standard fonts detected: {}", offenders.join(", ")),
            )
            .with_fix("Replace decorative fonts with Arial, Calibri, Georgia or Times New Roman"),
        );
    }

    if uses_web_fonts(doc, &style) {
        deduct(&mut score, 3);
        issues.push(
            Issue::new(
                Severity::Warning,
                "fonts",
                "Web fonts are loaded; ATS parsers and PDF converters may not embed them",
            )
            .with_fix("Prefer system fonts that are available everywhere"),
        );
    }

    let has_good_font = GOOD_FONTS
        .iter()
        .any(|font| style.contains(&font.to_lowercase()));
    if !has_good_font && !doc.body_text().is_empty() {
        deduct(&mut score, 5);
        issues.push(
            Issue::new(
                Severity::Warning,
                "fonts",
                "No standard ATS-friendly font is declared",
            )
            .with_fix(format!("Declare a standard font such as {}", GOOD_FONTS[..4].join(", "))),
        );
    }

    CheckResult::new(FONTS_NAME, score, FONTS_MAX_SCORE, score >= 10, issues)
}

fn uses_web_fonts<Q: MarkupQuery + ?Sized>(doc: &Q, style: &str) -> bool {
    if style.contains("@font-face") || WEB_FONT_HOSTS.iter().any(|h| style.contains(h)) {
        return true;
    }
    doc.attribute_values("link", "href")
        .into_iter()
        .flatten()
        .any(|href| WEB_FONT_HOSTS.iter().any(|h| href.to_lowercase().contains(h)))
}

pub fn check_font_sizes<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let sizes = pixel_font_sizes(&doc.style_text());
    let mut score = FONT_SIZES_MAX_SCORE;
    let mut issues = Vec::new();

    if sizes.iter().any(|&px| px < MIN_FONT_PX) {
        deduct(&mut score, 3);
        issues.push(
            Issue::new(
                Severity::Warning,
                "typography",
                format!("Font sizes below {MIN_FONT_PX}px are hard for ATS and recruiters to read"),
            )
            .with_fix("Keep body text at 10-12pt (roughly 13-16px)"),
        );
    }

    let oversized = sizes.iter().filter(|&&px| px > MAX_FONT_PX).count();
    if oversized > 1 {
        deduct(&mut score, 1);
        issues.push(
            Issue::new(
                Severity::Info,
                "typography",
                format!("{oversized} font sizes exceed {MAX_FONT_PX}px"),
            )
            .with_fix("Reserve very large type for the name heading only"),
        );
    }

    CheckResult::new(FONT_SIZES_NAME, score, FONT_SIZES_MAX_SCORE, score >= 8, issues)
}

/// Every `font-size: <n>px` declaration, in order of appearance.
pub fn pixel_font_sizes(style: &str) -> Vec<f64> {
    let Some(re) = static_regex(&FONT_SIZE_PX_RE, r"(?i)font-size\s*:\s*(\d+(?:\.\d+)?)px") else {
        return Vec::new();
    };
    re.captures_iter(style)
        .filter_map(|cap| cap.get(1)?.as_str().parse::<f64>().ok())
        .collect()
}
