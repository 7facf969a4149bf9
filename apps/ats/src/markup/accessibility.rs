//! Image alt text and general accessibility checks.

use std::collections::HashSet;

use crate::markup::MarkupQuery;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::scoring::deduct;

pub const IMAGES_NAME: &str = "Image Accessibility";
pub const IMAGES_MAX_SCORE: u32 = 10;

pub const ACCESSIBILITY_NAME: &str = "Accessibility";
pub const ACCESSIBILITY_MAX_SCORE: u32 = 15;

const MAX_IMAGES: usize = 5;

/// Link texts that say nothing about the destination.
const NON_DESCRIPTIVE_LINKS: &[&str] = &[
    "click here",
    "click",
    "here",
    "link",
    "this link",
    "more",
    "read more",
    "learn more",
];

const FORM_CONTROLS: &[&str] = &["input", "textarea", "select"];

pub fn check_images<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let images = doc.elements(&["img"]);
    let mut score = IMAGES_MAX_SCORE;
    let mut issues = Vec::new();

    for image in &images {
        let has_alt = image.attr("alt").is_some_and(|alt| !alt.trim().is_empty());
        if !has_alt {
            deduct(&mut score, 2);
            let src = image.attr("src").unwrap_or("(no src)");
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "images",
                    format!("Image '{src}' is missing alt text"),
                )
                .with_fix("Describe the image in an alt attribute"),
            );
        }
    }

    if images.len() > MAX_IMAGES {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(
                Severity::Info,
                "images",
                format!("{} images found; ATS ignore image content", images.len()),
            )
            .with_fix("Keep images to a minimum and put all information in text"),
        );
    }

    CheckResult::new(IMAGES_NAME, score, IMAGES_MAX_SCORE, score >= 8, issues)
}

pub fn check_accessibility<Q: MarkupQuery + ?Sized>(doc: &Q) -> CheckResult {
    let mut score = ACCESSIBILITY_MAX_SCORE;
    let mut issues = Vec::new();

    let has_lang = doc
        .attribute_values("html", "lang")
        .into_iter()
        .flatten()
        .any(|lang| !lang.trim().is_empty());
    if !has_lang {
        deduct(&mut score, 2);
        issues.push(
            Issue::new(Severity::Warning, "accessibility", "Missing lang attribute on <html>")
                .with_fix("Declare the document language, e.g. <html lang=\"en\">"),
        );
    }

    for anchor in doc.elements(&["a"]) {
        let text = anchor.text.to_lowercase();
        if NON_DESCRIPTIVE_LINKS.contains(&text.as_str()) {
            deduct(&mut score, 1);
            issues.push(
                Issue::new(
                    Severity::Info,
                    "accessibility",
                    format!("Link text '{}' is not descriptive", anchor.text),
                )
                .with_fix("Use link text that names the destination, e.g. the portfolio or profile"),
            );
        }
    }

    let labelled: HashSet<String> = doc
        .attribute_values("label", "for")
        .into_iter()
        .flatten()
        .collect();
    for control in doc.elements(FORM_CONTROLS) {
        let Some(id) = control.attr("id") else {
            continue;
        };
        if !labelled.contains(id) {
            deduct(&mut score, 2);
            issues.push(
                Issue::new(
                    Severity::Warning,
                    "accessibility",
                    format!("<{}> with id '{id}' has no associated <label>", control.tag),
                )
                .with_fix(format!("Add <label for=\"{id}\">")),
            );
        }
    }

    CheckResult::new(
        ACCESSIBILITY_NAME,
        score,
        ACCESSIBILITY_MAX_SCORE,
        score >= 12,
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::HtmlDocument;

    #[test]
    fn test_no_images_full_marks() {
        let result = check_images(&HtmlDocument::parse("<body><p>x</p></body>"));
        assert_eq!(result.score, 10);
        assert!(result.passed);
    }

    #[test]
    fn test_missing_alt_deducts_two() {
        let doc = HtmlDocument::parse(r#"<body><img src="me.png"></body>"#);
        let result = check_images(&doc);
        assert_eq!(result.score, 8);
        assert!(result.passed);
        assert!(result.issues[0].message.contains("alt text"));
    }

    #[test]
    fn test_blank_alt_counts_as_missing() {
        let doc = HtmlDocument::parse(r#"<body><img src="a.png" alt="  "><img src="b.png" alt="Logo"></body>"#);
        assert_eq!(check_images(&doc).score, 8);
    }

    #[test]
    fn test_too_many_images() {
        let imgs = r#"<img src="x.png" alt="x">"#.repeat(6);
        let result = check_images(&HtmlDocument::parse(&format!("<body>{imgs}</body>")));
        assert_eq!(result.score, 8);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn test_image_score_floors_at_zero() {
        let imgs = "<img>".repeat(7);
        let result = check_images(&HtmlDocument::parse(&format!("<body>{imgs}</body>")));
        assert_eq!(result.score, 0);
        assert_eq!(result.issues.len(), 8);
    }

    #[test]
    fn test_accessible_page_full_marks() {
        let doc = HtmlDocument::parse(
            r#"<html lang="en"><body><a href="https://github.com/jane">GitHub profile</a>
            <label for="q">Search</label><input id="q"></body></html>"#,
        );
        let result = check_accessibility(&doc);
        assert_eq!(result.score, 15);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_missing_lang() {
        let result = check_accessibility(&HtmlDocument::parse("<html><body>x</body></html>"));
        assert_eq!(result.score, 13);
        assert!(result.passed);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_non_descriptive_links() {
        let doc = HtmlDocument::parse(
            r#"<html lang="en"><body><a href="/a">Click here</a> <a href="/b"> Read More </a></body></html>"#,
        );
        let result = check_accessibility(&doc);
        assert_eq!(result.score, 13);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Info));
    }

    #[test]
    fn test_unlabelled_controls() {
        let doc = HtmlDocument::parse(
            r#"<html lang="en"><body><input id="email"><textarea id="msg"></textarea><select></select><input></body></html>"#,
        );
        let result = check_accessibility(&doc);
        // controls without an id are not checked
        assert_eq!(result.score, 11);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 2);
    }
}
