use crate::data::ResumeInput;
use crate::models::report::{CheckResult, Issue, Severity};

pub const NAME: &str = "Theme Compatibility";
pub const MAX_SCORE: u32 = 5;

/// Single-column themes with plain typography that ATS parse cleanly.
pub const ATS_FRIENDLY_THEMES: &[&str] =
    &["professional", "standard", "even", "stackoverflow", "class"];

/// Themes whose sidebars and decorative layout are known to scramble ATS parsing.
pub const ATS_HOSTILE_THEMES: &[&str] = &["elegant", "paper"];

const FRIENDLY_SCORE: u32 = 5;
const NEUTRAL_SCORE: u32 = 3;
const HOSTILE_SCORE: u32 = 1;

/// Case-insensitive substring match, allow-list first.
pub fn check_theme_compatibility(input: &ResumeInput<'_>) -> CheckResult {
    let theme = input
        .theme
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let (score, issues) = match theme.as_deref() {
        Some(t) if ATS_FRIENDLY_THEMES.iter().any(|f| t.contains(f)) => (FRIENDLY_SCORE, vec![]),
        Some(t) if ATS_HOSTILE_THEMES.iter().any(|h| t.contains(h)) => (
            HOSTILE_SCORE,
            vec![Issue::new(
                Severity::Warning,
                "theme",
                format!("Theme '{t}' uses a layout that many ATS cannot parse reliably"),
            )
            .with_fix(format!(
                "Switch to an ATS-friendly theme: {}",
                ATS_FRIENDLY_THEMES.join(", ")
            ))],
        ),
        Some(t) => (
            NEUTRAL_SCORE,
            vec![Issue::new(
                Severity::Info,
                "theme",
                format!("Theme '{t}' has not been verified for ATS compatibility"),
            )
            .with_fix(format!(
                "Verify the rendered output or use a known-good theme: {}",
                ATS_FRIENDLY_THEMES.join(", ")
            ))],
        ),
        None => (
            NEUTRAL_SCORE,
            vec![Issue::new(
                Severity::Info,
                "theme",
                "No theme specified; ATS compatibility of the rendered resume is unknown",
            )
            .with_fix(format!(
                "Render with an ATS-friendly theme: {}",
                ATS_FRIENDLY_THEMES.join(", ")
            ))],
        ),
    };

    CheckResult::new(NAME, score, MAX_SCORE, score >= NEUTRAL_SCORE, issues)
}
