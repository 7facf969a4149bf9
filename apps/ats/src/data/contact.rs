use crate::data::ResumeInput;
use crate::models::report::{CheckResult, Issue, Severity};
use crate::models::resume::Location;
use crate::validation::{is_present, is_valid_email};

pub const NAME: &str = "Contact Information";
pub const MAX_SCORE: u32 = 20;

const CATEGORY: &str = "contact";
const POINTS_PER_FIELD: u32 = 5;

/// +5 each for name, well-formed email, phone and location. Passes only at full marks.
pub fn check_contact_info(input: &ResumeInput<'_>) -> CheckResult {
    let basics = input.resume.basics();
    let mut score = 0;
    let mut issues = Vec::new();

    if is_present(basics.and_then(|b| b.name.as_deref())) {
        score += POINTS_PER_FIELD;
    } else {
        issues.push(
            Issue::new(Severity::Critical, CATEGORY, "Missing full name")
                .with_fix("Add your full name at the top of the resume"),
        );
    }

    match basics.and_then(|b| b.email.as_deref()) {
        Some(email) if is_valid_email(email) => score += POINTS_PER_FIELD,
        Some(email) if is_present(Some(email)) => issues.push(
            Issue::new(
                Severity::Critical,
                CATEGORY,
                format!("Email address '{}' is not valid", email.trim()),
            )
            .with_fix("Use a standard address such as name@example.com"),
        ),
        _ => issues.push(
            Issue::new(Severity::Critical, CATEGORY, "Missing email address")
                .with_fix("Add a professional email address recruiters can reach"),
        ),
    }

    if is_present(basics.and_then(|b| b.phone.as_deref())) {
        score += POINTS_PER_FIELD;
    } else {
        issues.push(
            Issue::new(Severity::Warning, CATEGORY, "Missing phone number")
                .with_fix("Add a phone number including the country code"),
        );
    }

    if basics
        .and_then(|b| b.location.as_ref())
        .is_some_and(has_locality)
    {
        score += POINTS_PER_FIELD;
    } else {
        issues.push(
            Issue::new(Severity::Warning, CATEGORY, "Missing location")
                .with_fix("Add at least a city, region or country; many ATS filter by location"),
        );
    }

    CheckResult::new(NAME, score, MAX_SCORE, score == MAX_SCORE, issues)
}

fn has_locality(location: &Location) -> bool {
    is_present(location.city.as_deref())
        || is_present(location.region.as_deref())
        || is_present(location.country.as_deref())
}
