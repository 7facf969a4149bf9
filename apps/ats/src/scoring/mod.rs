//! Shared scoring machinery: the check registry, aggregation math, rating
//! buckets and recommendation export.

pub mod aggregate;
pub mod rating;
pub mod recommendations;

use crate::models::report::CheckResult;

/// One entry in an ordered check registry.
///
/// `I` is the input a check family reads: the résumé bundle for data checks,
/// the parsed document for markup checks.
pub struct CheckDescriptor<I: ?Sized> {
    pub name: &'static str,
    pub max_score: u32,
    pub run: fn(&I) -> CheckResult,
}

impl<I: ?Sized> CheckDescriptor<I> {
    pub fn run(&self, input: &I) -> CheckResult {
        let result = (self.run)(input);
        tracing::debug!(
            check = self.name,
            score = result.score,
            max_score = result.max_score,
            passed = result.passed,
            issues = result.issues.len(),
            "Check complete"
        );
        result
    }
}

/// Runs every descriptor in registry order.
pub fn run_checks<I: ?Sized>(registry: &[CheckDescriptor<I>], input: &I) -> Vec<CheckResult> {
    registry.iter().map(|check| check.run(input)).collect()
}

/// Applies a point deduction without dropping below zero.
pub(crate) fn deduct(score: &mut u32, points: u32) {
    *score = score.saturating_sub(points);
}
