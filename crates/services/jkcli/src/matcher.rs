//! Job filtering by name pattern.

use jk_api::JobSummary;
use regex::Regex;

/// Returns the jobs whose names match `pattern`, preserving input order.
///
/// The pattern is unanchored, so it matches anywhere in the name. A pattern
/// that fails to compile matches nothing; the command proceeds with an empty
/// set instead of aborting.
pub fn matching_jobs(jobs: Vec<JobSummary>, pattern: &str) -> Vec<JobSummary> {
    let Ok(re) = Regex::new(pattern) else {
        return Vec::new();
    };
    jobs.into_iter()
        .filter(|job| re.is_match(&job.name))
        .collect()
}
