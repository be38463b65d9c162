//! Threshold evaluation
//!
//! The heart of the check: take the recent builds of a job, keep the ones
//! that are still running and older than a threshold, and fold the result
//! into a single verdict. Critical is tried strictly before warning, the
//! first offending build wins, and any fetch failure short-circuits to
//! UNKNOWN.

use chrono::{DateTime, Duration, Utc};
use jenkins_client::{Build, JenkinsClient};
use log::debug;

use crate::report::{Report, Verdict};

/// Durations an unfinished build may not exceed.
///
/// Critical is expected to be the larger of the two, but this is not
/// enforced; the thresholds are applied independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: Duration,
    pub critical: Duration,
}

/// Builds that are still running and started more than `threshold` ago.
///
/// A stable filter: the result keeps the input's most-recent-first order.
/// Elapsed time is measured against the caller's `now`, keeping the
/// outcome a pure function of its inputs.
pub fn filter_unfinished_too_long(
    builds: &[Build],
    threshold: Duration,
    now: DateTime<Utc>,
) -> Vec<&Build> {
    builds
        .iter()
        .filter(|b| b.is_unfinished() && now - b.timestamp.as_datetime() > threshold)
        .collect()
}

/// Fold a build list into a verdict.
///
/// Only the first build over the critical threshold (or, failing that,
/// the first over the warning threshold) is reported, even when several
/// qualify.
pub fn evaluate(builds: &[Build], thresholds: &Thresholds, now: DateTime<Utc>) -> Report {
    if let Some(build) = filter_unfinished_too_long(builds, thresholds.critical, now).first() {
        return Report::new(
            Verdict::Critical,
            format!("Build id = {} takes too long time", build.number),
        );
    }

    if let Some(build) = filter_unfinished_too_long(builds, thresholds.warning, now).first() {
        return Report::new(
            Verdict::Warning,
            format!("Build id = {} takes too long time", build.number),
        );
    }

    Report::new(Verdict::Ok, "No build that takes too long time exists")
}

/// Run the whole check: fetch the recent builds of `job_name` and evaluate
/// them.
///
/// Jenkins has no endpoint for "builds still running", so the check pulls
/// the `max_job_number` most recent attempts and filters them instead. Any
/// fetch failure is terminal and reported as UNKNOWN with the underlying
/// error text.
pub async fn run_check(
    client: &dyn JenkinsClient,
    job_name: &str,
    max_job_number: u32,
    thresholds: &Thresholds,
) -> Report {
    let list = match client.fetch_builds(job_name, max_job_number).await {
        Ok(list) => list,
        Err(err) => {
            return Report::new(
                Verdict::Unknown,
                format!("Failed to fetch jenkins metrics: {}", err),
            );
        }
    };

    debug!("evaluating {} builds of job {}", list.builds.len(), job_name);
    evaluate(&list.builds, thresholds, Utc::now())
}
