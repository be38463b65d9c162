//! Jenkins build-status API data transfer objects
//!
//! These types mirror the JSON returned by Jenkins' per-job
//! `api/json?tree=builds[result,number,timestamp]{,N}` endpoint:
//!
//! ```json
//! {
//!   "_class": "hudson.model.FreeStyleProject",
//!   "builds": [
//!     { "_class": "hudson.model.FreeStyleBuild", "number": 57, "result": null, "timestamp": 1503146442652 },
//!     { "_class": "hudson.model.FreeStyleBuild", "number": 51, "result": "SUCCESS", "timestamp": 1503144132413 }
//!   ]
//! }
//! ```
//!
//! `result` appears only once a build has finished; `null` means the build
//! is still running. Unknown fields such as `_class` are ignored, and
//! fields Jenkins omits decay to their defaults instead of failing the
//! whole document (the API is allowed to send sparse objects).

use serde::{Deserialize, Serialize};

use crate::timestamp::EpochMillis;

/// One build attempt of a Jenkins job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Build {
    /// Build number, unique per job (not globally).
    #[serde(default)]
    pub number: u64,

    /// Terminal status string (`"SUCCESS"`, `"FAILURE"`, ...); `None`
    /// while the build is still running. An empty string counts as a
    /// finished build with an empty result, never as running.
    #[serde(default)]
    pub result: Option<String>,

    /// Instant the build started, epoch milliseconds on the wire.
    #[serde(default)]
    pub timestamp: EpochMillis,
}

impl Build {
    /// A build with no terminal result yet is still running (or stuck).
    pub fn is_unfinished(&self) -> bool {
        self.result.is_none()
    }
}

/// The `builds` array wrapper returned by the job API, most-recent-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildList {
    /// The N most recent build attempts.
    #[serde(default)]
    pub builds: Vec<Build>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const JOB_DOCUMENT: &str = r#"{
        "_class": "hudson.model.FreeStyleProject",
        "builds": [
            { "_class": "hudson.model.FreeStyleBuild", "number": 57, "result": null, "timestamp": 1503146442652 },
            { "_class": "hudson.model.FreeStyleBuild", "number": 51, "result": "SUCCESS", "timestamp": 1503144132413 }
        ]
    }"#;

    #[test]
    fn test_deserialize_job_document() {
        let list: BuildList = serde_json::from_str(JOB_DOCUMENT).unwrap();
        assert_eq!(list.builds.len(), 2);

        let running = &list.builds[0];
        assert_eq!(running.number, 57);
        assert_eq!(running.result, None);
        assert!(running.is_unfinished());
        assert_eq!(
            running.timestamp.as_datetime(),
            Utc.with_ymd_and_hms(2017, 8, 19, 12, 40, 42).unwrap()
        );

        let finished = &list.builds[1];
        assert_eq!(finished.number, 51);
        assert_eq!(finished.result.as_deref(), Some("SUCCESS"));
        assert!(!finished.is_unfinished());
    }

    #[test]
    fn test_missing_fields_decay_to_defaults() {
        // Sparse objects are tolerated on purpose: number 0, no result,
        // epoch timestamp. A stuck build missing its timestamp therefore
        // still registers as ancient rather than vanishing from the check.
        let list: BuildList = serde_json::from_str(r#"{"builds": [{}]}"#).unwrap();
        assert_eq!(list.builds.len(), 1);

        let build = &list.builds[0];
        assert_eq!(build.number, 0);
        assert!(build.is_unfinished());
        assert_eq!(build.timestamp, EpochMillis::default());
    }

    #[test]
    fn test_missing_builds_array_decays_to_empty() {
        let list: BuildList = serde_json::from_str("{}").unwrap();
        assert!(list.builds.is_empty());
    }

    #[test]
    fn test_empty_result_string_counts_as_finished() {
        let list: BuildList =
            serde_json::from_str(r#"{"builds": [{"number": 3, "result": "", "timestamp": 0}]}"#)
                .unwrap();
        assert_eq!(list.builds[0].result.as_deref(), Some(""));
        assert!(!list.builds[0].is_unfinished());
    }

    #[test]
    fn test_unparsable_timestamp_fails_the_decode() {
        // A present-but-garbage timestamp is a hard error, not a skipped
        // record.
        let err = serde_json::from_str::<BuildList>(
            r#"{"builds": [{"number": 9, "result": null, "timestamp": "soon"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("epoch-millisecond"));
    }
}
