//! Check verdicts and the report line
//!
//! A check run always collapses into exactly one [`Report`]: a four-valued
//! verdict plus one line of text for the operator. The exit code follows
//! the monitoring-agent convention for check plugins: OK = 0, WARNING = 1,
//! CRITICAL = 2, UNKNOWN = 3.

use std::fmt;

/// Name identifying this plugin in the report line.
pub const CHECKER_NAME: &str = "JenkinsBuildTime";

/// The four-valued outcome of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No unfinished build exceeded a threshold.
    Ok,
    /// At least one unfinished build is over the warning threshold.
    Warning,
    /// At least one unfinished build is over the critical threshold.
    Critical,
    /// The build list could not be fetched or decoded.
    Unknown,
}

impl Verdict {
    /// Display name used in the report line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Process exit code for the monitoring agent.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One verdict and its message, the single result of an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub verdict: Verdict,
    pub message: String,
}

impl Report {
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }

    /// The one line printed to stdout, e.g.
    /// `JenkinsBuildTime OK: No build that takes too long time exists`.
    pub fn status_line(&self) -> String {
        format!("{} {}: {}", CHECKER_NAME, self.verdict, self.message)
    }
}
