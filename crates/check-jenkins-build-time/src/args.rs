//! Command line interface
//!
//! Flags mirror a conventional monitoring plugin: where the server lives,
//! which job to watch, how many recent builds to look at and the two
//! elapsed-time thresholds. Only the job name is required.

use chrono::Duration;
use clap::Parser;
use jenkins_client::{JenkinsServer, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SCHEME};

use crate::check::Thresholds;

#[derive(Debug, Parser)]
#[command(name = "check-jenkins-build-time", version)]
#[command(about = "Checks Jenkins builds that take too long time")]
pub struct Args {
    /// Jenkins scheme
    #[arg(short = 's', long, default_value = DEFAULT_SCHEME)]
    pub scheme: String,

    /// Jenkins hostname
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Jenkins port
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Monitor job name
    #[arg(short = 'j', long)]
    pub job_name: String,

    /// Number of recent jobs to monitor
    #[arg(long, default_value_t = 10)]
    pub max_job_number: u32,

    /// Trigger a warning if over the seconds
    #[arg(short = 'w', long, default_value_t = 60)]
    pub warning_second: i64,

    /// Trigger a critical if over the seconds
    #[arg(short = 'c', long, default_value_t = 300)]
    pub critical_second: i64,
}

impl Args {
    pub fn server(&self) -> JenkinsServer {
        JenkinsServer::new(self.scheme.clone(), self.host.clone(), self.port)
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            warning: Duration::seconds(self.warning_second),
            critical: Duration::seconds(self.critical_second),
        }
    }
}
