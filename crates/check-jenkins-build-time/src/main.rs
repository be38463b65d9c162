//! check-jenkins-build-time - flags Jenkins builds that run too long.
//!
//! Fetches the recent builds of one job over the Jenkins JSON API, prints a
//! single status line and exits with the conventional monitoring code:
//! 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.

use clap::Parser;
use jenkins_client::HttpJenkinsClient;
use log::debug;

mod args;
mod check;
mod report;

use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Quiet by default; RUST_LOG opts in. The status line owns stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = Args::parse();
    let server = args.server();
    debug!("checking job {} on {}", args.job_name, server.base_url());

    let client = HttpJenkinsClient::new(server);
    let report = check::run_check(
        &client,
        &args.job_name,
        args.max_job_number,
        &args.thresholds(),
    )
    .await;

    println!("{}", report.status_line());
    std::process::exit(report.verdict.exit_code());
}
