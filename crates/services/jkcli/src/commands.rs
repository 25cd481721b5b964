//! Command handlers for jkcli.

use std::io;

use jk_api::{JenkinsClient, JobSummary};

use crate::logs::write_console;
use crate::matcher::matching_jobs;
use crate::prelude::*;
use crate::report::{StatusMarker, report_all};

/// Prints a status line for every job matching `pattern`.
pub async fn handle_status(jenkins: &JenkinsClient, pattern: &str) -> Result<()> {
    let matched = matching_jobs(jenkins.jobs().await?, pattern);
    log::debug!("{} job(s) match {pattern}", matched.len());
    report_all(jenkins, matched).await;
    Ok(())
}

/// Prints the last build's status line, result code, and console output for
/// one job.
pub async fn handle_logs(jenkins: &JenkinsClient, job: &str, salt: bool) -> Result<()> {
    let build = jenkins.last_build(job).await?;
    let result = build.result_code();
    println!("{} {job} ({})", StatusMarker::from_result(&result), build.url);
    println!("Jenkins result code: {result}");

    let console = jenkins.console_text(job, build.number).await?;
    write_console(io::stdout().lock(), &console, salt)?;
    println!("{}/consoleText", build.url);
    Ok(())
}

/// Prints the raw build queue.
///
/// The pattern, verbose, and salt switches are accepted but do not affect
/// the output yet.
pub async fn handle_queue(
    jenkins: &JenkinsClient,
    _pattern: &str,
    _verbose: bool,
    _salt: bool,
) -> Result<()> {
    let queue = jenkins.queue_raw().await?;
    println!("{queue}");
    Ok(())
}

/// Prints an online/offline line for every node.
pub async fn handle_nodes(jenkins: &JenkinsClient) -> Result<()> {
    let nodes = jenkins.nodes().await?;
    report_all(jenkins, nodes).await;
    Ok(())
}

/// Opens every job matching `pattern` in the default browser.
pub async fn handle_open(jenkins: &JenkinsClient, pattern: &str) -> Result<()> {
    let matched = matching_jobs(jenkins.jobs().await?, pattern);
    open_jobs(&matched, |url| open::that(url))
}

/// Opens each job's page sequentially, in matched order.
///
/// More than three matches is treated as a pattern mistake: nothing opens
/// and the command fails.
fn open_jobs(jobs: &[JobSummary], mut opener: impl FnMut(&str) -> io::Result<()>) -> Result<()> {
    if jobs.len() > 3 {
        return Err(Error::TooManyMatches(jobs.len()));
    }
    for job in jobs {
        opener(&job.url)?;
    }
    Ok(())
}
