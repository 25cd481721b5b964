//! Concurrent status reporting for jobs and nodes.
//!
//! Every item becomes one task producing one display line. The join loop
//! prints lines as tasks finish, so output order follows completion order,
//! and it drains every task before returning. One item's failure is rendered
//! on that item's own line and never stops the others.

use std::fmt;

use async_trait::async_trait;
use console::style;
use jk_api::{JenkinsClient, JobSummary, NodeSummary};
use tokio::task::JoinSet;

use crate::prelude::*;

/// Rendering tag derived from a build result string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMarker {
    Ok,
    Failed,
    Unknown,
}

impl StatusMarker {
    /// Maps a server result code to a marker.
    pub fn from_result(result: &str) -> Self {
        match result {
            "SUCCESS" => StatusMarker::Ok,
            "FAILURE" => StatusMarker::Failed,
            _ => StatusMarker::Unknown,
        }
    }
}

impl fmt::Display for StatusMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMarker::Ok => write!(f, "{}", style("✓").green()),
            StatusMarker::Failed => write!(f, "{}", style("✗").red()),
            StatusMarker::Unknown => write!(f, "{}", style("?").yellow()),
        }
    }
}

/// An item the status fan-out can report on.
#[async_trait]
pub trait Reportable: Send + Sync + 'static {
    /// Fetches remote state and renders this item's display line.
    async fn report(&self, jenkins: &JenkinsClient) -> Result<String>;

    /// Renders the line shown when [`Reportable::report`] fails.
    fn failure_line(&self, err: &Error) -> String;
}

#[async_trait]
impl Reportable for JobSummary {
    async fn report(&self, jenkins: &JenkinsClient) -> Result<String> {
        // A job whose build cannot be fetched still gets its line; the
        // failure is embedded as the result code.
        let result = match jenkins.last_build(&self.name).await {
            Ok(build) => build.result_code(),
            Err(err) => format!("UNKNOWN ({err})"),
        };
        Ok(status_line(&self.name, &self.url, &result))
    }

    fn failure_line(&self, err: &Error) -> String {
        status_line(&self.name, &self.url, &format!("UNKNOWN ({err})"))
    }
}

#[async_trait]
impl Reportable for NodeSummary {
    async fn report(&self, jenkins: &JenkinsClient) -> Result<String> {
        // The node index may be stale; only a poll is trusted.
        let state = jenkins.poll_node(&self.display_name).await?;
        let liveness = if state.offline { "Offline" } else { "Online" };
        Ok(format!("{}: {liveness}", self.display_name))
    }

    fn failure_line(&self, err: &Error) -> String {
        format!("{}: Unknown ({err})", self.display_name)
    }
}

/// Renders the `<marker> <name> (<url>)` status line.
pub fn status_line(name: &str, url: &str, result: &str) -> String {
    format!("{} {name} ({url})", StatusMarker::from_result(result))
}

/// Reports on every item concurrently, printing each line as its task
/// completes.
///
/// Returns the printed lines, in completion order, once every task has
/// finished. Each line goes out in a single `println!`, so concurrent lines
/// never interleave within one line.
pub async fn report_all<T: Reportable>(jenkins: &JenkinsClient, items: Vec<T>) -> Vec<String> {
    let mut workers = JoinSet::new();
    for item in items {
        let jenkins = jenkins.clone();
        workers.spawn(async move {
            match item.report(&jenkins).await {
                Ok(line) => line,
                Err(err) => item.failure_line(&err),
            }
        });
    }

    let mut lines = Vec::with_capacity(workers.len());
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok(line) => {
                println!("{line}");
                lines.push(line);
            }
            // A panicked reporter loses its line; the rest keep going.
            Err(err) => log::error!("reporter task failed: {err}"),
        }
    }
    lines
}
