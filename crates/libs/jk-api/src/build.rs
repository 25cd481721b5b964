//! Build records and console output.

use serde::{Deserialize, Serialize};

use crate::JenkinsClient;
use crate::prelude::*;

/// One execution of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    pub number: u64,
    /// Absolute URL of the build page.
    pub url: String,
    /// Server result string, absent while the build is running.
    pub result: Option<String>,
    /// True while the build is still executing.
    #[serde(default)]
    pub building: bool,
}

impl Build {
    /// Raw result code; empty for a build that has not finished.
    pub fn result_code(&self) -> String {
        self.result.clone().unwrap_or_default()
    }
}

impl JenkinsClient {
    /// Fetches one numbered build of a job.
    pub async fn build(&self, job: &str, number: u64) -> Result<Build> {
        self.get_json(&format!("job/{job}/{number}/api/json")).await
    }

    /// Fetches a build's console output verbatim.
    pub async fn console_text(&self, job: &str, number: u64) -> Result<String> {
        self.get_text(&format!("job/{job}/{number}/consoleText"))
            .await
    }
}
