//! Job listing and lookup.

use serde::{Deserialize, Serialize};

use crate::JenkinsClient;
use crate::build::Build;
use crate::prelude::*;

/// One row of the server's job index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    /// Job name, unique on the server.
    pub name: String,
    /// Absolute URL of the job page.
    pub url: String,
}

/// Full job record with a reference to its most recent build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub name: String,
    pub url: String,
    /// Missing when the job has never run.
    pub last_build: Option<BuildRef>,
}

/// Pointer to one build of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    pub number: u64,
    pub url: String,
}

#[derive(Deserialize)]
struct JobIndex {
    jobs: Vec<JobSummary>,
}

impl JenkinsClient {
    /// Lists every job known to the server, in server order.
    pub async fn jobs(&self) -> Result<Vec<JobSummary>> {
        let index: JobIndex = self.get_json("api/json").await?;
        Ok(index.jobs)
    }

    /// Fetches one job's full record.
    pub async fn job(&self, name: &str) -> Result<JobDetail> {
        self.get_json(&format!("job/{name}/api/json")).await
    }

    /// Resolves a job's most recent build.
    pub async fn last_build(&self, name: &str) -> Result<Build> {
        let job = self.job(name).await?;
        let build_ref = job
            .last_build
            .ok_or_else(|| Error::NoBuilds(name.to_string()))?;
        self.build(name, build_ref.number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn jobs_returns_the_index_in_server_order() {
        let mut server = Server::new_async().await;
        let index = server
            .mock("GET", "/api/json")
            .with_status(200)
            .with_body(
                r#"{"jobs":[
                    {"name":"deploy","url":"http://ci/job/deploy/","color":"blue"},
                    {"name":"nightly","url":"http://ci/job/nightly/","color":"red"}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let jenkins = JenkinsClient::new(server.url(), "admin", None);
        let jobs = jenkins.jobs().await.unwrap();

        index.assert_async().await;
        assert_eq!(
            jobs,
            vec![
                JobSummary {
                    name: "deploy".to_string(),
                    url: "http://ci/job/deploy/".to_string(),
                },
                JobSummary {
                    name: "nightly".to_string(),
                    url: "http://ci/job/nightly/".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn last_build_follows_the_job_record() {
        let mut server = Server::new_async().await;
        let record = server
            .mock("GET", "/job/deploy/api/json")
            .with_status(200)
            .with_body(
                r#"{"name":"deploy","url":"http://ci/job/deploy/",
                    "lastBuild":{"number":7,"url":"http://ci/job/deploy/7/"}}"#,
            )
            .expect(1)
            .create_async()
            .await;
        let referenced = server
            .mock("GET", "/job/deploy/7/api/json")
            .with_status(200)
            .with_body(
                r#"{"number":7,"url":"http://ci/job/deploy/7/",
                    "result":"SUCCESS","building":false}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let jenkins = JenkinsClient::new(server.url(), "admin", None);
        let build = jenkins.last_build("deploy").await.unwrap();

        record.assert_async().await;
        referenced.assert_async().await;
        assert_eq!(build.number, 7);
        assert_eq!(build.result_code(), "SUCCESS");
    }

    #[tokio::test]
    async fn last_build_reports_jobs_that_never_ran() {
        let mut server = Server::new_async().await;
        let record = server
            .mock("GET", "/job/fresh/api/json")
            .with_status(200)
            .with_body(r#"{"name":"fresh","url":"http://ci/job/fresh/","lastBuild":null}"#)
            .expect(1)
            .create_async()
            .await;

        let jenkins = JenkinsClient::new(server.url(), "admin", None);
        let err = jenkins.last_build("fresh").await.unwrap_err();

        record.assert_async().await;
        assert!(matches!(err, Error::NoBuilds(ref job) if job == "fresh"));
    }
}
