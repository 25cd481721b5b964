//! Node listing and liveness polling.

use serde::{Deserialize, Serialize};

use crate::JenkinsClient;
use crate::prelude::*;

/// One row of the server's node index.
///
/// Carries the name only. Liveness comes from [`JenkinsClient::poll_node`];
/// the index is allowed to be stale and is never a source of node state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    pub display_name: String,
}

/// Freshly polled node state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeState {
    pub display_name: String,
    pub offline: bool,
}

#[derive(Deserialize)]
struct NodeIndex {
    computer: Vec<NodeSummary>,
}

impl JenkinsClient {
    /// Lists every node attached to the server.
    pub async fn nodes(&self) -> Result<Vec<NodeSummary>> {
        let index: NodeIndex = self.get_json("computer/api/json").await?;
        Ok(index.computer)
    }

    /// Polls one node's live state.
    pub async fn poll_node(&self, name: &str) -> Result<NodeState> {
        self.get_json(&format!("computer/{name}/api/json")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn nodes_lists_names_only() {
        let mut server = Server::new_async().await;
        let index = server
            .mock("GET", "/computer/api/json")
            .with_status(200)
            .with_body(
                r#"{"busyExecutors":1,"computer":[
                    {"displayName":"built-in","offline":false},
                    {"displayName":"linux-arm64","offline":true}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let jenkins = JenkinsClient::new(server.url(), "admin", None);
        let nodes = jenkins.nodes().await.unwrap();

        index.assert_async().await;
        let names: Vec<&str> = nodes.iter().map(|n| n.display_name.as_str()).collect();
        assert_eq!(names, ["built-in", "linux-arm64"]);
    }

    #[tokio::test]
    async fn poll_node_reads_fresh_state() {
        let mut server = Server::new_async().await;
        let poll = server
            .mock("GET", "/computer/linux-arm64/api/json")
            .with_status(200)
            .with_body(r#"{"displayName":"linux-arm64","offline":true,"idle":true}"#)
            .expect(1)
            .create_async()
            .await;

        let jenkins = JenkinsClient::new(server.url(), "admin", None);
        let state = jenkins.poll_node("linux-arm64").await.unwrap();

        poll.assert_async().await;
        assert!(state.offline);
        assert_eq!(state.display_name, "linux-arm64");
    }
}
