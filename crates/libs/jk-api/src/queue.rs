//! Build queue inspection.

use crate::JenkinsClient;
use crate::prelude::*;

impl JenkinsClient {
    /// Returns the queue endpoint's JSON body verbatim.
    pub async fn queue_raw(&self) -> Result<String> {
        self.get_text("queue/api/json").await
    }
}
