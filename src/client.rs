//! REST API client module
//!
//! Blocking HTTP/JSON client used by the TUI: one method per CRUD route,
//! each call a single round trip with a fixed timeout.

use std::time::Duration;

use crate::error::{DaytabError, Result};
use crate::model::{NewTask, Task, TaskPatch};

/// Fallback base URL when nothing else is configured
const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Per-request timeout
const TIMEOUT_SECS: u64 = 5;

pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    /// Resolve the base URL and build the agent.
    ///
    /// Precedence: explicit argument (e.g. `--api`), then the
    /// `DAYTAB_API_URL` environment variable at run time, then the same
    /// variable captured at build time, then localhost.
    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| {
                std::env::var("DAYTAB_API_URL")
                    .ok()
                    .filter(|v| !v.is_empty())
            })
            .or_else(|| option_env!("DAYTAB_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /tasks
    pub fn list(&self) -> Result<Vec<Task>> {
        let response = self
            .agent
            .get(&self.url("/tasks"))
            .call()
            .map_err(|e| DaytabError::http(e.to_string()))?;
        Ok(response.into_json()?)
    }

    /// POST /tasks
    pub fn create(&self, new: &NewTask) -> Result<Task> {
        let response = self
            .agent
            .post(&self.url("/tasks"))
            .send_json(new)
            .map_err(|e| DaytabError::http(e.to_string()))?;
        Ok(response.into_json()?)
    }

    /// PUT /tasks/{id}
    pub fn update(&self, id: i64, patch: &TaskPatch) -> Result<Task> {
        let response = self
            .agent
            .put(&self.url(&format!("/tasks/{id}")))
            .send_json(patch)
            .map_err(|e| DaytabError::http(e.to_string()))?;
        Ok(response.into_json()?)
    }

    /// DELETE /tasks/{id}
    ///
    /// The ack body is discarded; reaching here without an error is the ack.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.agent
            .delete(&self.url(&format!("/tasks/{id}")))
            .call()
            .map_err(|e| DaytabError::http(e.to_string()))?;
        Ok(())
    }
}
