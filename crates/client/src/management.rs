//! Management operations: instance lifecycle control and engine metrics.

use uuid::Uuid;

use crate::BpmnClient;
use crate::error::Result;

impl BpmnClient {
    /// Suspend a running process instance.
    pub async fn suspend_instance(&self, id: Uuid) -> Result<()> {
        self.post_empty(&format!("/management/suspend-process-instance/{}", id))
            .await
    }

    /// Resume a suspended process instance.
    pub async fn resume_instance(&self, id: Uuid) -> Result<()> {
        self.post_empty(&format!("/management/resume-process-instance/{}", id))
            .await
    }

    /// Delete a process instance.
    pub async fn delete_instance(&self, id: Uuid) -> Result<()> {
        self.post_empty(&format!("/management/delete-process-instance/{}", id))
            .await
    }

    /// Fetch engine metrics as an opaque JSON object.
    pub async fn metrics(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        self.get_json("/management/metrics", &[]).await
    }
}
