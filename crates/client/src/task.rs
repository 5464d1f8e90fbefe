//! Task operations: listing, claiming, completing and delegating user tasks.

use uuid::Uuid;

use vertex_types::{ClaimTaskRequest, CompleteTaskRequest, DelegateTaskRequest, UserTask, Variables};

use crate::BpmnClient;
use crate::error::Result;

impl BpmnClient {
    /// List tasks, optionally filtered by instance and assignee.
    pub async fn list_tasks(
        &self,
        process_instance_id: Option<Uuid>,
        assignee: Option<&str>,
    ) -> Result<Vec<UserTask>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(instance_id) = process_instance_id {
            query.push(("processInstanceId", instance_id.to_string()));
        }
        if let Some(assignee) = assignee {
            query.push(("assignee", assignee.to_string()));
        }
        self.get_json("/task", &query).await
    }

    /// Fetch a single task by identifier.
    pub async fn get_task(&self, id: Uuid) -> Result<UserTask> {
        self.get_json_or_not_found(&format!("/task/{}", id), "task", id).await
    }

    /// Claim a task for a user.
    pub async fn claim_task(&self, id: Uuid, user_id: &str) -> Result<()> {
        let request = ClaimTaskRequest {
            user_id: user_id.to_string(),
        };
        self.post_no_content(&format!("/task/{}/claim", id), &request).await
    }

    /// Complete a task, optionally submitting variables.
    pub async fn complete_task(&self, id: Uuid, variables: Option<Variables>) -> Result<()> {
        let request = CompleteTaskRequest { variables };
        self.post_no_content(&format!("/task/{}/complete", id), &request).await
    }

    /// Delegate a task to another user.
    pub async fn delegate_task(&self, id: Uuid, user_id: &str) -> Result<()> {
        let request = DelegateTaskRequest {
            user_id: user_id.to_string(),
        };
        self.post_no_content(&format!("/task/{}/delegate", id), &request).await
    }
}
