//! User/service task instances and the task-lifecycle request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Variables;

/// A user or service task created during process execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTask {
    pub id: Uuid,
    pub process_instance_id: Uuid,
    pub name: String,
    /// Task type as reported by the engine (e.g. `"userTask"`).
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Form key for rendered user task forms, when the model declares one.
    #[serde(default)]
    pub form_key: Option<String>,
    /// Optional JSON schema describing a dynamic form.
    #[serde(default)]
    pub form_schema: Option<String>,
}

impl UserTask {
    /// Whether the task is still open (not yet completed).
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }
}

/// Body of `POST /task/{id}/claim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTaskRequest {
    pub user_id: String,
}

/// Body of `POST /task/{id}/complete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

/// Body of `POST /task/{id}/delegate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateTaskRequest {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_task_deserializes_engine_payload() {
        let json = r#"{
            "id": "5f0e9d8c-7b6a-4d3c-9e2f-1a0b9c8d7e6f",
            "processInstanceId": "1c9a7b3d-0e2f-4c6a-8b1d-3e5f7a9c0b2d",
            "name": "Approve invoice",
            "type": "userTask",
            "assignee": "demo",
            "createdAt": "2026-02-01T12:00:10Z",
            "formKey": "embedded:app:forms/approve.html"
        }"#;
        let task: UserTask = serde_json::from_str(json).expect("deserialize task");
        assert_eq!(task.kind, "userTask");
        assert_eq!(task.assignee.as_deref(), Some("demo"));
        assert!(task.is_open());
        assert!(task.form_schema.is_none());
    }

    #[test]
    fn complete_request_serializes_variables() {
        let mut variables = Variables::new();
        variables.insert("approved".into(), serde_json::Value::Bool(true));
        let request = CompleteTaskRequest {
            variables: Some(variables),
        };
        let json = serde_json::to_value(&request).expect("serialize complete request");
        assert_eq!(json["variables"]["approved"], true);

        let empty = CompleteTaskRequest::default();
        let json = serde_json::to_value(&empty).expect("serialize empty complete request");
        assert!(json.get("variables").is_none());
    }

    #[test]
    fn claim_request_uses_camel_case() {
        let request = ClaimTaskRequest { user_id: "demo".into() };
        let json = serde_json::to_value(&request).expect("serialize claim request");
        assert_eq!(json["userId"], "demo");
    }
}
