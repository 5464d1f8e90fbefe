//! Process definitions and instances, plus the repository/runtime request
//! payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Variables;

/// A BPMN process definition deployed to the engine's repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    pub id: Uuid,
    /// Stable key used to start instances of this definition.
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub version: i32,
    /// Raw BPMN 2.0 XML. Listing endpoints may omit it.
    #[serde(default)]
    pub bpmn_xml: String,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A running or completed execution of a deployed definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    pub id: Uuid,
    pub process_definition_id: Uuid,
    #[serde(default)]
    pub business_key: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Engine-reported execution state. May be empty for freshly started
    /// instances; see [`ProcessInstance::status`].
    #[serde(default)]
    pub state: String,
}

impl ProcessInstance {
    /// Whether this instance has finished executing.
    pub fn is_ended(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Opaque status string for this instance.
    ///
    /// The engine's `state` field wins when set. Otherwise the status is
    /// derived from the lifecycle timestamps: an end timestamp means
    /// `"completed"`, no end timestamp means `"running"`.
    pub fn status(&self) -> &str {
        if !self.state.is_empty() {
            &self.state
        } else if self.is_ended() {
            "completed"
        } else {
            "running"
        }
    }
}

/// Body of `POST /repository`: deploy a BPMN model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRequest {
    pub bpmn_xml: String,
    /// Display name for the deployment, typically the model file name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Body of `POST /runtime/start`: start an instance by definition key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartProcessRequest {
    pub process_definition_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl StartProcessRequest {
    /// Minimal start request: key plus variables, no business key or tenant.
    pub fn new(process_definition_key: impl Into<String>, variables: Variables) -> Self {
        Self {
            process_definition_key: process_definition_key.into(),
            variables: (!variables.is_empty()).then_some(variables),
            business_key: None,
            tenant_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_definition_deserializes_engine_payload() {
        let json = r#"{
            "id": "9a1f6d2e-8f0f-4a8e-9f6e-1d2c3b4a5e6f",
            "key": "Process_HelloWorld",
            "name": "hello-world.bpmn",
            "version": 3,
            "bpmnXml": "<definitions/>",
            "tenantId": null,
            "createdAt": "2026-02-01T12:00:00Z"
        }"#;
        let def: ProcessDefinition = serde_json::from_str(json).expect("deserialize definition");
        assert_eq!(def.key, "Process_HelloWorld");
        assert_eq!(def.version, 3);
        assert!(def.tenant_id.is_none());
    }

    #[test]
    fn process_definition_tolerates_omitted_xml() {
        // Listing responses carry metadata only.
        let json = r#"{
            "id": "9a1f6d2e-8f0f-4a8e-9f6e-1d2c3b4a5e6f",
            "key": "Process_HelloWorld",
            "name": "hello-world.bpmn",
            "createdAt": "2026-02-01T12:00:00Z"
        }"#;
        let def: ProcessDefinition = serde_json::from_str(json).expect("deserialize definition");
        assert!(def.bpmn_xml.is_empty());
        assert_eq!(def.version, 0);
    }

    #[test]
    fn instance_status_prefers_engine_state() {
        let json = r#"{
            "id": "1c9a7b3d-0e2f-4c6a-8b1d-3e5f7a9c0b2d",
            "processDefinitionId": "9a1f6d2e-8f0f-4a8e-9f6e-1d2c3b4a5e6f",
            "startedAt": "2026-02-01T12:00:05Z",
            "state": "Suspended"
        }"#;
        let instance: ProcessInstance = serde_json::from_str(json).expect("deserialize instance");
        assert_eq!(instance.status(), "Suspended");
        assert!(!instance.is_ended());
    }

    #[test]
    fn instance_status_falls_back_to_lifecycle() {
        let running = r#"{
            "id": "1c9a7b3d-0e2f-4c6a-8b1d-3e5f7a9c0b2d",
            "processDefinitionId": "9a1f6d2e-8f0f-4a8e-9f6e-1d2c3b4a5e6f",
            "startedAt": "2026-02-01T12:00:05Z"
        }"#;
        let instance: ProcessInstance = serde_json::from_str(running).expect("deserialize instance");
        assert_eq!(instance.status(), "running");

        let ended = r#"{
            "id": "1c9a7b3d-0e2f-4c6a-8b1d-3e5f7a9c0b2d",
            "processDefinitionId": "9a1f6d2e-8f0f-4a8e-9f6e-1d2c3b4a5e6f",
            "startedAt": "2026-02-01T12:00:05Z",
            "endedAt": "2026-02-01T12:03:00Z",
            "state": ""
        }"#;
        let instance: ProcessInstance = serde_json::from_str(ended).expect("deserialize instance");
        assert_eq!(instance.status(), "completed");
        assert!(instance.is_ended());
    }

    #[test]
    fn start_request_serializes_camel_case_and_skips_empty() {
        let mut variables = Variables::new();
        variables.insert("key".into(), serde_json::Value::String("value".into()));
        let request = StartProcessRequest::new("Process_HelloWorld", variables);

        let json = serde_json::to_value(&request).expect("serialize start request");
        assert_eq!(json["processDefinitionKey"], "Process_HelloWorld");
        assert_eq!(json["variables"]["key"], "value");
        assert!(json.get("businessKey").is_none());
        assert!(json.get("tenantId").is_none());
    }

    #[test]
    fn start_request_without_variables_omits_them() {
        let request = StartProcessRequest::new("Process_HelloWorld", Variables::new());
        let json = serde_json::to_value(&request).expect("serialize start request");
        assert!(json.get("variables").is_none());
    }
}
