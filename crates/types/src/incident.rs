//! Incidents raised by failed process execution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An error or failure recorded against a process instance.
///
/// Served in the Camunda-compatible DTO shape: `incidentType` and
/// `incidentTimestamp` rather than bare `type`/`createdAt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: Uuid,
    pub process_instance_id: Uuid,
    /// Incident category (e.g. `"failedJob"`).
    #[serde(default)]
    pub incident_type: String,
    pub message: String,
    pub incident_timestamp: DateTime<Utc>,
    /// Empty string when the incident is not tenant-scoped.
    #[serde(default)]
    pub tenant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_deserializes_engine_payload() {
        let json = r#"{
            "id": "3c5e7a9b-1d2f-4b6c-8a0e-2f4a6b8c0d1e",
            "processInstanceId": "1c9a7b3d-0e2f-4c6a-8b1d-3e5f7a9c0b2d",
            "incidentType": "failedJob",
            "message": "service task handler threw",
            "incidentTimestamp": "2026-02-01T12:01:00Z",
            "tenantId": ""
        }"#;
        let incident: Incident = serde_json::from_str(json).expect("deserialize incident");
        assert_eq!(incident.incident_type, "failedJob");
        assert!(incident.message.contains("handler"));
        assert!(incident.tenant_id.is_empty());
    }
}
