//! Shared wire types for the VertexBPMN engine REST API.
//!
//! Everything here mirrors the JSON the engine serves: camelCase property
//! names, GUID identifiers, UTC ISO-8601 timestamps. The types are split by
//! API area the same way the engine routes them (repository, runtime, task,
//! history).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod history;
pub mod incident;
pub mod message;
pub mod process;
pub mod task;
pub mod variable;

pub use history::HistoryEvent;
pub use incident::Incident;
pub use message::{BroadcastSignalRequest, CorrelateMessageRequest, MessageCorrelationResult};
pub use process::{DeployRequest, ProcessDefinition, ProcessInstance, StartProcessRequest};
pub use task::{ClaimTaskRequest, CompleteTaskRequest, DelegateTaskRequest, UserTask};
pub use variable::VariableValue;

/// Process variables: a JSON object mapping variable names to arbitrary
/// JSON values.
pub type Variables = serde_json::Map<String, serde_json::Value>;

/// Response of the engine's `GET /health` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineHealth {
    /// Health indicator, `"ok"` when the engine is up.
    pub status: String,
    /// Server time the health sample was taken.
    pub timestamp: DateTime<Utc>,
}

impl EngineHealth {
    /// Whether the engine reported itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_health_deserializes_and_checks() {
        let json = r#"{"status":"ok","timestamp":"2026-01-15T09:30:00Z"}"#;
        let health: EngineHealth = serde_json::from_str(json).expect("deserialize EngineHealth");
        assert!(health.is_ok());

        let json = r#"{"status":"degraded","timestamp":"2026-01-15T09:30:00Z"}"#;
        let health: EngineHealth = serde_json::from_str(json).expect("deserialize EngineHealth");
        assert!(!health.is_ok());
    }
}
