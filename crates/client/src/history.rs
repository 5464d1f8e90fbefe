//! History and incident queries.

use uuid::Uuid;

use vertex_types::{HistoryEvent, Incident};

use crate::BpmnClient;
use crate::error::Result;

impl BpmnClient {
    /// List the audit trail of a process instance.
    pub async fn list_history(&self, process_instance_id: Uuid) -> Result<Vec<HistoryEvent>> {
        self.get_json(
            &format!("/history/by-process-instance/{}", process_instance_id),
            &[],
        )
        .await
    }

    /// Fetch a single history event by identifier.
    pub async fn get_history_event(&self, id: Uuid) -> Result<HistoryEvent> {
        self.get_json_or_not_found(&format!("/history/{}", id), "history event", id)
            .await
    }

    /// List all incidents known to the engine.
    pub async fn list_incidents(&self) -> Result<Vec<Incident>> {
        self.get_json("/vertex/incident", &[]).await
    }

    /// Fetch a single incident by identifier.
    pub async fn get_incident(&self, id: Uuid) -> Result<Incident> {
        self.get_json_or_not_found(&format!("/vertex/incident/{}", id), "incident", id)
            .await
    }
}
