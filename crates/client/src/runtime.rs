//! Runtime operations: starting instances, querying status, messaging and
//! signaling.

use std::collections::HashMap;

use uuid::Uuid;

use vertex_types::{
    BroadcastSignalRequest, CorrelateMessageRequest, MessageCorrelationResult, ProcessInstance,
    StartProcessRequest, VariableValue, Variables,
};

use crate::BpmnClient;
use crate::error::Result;

impl BpmnClient {
    /// Start a process instance by definition key with an input mapping.
    pub async fn start_process(&self, process_definition_key: &str, variables: Variables) -> Result<ProcessInstance> {
        self.start_process_with(StartProcessRequest::new(process_definition_key, variables))
            .await
    }

    /// Start a process instance with full control over the request
    /// (business key, tenant).
    pub async fn start_process_with(&self, request: StartProcessRequest) -> Result<ProcessInstance> {
        self.post_json("/runtime/start", &request).await
    }

    /// Fetch a single process instance by identifier.
    pub async fn get_instance(&self, id: Uuid) -> Result<ProcessInstance> {
        self.get_json_or_not_found(&format!("/runtime/{}", id), "process instance", id)
            .await
    }

    /// List process instances, optionally filtered by definition and tenant.
    pub async fn list_instances(
        &self,
        process_definition_id: Option<Uuid>,
        tenant_id: Option<&str>,
    ) -> Result<Vec<ProcessInstance>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(definition_id) = process_definition_id {
            query.push(("processDefinitionId", definition_id.to_string()));
        }
        if let Some(tenant_id) = tenant_id {
            query.push(("tenantId", tenant_id.to_string()));
        }
        self.get_json("/runtime", &query).await
    }

    /// Query the status of an instance by identifier.
    ///
    /// The status is an opaque string; the engine's own state value wins, and
    /// `"completed"` / `"running"` are derived from the lifecycle timestamps
    /// otherwise. See [`ProcessInstance::status`].
    pub async fn get_process_status(&self, id: Uuid) -> Result<String> {
        let instance = self.get_instance(id).await?;
        Ok(instance.status().to_string())
    }

    /// Fetch the current variables of an instance, tagged with the engine's
    /// runtime type names.
    pub async fn get_variables(&self, id: Uuid) -> Result<HashMap<String, VariableValue>> {
        self.get_json_or_not_found(&format!("/vertex/variable/{}", id), "process instance", id)
            .await
    }

    /// Correlate a message, optionally scoped to one instance.
    pub async fn correlate_message(&self, request: CorrelateMessageRequest) -> Result<MessageCorrelationResult> {
        self.post_json("/vertex/message", &request).await
    }

    /// Broadcast a signal to every waiting subscription.
    pub async fn broadcast_signal(&self, signal_name: &str, variables: Option<Variables>) -> Result<()> {
        let request = BroadcastSignalRequest {
            signal_name: signal_name.to_string(),
            variables,
        };
        self.post_no_content("/vertex/signal", &request).await
    }
}
