//! Message correlation and signal broadcast payloads.

use serde::{Deserialize, Serialize};

use crate::Variables;

/// Body of `POST /vertex/message`: correlate a message, optionally scoped to
/// one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelateMessageRequest {
    pub message_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}

/// Outcome of a message correlation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCorrelationResult {
    /// What the message matched (e.g. `"correlated"`).
    pub result_type: String,
    #[serde(default)]
    pub execution_id: String,
    #[serde(default)]
    pub process_instance_id: String,
    #[serde(default)]
    pub process_definition_id: String,
}

/// Body of `POST /vertex/signal`: broadcast a signal to all waiting
/// subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastSignalRequest {
    pub signal_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
}
