//! Audit history events recorded per process instance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single audit event emitted during process execution
/// (e.g. `"ProcessStarted"`, `"ProcessSuspended"`, `"ProcessEnded"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub id: Uuid,
    pub process_instance_id: Uuid,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<String>,
}
