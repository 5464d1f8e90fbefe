//! Repository operations: deploying and managing process definitions.

use std::path::Path;

use tracing::info;
use uuid::Uuid;

use vertex_types::{DeployRequest, ProcessDefinition};

use crate::BpmnClient;
use crate::error::{ClientError, Result};

impl BpmnClient {
    /// Deploy a BPMN model file and return the deployed definition.
    ///
    /// The file is read client-side and shipped as raw BPMN XML; the
    /// deployment name defaults to the file name. The returned definition's
    /// `key` is what [`BpmnClient::start_process`](crate::BpmnClient::start_process)
    /// expects.
    pub async fn deploy_process(&self, model_path: impl AsRef<Path>) -> Result<ProcessDefinition> {
        self.deploy_process_for_tenant(model_path, None).await
    }

    /// Deploy a BPMN model file under a tenant.
    pub async fn deploy_process_for_tenant(
        &self,
        model_path: impl AsRef<Path>,
        tenant_id: Option<&str>,
    ) -> Result<ProcessDefinition> {
        let model_path = model_path.as_ref();
        let bpmn_xml = tokio::fs::read_to_string(model_path)
            .await
            .map_err(|e| ClientError::model_file(model_path.display().to_string(), e))?;
        self.deploy_xml(&bpmn_xml, &deployment_name(model_path), tenant_id)
            .await
    }

    /// Deploy raw BPMN XML under a deployment name, optionally tenant-scoped.
    pub async fn deploy_xml(
        &self,
        bpmn_xml: &str,
        name: &str,
        tenant_id: Option<&str>,
    ) -> Result<ProcessDefinition> {
        let request = DeployRequest {
            bpmn_xml: bpmn_xml.to_string(),
            name: name.to_string(),
            tenant_id: tenant_id.map(str::to_string),
        };
        let definition: ProcessDefinition = self.post_json("/repository", &request).await?;
        info!(key = %definition.key, version = definition.version, "deployed process definition");
        Ok(definition)
    }

    /// List deployed definitions, optionally filtered by key and tenant.
    pub async fn list_definitions(
        &self,
        key: Option<&str>,
        tenant_id: Option<&str>,
    ) -> Result<Vec<ProcessDefinition>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(key) = key {
            query.push(("key", key.to_string()));
        }
        if let Some(tenant_id) = tenant_id {
            query.push(("tenantId", tenant_id.to_string()));
        }
        self.get_json("/repository", &query).await
    }

    /// Fetch a single definition by identifier.
    pub async fn get_definition(&self, id: Uuid) -> Result<ProcessDefinition> {
        self.get_json_or_not_found(&format!("/repository/{}", id), "process definition", id)
            .await
    }

    /// Delete a deployed definition.
    pub async fn delete_definition(&self, id: Uuid) -> Result<()> {
        self.delete(&format!("/repository/{}", id)).await
    }
}

/// Deployment name for a model file: the file name, or the full path when
/// there is none (e.g. a path ending in `..`).
fn deployment_name(model_path: &Path) -> String {
    model_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| model_path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_name_uses_the_file_name() {
        assert_eq!(deployment_name(Path::new("path/to/model.bpmn")), "model.bpmn");
        assert_eq!(deployment_name(Path::new("model.bpmn")), "model.bpmn");
    }

    #[test]
    fn deployment_name_falls_back_to_the_path() {
        assert_eq!(deployment_name(Path::new("path/..")), "path/..");
    }
}
