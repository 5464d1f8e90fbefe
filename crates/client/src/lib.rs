//! VertexBPMN engine API client.
//!
//! This crate provides a lightweight client for interacting with a
//! VertexBPMN-style workflow engine over its REST API. It focuses on:
//!
//! - Constructing an HTTP client with sensible defaults
//! - Discovering configuration from `VERTEX_API_BASE` / `VERTEX_API_TOKEN`
//! - Validating the base address for safety
//! - Typed operations per API area: repository, runtime, management, task,
//!   history
//!
//! The primary entry point is [`BpmnClient`]. The canonical flow deploys a
//! model, starts an instance and queries its status:
//!
//! ```ignore
//! use vertex_client::BpmnClient;
//! use vertex_types::Variables;
//!
//! #[tokio::main]
//! async fn main() -> vertex_client::Result<()> {
//!     let client = BpmnClient::new("http://localhost:5263/api")?;
//!     let definition = client.deploy_process("path/to/model.bpmn").await?;
//!
//!     let mut variables = Variables::new();
//!     variables.insert("key".into(), "value".into());
//!     let instance = client.start_process(&definition.key, variables).await?;
//!
//!     let status = client.get_process_status(instance.id).await?;
//!     println!("Status: {}", status);
//!     Ok(())
//! }
//! ```

mod client;
pub mod error;
mod history;
mod management;
mod repository;
mod runtime;
mod task;

pub use client::{BASE_URL_ENV, BpmnClient, DEFAULT_BASE_URL, TOKEN_ENV};
pub use error::{ClientError, Result};
