//! Typed access to the graph backend.

mod client;
mod error;
mod timestamp;
mod types;

pub use client::{ApiClient, ApiConfig, EdgeApi};
pub use error::{ApiError, Result};
pub use types::{
	FlowDirection, GraphEdgeFlow, GraphLink, GraphNode, GraphResponse, SchemaKind,
	SchemaKindsResponse,
};
