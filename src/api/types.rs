use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::client::normalize_if_match;
use super::timestamp::timestamp_to_if_match;

/// Which way data moves along an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
	#[default]
	SourceToTarget,
	TargetToSource,
	Bidirectional,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	pub kind: String,
	pub name: String,
	#[serde(default)]
	pub metadata: Option<Value>,
	#[serde(default)]
	pub etag: String,
	/// Either an RFC 3339 string or the backend's tuple encoding.
	#[serde(default)]
	pub created_at: Option<Value>,
	#[serde(default)]
	pub updated_at: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdgeFlow {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub claim_id: Option<String>,
	pub flow_type: String,
	#[serde(default)]
	pub direction: FlowDirection,
	#[serde(default)]
	pub data_category_id: Option<String>,
	#[serde(default)]
	pub protocol: Option<String>,
	#[serde(default)]
	pub frequency: Option<String>,
	#[serde(default)]
	pub implicit: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	pub id: String,
	pub source: String,
	pub target: String,
	pub kind: String,
	#[serde(default)]
	pub metadata: Option<Value>,
	#[serde(default)]
	pub etag: String,
	#[serde(default)]
	pub current_claim_id: Option<String>,
	#[serde(default)]
	pub review_claim_id: Option<String>,
	#[serde(default)]
	pub flows: Vec<GraphEdgeFlow>,
	/// Flows proposed by imports that are not yet approved.
	#[serde(default)]
	pub review_flows: Vec<GraphEdgeFlow>,
	#[serde(default)]
	pub created_at: Option<Value>,
	#[serde(default)]
	pub updated_at: Option<Value>,
}

impl GraphLink {
	/// Concurrency tag sent when mutating this link: `updated_at` when the
	/// backend sent a readable one, the etag otherwise.
	pub fn if_match_tag(&self) -> String {
		let tag = self
			.updated_at
			.as_ref()
			.map(timestamp_to_if_match)
			.unwrap_or_default();
		if tag.is_empty() {
			normalize_if_match(&self.etag).to_string()
		} else {
			tag
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphResponse {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemaKind {
	pub kind: String,
	pub display_name: String,
	#[serde(default)]
	pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaKindsResponse {
	#[serde(default)]
	pub node_kinds: Vec<SchemaKind>,
	#[serde(default)]
	pub edge_kinds: Vec<SchemaKind>,
}
