//! Display labels for kinds, relations and flow directions.

use crate::api::{FlowDirection, SchemaKind, SchemaKindsResponse};

const EMPTY_KIND: &str = "—";
const RELATION_FALLBACK: &str = "Koppling";

const RELATION_LABELS: &[(&str, &str)] = &[
	("depends_on", "Beroende av"),
	("runs_on", "Körs på"),
	("stores_data", "Lagrar data i"),
	("flows_to", "Flödar till"),
	("owned_by", "Ägs av"),
	("external_dependency", "Externt beroende"),
	("backs_up_to", "Backar upp till"),
];

fn kind_label(kinds: Option<&[SchemaKind]>, kind: &str) -> String {
	if kind.is_empty() {
		return EMPTY_KIND.into();
	}
	kinds
		.and_then(|kinds| kinds.iter().find(|k| k.kind == kind))
		.map(|k| k.display_name.clone())
		.unwrap_or_else(|| kind.to_string())
}

/// Schema display name of a node kind, or the kind itself.
pub fn node_kind_label(schema: Option<&SchemaKindsResponse>, kind: &str) -> String {
	kind_label(schema.map(|s| s.node_kinds.as_slice()), kind)
}

/// Schema display name of an edge kind, or the kind itself.
pub fn edge_kind_label(schema: Option<&SchemaKindsResponse>, kind: &str) -> String {
	kind_label(schema.map(|s| s.edge_kinds.as_slice()), kind)
}

/// Swedish wording for a relation kind; unknown kinds read as "Koppling".
pub fn relation_label(kind: &str) -> &'static str {
	RELATION_LABELS
		.iter()
		.find(|(k, _)| *k == kind)
		.map(|(_, label)| *label)
		.unwrap_or(RELATION_FALLBACK)
}

/// Swedish wording for the way a flow moves.
pub fn direction_label(direction: FlowDirection) -> &'static str {
	match direction {
		FlowDirection::SourceToTarget => "Källa → Mål",
		FlowDirection::TargetToSource => "Mål → Källa",
		FlowDirection::Bidirectional => "Dubbelriktad",
	}
}
