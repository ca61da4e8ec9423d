use std::collections::HashSet;

use super::legend::{CategoryNameCache, UNCATEGORIZED};
use crate::api::{GraphEdgeFlow, GraphLink, GraphNode};

const DATA_CATEGORY_KIND: &str = "data_category";

/// Category id of a flow, or the uncategorized sentinel.
pub fn flow_category(flow: &GraphEdgeFlow) -> &str {
	match flow.data_category_id.as_deref() {
		Some(id) if !id.is_empty() => id,
		_ => UNCATEGORIZED,
	}
}

/// Distinct category ids across the flows of `links`, in first-seen order.
///
/// Review flows only count when proposals are shown.
pub fn visible_category_ids(links: &[GraphLink], show_proposals: bool) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut ids = Vec::new();
	for link in links {
		for flow in link_flows(link, show_proposals) {
			let id = flow_category(flow);
			if seen.insert(id) {
				ids.push(id.to_string());
			}
		}
	}
	ids
}

pub(super) fn link_flows(link: &GraphLink, show_proposals: bool) -> impl Iterator<Item = &GraphEdgeFlow> {
	let review: &[GraphEdgeFlow] = if show_proposals { &link.review_flows } else { &[] };
	link.flows.iter().chain(review)
}

/// Records the names of all `data_category` nodes. Entries for other ids are
/// left in place.
pub fn cache_category_names(cache: &mut CategoryNameCache, nodes: &[GraphNode]) {
	for node in nodes
		.iter()
		.filter(|n| n.kind.eq_ignore_ascii_case(DATA_CATEGORY_KIND))
	{
		cache.insert(node.id.clone(), node.name.clone());
	}
}
