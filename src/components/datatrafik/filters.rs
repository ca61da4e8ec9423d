//! Which flows the datatrafik view shows.

use super::categories::{flow_category, link_flows};
use crate::api::{FlowDirection, GraphEdgeFlow, GraphLink};
use crate::collate;

/// Filter value meaning "every category".
pub const ALL_CATEGORIES: &str = "__all__";
/// Filter value meaning "every flow type".
pub const ALL_FLOW_TYPES: &str = "__all__";

/// Direction a flow must move in to stay visible, relative to its link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectionFilter {
	#[default]
	All,
	/// Source to target, or both ways.
	Outgoing,
	/// Target to source, or both ways.
	Incoming,
}

impl DirectionFilter {
	pub const ALL: [DirectionFilter; 3] = [Self::All, Self::Outgoing, Self::Incoming];

	/// Form value of this option.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "all",
			Self::Outgoing => "outgoing",
			Self::Incoming => "incoming",
		}
	}

	/// Reads a form value; anything unknown means no direction filter.
	pub fn from_value(value: &str) -> Self {
		match value {
			"outgoing" => Self::Outgoing,
			"incoming" => Self::Incoming,
			_ => Self::All,
		}
	}

	pub fn label_key(self) -> &'static str {
		match self {
			Self::All => "datatrafik.directionAll",
			Self::Outgoing => "datatrafik.directionOutgoing",
			Self::Incoming => "datatrafik.directionIncoming",
		}
	}

	fn admits(self, direction: FlowDirection) -> bool {
		match (self, direction) {
			(Self::All, _) | (_, FlowDirection::Bidirectional) => true,
			(Self::Outgoing, d) => d == FlowDirection::SourceToTarget,
			(Self::Incoming, d) => d == FlowDirection::TargetToSource,
		}
	}
}

/// Datatrafik filter state. While `enabled` is false every flow is shown and
/// the other fields are only remembered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatatrafikFilters {
	pub enabled: bool,
	pub direction: DirectionFilter,
	/// A category id, [`ALL_CATEGORIES`], or the uncategorized sentinel.
	pub category: String,
	/// A flow type or [`ALL_FLOW_TYPES`].
	pub flow_type: String,
}

impl Default for DatatrafikFilters {
	fn default() -> Self {
		Self {
			enabled: false,
			direction: DirectionFilter::All,
			category: ALL_CATEGORIES.into(),
			flow_type: ALL_FLOW_TYPES.into(),
		}
	}
}

impl DatatrafikFilters {
	/// Back to showing everything.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Applies a legend click: filtering turns on, and clicking the active
	/// category again clears the category.
	pub fn pick_category(&mut self, clicked: &str) {
		self.enabled = true;
		self.category = toggle_category(&self.category, clicked);
	}

	/// True when enabled and at least one field narrows the view.
	pub fn is_narrowing(&self) -> bool {
		self.enabled
			&& (self.direction != DirectionFilter::All
				|| self.category != ALL_CATEGORIES
				|| self.flow_type != ALL_FLOW_TYPES)
	}

	pub fn flow_matches(&self, flow: &GraphEdgeFlow) -> bool {
		if !self.enabled {
			return true;
		}
		(self.flow_type == ALL_FLOW_TYPES || flow.flow_type.trim() == self.flow_type)
			&& (self.category == ALL_CATEGORIES || flow_category(flow) == self.category)
			&& self.direction.admits(flow.direction)
	}

	/// Whether any visible flow of `link` passes the filter.
	pub fn link_matches(&self, link: &GraphLink, show_proposals: bool) -> bool {
		!self.enabled || link_flows(link, show_proposals).any(|f| self.flow_matches(f))
	}
}

/// Category filter after clicking a legend row: the clicked category, or all
/// categories again when it was already selected.
pub fn toggle_category(current: &str, clicked: &str) -> String {
	if current == clicked {
		ALL_CATEGORIES.to_string()
	} else {
		clicked.to_string()
	}
}

/// Distinct non-empty flow types of the visible flows, sorted for a select.
pub fn available_flow_types(links: &[GraphLink], show_proposals: bool) -> Vec<String> {
	let mut types: Vec<String> = links
		.iter()
		.flat_map(|l| link_flows(l, show_proposals))
		.map(|f| f.flow_type.trim())
		.filter(|t| !t.is_empty())
		.map(str::to_string)
		.collect();
	types.sort_by(|a, b| collate::compare(a, b));
	types.dedup();
	types
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::datatrafik::UNCATEGORIZED;

	fn flow(flow_type: &str, category: Option<&str>, direction: FlowDirection) -> GraphEdgeFlow {
		GraphEdgeFlow {
			id: String::new(),
			claim_id: None,
			flow_type: flow_type.into(),
			direction,
			data_category_id: category.map(Into::into),
			protocol: None,
			frequency: None,
			implicit: false,
		}
	}

	fn link(flows: Vec<GraphEdgeFlow>, review_flows: Vec<GraphEdgeFlow>) -> GraphLink {
		GraphLink {
			id: "e1".into(),
			source: "a".into(),
			target: "b".into(),
			kind: "flows_to".into(),
			metadata: None,
			etag: String::new(),
			current_claim_id: None,
			review_claim_id: None,
			flows,
			review_flows,
			created_at: None,
			updated_at: None,
		}
	}

	fn enabled() -> DatatrafikFilters {
		DatatrafikFilters {
			enabled: true,
			..DatatrafikFilters::default()
		}
	}

	#[test]
	fn disabled_filters_match_everything() {
		let filters = DatatrafikFilters {
			enabled: false,
			direction: DirectionFilter::Incoming,
			category: "pii".into(),
			flow_type: "batch".into(),
		};
		let f = flow("api", None, FlowDirection::SourceToTarget);
		assert!(filters.flow_matches(&f));
		assert!(filters.link_matches(&link(vec![f], vec![]), false));
		assert!(!filters.is_narrowing());
	}

	#[test]
	fn direction_keeps_bidirectional_flows() {
		let out = flow("api", None, FlowDirection::SourceToTarget);
		let back = flow("api", None, FlowDirection::TargetToSource);
		let both = flow("api", None, FlowDirection::Bidirectional);

		let mut filters = enabled();
		filters.direction = DirectionFilter::Outgoing;
		assert!(filters.flow_matches(&out));
		assert!(!filters.flow_matches(&back));
		assert!(filters.flow_matches(&both));

		filters.direction = DirectionFilter::Incoming;
		assert!(!filters.flow_matches(&out));
		assert!(filters.flow_matches(&back));
		assert!(filters.flow_matches(&both));
	}

	#[test]
	fn category_and_flow_type_must_both_match() {
		let mut filters = enabled();
		filters.category = "pii".into();
		filters.flow_type = "batch".into();
		assert!(filters.flow_matches(&flow("batch", Some("pii"), FlowDirection::SourceToTarget)));
		assert!(!filters.flow_matches(&flow("api", Some("pii"), FlowDirection::SourceToTarget)));
		assert!(!filters.flow_matches(&flow("batch", Some("eko"), FlowDirection::SourceToTarget)));
	}

	#[test]
	fn uncategorized_sentinel_matches_flows_without_category() {
		let mut filters = enabled();
		filters.category = UNCATEGORIZED.into();
		assert!(filters.flow_matches(&flow("api", None, FlowDirection::SourceToTarget)));
		assert!(filters.flow_matches(&flow("api", Some(""), FlowDirection::SourceToTarget)));
		assert!(!filters.flow_matches(&flow("api", Some("pii"), FlowDirection::SourceToTarget)));
	}

	#[test]
	fn link_matches_through_review_flows_only_with_proposals() {
		let mut filters = enabled();
		filters.category = "pii".into();
		let l = link(
			vec![flow("api", None, FlowDirection::SourceToTarget)],
			vec![flow("api", Some("pii"), FlowDirection::SourceToTarget)],
		);
		assert!(!filters.link_matches(&l, false));
		assert!(filters.link_matches(&l, true));
	}

	#[test]
	fn legend_click_enables_and_toggles() {
		let mut filters = DatatrafikFilters::default();
		filters.pick_category("pii");
		assert!(filters.enabled);
		assert_eq!(filters.category, "pii");
		assert!(filters.is_narrowing());

		filters.pick_category("pii");
		assert!(filters.enabled);
		assert_eq!(filters.category, ALL_CATEGORIES);
		assert!(!filters.is_narrowing());
	}

	#[test]
	fn reset_restores_defaults() {
		let mut filters = DatatrafikFilters {
			enabled: true,
			direction: DirectionFilter::Outgoing,
			category: "pii".into(),
			flow_type: "batch".into(),
		};
		filters.reset();
		assert_eq!(filters, DatatrafikFilters::default());
	}

	#[test]
	fn clicking_a_new_category_selects_it() {
		assert_eq!(toggle_category(ALL_CATEGORIES, "pii"), "pii");
		assert_eq!(toggle_category("logs", "pii"), "pii");
	}

	#[test]
	fn clicking_the_active_category_resets() {
		assert_eq!(toggle_category("pii", "pii"), ALL_CATEGORIES);
	}

	#[test]
	fn direction_form_values() {
		for d in DirectionFilter::ALL {
			assert_eq!(DirectionFilter::from_value(d.as_str()), d);
		}
		assert_eq!(DirectionFilter::from_value("sideways"), DirectionFilter::All);
	}

	#[test]
	fn flow_types_sorted_and_distinct() {
		let links = [link(
			vec![
				flow("stream", None, FlowDirection::SourceToTarget),
				flow("", None, FlowDirection::SourceToTarget),
				flow("Batch", None, FlowDirection::SourceToTarget),
				flow("stream", None, FlowDirection::SourceToTarget),
			],
			vec![flow("api", None, FlowDirection::SourceToTarget)],
		)];
		assert_eq!(available_flow_types(&links, false), ["Batch", "stream"]);
		assert_eq!(available_flow_types(&links, true), ["api", "Batch", "stream"]);
	}
}
