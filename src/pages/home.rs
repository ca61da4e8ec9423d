use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use crate::api::{
	ApiClient, ApiConfig, GraphEdgeFlow, GraphLink, GraphNode, GraphResponse, SchemaKindsResponse,
};
use crate::components::datatrafik::{
	CategoryNameCache, DatatrafikFilters, DatatrafikPanel, available_flow_types, build_legend,
	cache_category_names, category_name, color_for_category, flow_category, visible_category_ids,
};
use crate::components::edges::DeleteEdgeButton;
use crate::components::ui::ErrorModal;
use crate::dom::{CssVars, is_typing_event_target};
use crate::i18n::{t, t_with};
use crate::labels::{direction_label, edge_kind_label, node_kind_label, relation_label};

const SWATCH_SIZE_VAR: &str = "--legend-swatch-size";
const DEFAULT_SWATCH_SIZE: f64 = 12.0;

/// Tags graph requests so only the answer to the newest one is applied.
#[derive(Clone, Copy, Debug, Default)]
struct RequestSeq {
	issued: u64,
}

impl RequestSeq {
	fn issue(&mut self) -> u64 {
		self.issued += 1;
		self.issued
	}

	fn is_latest(&self, ticket: u64) -> bool {
		ticket == self.issued
	}
}

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
	Loading,
	Ready,
	Failed(String),
}

fn load_status(state: &LoadState) -> Option<String> {
	match state {
		LoadState::Loading => Some(t("common.loading")),
		LoadState::Ready => None,
		LoadState::Failed(message) => {
			Some(t_with("common.loadFailed", &[("message", message.as_str())]))
		}
	}
}

fn node_name(nodes: &[GraphNode], id: &str) -> String {
	nodes
		.iter()
		.find(|n| n.id == id)
		.map(|n| n.name.clone())
		.unwrap_or_else(|| id.to_string())
}

fn set_root_theme(theme: &str) {
	let root = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element());
	match root {
		Some(root) => {
			if root.set_attribute("data-theme", theme).is_err() {
				warn!("could not set data-theme");
			}
		}
		None => warn!("no document root to theme"),
	}
}

fn flow_row(flow: &GraphEdgeFlow, cache: &CategoryNameCache) -> impl IntoView + use<> {
	let category = flow_category(flow);
	let swatch = format!(
		"display: inline-block; width: 10px; height: 10px; border-radius: 99px; background: {};",
		color_for_category(category)
	);
	view! {
		<li class="flow-row">
			<span style=swatch />
			" "
			{category_name(category, cache)}
			" · "
			{direction_label(flow.direction)}
			" · "
			{flow.protocol.clone().unwrap_or_default()}
		</li>
	}
}

/// Default Home Page
#[component]
pub fn Home(css: StoredValue<CssVars, LocalStorage>) -> impl IntoView {
	let api = ApiClient::new(ApiConfig::from_window());
	let graph = RwSignal::new(GraphResponse::default());
	let load_state = RwSignal::new(LoadState::Loading);
	let requests = StoredValue::new(RequestSeq::default());
	let schema = RwSignal::new(None::<SchemaKindsResponse>);
	let show_proposals = RwSignal::new(false);
	let filters = RwSignal::new(DatatrafikFilters::default());
	let error = RwSignal::new(None::<String>);
	let dark = RwSignal::new(false);
	let name_cache = StoredValue::new(CategoryNameCache::new());
	let swatch_size =
		RwSignal::new(css.with_value(|c| c.css_number_var(SWATCH_SIZE_VAR, DEFAULT_SWATCH_SIZE)));

	let api_graph = api.clone();
	Effect::new(move |_| {
		let include_review = show_proposals.get();
		let Some(ticket) = requests.try_update_value(RequestSeq::issue) else {
			return;
		};
		load_state.set(LoadState::Loading);
		let api = api_graph.clone();
		spawn_local(async move {
			let result = api.fetch_graph(include_review).await;
			if !requests.try_with_value(|r| r.is_latest(ticket)).unwrap_or(false) {
				debug!("dropping graph response for request {ticket}");
				return;
			}
			match result {
				Ok(data) => {
					info!("loaded {} nodes, {} links", data.nodes.len(), data.links.len());
					graph.set(data);
					load_state.set(LoadState::Ready);
				}
				Err(err) => {
					warn!("graph load failed: {err}");
					load_state.set(LoadState::Failed(err.user_message()));
				}
			}
		});
	});

	let api_schema = api.clone();
	spawn_local(async move {
		match api_schema.fetch_schema_kinds().await {
			Ok(kinds) => schema.set(Some(kinds)),
			Err(err) => warn!("schema kinds unavailable: {err}"),
		}
	});

	let legend = Memo::new(move |_| {
		let include_review = show_proposals.get();
		graph.with(|g| {
			name_cache.update_value(|cache| cache_category_names(cache, &g.nodes));
			let ids = visible_category_ids(&g.links, include_review);
			name_cache.with_value(|cache| build_legend(&ids, cache))
		})
	});

	let flow_types = Memo::new(move |_| {
		let include_review = show_proposals.get();
		graph.with(|g| available_flow_types(&g.links, include_review))
	});

	let handle = window_event_listener(ev::keydown, move |e| {
		if e.key() != "p" || e.ctrl_key() || e.meta_key() || e.alt_key() {
			return;
		}
		if is_typing_event_target(e.target()) {
			return;
		}
		show_proposals.update(|v| *v = !*v);
	});
	on_cleanup(move || handle.remove());

	let toggle_theme = move |_| {
		let next = !dark.get_untracked();
		set_root_theme(if next { "dark" } else { "light" });
		dark.set(next);
		css.with_value(|c| {
			c.invalidate();
			swatch_size.set(c.css_number_var(SWATCH_SIZE_VAR, DEFAULT_SWATCH_SIZE));
		});
	};

	let edge_rows = move || {
		let active = filters.get();
		let include_review = show_proposals.get();
		let links: Vec<GraphLink> = graph.with(|g| {
			g.links
				.iter()
				.filter(|l| active.link_matches(l, include_review))
				.cloned()
				.collect()
		});

		links
			.into_iter()
			.map(|link| {
				let (from, to) = graph.with_untracked(|g| {
					(node_name(&g.nodes, &link.source), node_name(&g.nodes, &link.target))
				});
				let kind = schema.with(|s| edge_kind_label(s.as_ref(), &link.kind));
				let from_kind = graph.with_untracked(|g| {
					let kind = g.nodes.iter().find(|n| n.id == link.source).map(|n| n.kind.clone());
					schema.with_untracked(|s| node_kind_label(s.as_ref(), &kind.unwrap_or_default()))
				});
				let flows = name_cache.with_value(|cache| {
					link.flows
						.iter()
						.chain(link.review_flows.iter().filter(|_| include_review))
						.filter(|f| active.flow_matches(f))
						.map(|f| flow_row(f, cache))
						.collect_view()
				});
				let deleted_id = link.id.clone();
				view! {
					<div class="edge-row">
						<div class="edge-title" title=relation_label(&link.kind)>
							{from} " → " {to}
						</div>
						<div class="edge-kind">{kind} " (" {from_kind} ")"</div>
						<ul class="edge-flows">{flows}</ul>
						<DeleteEdgeButton
							edge_id=link.id.clone()
							updated_at=link.if_match_tag()
							api=api.clone()
							on_deleted=move |_| {
								graph.update(|g| g.links.retain(|l| l.id != deleted_id))
							}
							on_error=move |msg: String| error.set(Some(msg))
						/>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<div class="datatrafik-page">
			<aside class="sidebar">
				<h2>{t("datatrafik.title")}</h2>
				<button type="button" on:click=toggle_theme>
					{move || if dark.get() { "Ljust tema" } else { "Mörkt tema" }}
				</button>
				<DatatrafikPanel
					filters=filters
					show_proposals=show_proposals
					legend=legend
					flow_types=flow_types
					swatch_size=swatch_size
				/>
			</aside>
			<main class="edges">
				{move || {
					load_state
						.with(load_status)
						.map(|text| view! { <p class="load-status">{text}</p> })
				}}
				{edge_rows}
			</main>
		</div>
		<ErrorModal message=error on_close=move |_| error.set(None) />
	}
}
