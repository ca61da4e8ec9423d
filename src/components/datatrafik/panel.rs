use leptos::prelude::*;

use super::filters::{ALL_CATEGORIES, ALL_FLOW_TYPES, DatatrafikFilters, DirectionFilter};
use super::legend::LegendItem;
use crate::i18n::t;

fn swatch_style(size: f64, background: &str) -> String {
	format!(
		"width: {size}px; height: {size}px; border-radius: 3px; background: {background}; \
		 border: 1px solid var(--border-strong);"
	)
}

fn status_key(filters: &DatatrafikFilters) -> &'static str {
	if filters.is_narrowing() {
		"datatrafik.filtersActive"
	} else if filters.enabled {
		"datatrafik.filtersIdle"
	} else {
		"datatrafik.filtersOff"
	}
}

/// Datatrafik sidebar: proposal toggle, filter controls and the color legend.
#[component]
pub fn DatatrafikPanel(
	filters: RwSignal<DatatrafikFilters>,
	show_proposals: RwSignal<bool>,
	#[prop(into)] legend: Signal<Vec<LegendItem>>,
	#[prop(into)] flow_types: Signal<Vec<String>>,
	#[prop(into, default = Signal::stored(12.0))] swatch_size: Signal<f64>,
) -> impl IntoView {
	let disabled = move || !filters.with(|f| f.enabled);

	let direction_options = DirectionFilter::ALL
		.into_iter()
		.map(|d| view! { <option value=d.as_str()>{t(d.label_key())}</option> })
		.collect_view();

	let flow_type_options = move || {
		flow_types
			.get()
			.into_iter()
			.map(|ty| view! { <option value=ty.clone()>{ty.clone()}</option> })
			.collect_view()
	};

	view! {
		<div class="datatrafik-panel">
			<label class="toggle">
				<input
					type="checkbox"
					prop:checked=show_proposals
					on:change=move |ev| show_proposals.set(event_target_checked(&ev))
				/>
				" " {t("datatrafik.showProposals")} " (p)"
			</label>
			<label class="toggle" title=t("datatrafik.enableHelp")>
				<input
					type="checkbox"
					prop:checked=move || filters.with(|f| f.enabled)
					on:change=move |ev| {
						let on = event_target_checked(&ev);
						filters.update(|f| f.enabled = on);
					}
				/>
				" " {t("datatrafik.enable")}
			</label>
			<label class="field">
				{t("datatrafik.direction")}
				<select
					prop:disabled=disabled
					prop:value=move || filters.with(|f| f.direction.as_str())
					on:change=move |ev| {
						let direction = DirectionFilter::from_value(&event_target_value(&ev));
						filters.update(|f| f.direction = direction);
					}
				>
					{direction_options}
				</select>
			</label>
			<label class="field">
				{t("datatrafik.flowType")}
				<select
					prop:disabled=disabled
					prop:value=move || filters.with(|f| f.flow_type.clone())
					on:change=move |ev| {
						let flow_type = event_target_value(&ev);
						filters.update(|f| f.flow_type = flow_type);
					}
				>
					<option value=ALL_FLOW_TYPES>{t("datatrafik.flowTypeAll")}</option>
					{flow_type_options}
				</select>
			</label>
			<div class="filter-status">
				<span>{move || filters.with(|f| t(status_key(f)))}</span>
				<button
					type="button"
					title=t("datatrafik.clearFiltersTitle")
					on:click=move |_| filters.update(DatatrafikFilters::reset)
				>
					{t("datatrafik.clearFilters")}
				</button>
			</div>
			<DatatrafikLegend legend=legend filters=filters swatch_size=swatch_size />
		</div>
	}
}

/// Clickable color legend for the datatrafik view.
#[component]
pub fn DatatrafikLegend(
	#[prop(into)] legend: Signal<Vec<LegendItem>>,
	filters: RwSignal<DatatrafikFilters>,
	#[prop(into, default = Signal::stored(12.0))] swatch_size: Signal<f64>,
) -> impl IntoView {
	let all_active = move || filters.with(|f| f.category == ALL_CATEGORIES);

	let rows = move || {
		legend
			.get()
			.into_iter()
			.map(|item| {
				let id = item.id.clone();
				let active = {
					let id = id.clone();
					move || filters.with(|f| f.category == id)
				};
				let title = {
					let active = active.clone();
					move || {
						if active() {
							t("datatrafik.resetHint")
						} else {
							t("datatrafik.filterHint")
						}
					}
				};
				view! {
					<div
						class="legend-row"
						class:active=active.clone()
						title=title
						on:click=move |_| filters.update(|f| f.pick_category(&id))
					>
						<div
							class="legend-swatch"
							style=move || swatch_style(swatch_size.get(), item.color)
						/>
						<div class="legend-name">{item.name}</div>
						<Show when=active.clone()>
							<div class="legend-check">"✓"</div>
						</Show>
					</div>
				}
			})
			.collect_view()
	};

	view! {
		<Show when=move || !legend.get().is_empty()>
			<div class="datatrafik-legend">
				<div class="legend-title">{t("datatrafik.legend")}</div>
				<div
					class="legend-row"
					class:active=all_active
					title=t("datatrafik.categoryAll")
					on:click=move |_| filters.update(|f| f.category = ALL_CATEGORIES.to_string())
				>
					<div
						class="legend-swatch"
						style=move || swatch_style(swatch_size.get(), "var(--grad-accent-soft)")
					/>
					<div class="legend-name">{t("datatrafik.categoryAll")}</div>
					<Show when=all_active>
						<div class="legend-check">"✓"</div>
					</Show>
				</div>
				{rows}
				<div class="legend-hint">{t("datatrafik.legendHint")}</div>
			</div>
		</Show>
	}
}
