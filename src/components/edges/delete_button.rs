use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::api::{ApiClient, EdgeApi};
use crate::i18n::t;

/// Makes one delete attempt and reports the outcome through exactly one of
/// the callbacks.
pub async fn delete_edge_once<A: EdgeApi>(
	api: &A,
	edge_id: &str,
	updated_at: &str,
	on_deleted: impl FnOnce(),
	on_error: impl FnOnce(String),
) {
	match api.delete_edge(edge_id, updated_at).await {
		Ok(()) => {
			info!("edge {edge_id} deleted");
			on_deleted();
		}
		Err(err) if err.is_conflict() => {
			info!("edge {edge_id} changed since it was loaded");
			on_error(err.user_message());
		}
		Err(err) => {
			warn!("could not delete edge {edge_id}: {err}");
			on_error(err.user_message());
		}
	}
}

/// Deletes an edge, guarded by the `updated_at` it was loaded with.
///
/// Each click sends one request. Rapid clicks are not collapsed.
#[component]
pub fn DeleteEdgeButton(
	#[prop(into)] edge_id: String,
	#[prop(into)] updated_at: String,
	api: ApiClient,
	#[prop(into)] on_deleted: Callback<()>,
	#[prop(into)] on_error: Callback<String>,
) -> impl IntoView {
	let on_click = move |_| {
		let (api, edge_id, updated_at) = (api.clone(), edge_id.clone(), updated_at.clone());
		spawn_local(async move {
			delete_edge_once(
				&api,
				&edge_id,
				&updated_at,
				move || on_deleted.run(()),
				move |msg| on_error.run(msg),
			)
			.await;
		});
	};

	view! {
		<button
			type="button"
			class="delete-edge"
			title=t("edges.deleteTitle")
			on:click=on_click
		>
			{t("edges.delete")}
		</button>
	}
}
