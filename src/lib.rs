//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod collate;
mod components;
mod dom;
mod i18n;
mod labels;
mod pages;

// Top-Level pages
use crate::dom::CssVars;
use crate::i18n::t;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the datatrafik page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// One root style snapshot for the whole app; pages invalidate it on theme change.
	let css = StoredValue::new_local(CssVars::default());

	view! {
		<Html attr:lang="sv" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text=t("app.title") />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=move || view! { <Home css=css /> } />
			</Routes>
		</Router>
	}
}
