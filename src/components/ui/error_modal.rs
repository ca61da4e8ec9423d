use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

use crate::dom::is_typing_event_target;
use crate::i18n::t;

fn reload_page() {
	let reloaded = web_sys::window().map(|w| w.location().reload());
	if !matches!(reloaded, Some(Ok(()))) {
		warn!("page reload failed");
	}
}

/// Escape closes an open modal unless the user is typing in a field.
fn should_close(key: &str, open: bool, typing: bool) -> bool {
	key == "Escape" && open && !typing
}

/// Non-blocking error banner. Open while `message` is `Some`.
///
/// Escape closes it unless focus is in a text field.
#[component]
pub fn ErrorModal(
	#[prop(into)] message: Signal<Option<String>>,
	#[prop(into)] on_close: Callback<()>,
	#[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
	let title = title.unwrap_or_else(|| t("errors.title"));

	// Capture phase: runs ahead of bubbling window handlers.
	let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
		let open = message.with_untracked(Option::is_some);
		if !should_close(&e.key(), open, is_typing_event_target(e.target())) {
			return;
		}
		e.prevent_default();
		e.stop_propagation();
		on_close.run(());
	});
	if let Some(window) = web_sys::window() {
		let added = window.add_event_listener_with_callback_and_bool(
			"keydown",
			on_keydown.as_ref().unchecked_ref(),
			true,
		);
		if added.is_err() {
			warn!("could not listen for Escape");
		}
	}
	let listener = StoredValue::new_local(on_keydown);
	on_cleanup(move || {
		let window = web_sys::window();
		listener.try_with_value(|cb| {
			if let Some(window) = window {
				let _ = window.remove_event_listener_with_callback_and_bool(
					"keydown",
					cb.as_ref().unchecked_ref(),
					true,
				);
			}
		});
	});

	view! {
		<Show when=move || message.get().is_some()>
			<div class="error-modal-backdrop">
				<div class="panel-light error-modal" role="dialog" aria-modal="true">
					<div class="error-modal-header">
						<span class="error-modal-dot" />
						<div class="error-modal-title">{title.clone()}</div>
						<button type="button" on:click=move |_| on_close.run(())>
							"Esc"
						</button>
					</div>
					<div class="error-modal-body">{move || message.get().unwrap_or_default()}</div>
					<div class="error-modal-actions">
						<button type="button" on:click=move |_| reload_page()>
							{t("common.reload")}
						</button>
					</div>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn escape_closes_open_modal() {
		assert!(should_close("Escape", true, false));
	}

	#[test]
	fn other_keys_and_closed_modal_are_ignored() {
		assert!(!should_close("Enter", true, false));
		assert!(!should_close("Escape", false, false));
	}

	#[test]
	fn escape_while_typing_is_left_alone() {
		assert!(!should_close("Escape", true, true));
	}
}
