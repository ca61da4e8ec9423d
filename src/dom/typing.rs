//! Detects focus in text entry so global shortcuts can stand down.

use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget};

/// The parts of an element that decide whether it takes typed input.
pub trait TypingCandidate {
	fn tag_name(&self) -> String;
	fn attribute(&self, name: &str) -> Option<String>;
}

impl TypingCandidate for Element {
	fn tag_name(&self) -> String {
		Element::tag_name(self)
	}

	fn attribute(&self, name: &str) -> Option<String> {
		self.get_attribute(name)
	}
}

/// True when `element` accepts text: form inputs, ARIA text widgets, and
/// content-editable elements.
pub fn is_typing_target<E: TypingCandidate + ?Sized>(element: Option<&E>) -> bool {
	let Some(el) = element else {
		return false;
	};

	let tag = el.tag_name().to_ascii_lowercase();
	if matches!(tag.as_str(), "input" | "textarea" | "select") {
		return true;
	}

	if matches!(el.attribute("role").as_deref(), Some("textbox" | "combobox")) {
		return true;
	}

	matches!(el.attribute("contenteditable").as_deref(), Some("" | "true"))
}

/// [`is_typing_target`] for the target of a keyboard event.
pub fn is_typing_event_target(target: Option<EventTarget>) -> bool {
	let element = target.and_then(|t| t.dyn_into::<Element>().ok());
	is_typing_target(element.as_ref())
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	struct FakeElement {
		tag: &'static str,
		attrs: HashMap<&'static str, &'static str>,
	}

	fn el(tag: &'static str, attrs: &[(&'static str, &'static str)]) -> FakeElement {
		FakeElement {
			tag,
			attrs: attrs.iter().copied().collect(),
		}
	}

	impl TypingCandidate for FakeElement {
		fn tag_name(&self) -> String {
			self.tag.to_string()
		}

		fn attribute(&self, name: &str) -> Option<String> {
			self.attrs.get(name).map(|v| v.to_string())
		}
	}

	#[test]
	fn none_is_not_typing() {
		assert!(!is_typing_target::<FakeElement>(None));
	}

	#[test]
	fn form_controls() {
		for tag in ["INPUT", "textarea", "Select"] {
			assert!(is_typing_target(Some(&el(tag, &[]))), "{tag}");
		}
		assert!(!is_typing_target(Some(&el("BUTTON", &[]))));
	}

	#[test]
	fn aria_roles() {
		assert!(is_typing_target(Some(&el("DIV", &[("role", "textbox")]))));
		assert!(is_typing_target(Some(&el("DIV", &[("role", "combobox")]))));
		assert!(!is_typing_target(Some(&el("DIV", &[("role", "button")]))));
	}

	#[test]
	fn content_editable() {
		assert!(is_typing_target(Some(&el("DIV", &[("contenteditable", "")]))));
		assert!(is_typing_target(Some(&el("DIV", &[("contenteditable", "true")]))));
		assert!(!is_typing_target(Some(&el("DIV", &[("contenteditable", "false")]))));
		assert!(!is_typing_target(Some(&el("DIV", &[]))));
	}
}
