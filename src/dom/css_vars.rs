//! Theme values read from CSS custom properties on the document root.

use std::cell::RefCell;

use log::debug;
use web_sys::CssStyleDeclaration;

/// A computed style to read custom properties from.
pub trait StyleSnapshot {
	/// Raw property value; empty when unset.
	fn property_value(&self, name: &str) -> String;
}

impl StyleSnapshot for CssStyleDeclaration {
	fn property_value(&self, name: &str) -> String {
		self.get_property_value(name).unwrap_or_default()
	}
}

/// Produces a fresh snapshot of the root element's computed style.
pub trait RootStyle {
	type Snapshot: StyleSnapshot + Clone;

	/// `None` when there is nothing rendered to read from.
	fn read(&self) -> Option<Self::Snapshot>;
}

/// `getComputedStyle(document.documentElement)` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl RootStyle for DocumentRoot {
	type Snapshot = CssStyleDeclaration;

	fn read(&self) -> Option<CssStyleDeclaration> {
		let window = web_sys::window()?;
		let root = window.document()?.document_element()?;
		window.get_computed_style(&root).ok().flatten()
	}
}

/// Single-slot cache of the root style.
///
/// The snapshot is taken on first use and kept until [`CssVars::invalidate`];
/// style changes made after that are not seen until the next invalidation.
pub struct CssVars<R: RootStyle = DocumentRoot> {
	source: R,
	cached: RefCell<Option<R::Snapshot>>,
}

impl<R: RootStyle> CssVars<R> {
	pub fn new(source: R) -> Self {
		Self {
			source,
			cached: RefCell::new(None),
		}
	}

	/// Cached snapshot, reading it first if needed.
	pub fn get(&self) -> Option<R::Snapshot> {
		if let Some(snapshot) = self.cached.borrow().as_ref() {
			return Some(snapshot.clone());
		}
		let snapshot = self.source.read()?;
		debug!("css root style snapshot taken");
		*self.cached.borrow_mut() = Some(snapshot.clone());
		Some(snapshot)
	}

	/// Drops the snapshot so the next read recomputes it.
	pub fn invalidate(&self) {
		self.cached.borrow_mut().take();
	}

	/// Trimmed value of `name`, or `fallback` when unset or unavailable.
	pub fn css_var(&self, name: &str, fallback: &str) -> String {
		let Some(style) = self.get() else {
			return fallback.to_string();
		};
		let value = style.property_value(name);
		match value.trim() {
			"" => fallback.to_string(),
			v => v.to_string(),
		}
	}

	/// Numeric value of `name` with units stripped (`"12px"` is `12`).
	///
	/// Everything but digits, `.` and `-` is dropped before parsing. A value
	/// with nothing left after that, such as `"auto"`, gives `fallback` rather
	/// than `0`, the same as any other value that does not parse to a finite
	/// number.
	pub fn css_number_var(&self, name: &str, fallback: f64) -> f64 {
		let raw = self.css_var(name, "");
		if raw.is_empty() {
			return fallback;
		}
		parse_number(&raw).unwrap_or(fallback)
	}
}

impl Default for CssVars<DocumentRoot> {
	fn default() -> Self {
		Self::new(DocumentRoot)
	}
}

fn parse_number(raw: &str) -> Option<f64> {
	let digits: String = raw
		.chars()
		.filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
		.collect();
	digits.parse::<f64>().ok().filter(|n| n.is_finite())
}
