//! Browser helpers shared by components.

pub mod css_vars;
pub mod typing;

pub use css_vars::CssVars;
pub use typing::is_typing_event_target;
