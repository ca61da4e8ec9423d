use leptos::prelude::*;

use crate::i18n::t;

/// 404 Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! { <h1>{t("notFound.title")}</h1> }
}
