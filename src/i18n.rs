//! Swedish UI strings.
//!
//! Keys are dotted paths (`"datatrafik.legend"`). Lookups never fail: an
//! unknown key is returned as-is so a missing translation shows up on screen
//! instead of breaking the view.

static SV: &[(&str, &str)] = &[
	("app.title", "InfraGraph"),
	("common.loading", "Laddar…"),
	("common.loadFailed", "Kunde inte ladda grafen: {message}"),
	("common.close", "Stäng"),
	("common.reload", "Ladda om"),
	("common.cancel", "Avbryt"),
	("datatrafik.title", "Datatrafik"),
	("datatrafik.showProposals", "Visa förslag"),
	("datatrafik.enable", "Aktivera filter"),
	(
		"datatrafik.enableHelp",
		"Datatrafik visas alltid. När filter är aktiva kan du begränsa vad som visas (riktning, kategori, typ).",
	),
	("datatrafik.direction", "Riktning"),
	("datatrafik.directionAll", "Alla"),
	("datatrafik.directionOutgoing", "Utgående (→)"),
	("datatrafik.directionIncoming", "Inkommande (←)"),
	("datatrafik.flowType", "Flödestyp"),
	("datatrafik.flowTypeAll", "Alla flödestyper"),
	("datatrafik.clearFilters", "Rensa filter"),
	("datatrafik.clearFiltersTitle", "Återställ riktning, kategori och typ"),
	("datatrafik.filtersActive", "Filter aktiva"),
	("datatrafik.filtersIdle", "Inga filter"),
	("datatrafik.filtersOff", "Inga filter (allt visas)"),
	("datatrafik.legend", "Färger"),
	("datatrafik.category", "Datakategori"),
	("datatrafik.categoryAll", "Alla datakategorier"),
	("datatrafik.uncategorized", "Okategoriserat"),
	("datatrafik.unknownCategory", "Datakategori ({prefix}…)"),
	("datatrafik.legendHint", "Tips: klicka på en färg för att filtrera. Klicka igen för att återställa."),
	("datatrafik.filterHint", "Klicka för att filtrera"),
	("datatrafik.resetHint", "Klicka för att visa alla igen"),
	("edges.delete", "Ta bort relation"),
	("edges.deleteTitle", "Tar bort relationen permanent"),
	("edges.deleteFailed", "Kunde inte ta bort relation"),
	("edges.deleted", "Relationen {id} togs bort"),
	("errors.title", "Fel"),
	("errors.conflict", "Kunde inte spara: objektet har ändrats av någon annan. Ladda om och försök igen."),
	("errors.network", "Nätverksfel: {message}"),
	("notFound.title", "Sidan hittades inte"),
];

/// Looks up `key`, falling back to the key itself.
pub fn t(key: &str) -> String {
	lookup(key).unwrap_or(key).to_string()
}

fn lookup(key: &str) -> Option<&'static str> {
	SV.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Looks up `key` and substitutes `{name}` placeholders from `vars`.
///
/// Placeholders without a matching variable are kept verbatim.
pub fn t_with(key: &str, vars: &[(&str, &str)]) -> String {
	interpolate(lookup(key).unwrap_or(key), vars)
}

fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		match after.find('}') {
			Some(close) if is_word(&after[..close]) => {
				let name = &after[..close];
				match vars.iter().find(|(k, _)| *k == name) {
					Some((_, value)) => out.push_str(value),
					None => {
						out.push('{');
						out.push_str(name);
						out.push('}');
					}
				}
				rest = &after[close + 1..];
			}
			_ => {
				out.push('{');
				rest = after;
			}
		}
	}
	out.push_str(rest);
	out
}

fn is_word(s: &str) -> bool {
	!s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}
