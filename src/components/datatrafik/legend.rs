use std::cmp::Ordering;
use std::collections::HashMap;

use super::palette::color_for_category;
use crate::collate;
use crate::i18n::{t, t_with};

/// Category id used for flows that carry no data category.
pub const UNCATEGORIZED: &str = "__none__";

/// Number of id characters shown when a category has no known name.
const ID_PREFIX_CHARS: usize = 8;

/// Category id to display name, filled from `data_category` nodes.
pub type CategoryNameCache = HashMap<String, String>;

/// One row of the datatrafik legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendItem {
	pub id: String,
	pub name: String,
	pub color: &'static str,
}

/// Display name for a category id.
pub fn category_name(id: &str, cache: &CategoryNameCache) -> String {
	if id == UNCATEGORIZED {
		return t("datatrafik.uncategorized");
	}
	match cache.get(id) {
		Some(name) => name.clone(),
		None => {
			let prefix: String = id.chars().take(ID_PREFIX_CHARS).collect();
			t_with("datatrafik.unknownCategory", &[("prefix", &prefix)])
		}
	}
}

fn legend_order(a: &LegendItem, b: &LegendItem) -> Ordering {
	match (a.id == UNCATEGORIZED, b.id == UNCATEGORIZED) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => collate::compare(&a.name, &b.name),
	}
}

/// Builds the legend for the categories currently on screen.
///
/// Every input id yields one item, duplicates included. Items are ordered by
/// name with the uncategorized bucket always last.
pub fn build_legend<S: AsRef<str>>(
	visible_category_ids: &[S],
	name_cache: &CategoryNameCache,
) -> Vec<LegendItem> {
	let mut legend: Vec<LegendItem> = visible_category_ids
		.iter()
		.map(|id| {
			let id = id.as_ref();
			LegendItem {
				id: id.to_string(),
				name: category_name(id, name_cache),
				color: color_for_category(id),
			}
		})
		.collect();
	legend.sort_by(legend_order);
	legend
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn cache(entries: &[(&str, &str)]) -> CategoryNameCache {
		entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	fn names(legend: &[LegendItem]) -> Vec<&str> {
		legend.iter().map(|i| i.name.as_str()).collect()
	}

	#[test]
	fn empty_input_gives_empty_legend() {
		let ids: [&str; 0] = [];
		assert!(build_legend(&ids, &CategoryNameCache::new()).is_empty());
	}

	#[test]
	fn sorts_by_name_with_uncategorized_last() {
		let legend = build_legend(
			&["cat-a", UNCATEGORIZED, "cat-b"],
			&cache(&[("cat-a", "Nätverk"), ("cat-b", "Säkerhet")]),
		);
		assert_eq!(names(&legend), ["Nätverk", "Säkerhet", "Okategoriserat"]);
		assert_eq!(legend[2].id, UNCATEGORIZED);
	}

	#[test]
	fn uncategorized_last_even_when_its_name_sorts_first() {
		let legend = build_legend(
			&[UNCATEGORIZED, "x"],
			&cache(&[("x", "Översikt")]),
		);
		assert_eq!(names(&legend), ["Översikt", "Okategoriserat"]);
	}

	#[test]
	fn unknown_id_uses_prefix_placeholder() {
		let legend = build_legend(&["deadbeef1234"], &CategoryNameCache::new());
		assert_eq!(legend[0].name, "Datakategori (deadbeef…)");
	}

	#[test]
	fn short_unknown_id_is_not_padded() {
		assert_eq!(
			category_name("abc", &CategoryNameCache::new()),
			"Datakategori (abc…)"
		);
	}

	#[test]
	fn prefix_counts_characters_not_bytes() {
		assert_eq!(
			category_name("åäöåäöåäöx", &CategoryNameCache::new()),
			"Datakategori (åäöåäöåä…)"
		);
	}

	#[test]
	fn colors_come_from_the_palette_hash() {
		let legend = build_legend(&["cat-a"], &CategoryNameCache::new());
		assert_eq!(legend[0].color, color_for_category("cat-a"));
	}

	#[test]
	fn duplicates_are_kept() {
		let legend = build_legend(&["a", "a"], &cache(&[("a", "Loggar")]));
		assert_eq!(legend.len(), 2);
	}

	proptest! {
		#[test]
		fn uncategorized_is_always_last(
			mut ids in prop::collection::vec("[a-z0-9]{1,12}", 0..20),
			pos in 0usize..20,
		) {
			let at = pos.min(ids.len());
			ids.insert(at, UNCATEGORIZED.to_string());
			let legend = build_legend(&ids, &CategoryNameCache::new());
			prop_assert_eq!(legend.len(), ids.len());
			prop_assert_eq!(legend.last().map(|i| i.id.as_str()), Some(UNCATEGORIZED));
		}

		#[test]
		fn names_are_in_collation_order(
			names in prop::collection::vec("[A-Za-zåäöÅÄÖ ]{1,10}", 0..20),
		) {
			let ids: Vec<String> = (0..names.len()).map(|i| format!("id-{i}")).collect();
			let cache: CategoryNameCache = ids.iter().cloned().zip(names).collect();
			let legend = build_legend(&ids, &cache);
			for pair in legend.windows(2) {
				prop_assert_ne!(collate::compare(&pair[0].name, &pair[1].name), Ordering::Greater);
			}
		}
	}
}
