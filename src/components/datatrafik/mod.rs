//! Data flow ("datatrafik") categories: colors, names, filters and the legend.

mod categories;
mod filters;
mod legend;
mod palette;
mod panel;

pub use categories::{cache_category_names, flow_category, visible_category_ids};
pub use filters::{DatatrafikFilters, available_flow_types};
pub use legend::{CategoryNameCache, LegendItem, UNCATEGORIZED, build_legend, category_name};
pub use palette::color_for_category;
pub use panel::DatatrafikPanel;
