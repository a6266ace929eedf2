//! Core non-UI logic: the catalog store, the filter/sort pipeline, pagination,
//! selection and the state update function.

pub mod catalog;
pub mod filter;
pub mod options;
pub mod pagination;
pub mod selection;
pub mod update;

pub use catalog::Catalog;
pub use filter::{filter_and_sort, matches_all};
pub use options::{brand_options, country_options, cycle_option};
pub use pagination::{Pagination, ScrollMetrics, ScrollTrigger, is_near_bottom};
pub use selection::Selection;
pub use update::{Action, BrowserConfig, BrowserState};
