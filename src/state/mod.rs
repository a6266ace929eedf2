//! State types: the catalog record shape, filter criteria and the TUI state.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, CARD_LINES, FilterField, Focus};
pub use types::{
    ALL, DEFAULT_PRICE_MAX, FilterCriteria, GLOBAL_COUNTRY, PriceRange, RawItem, SortKey,
    UNKNOWN_BRAND, Watch,
};
