use crate::state::{ALL, FilterCriteria, PriceRange, SortKey, Watch};

/// Case-insensitive substring match of `query` against `name + " " + brand`.
///
/// An empty query matches every item.
#[must_use]
pub fn matches_query(w: &Watch, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let hay = format!("{} {}", w.name, w.brand).to_lowercase();
    hay.contains(&query.to_lowercase())
}

/// `true` when `filter` is the wildcard or equals the item's brand exactly.
#[must_use]
pub fn matches_brand(w: &Watch, filter: &str) -> bool {
    filter == ALL || w.brand == filter
}

/// `true` when `filter` is the wildcard or equals the item's country exactly.
#[must_use]
pub fn matches_country(w: &Watch, filter: &str) -> bool {
    filter == ALL || w.country == filter
}

/// Inclusive price bound check.
#[must_use]
pub const fn matches_price(w: &Watch, range: &PriceRange) -> bool {
    range.contains(w.price_usd)
}

/// Logical AND of the four predicates.
#[must_use]
pub fn matches_all(w: &Watch, criteria: &FilterCriteria) -> bool {
    matches_query(w, &criteria.query)
        && matches_brand(w, &criteria.brand)
        && matches_country(w, &criteria.country)
        && matches_price(w, &criteria.price)
}

/// What: Reorder `items` in place according to `key`.
///
/// Details:
/// - Uses a stable sort so equal keys keep their relative order.
/// - `Relevance` leaves the slice untouched.
pub fn sort_by_key(items: &mut [Watch], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::PriceAsc => items.sort_by_key(|w| w.price_usd),
        SortKey::PriceDesc => items.sort_by(|a, b| b.price_usd.cmp(&a.price_usd)),
        SortKey::YearAsc => items.sort_by_key(|w| w.year),
        SortKey::YearDesc => items.sort_by(|a, b| b.year.cmp(&a.year)),
    }
}

/// What: Apply the filter predicates and then the sort key to a catalog.
///
/// Inputs:
/// - `catalog`: Full item list in catalog order.
/// - `criteria`: Query, selectors, price bounds and sort key.
///
/// Output:
/// - The filtered items, sorted; ties keep catalog order.
///
/// Details:
/// - Pure: the catalog is not modified and the same inputs always give the same output.
#[must_use]
pub fn filter_and_sort(catalog: &[Watch], criteria: &FilterCriteria) -> Vec<Watch> {
    let mut out: Vec<Watch> = catalog
        .iter()
        .filter(|w| matches_all(w, criteria))
        .cloned()
        .collect();
    sort_by_key(&mut out, criteria.sort);
    out
}
