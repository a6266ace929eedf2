use crate::state::{GLOBAL_COUNTRY, RawItem, UNKNOWN_BRAND, Watch};

/// First model year assigned to catalog entries.
const BASE_YEAR: u16 = 2020;
/// Number of distinct model years cycled through.
const YEAR_SPAN: usize = 5;

/// What: Convert a source price into the integer cents-equivalent unit.
///
/// Details:
/// - `round(price * 100)`, half away from zero; negative and non-finite prices clamp to 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn price_to_cents(price: f64) -> u64 {
    let cents = (price * 100.0).round();
    if cents.is_finite() && cents > 0.0 {
        cents as u64
    } else {
        0
    }
}

/// What: Map one raw item at 0-based `index` into a [`Watch`].
///
/// Inputs:
/// - `index`: Position in the source list.
/// - `raw`: Item as decoded from the source.
///
/// Output:
/// - The catalog record; `id` is `index + 1` and `year` cycles through `2020..=2024`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn map_raw_item(index: usize, raw: RawItem) -> Watch {
    let brand = match raw.category {
        Some(c) if !c.is_empty() => c,
        _ => UNKNOWN_BRAND.to_string(),
    };
    Watch {
        id: u32::try_from(index + 1).unwrap_or(u32::MAX),
        name: raw.title,
        brand,
        country: GLOBAL_COUNTRY.to_string(),
        price_usd: price_to_cents(raw.price),
        // index % YEAR_SPAN < 5, always fits
        year: BASE_YEAR + (index % YEAR_SPAN) as u16,
        image: raw.image,
    }
}

/// Map a whole source list, preserving order.
#[must_use]
pub fn map_raw_items(raw: Vec<RawItem>) -> Vec<Watch> {
    raw.into_iter()
        .enumerate()
        .map(|(i, r)| map_raw_item(i, r))
        .collect()
}
