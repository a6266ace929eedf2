use std::collections::HashSet;

use crate::state::{ALL, Watch};

/// `"All"` followed by the distinct values of `field`, in first-seen order.
fn distinct_with_all<'a>(items: &'a [Watch], field: impl Fn(&'a Watch) -> &'a str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = vec![ALL.to_string()];
    for w in items {
        let v = field(w);
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}

/// Brand selector options for a catalog.
#[must_use]
pub fn brand_options(items: &[Watch]) -> Vec<String> {
    distinct_with_all(items, |w| w.brand.as_str())
}

/// Country selector options for a catalog.
#[must_use]
pub fn country_options(items: &[Watch]) -> Vec<String> {
    distinct_with_all(items, |w| w.country.as_str())
}

/// What: Step a selector value through its option list.
///
/// Inputs:
/// - `options`: Option list (starts with `"All"`).
/// - `current`: Currently selected value.
/// - `forward`: Direction of travel.
///
/// Output:
/// - The neighbouring option, wrapping at both ends. A value missing from the
///   list is treated as `"All"`.
#[must_use]
pub fn cycle_option(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return ALL.to_string();
    }
    let idx = options.iter().position(|o| o == current).unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next].clone()
}
