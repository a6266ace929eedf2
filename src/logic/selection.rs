use serde::{Deserialize, Serialize};

use crate::state::Watch;

/// Detail view state: closed, or open on exactly one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// No item is being inspected.
    #[default]
    Closed,
    /// The detail modal shows this item.
    Open(Watch),
}

impl Selection {
    /// Inspect `item`, replacing any previous selection.
    pub fn open(&mut self, item: Watch) {
        *self = Self::Open(item);
    }

    /// Close the detail view.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// The inspected item, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Watch> {
        match self {
            Self::Closed => None,
            Self::Open(w) => Some(w),
        }
    }

    /// Whether the detail view is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}
