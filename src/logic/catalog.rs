use crate::sources::LoadOutcome;
use crate::state::Watch;

/// Session-wide item list, filled once from the initial load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Mapped items in source order.
    items: Vec<Watch>,
    /// Set once the load outcome has been applied.
    loaded: bool,
    /// Failure reason when the load did not succeed.
    failure: Option<String>,
}

impl Catalog {
    /// What: Apply the one-shot load outcome.
    ///
    /// Output:
    /// - `true` when the outcome was applied; `false` when a previous outcome already settled
    ///   the catalog (the later one is dropped).
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) -> bool {
        if self.loaded {
            tracing::warn!("catalog already settled; ignoring late load outcome");
            return false;
        }
        self.loaded = true;
        match outcome {
            LoadOutcome::Loaded(items) => self.items = items,
            LoadOutcome::Failed(reason) => self.failure = Some(reason),
        }
        true
    }

    /// All items.
    #[must_use]
    pub fn items(&self) -> &[Watch] {
        &self.items
    }

    /// Whether the load has completed (successfully or not).
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Failure reason of the load, if it failed.
    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
