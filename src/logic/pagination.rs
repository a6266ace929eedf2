//! Visible-window bookkeeping and the near-bottom scroll trigger.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::state::Watch;

/// Items revealed before any load-more.
pub const DEFAULT_INITIAL_VISIBLE: usize = 12;
/// Items added per load-more.
pub const DEFAULT_PAGE_STEP: usize = 9;
/// Distance from the bottom (in layout units) that counts as "near".
pub const DEFAULT_NEAR_BOTTOM_THRESHOLD: u32 = 2;
/// Minimum spacing between two near-bottom signals.
pub const DEFAULT_SCROLL_THROTTLE: Duration = Duration::from_millis(120);

/// How many filtered items are currently revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current size of the visible window.
    visible: usize,
    /// Value `visible` starts from.
    initial: usize,
    /// Growth per [`Pagination::load_more`].
    step: usize,
}

impl Pagination {
    /// Build a controller with custom initial size and step.
    #[must_use]
    pub const fn new(initial: usize, step: usize) -> Self {
        Self {
            visible: initial,
            initial,
            step,
        }
    }

    /// Current window size.
    #[must_use]
    pub const fn visible(&self) -> usize {
        self.visible
    }

    /// Reveal one more page. Never shrinks the window.
    pub const fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.step);
    }

    /// Rewind to the initial window size.
    pub const fn reset(&mut self) {
        self.visible = self.initial;
    }

    /// Number of items shown for a filtered list of `filtered_len` items.
    #[must_use]
    pub fn window_len(&self, filtered_len: usize) -> usize {
        self.visible.min(filtered_len)
    }

    /// The revealed prefix of `filtered`.
    #[must_use]
    pub fn window<'a>(&self, filtered: &'a [Watch]) -> &'a [Watch] {
        &filtered[..self.window_len(filtered.len())]
    }

    /// Whether a load-more affordance should be offered.
    #[must_use]
    pub const fn has_more(&self, filtered_len: usize) -> bool {
        self.visible < filtered_len
    }

    /// Items still hidden behind the load-more affordance.
    #[must_use]
    pub const fn remaining(&self, filtered_len: usize) -> usize {
        filtered_len.saturating_sub(self.visible)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_VISIBLE, DEFAULT_PAGE_STEP)
    }
}

/// Scroll geometry of the results view, all in the same layout unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Height of the visible viewport.
    pub viewport: u32,
    /// Distance scrolled from the top.
    pub offset: u32,
    /// Total height of the rendered content.
    pub content: u32,
}

/// `viewport + offset >= content - threshold`, computed without underflow.
#[must_use]
pub const fn is_near_bottom(m: ScrollMetrics, threshold: u32) -> bool {
    m.viewport.saturating_add(m.offset).saturating_add(threshold) >= m.content
}

/// Bounded-rate near-bottom detector.
///
/// Scroll events may arrive in bursts; the trigger fires at most once per
/// `min_interval`.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    /// Near-bottom distance in layout units.
    threshold: u32,
    /// Minimum spacing between signals.
    min_interval: Duration,
    /// Instant of the last signal, if any.
    last_fired: Option<Instant>,
}

impl ScrollTrigger {
    /// Build a trigger.
    #[must_use]
    pub const fn new(threshold: u32, min_interval: Duration) -> Self {
        Self {
            threshold,
            min_interval,
            last_fired: None,
        }
    }

    /// What: Evaluate one scroll observation.
    ///
    /// Inputs:
    /// - `m`: Current scroll geometry.
    /// - `now`: Observation time.
    ///
    /// Output:
    /// - `true` when the view is near the bottom and the throttle window has elapsed.
    pub fn poll(&mut self, m: ScrollMetrics, now: Instant) -> bool {
        if !is_near_bottom(m, self.threshold) {
            return false;
        }
        if let Some(prev) = self.last_fired
            && now.saturating_duration_since(prev) < self.min_interval
        {
            return false;
        }
        self.last_fired = Some(now);
        true
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_NEAR_BOTTOM_THRESHOLD, DEFAULT_SCROLL_THROTTLE)
    }
}
