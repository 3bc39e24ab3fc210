//! Scroll-area layout for the catalogue table.
//!
//! The table's scroll viewport is resized so its horizontal scrollbar
//! stays pinned near the bottom of the window: the viewport gets whatever
//! height remains below its top edge (never more than the content's
//! natural height), and a trailing spacer absorbs the difference so the
//! page keeps its overall length. Recomputation is debounced through a
//! coalescing timer because resize and scroll events arrive in bursts.

use std::time::{Duration, Instant};

/// Inputs to one viewport-height computation, all in rows/lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    /// Total window height
    pub window_height: usize,
    /// Offset of the viewport's top edge from the window top
    pub top_offset: usize,
    /// Height the content would take unconstrained
    pub natural_height: usize,
}

/// The computed viewport height and trailing spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportFit {
    pub height: usize,
    pub spacer: usize,
}

/// Fit the viewport into the space below its top edge.
///
/// The height never exceeds the content's natural height, and
/// `height + spacer == natural_height` always holds.
pub fn fit_viewport(metrics: ViewportMetrics) -> ViewportFit {
    let available = metrics.window_height.saturating_sub(metrics.top_offset);
    let height = available.min(metrics.natural_height);
    ViewportFit {
        height,
        spacer: metrics.natural_height - height,
    }
}

/// Whether the table can scroll further in each horizontal direction.
///
/// Drives the "more content this way" indicators at the viewport edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollEdges {
    /// Content extends past the right edge
    pub more_right: bool,
    /// Content extends past the left edge
    pub more_left: bool,
}

pub fn scroll_edges(content_width: usize, viewport_width: usize, scroll_x: usize) -> ScrollEdges {
    ScrollEdges {
        more_right: scroll_x + viewport_width < content_width,
        more_left: scroll_x > 0,
    }
}

/// A coalescing timer for layout recomputation.
///
/// Every trigger schedules a recomputation one delay from now,
/// superseding any pending one, so a burst of events produces exactly one
/// recomputation once the burst settles.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Debouncer {
        Debouncer {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the recomputation.
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per schedule, when the delay has elapsed.
    pub fn poll(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
