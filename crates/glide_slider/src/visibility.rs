//! Visibility classification
//!
//! An item's leading edge is "in view" when it lies inside the viewport
//! window widened by a tolerance on both sides; likewise for its trailing
//! edge. Strict visibility needs both edges in view, loose visibility needs
//! either.

use glide_core::ScrollPosition;
use smallvec::SmallVec;

use crate::items::ItemMetrics;

/// A visible item and its index, recomputed on every query
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem<I> {
    pub item: I,
    pub index: usize,
}

/// Visible items in index order
pub type VisibleItems<I> = SmallVec<[VisibleItem<I>; 8]>;

/// Which edges of an item fall inside the widened viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub begin_in_view: bool,
    pub end_in_view: bool,
}

impl Visibility {
    pub fn classify(
        item: ItemMetrics,
        position: ScrollPosition,
        viewport_extent: f32,
        tolerance: f32,
    ) -> Self {
        let low = position as f32 - tolerance;
        let high = position as f32 + viewport_extent + tolerance;
        let end = item.end();

        Self {
            begin_in_view: item.offset >= low && item.offset <= high,
            end_in_view: end <= high && end >= low,
        }
    }

    /// Both edges in view
    pub fn is_fully_visible(&self) -> bool {
        self.begin_in_view && self.end_in_view
    }

    /// At least one edge in view
    pub fn is_partially_visible(&self) -> bool {
        self.begin_in_view || self.end_in_view
    }

    pub fn is_visible(&self, strict: bool) -> bool {
        if strict {
            self.is_fully_visible()
        } else {
            self.is_partially_visible()
        }
    }
}
