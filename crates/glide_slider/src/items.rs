//! Item providers
//!
//! The engine never owns, creates, or reorders items. It asks a provider for
//! the item count and, per index, two scalars along the active axis. Those
//! scalars may depend on the current scroll position (hosts often measure
//! items relative to the viewport), so providers receive the position on
//! every query and the engine never caches the answer across a write.

use glide_core::{ItemBox, Orientation, ScrollPosition};

/// Per-item scalars along the active axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemMetrics {
    /// Leading edge relative to the content origin, margin included
    pub offset: f32,
    /// Outer extent, margins included
    pub size: f32,
}

impl ItemMetrics {
    pub fn new(offset: f32, size: f32) -> Self {
        Self { offset, size }
    }

    /// Metrics from a leading edge measured relative to the viewport
    pub fn from_viewport_relative(
        relative_offset: f32,
        size: f32,
        scroll_position: ScrollPosition,
    ) -> Self {
        Self {
            offset: scroll_position as f32 + relative_offset,
            size,
        }
    }

    /// Trailing edge
    pub fn end(&self) -> f32 {
        self.offset + self.size
    }
}

/// An ordered, indexable sequence of items owned by the host
pub trait ItemProvider {
    /// Opaque handle the host uses to refer to an item
    type Item: Clone;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle for the item at `index`
    fn item(&self, index: usize) -> Option<Self::Item>;

    /// Position of `item` in the sequence
    fn index_of(&self, item: &Self::Item) -> Option<usize>;

    /// Offset and size of the item at `index`, measured against
    /// `scroll_position`. `None` when `index` is out of range.
    fn metrics(
        &self,
        index: usize,
        orientation: Orientation,
        scroll_position: ScrollPosition,
    ) -> Option<ItemMetrics>;
}

/// A provider over item boxes laid out in content coordinates.
///
/// Content-space boxes do not move when the viewport scrolls, so metrics
/// here ignore the scroll position.
#[derive(Debug, Clone, Default)]
pub struct ItemStrip<K = usize> {
    entries: Vec<(K, ItemBox)>,
}

impl<K> ItemStrip<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an item at the end of the strip
    pub fn push(&mut self, key: K, item_box: ItemBox) {
        self.entries.push((key, item_box));
    }

    pub fn with_item(mut self, key: K, item_box: ItemBox) -> Self {
        self.push(key, item_box);
        self
    }

    /// Replace the measured box of an item, e.g. after a relayout.
    /// Returns false if `index` is out of range.
    pub fn set_box(&mut self, index: usize, item_box: ItemBox) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.1 = item_box;
                true
            }
            None => false,
        }
    }

    /// Trailing edge of the furthest item along `orientation`
    pub fn content_extent(&self, orientation: Orientation) -> f32 {
        self.entries
            .iter()
            .map(|(_, b)| b.outer_offset(orientation) + b.outer_size(orientation))
            .fold(0.0, f32::max)
    }
}

impl ItemStrip<usize> {
    /// `count` equally sized items laid end to end, keyed by index
    pub fn uniform(count: usize, size: f32, orientation: Orientation) -> Self {
        let mut strip = Self::new();
        for index in 0..count {
            let leading = index as f32 * size;
            let item_box = match orientation {
                Orientation::Horizontal => ItemBox::new(leading, 0.0, size, size),
                Orientation::Vertical => ItemBox::new(0.0, leading, size, size),
            };
            strip.push(index, item_box);
        }
        strip
    }
}

impl<K: Clone + PartialEq> ItemProvider for ItemStrip<K> {
    type Item = K;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn item(&self, index: usize) -> Option<K> {
        self.entries.get(index).map(|(key, _)| key.clone())
    }

    fn index_of(&self, item: &K) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == item)
    }

    fn metrics(
        &self,
        index: usize,
        orientation: Orientation,
        _scroll_position: ScrollPosition,
    ) -> Option<ItemMetrics> {
        let (_, item_box) = self.entries.get(index)?;
        Some(ItemMetrics::new(
            item_box.outer_offset(orientation),
            item_box.outer_size(orientation),
        ))
    }
}
