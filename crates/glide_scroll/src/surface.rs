//! The scrollable surface contract and the state both backends share

use std::fmt;

use glide_core::{AxisKind, AxisProperty, Orientation, ScrollPosition};
use slotmap::{new_key_type, SlotMap};

use crate::emulated::TransformScrollSurface;
use crate::native::NativeScrollSurface;

new_key_type! {
    /// Handle returned by [`ScrollableSurface::on_position_change`]
    pub struct SurfaceListenerId;
}

/// Observer invoked with the new position after every committed write
pub type PositionListener = Box<dyn FnMut(ScrollPosition)>;

// ============================================================================
// Contract
// ============================================================================

/// A viewport that scrolls along a single, fixed axis.
///
/// `set_position` does not clamp: callers commit positions already inside
/// `[0, max_scroll_pos()]`.
pub trait ScrollableSurface {
    /// Axis this surface scrolls along, fixed for its lifetime
    fn orientation(&self) -> Orientation;

    /// Current offset
    fn position(&self) -> ScrollPosition;

    /// Write the offset and notify position listeners
    fn set_position(&mut self, position: ScrollPosition);

    /// Visible length of the viewport along the axis ("mask size")
    fn viewport_extent(&self) -> f32;

    /// Total length of the content along the axis
    fn content_extent(&self) -> f32;

    /// Report new layout metrics from the host. A position past the new
    /// `max_scroll_pos()` is pulled back to it and listeners are notified.
    fn resize(&mut self, viewport_extent: f32, content_extent: f32);

    /// Register a host observer for committed positions.
    ///
    /// Observers receive only the position, so they cannot re-enter the
    /// surface or trigger navigation from inside a write.
    fn on_position_change(&mut self, listener: PositionListener) -> SurfaceListenerId;

    /// Remove a position observer. Returns false if it was already gone.
    fn remove_listener(&mut self, id: SurfaceListenerId) -> bool;

    /// Release every listener. Later writes are ignored. Idempotent.
    fn destroy(&mut self);

    fn is_destroyed(&self) -> bool;

    /// Largest legal offset: content minus viewport, floored at 0
    fn max_scroll_pos(&self) -> ScrollPosition {
        let scrollable = self.content_extent() - self.viewport_extent();
        if scrollable > 0.0 {
            scrollable.floor() as ScrollPosition
        } else {
            0
        }
    }

    /// True when the offset is within `tolerance` of the start
    fn is_begin_reached(&self, tolerance: f32) -> bool {
        self.position() as f32 <= tolerance
    }

    /// True when the offset is within `tolerance` of the end
    fn is_end_reached(&self, tolerance: f32) -> bool {
        self.position() as f32 >= self.max_scroll_pos() as f32 - tolerance
    }

    /// Geometric property the axis maps to for `kind`
    fn axis_property(&self, kind: AxisKind) -> AxisProperty {
        self.orientation().axis_property(kind)
    }
}

// ============================================================================
// Backend Selection
// ============================================================================

/// Which backend a surface uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    /// Native scroll offset (default)
    #[default]
    Native,
    /// Transform-based emulation
    Transform,
}

impl SurfaceKind {
    /// Map the `use_emulated_offset` configuration flag to a backend
    pub fn from_emulated(use_emulated_offset: bool) -> Self {
        if use_emulated_offset {
            SurfaceKind::Transform
        } else {
            SurfaceKind::Native
        }
    }

    /// Construct a surface of this kind
    pub fn create(self, orientation: Orientation) -> Box<dyn ScrollableSurface> {
        match self {
            SurfaceKind::Native => Box::new(NativeScrollSurface::new(orientation)),
            SurfaceKind::Transform => Box::new(TransformScrollSurface::new(orientation)),
        }
    }
}

// ============================================================================
// Shared State
// ============================================================================

/// Metrics, listeners, and liveness shared by both backends
pub(crate) struct SurfaceState {
    pub(crate) viewport_extent: f32,
    pub(crate) content_extent: f32,
    listeners: SlotMap<SurfaceListenerId, PositionListener>,
    destroyed: bool,
}

impl SurfaceState {
    pub(crate) fn new() -> Self {
        Self {
            viewport_extent: 0.0,
            content_extent: 0.0,
            listeners: SlotMap::with_key(),
            destroyed: false,
        }
    }

    pub(crate) fn resize(&mut self, viewport_extent: f32, content_extent: f32) {
        self.viewport_extent = viewport_extent.max(0.0);
        self.content_extent = content_extent.max(0.0);
        tracing::trace!(
            "Surface resized: viewport={:.1} content={:.1}",
            self.viewport_extent,
            self.content_extent
        );
    }

    pub(crate) fn register(&mut self, listener: PositionListener) -> SurfaceListenerId {
        self.listeners.insert(listener)
    }

    pub(crate) fn remove(&mut self, id: SurfaceListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub(crate) fn notify(&mut self, position: ScrollPosition) {
        for listener in self.listeners.values_mut() {
            listener(position);
        }
    }

    pub(crate) fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.listeners.clear();
        self.destroyed = true;
        tracing::debug!("Surface destroyed");
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceState")
            .field("viewport_extent", &self.viewport_extent)
            .field("content_extent", &self.content_extent)
            .field("listeners", &self.listeners.len())
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
