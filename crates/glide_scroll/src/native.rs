//! Native scroll offset backend

use glide_core::{Orientation, ScrollPosition};

use crate::surface::{PositionListener, ScrollableSurface, SurfaceListenerId, SurfaceState};

/// Surface backed by a native scroll offset (positive, grows toward the end)
#[derive(Debug)]
pub struct NativeScrollSurface {
    orientation: Orientation,
    scroll_offset: ScrollPosition,
    state: SurfaceState,
}

impl NativeScrollSurface {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            scroll_offset: 0,
            state: SurfaceState::new(),
        }
    }

    /// Native `(scroll_left, scroll_top)` pair for the host to apply
    pub fn scroll_offset(&self) -> (f32, f32) {
        self.orientation.to_xy(self.scroll_offset as f32)
    }

    /// Adopt an offset the host scrolled to on its own (wheel, scrollbar drag).
    ///
    /// Unlike `set_position`, host-reported values are rounded and clamped
    /// into range, since they do not come from the engine.
    pub fn sync_scroll_offset(&mut self, offset: f32) {
        if self.state.is_destroyed() {
            return;
        }
        let clamped = (offset.round() as ScrollPosition).clamp(0, self.max_scroll_pos());
        if clamped == self.scroll_offset {
            return;
        }
        tracing::trace!(
            "Native scroll synced: {} -> {} (reported {:.1})",
            self.scroll_offset,
            clamped,
            offset
        );
        self.scroll_offset = clamped;
        self.state.notify(clamped);
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}

impl ScrollableSurface for NativeScrollSurface {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn position(&self) -> ScrollPosition {
        self.scroll_offset
    }

    fn set_position(&mut self, position: ScrollPosition) {
        if self.state.is_destroyed() {
            tracing::warn!("set_position({}) on destroyed native surface", position);
            return;
        }
        tracing::trace!("Native scroll offset: {} -> {}", self.scroll_offset, position);
        self.scroll_offset = position;
        self.state.notify(position);
    }

    fn viewport_extent(&self) -> f32 {
        self.state.viewport_extent
    }

    fn content_extent(&self) -> f32 {
        self.state.content_extent
    }

    fn resize(&mut self, viewport_extent: f32, content_extent: f32) {
        self.state.resize(viewport_extent, content_extent);

        // A native scroller pulls its offset back when the range shrinks
        let max = self.max_scroll_pos();
        if self.scroll_offset > max && !self.state.is_destroyed() {
            tracing::trace!("Native scroll offset clamped: {} -> {}", self.scroll_offset, max);
            self.scroll_offset = max;
            self.state.notify(max);
        }
    }

    fn on_position_change(&mut self, listener: PositionListener) -> SurfaceListenerId {
        self.state.register(listener)
    }

    fn remove_listener(&mut self, id: SurfaceListenerId) -> bool {
        self.state.remove(id)
    }

    fn destroy(&mut self) {
        self.state.destroy();
    }

    fn is_destroyed(&self) -> bool {
        self.state.is_destroyed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_axis() {
        let mut surface = NativeScrollSurface::new(Orientation::Vertical);
        surface.resize(200.0, 800.0);
        surface.set_position(150);
        assert_eq!(surface.scroll_offset(), (0.0, 150.0));
    }

    #[test]
    fn test_sync_rounds_and_clamps() {
        let mut surface = NativeScrollSurface::new(Orientation::Horizontal);
        surface.resize(300.0, 500.0);

        surface.sync_scroll_offset(42.6);
        assert_eq!(surface.position(), 43);

        surface.sync_scroll_offset(900.0);
        assert_eq!(surface.position(), 200);

        surface.sync_scroll_offset(-12.0);
        assert_eq!(surface.position(), 0);
    }

    #[test]
    fn test_destroy_releases_listeners() {
        let mut surface = NativeScrollSurface::new(Orientation::Horizontal);
        surface.on_position_change(Box::new(|_| {}));
        surface.on_position_change(Box::new(|_| {}));
        assert_eq!(surface.listener_count(), 2);

        surface.destroy();
        assert_eq!(surface.listener_count(), 0);
    }
}
