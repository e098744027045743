//! Transform-emulated scrolling
//!
//! The content is never natively scrolled; instead it is translated by a
//! negative offset (0 = start edge, `-max_scroll_pos` = end edge) and the
//! viewport clips it. The position reported to the engine is the negated
//! translation, so the backend is indistinguishable from the native one.

use glide_core::{Orientation, ScrollPosition};

use crate::surface::{PositionListener, ScrollableSurface, SurfaceListenerId, SurfaceState};

/// Surface that scrolls by translating its content
#[derive(Debug)]
pub struct TransformScrollSurface {
    orientation: Orientation,
    /// Current content translation along the axis (<= 0 once scrolled)
    translation: f32,
    state: SurfaceState,
}

impl TransformScrollSurface {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            translation: 0.0,
            state: SurfaceState::new(),
        }
    }

    /// `(translate_x, translate_y)` for the renderer to apply to the content
    pub fn translation(&self) -> (f32, f32) {
        self.orientation.to_xy(self.translation)
    }

    pub fn listener_count(&self) -> usize {
        self.state.listener_count()
    }
}

impl ScrollableSurface for TransformScrollSurface {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn position(&self) -> ScrollPosition {
        (-self.translation).round() as ScrollPosition
    }

    fn set_position(&mut self, position: ScrollPosition) {
        if self.state.is_destroyed() {
            tracing::warn!("set_position({}) on destroyed transform surface", position);
            return;
        }
        let translation = -(position as f32);
        tracing::trace!(
            "Content translation: {:.1} -> {:.1}",
            self.translation,
            translation
        );
        self.translation = translation;
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

        // Mirror the native backend: never translate past the end edge
        let max = self.max_scroll_pos();
        if self.position() > max && !self.state.is_destroyed() {
            tracing::trace!("Content translation clamped: {:.1} -> {}", self.translation, -max);
            self.translation = -(max as f32);
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
