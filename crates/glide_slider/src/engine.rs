//! Slider engine
//!
//! Orchestrates a [`ScrollableSurface`] and per-transition
//! [`AnimationTimeline`]s: computes where an item should scroll to, jumps or
//! animates there, classifies visible items, and picks next/prev targets.
//!
//! At most one transition is in flight. While one runs, navigation requests
//! are dropped rather than queued, the same way a UI ignores a gesture made
//! mid-animation.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_animation::ManualClock;
//! use glide_core::{Alignment, Orientation};
//! use glide_slider::{ItemStrip, Navigation, SliderConfig, SliderEngine};
//!
//! let clock = Rc::new(ManualClock::new());
//! let items = ItemStrip::uniform(5, 100.0, Orientation::Horizontal);
//! let mut slider = SliderEngine::with_clock(SliderConfig::default(), items, clock.clone()).unwrap();
//! slider.resize(300.0, 500.0);
//!
//! assert_eq!(slider.navigate_to(2, Alignment::Begin, false), Navigation::Jumped(200));
//!
//! slider.navigate_to(0, Alignment::Begin, true);
//! assert!(slider.is_animating());
//! clock.advance_ms(400);
//! assert!(!slider.tick());
//! assert_eq!(slider.position(), 0);
//! ```

use std::fmt;
use std::rc::Rc;

use glide_animation::{AnimationTimeline, Clock, SystemClock, TimelineStatus};
use glide_core::{
    Alignment, EventDispatcher, EventType, HandlerId, Result, ScrollPosition, SliderError,
    SliderEvent,
};
use glide_scroll::ScrollableSurface;

use crate::config::{ConfigError, SliderConfig};
use crate::items::ItemProvider;
use crate::visibility::{Visibility, VisibleItem, VisibleItems};

// ============================================================================
// Requests and Outcomes
// ============================================================================

/// What to navigate to: an index or an item handle
#[derive(Debug, Clone, PartialEq)]
pub enum NavTarget<I> {
    Index(usize),
    Item(I),
}

/// Step direction for [`SliderEngine::next_target_index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Alignment used when stepping: next aligns to begin, prev to end
    pub fn alignment(&self) -> Alignment {
        match self {
            Direction::Next => Alignment::Begin,
            Direction::Prev => Alignment::End,
        }
    }
}

/// Why a navigation request did not move the viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// A transition is already in flight
    Animating,
    /// Engine has been destroyed
    Destroyed,
    /// Provider has no items
    NoItems,
    /// Item handle is not in the provider
    UnknownItem,
    /// Neither fully nor partially visible items exist to step from
    NoVisibleItems,
    /// Target could not be computed
    Failed(SliderError),
}

/// Outcome of a navigation request
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Position committed synchronously
    Jumped(ScrollPosition),
    /// Animated transition started
    Started {
        from: ScrollPosition,
        target: ScrollPosition,
    },
    /// Request ignored
    Dropped(DropReason),
}

/// Edge and transition state for driving prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub begin_reached: bool,
    pub end_reached: bool,
    pub animating: bool,
}

impl NavigationState {
    pub fn can_go_prev(&self) -> bool {
        !self.begin_reached && !self.animating
    }

    pub fn can_go_next(&self) -> bool {
        !self.end_reached && !self.animating
    }
}

// ============================================================================
// Transition
// ============================================================================

/// The single live transition: its timeline and the span it covers
struct Transition {
    timeline: AnimationTimeline,
    from: ScrollPosition,
    target: ScrollPosition,
}

impl Transition {
    /// `from ± progress * distance`, moving toward `target`
    fn position_at(&self, progress: f32) -> ScrollPosition {
        let distance = (self.target - self.from).abs() as f32;
        let travelled = (progress * distance).round() as ScrollPosition;
        if self.target > self.from {
            self.from + travelled
        } else {
            self.from - travelled
        }
    }
}

enum Step {
    Idle,
    Moved(ScrollPosition),
    Finished(ScrollPosition),
}

/// Clamp a candidate target into `[0, max]`, snapping to `max` within 1 unit
fn clamp_target(target: ScrollPosition, max_scroll_pos: ScrollPosition) -> ScrollPosition {
    if target >= max_scroll_pos - 1 {
        max_scroll_pos
    } else if target < 0 {
        0
    } else {
        target
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Carousel navigation engine
pub struct SliderEngine<P: ItemProvider> {
    config: SliderConfig,
    surface: Box<dyn ScrollableSurface>,
    items: P,
    clock: Rc<dyn Clock>,
    dispatcher: EventDispatcher<P::Item>,
    transition: Option<Transition>,
    destroyed: bool,
}

impl<P: ItemProvider> SliderEngine<P> {
    /// Create an engine timed by the system clock
    pub fn new(config: SliderConfig, items: P) -> std::result::Result<Self, ConfigError> {
        Self::with_clock(config, items, Rc::new(SystemClock::new()))
    }

    /// Create an engine timed by `clock`; the surface backend comes from `config`
    pub fn with_clock(
        config: SliderConfig,
        items: P,
        clock: Rc<dyn Clock>,
    ) -> std::result::Result<Self, ConfigError> {
        let surface = config.surface_kind().create(config.orientation);
        Self::with_surface(config, items, surface, clock)
    }

    /// Create an engine over a host-supplied surface
    pub fn with_surface(
        config: SliderConfig,
        items: P,
        surface: Box<dyn ScrollableSurface>,
        clock: Rc<dyn Clock>,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(
            "Slider created: orientation={:?} surface={:?} items={}",
            config.orientation,
            config.surface_kind(),
            items.len()
        );
        Ok(Self {
            config,
            surface,
            items,
            clock,
            dispatcher: EventDispatcher::new(),
            transition: None,
            destroyed: false,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn surface(&self) -> &dyn ScrollableSurface {
        self.surface.as_ref()
    }

    /// Mutable surface access, e.g. to attach position listeners
    pub fn surface_mut(&mut self) -> &mut dyn ScrollableSurface {
        self.surface.as_mut()
    }

    pub fn items(&self) -> &P {
        &self.items
    }

    /// Mutable provider access. Metrics are re-read on every query, so
    /// relayouts take effect immediately.
    pub fn items_mut(&mut self) -> &mut P {
        &mut self.items
    }

    pub fn position(&self) -> ScrollPosition {
        self.surface.position()
    }

    /// Whether a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn is_begin_reached(&self) -> bool {
        self.surface.is_begin_reached(self.config.edge_tolerance)
    }

    pub fn is_end_reached(&self) -> bool {
        self.surface.is_end_reached(self.config.edge_tolerance)
    }

    pub fn navigation_state(&self) -> NavigationState {
        NavigationState {
            begin_reached: self.is_begin_reached(),
            end_reached: self.is_end_reached(),
            animating: self.is_animating(),
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Subscribe to an event type (see [`glide_core::event_types`])
    pub fn on<F>(&mut self, event_type: EventType, handler: F) -> HandlerId
    where
        F: Fn(&SliderEvent<P::Item>) + 'static,
    {
        self.dispatcher.register(event_type, handler)
    }

    /// Unsubscribe. Returns false if the handler was already gone.
    pub fn off(&mut self, id: HandlerId) -> bool {
        self.dispatcher.unregister(id)
    }

    fn emit(&self, event: SliderEvent<P::Item>) {
        self.dispatcher.dispatch(&event);
    }

    fn emit_edges(&self) {
        self.emit(SliderEvent::EdgesChanged {
            begin_reached: self.is_begin_reached(),
            end_reached: self.is_end_reached(),
        });
    }

    /// Re-announce edge state so hosts can refresh their controls
    pub fn refresh(&self) {
        if !self.destroyed {
            self.emit_edges();
        }
    }

    /// Report new layout metrics and refresh edge state.
    ///
    /// A shrinking scroll range pulls the position, and any live
    /// transition's endpoints, back inside `[0, max_scroll_pos]`.
    pub fn resize(&mut self, viewport_extent: f32, content_extent: f32) {
        if self.destroyed {
            return;
        }
        let before = self.surface.position();
        self.surface.resize(viewport_extent, content_extent);

        let max = self.surface.max_scroll_pos();
        let position = self.surface.position();
        if let Some(transition) = self.transition.as_mut() {
            if transition.from > max || transition.target > max {
                // Resume from the clamped position
                transition.from = position;
                transition.target = transition.target.min(max);
                tracing::debug!("Transition retargeted to {}", transition.target);
            }
        }

        if position != before {
            tracing::debug!("Resize moved position: {} -> {}", before, position);
            self.emit(SliderEvent::PositionChanged { position });
        }
        self.emit_edges();
    }

    // ========================================================================
    // Target Computation
    // ========================================================================

    /// Scroll position that aligns item `index` in the viewport.
    ///
    /// Rounds up, snaps to the end when within one unit of it, and clamps to
    /// `[0, max_scroll_pos]`. Fails on an out-of-range index.
    pub fn compute_target_position(
        &self,
        index: usize,
        alignment: Alignment,
    ) -> Result<ScrollPosition> {
        if self.destroyed {
            return Err(SliderError::Destroyed);
        }
        let len = self.items.len();
        let out_of_range = SliderError::IndexOutOfRange { index, len };
        if index >= len {
            return Err(out_of_range);
        }

        let metrics = self
            .items
            .metrics(index, self.config.orientation, self.surface.position())
            .ok_or(out_of_range)?;
        let viewport = self.surface.viewport_extent();
        let raw = metrics.offset - alignment.shift(viewport, metrics.size);
        let target = clamp_target(raw.ceil() as ScrollPosition, self.surface.max_scroll_pos());

        tracing::trace!(
            "Target for item {} ({:?}): offset={:.1} size={:.1} raw={:.1} -> {}",
            index,
            alignment,
            metrics.offset,
            metrics.size,
            raw,
            target
        );
        Ok(target)
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Bring the item at `index` into view. See [`navigate`](Self::navigate).
    pub fn navigate_to(&mut self, index: usize, alignment: Alignment, animate: bool) -> Navigation {
        self.navigate(NavTarget::Index(index), alignment, animate)
    }

    /// Bring an item, identified by its handle, into view
    pub fn navigate_to_item(
        &mut self,
        item: P::Item,
        alignment: Alignment,
        animate: bool,
    ) -> Navigation {
        self.navigate(NavTarget::Item(item), alignment, animate)
    }

    /// Bring an item into view.
    ///
    /// Out-of-range indices saturate at the nearest edge. Dropped while a
    /// transition is in flight. Emits `BeforeNavigate` before any position
    /// change, then either commits the target (`animate == false`) or starts
    /// a transition that [`tick`](Self::tick) advances.
    pub fn navigate(
        &mut self,
        target: NavTarget<P::Item>,
        alignment: Alignment,
        animate: bool,
    ) -> Navigation {
        if self.destroyed {
            tracing::warn!("Navigation requested on destroyed slider");
            return Navigation::Dropped(DropReason::Destroyed);
        }
        if self.transition.is_some() {
            tracing::debug!("Navigation dropped: transition in flight");
            return Navigation::Dropped(DropReason::Animating);
        }
        let len = self.items.len();
        if len == 0 {
            return Navigation::Dropped(DropReason::NoItems);
        }

        let (index, item) = match target {
            NavTarget::Index(index) => {
                let index = index.min(len - 1);
                match self.items.item(index) {
                    Some(item) => (index, item),
                    None => {
                        let err = SliderError::IndexOutOfRange { index, len };
                        tracing::error!("Provider has no item at clamped index: {}", err);
                        return Navigation::Dropped(DropReason::Failed(err));
                    }
                }
            }
            NavTarget::Item(item) => match self.items.index_of(&item) {
                Some(index) => (index, item),
                None => {
                    tracing::warn!("Navigation dropped: {}", SliderError::ItemNotFound);
                    return Navigation::Dropped(DropReason::UnknownItem);
                }
            },
        };

        let position = match self.compute_target_position(index, alignment) {
            Ok(position) => position,
            Err(err) => {
                tracing::error!("Target computation failed for item {}: {}", index, err);
                return Navigation::Dropped(DropReason::Failed(err));
            }
        };

        tracing::debug!(
            "Navigate to item {} ({:?}, animate={}): {} -> {}",
            index,
            alignment,
            animate,
            self.surface.position(),
            position
        );
        self.emit(SliderEvent::BeforeNavigate { index, item });

        if animate {
            self.start_transition(position)
        } else {
            self.commit(position);
            self.emit_edges();
            Navigation::Jumped(position)
        }
    }

    /// Navigate to the next or previous unseen item.
    ///
    /// Next aligns the target to the begin edge, prev to the end edge.
    pub fn step(&mut self, direction: Direction, animate: bool) -> Navigation {
        if self.destroyed {
            return Navigation::Dropped(DropReason::Destroyed);
        }
        if self.transition.is_some() {
            tracing::debug!("{:?} dropped: transition in flight", direction);
            return Navigation::Dropped(DropReason::Animating);
        }
        match self.next_target_index(direction) {
            Some(index) => self.navigate_to(index, direction.alignment(), animate),
            None => {
                tracing::debug!("{:?} dropped: no visible items", direction);
                Navigation::Dropped(DropReason::NoVisibleItems)
            }
        }
    }

    pub fn next(&mut self) -> Navigation {
        self.step(Direction::Next, true)
    }

    pub fn prev(&mut self) -> Navigation {
        self.step(Direction::Prev, true)
    }

    fn commit(&mut self, position: ScrollPosition) {
        self.surface.set_position(position);
        self.emit(SliderEvent::PositionChanged { position });
    }

    /// Start a transition toward `target`. Callers guarantee none is live.
    fn start_transition(&mut self, target: ScrollPosition) -> Navigation {
        let from = self.surface.position();
        let mut timeline =
            AnimationTimeline::new(self.config.duration(), self.config.easing, self.clock.clone());
        timeline.start();
        self.transition = Some(Transition {
            timeline,
            from,
            target,
        });

        self.emit(SliderEvent::TransitionStarted { from, target });
        Navigation::Started { from, target }
    }

    /// Advance the live transition by one frame.
    ///
    /// Call from the host's per-frame callback. Returns true while a
    /// transition is still in flight.
    pub fn tick(&mut self) -> bool {
        if self.destroyed {
            return false;
        }

        let step = match self.transition.as_mut() {
            None => Step::Idle,
            Some(transition) => match transition.timeline.advance() {
                TimelineStatus::Running(progress) => Step::Moved(transition.position_at(progress)),
                TimelineStatus::Completed => Step::Finished(transition.target),
                TimelineStatus::Inactive => Step::Finished(transition.target),
            },
        };

        match step {
            Step::Idle => false,
            Step::Moved(position) => {
                if position != self.surface.position() {
                    self.commit(position);
                }
                true
            }
            Step::Finished(target) => {
                self.transition = None;
                self.commit(target);
                tracing::debug!("Transition finished at {}", target);
                self.emit(SliderEvent::TransitionFinished { position: target });
                self.emit_edges();
                false
            }
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    /// Items in view, in index order.
    ///
    /// `strict` requires both edges in view; otherwise either edge suffices.
    /// Empty until the viewport has a size.
    pub fn visible_items(&self, strict: bool) -> VisibleItems<P::Item> {
        let mut visible = VisibleItems::new();
        let viewport = self.surface.viewport_extent();
        if viewport <= 0.0 {
            return visible;
        }

        let position = self.surface.position();
        for index in 0..self.items.len() {
            let Some(metrics) = self.items.metrics(index, self.config.orientation, position) else {
                continue;
            };
            let visibility =
                Visibility::classify(metrics, position, viewport, self.config.visibility_tolerance);
            if !visibility.is_visible(strict) {
                continue;
            }
            if let Some(item) = self.items.item(index) {
                visible.push(VisibleItem { item, index });
            }
        }
        visible
    }

    /// Index a next/prev step should navigate to.
    ///
    /// Steps one past the fully visible run; with no fully visible item
    /// (e.g. an item larger than the viewport), falls back to the partially
    /// visible run's edge. Saturates at the first and last index. `None`
    /// when nothing is visible at all.
    pub fn next_target_index(&self, direction: Direction) -> Option<usize> {
        let last_index = self.items.len().checked_sub(1)?;

        let strict = self.visible_items(true);
        let candidate = if let (Some(first), Some(last)) = (strict.first(), strict.last()) {
            match direction {
                Direction::Next => last.index + 1,
                Direction::Prev => first.index.saturating_sub(1),
            }
        } else {
            let loose = self.visible_items(false);
            let (first, last) = (loose.first()?, loose.last()?);
            match direction {
                Direction::Next => last.index,
                Direction::Prev => first.index,
            }
        };

        Some(candidate.min(last_index))
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Halt any transition, drop event handlers, and destroy the surface.
    /// Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.transition = None;
        self.dispatcher.clear();
        self.surface.destroy();
        self.destroyed = true;
        tracing::debug!("Slider destroyed");
    }
}

impl<P: ItemProvider> fmt::Debug for SliderEngine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderEngine")
            .field("config", &self.config)
            .field("position", &self.surface.position())
            .field("items", &self.items.len())
            .field("animating", &self.transition.is_some())
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemStrip;
    use glide_animation::{Easing, ManualClock};
    use glide_core::{event_types, Orientation};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn slider(
        count: usize,
        viewport: f32,
    ) -> (Rc<ManualClock>, SliderEngine<ItemStrip<usize>>) {
        let clock = Rc::new(ManualClock::new());
        let items = ItemStrip::uniform(count, 100.0, Orientation::Horizontal);
        let content = items.content_extent(Orientation::Horizontal);
        let config = SliderConfig::default().with_easing(Easing::Linear);
        let mut engine = SliderEngine::with_clock(config, items, clock.clone()).unwrap();
        engine.resize(viewport, content);
        (clock, engine)
    }

    fn indices(items: &VisibleItems<usize>) -> Vec<usize> {
        items.iter().map(|v| v.index).collect()
    }

    #[test]
    fn test_clamp_target() {
        assert_eq!(clamp_target(-20, 200), 0);
        assert_eq!(clamp_target(120, 200), 120);
        assert_eq!(clamp_target(198, 200), 198);
        assert_eq!(clamp_target(199, 200), 200);
        assert_eq!(clamp_target(350, 200), 200);
        assert_eq!(clamp_target(-5, 0), 0);
    }

    #[test]
    fn test_transition_position_at() {
        let forward = Transition {
            timeline: AnimationTimeline::new(
                std::time::Duration::from_millis(10),
                Easing::Linear,
                Rc::new(ManualClock::new()),
            ),
            from: 100,
            target: 300,
        };
        assert_eq!(forward.position_at(0.0), 100);
        assert_eq!(forward.position_at(0.5), 200);
        assert_eq!(forward.position_at(1.0), 300);

        let backward = Transition {
            from: 300,
            target: 100,
            ..forward
        };
        assert_eq!(backward.position_at(0.25), 250);
        assert_eq!(backward.position_at(1.0), 100);
    }

    #[test]
    fn test_compute_target_alignments() {
        let (_, engine) = slider(10, 300.0);

        assert_eq!(engine.compute_target_position(4, Alignment::Begin), Ok(400));
        assert_eq!(engine.compute_target_position(4, Alignment::Middle), Ok(300));
        assert_eq!(engine.compute_target_position(4, Alignment::End), Ok(200));
        assert_eq!(engine.compute_target_position(0, Alignment::End), Ok(0));
        assert_eq!(engine.compute_target_position(9, Alignment::Begin), Ok(700));
    }

    #[test]
    fn test_compute_target_rejects_bad_index() {
        let (_, engine) = slider(5, 300.0);
        assert_eq!(
            engine.compute_target_position(5, Alignment::Begin),
            Err(SliderError::IndexOutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn test_compute_target_rounds_up() {
        let (_, mut engine) = slider(10, 300.0);
        engine.items_mut().set_box(3, glide_core::ItemBox::new(250.4, 0.0, 100.0, 100.0));
        assert_eq!(engine.compute_target_position(3, Alignment::Begin), Ok(251));
    }

    #[test]
    fn test_navigate_jump_commits_synchronously() {
        let (_, mut engine) = slider(10, 300.0);
        assert_eq!(engine.navigate_to(3, Alignment::Begin, false), Navigation::Jumped(300));
        assert_eq!(engine.position(), 300);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_navigate_clamps_index() {
        let (_, mut engine) = slider(5, 300.0);
        assert_eq!(engine.navigate_to(42, Alignment::Begin, false), Navigation::Jumped(200));
    }

    #[test]
    fn test_navigate_by_item_handle() {
        let (_, mut engine) = slider(10, 300.0);
        assert_eq!(
            engine.navigate_to_item(6, Alignment::Middle, false),
            Navigation::Jumped(500)
        );
        assert_eq!(
            engine.navigate(NavTarget::Item(99), Alignment::Begin, false),
            Navigation::Dropped(DropReason::UnknownItem)
        );
        assert_eq!(engine.position(), 500);
    }

    #[test]
    fn test_empty_provider_drops() {
        let (_, mut engine) = slider(0, 300.0);
        assert_eq!(
            engine.navigate_to(0, Alignment::Begin, false),
            Navigation::Dropped(DropReason::NoItems)
        );
        assert_eq!(engine.next_target_index(Direction::Next), None);
    }

    #[test]
    fn test_animated_navigation_ticks_to_target() {
        let (clock, mut engine) = slider(10, 300.0);
        assert_eq!(
            engine.navigate_to(4, Alignment::Begin, true),
            Navigation::Started { from: 0, target: 400 }
        );
        assert!(engine.is_animating());
        assert_eq!(engine.position(), 0);

        clock.advance_ms(100);
        assert!(engine.tick());
        assert_eq!(engine.position(), 100);

        clock.advance_ms(200);
        assert!(engine.tick());
        assert_eq!(engine.position(), 300);

        clock.advance_ms(100);
        assert!(!engine.tick());
        assert_eq!(engine.position(), 400);
        assert!(!engine.is_animating());
        assert!(!engine.tick());
    }

    #[test]
    fn test_backward_animation() {
        let (clock, mut engine) = slider(10, 300.0);
        engine.navigate_to(6, Alignment::Begin, false);

        engine.navigate_to(2, Alignment::Begin, true);
        clock.advance_ms(200);
        engine.tick();
        assert_eq!(engine.position(), 400);

        clock.advance_ms(200);
        engine.tick();
        assert_eq!(engine.position(), 200);
    }

    #[test]
    fn test_requests_dropped_while_animating() {
        let (clock, mut engine) = slider(10, 300.0);
        engine.navigate_to(5, Alignment::Begin, true);
        clock.advance_ms(100);
        engine.tick();
        let position = engine.position();

        assert_eq!(
            engine.navigate_to(1, Alignment::Begin, false),
            Navigation::Dropped(DropReason::Animating)
        );
        assert_eq!(engine.next(), Navigation::Dropped(DropReason::Animating));
        assert_eq!(engine.position(), position);
        assert!(engine.is_animating());
    }

    #[test]
    fn test_visible_items_empty_without_viewport() {
        let (_, engine) = slider(5, 0.0);
        assert!(engine.visible_items(false).is_empty());
    }

    #[test]
    fn test_next_and_prev_targets() {
        let (_, mut engine) = slider(10, 300.0);
        assert_eq!(indices(&engine.visible_items(true)), vec![0, 1, 2]);
        assert_eq!(engine.next_target_index(Direction::Next), Some(3));
        assert_eq!(engine.next_target_index(Direction::Prev), Some(0));

        engine.navigate_to(4, Alignment::Begin, false);
        assert_eq!(indices(&engine.visible_items(true)), vec![4, 5, 6]);
        assert_eq!(engine.next_target_index(Direction::Next), Some(7));
        assert_eq!(engine.next_target_index(Direction::Prev), Some(3));
    }

    #[test]
    fn test_next_saturates_at_last_index() {
        let (_, mut engine) = slider(5, 300.0);
        engine.navigate_to(4, Alignment::End, false);
        assert_eq!(indices(&engine.visible_items(true)), vec![2, 3, 4]);
        assert_eq!(engine.next_target_index(Direction::Next), Some(4));
    }

    #[test]
    fn test_prev_uses_end_alignment() {
        let (_, mut engine) = slider(10, 300.0);
        engine.navigate_to(6, Alignment::Begin, false);
        // Visible 6..=8, prev targets 5 aligned to the end edge: 500 - 200
        assert_eq!(engine.step(Direction::Prev, false), Navigation::Jumped(300));
    }

    #[test]
    fn test_before_navigate_precedes_position_change() {
        let (_, mut engine) = slider(10, 300.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        for event_type in [
            event_types::BEFORE_NAVIGATE,
            event_types::POSITION_CHANGED,
            event_types::EDGES_CHANGED,
        ] {
            let log = log.clone();
            engine.on(event_type, move |e| log.borrow_mut().push(e.clone()));
        }

        engine.navigate_to(2, Alignment::Begin, false);

        assert_eq!(
            *log.borrow(),
            vec![
                SliderEvent::BeforeNavigate { index: 2, item: 2 },
                SliderEvent::PositionChanged { position: 200 },
                SliderEvent::EdgesChanged {
                    begin_reached: false,
                    end_reached: false,
                },
            ]
        );
    }

    #[test]
    fn test_navigation_state() {
        let (_, mut engine) = slider(5, 300.0);
        let state = engine.navigation_state();
        assert!(state.begin_reached);
        assert!(!state.can_go_prev());
        assert!(state.can_go_next());

        engine.navigate_to(4, Alignment::Begin, false);
        let state = engine.navigation_state();
        assert!(state.end_reached);
        assert!(!state.can_go_next());
    }

    #[test]
    fn test_destroy_halts_transition() {
        let (clock, mut engine) = slider(10, 300.0);
        let events = Rc::new(RefCell::new(0));
        let events_clone = events.clone();
        engine.on(event_types::POSITION_CHANGED, move |_| {
            *events_clone.borrow_mut() += 1;
        });

        engine.navigate_to(5, Alignment::Begin, true);
        engine.destroy();
        engine.destroy();

        clock.advance_ms(1000);
        assert!(!engine.tick());
        assert_eq!(engine.position(), 0);
        assert_eq!(*events.borrow(), 0);
        assert!(!engine.is_animating());
        assert!(engine.surface().is_destroyed());
        assert_eq!(
            engine.navigate_to(1, Alignment::Begin, false),
            Navigation::Dropped(DropReason::Destroyed)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let items = ItemStrip::uniform(3, 100.0, Orientation::Horizontal);
        let config = SliderConfig::default().with_duration_ms(0);
        assert!(matches!(
            SliderEngine::new(config, items),
            Err(ConfigError::InvalidDuration(0))
        ));
    }
}
