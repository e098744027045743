//! Event dispatch system
//!
//! Notifications the slider engine sends to its host: the "before navigate"
//! hook, position changes, transition lifecycle, and edge state used to
//! enable or disable navigation controls.
//!
//! The navigation core is single-threaded and cooperative, so handlers are
//! plain `Fn` closures without `Send`/`Sync` bounds.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::axis::ScrollPosition;

/// Event type identifier
pub type EventType = u32;

/// Slider event types
pub mod event_types {
    use super::EventType;

    /// Emitted before any position change caused by a navigation request
    pub const BEFORE_NAVIGATE: EventType = 1;
    pub const POSITION_CHANGED: EventType = 2;
    pub const TRANSITION_STARTED: EventType = 3;
    pub const TRANSITION_FINISHED: EventType = 4;
    /// Begin/end reached state, for refreshing prev/next controls
    pub const EDGES_CHANGED: EventType = 5;
}

/// A notification emitted by the slider engine.
///
/// `I` is the host's item handle type.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent<I> {
    BeforeNavigate {
        index: usize,
        item: I,
    },
    PositionChanged {
        position: ScrollPosition,
    },
    TransitionStarted {
        from: ScrollPosition,
        target: ScrollPosition,
    },
    TransitionFinished {
        position: ScrollPosition,
    },
    EdgesChanged {
        begin_reached: bool,
        end_reached: bool,
    },
}

impl<I> SliderEvent<I> {
    pub fn event_type(&self) -> EventType {
        match self {
            SliderEvent::BeforeNavigate { .. } => event_types::BEFORE_NAVIGATE,
            SliderEvent::PositionChanged { .. } => event_types::POSITION_CHANGED,
            SliderEvent::TransitionStarted { .. } => event_types::TRANSITION_STARTED,
            SliderEvent::TransitionFinished { .. } => event_types::TRANSITION_FINISHED,
            SliderEvent::EdgesChanged { .. } => event_types::EDGES_CHANGED,
        }
    }
}

new_key_type! {
    /// Handle returned by [`EventDispatcher::register`]
    pub struct HandlerId;
}

/// Event handler function type
pub type EventHandler<I> = Box<dyn Fn(&SliderEvent<I>)>;

/// Dispatches slider events to registered handlers
pub struct EventDispatcher<I> {
    handlers: SlotMap<HandlerId, EventHandler<I>>,
    /// Registration order per event type
    by_type: FxHashMap<EventType, Vec<HandlerId>>,
}

impl<I> EventDispatcher<I> {
    pub fn new() -> Self {
        Self {
            handlers: SlotMap::with_key(),
            by_type: FxHashMap::default(),
        }
    }

    /// Register an event handler for an event type
    pub fn register<F>(&mut self, event_type: EventType, handler: F) -> HandlerId
    where
        F: Fn(&SliderEvent<I>) + 'static,
    {
        let id = self.handlers.insert(Box::new(handler));
        self.by_type.entry(event_type).or_default().push(id);
        id
    }

    /// Remove a handler. Returns false if it was already gone.
    pub fn unregister(&mut self, id: HandlerId) -> bool {
        if self.handlers.remove(id).is_none() {
            return false;
        }
        for ids in self.by_type.values_mut() {
            ids.retain(|existing| *existing != id);
        }
        true
    }

    /// Dispatch an event to all handlers registered for its type
    pub fn dispatch(&self, event: &SliderEvent<I>) {
        let Some(ids) = self.by_type.get(&event.event_type()) else {
            return;
        };
        for id in ids {
            if let Some(handler) = self.handlers.get(*id) {
                handler(event);
            }
        }
    }

    /// Drop every registered handler
    pub fn clear(&mut self) {
        self.handlers.clear();
        self.by_type.clear();
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<I> Default for EventDispatcher<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_by_type() {
        let mut dispatcher = EventDispatcher::<usize>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_clone = seen.clone();
        dispatcher.register(event_types::POSITION_CHANGED, move |e| {
            seen_clone.borrow_mut().push(e.clone());
        });

        dispatcher.dispatch(&SliderEvent::PositionChanged { position: 40 });
        dispatcher.dispatch(&SliderEvent::TransitionFinished { position: 40 });

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], SliderEvent::PositionChanged { position: 40 });
    }

    #[test]
    fn test_handlers_run_in_registration_order() {
        let mut dispatcher = EventDispatcher::<usize>::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in 0..3 {
            let order = order.clone();
            dispatcher.register(event_types::BEFORE_NAVIGATE, move |_| {
                order.borrow_mut().push(tag);
            });
        }

        dispatcher.dispatch(&SliderEvent::BeforeNavigate { index: 2, item: 2 });
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unregister_and_clear() {
        let mut dispatcher = EventDispatcher::<usize>::new();
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let id = dispatcher.register(event_types::EDGES_CHANGED, move |_| {
            *count_clone.borrow_mut() += 1;
        });
        dispatcher.register(event_types::EDGES_CHANGED, |_| {});
        assert_eq!(dispatcher.handler_count(), 2);

        assert!(dispatcher.unregister(id));
        assert!(!dispatcher.unregister(id));

        dispatcher.dispatch(&SliderEvent::EdgesChanged {
            begin_reached: true,
            end_reached: false,
        });
        assert_eq!(*count.borrow(), 0);

        dispatcher.clear();
        assert!(dispatcher.is_empty());
    }
}
