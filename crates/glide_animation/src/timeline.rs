//! One-shot progress timeline
//!
//! A timeline turns wall-clock time into eased progress in `[0, 1]`. The host
//! calls [`AnimationTimeline::advance`] from its per-frame callback; each call
//! delivers one tick to the registered listeners. Progress never decreases
//! within a run, and the finish listeners fire exactly once, right after the
//! tick that reaches 1.0.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

use crate::clock::Clock;
use crate::easing::Easing;

new_key_type! {
    /// Handle returned when registering a timeline listener
    pub struct ListenerId;
}

enum Listener {
    Tick(Box<dyn FnMut(f32)>),
    Finish(Box<dyn FnMut()>),
}

/// What a call to [`AnimationTimeline::advance`] did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineStatus {
    /// Not started, or already completed. No listeners ran.
    Inactive,
    /// Delivered a tick with this progress; more ticks follow
    Running(f32),
    /// Delivered the final 1.0 tick and the finish notification
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayState {
    Idle,
    Running { started_at: Duration },
    Finished,
}

/// A wall-clock progress generator for a single transition
pub struct AnimationTimeline {
    duration: Duration,
    easing: Easing,
    clock: Rc<dyn Clock>,
    state: PlayState,
    progress: f32,
    listeners: SlotMap<ListenerId, Listener>,
}

impl AnimationTimeline {
    /// Create a timeline. Durations below one millisecond are raised to one.
    pub fn new(duration: Duration, easing: Easing, clock: Rc<dyn Clock>) -> Self {
        Self {
            duration: duration.max(Duration::from_millis(1)),
            easing,
            clock,
            state: PlayState::Idle,
            progress: 0.0,
            listeners: SlotMap::with_key(),
        }
    }

    /// Register a callback receiving eased progress on every tick
    pub fn on_tick<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(f32) + 'static,
    {
        self.listeners.insert(Listener::Tick(Box::new(callback)))
    }

    /// Register a callback invoked once, after the final tick
    pub fn on_finish<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut() + 'static,
    {
        self.listeners.insert(Listener::Finish(Box::new(callback)))
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Drop every listener; later ticks have no observers
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Begin the run, measuring from the clock's current time.
    ///
    /// A timeline runs once; calling this on a running or finished timeline
    /// is ignored.
    pub fn start(&mut self) {
        if self.state != PlayState::Idle {
            tracing::warn!("Timeline already started, ignoring start()");
            return;
        }
        let started_at = self.clock.now();
        self.state = PlayState::Running { started_at };
        tracing::debug!(
            "Timeline started: duration={}ms easing={:?}",
            self.duration.as_millis(),
            self.easing
        );
    }

    /// Sample the clock and deliver one tick
    pub fn advance(&mut self) -> TimelineStatus {
        let PlayState::Running { started_at } = self.state else {
            return TimelineStatus::Inactive;
        };

        let elapsed = self.clock.now().saturating_sub(started_at);
        let fraction = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32;
        let done = fraction >= 1.0;

        let eased = if done {
            1.0
        } else {
            self.easing.apply(fraction).clamp(0.0, 1.0)
        };
        self.progress = eased.max(self.progress);

        tracing::trace!(
            "Timeline tick: elapsed={:.1}ms fraction={:.3} progress={:.3}",
            elapsed.as_secs_f64() * 1000.0,
            fraction,
            self.progress
        );

        let progress = self.progress;
        for listener in self.listeners.values_mut() {
            if let Listener::Tick(callback) = listener {
                callback(progress);
            }
        }

        if !done {
            return TimelineStatus::Running(progress);
        }

        self.state = PlayState::Finished;
        for listener in self.listeners.values_mut() {
            if let Listener::Finish(callback) = listener {
                callback();
            }
        }
        tracing::debug!("Timeline finished after {}ms", elapsed.as_millis());
        TimelineStatus::Completed
    }

    /// Most recently delivered progress
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, PlayState::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayState::Finished
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for AnimationTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationTimeline")
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn timeline(ms: u64, easing: Easing) -> (Rc<ManualClock>, AnimationTimeline) {
        let clock = Rc::new(ManualClock::new());
        let timeline = AnimationTimeline::new(Duration::from_millis(ms), easing, clock.clone());
        (clock, timeline)
    }

    #[test]
    fn test_inactive_before_start() {
        let (clock, mut timeline) = timeline(100, Easing::Linear);
        clock.advance_ms(50);
        assert_eq!(timeline.advance(), TimelineStatus::Inactive);
        assert_eq!(timeline.progress(), 0.0);
    }

    #[test]
    fn test_ticks_until_completion() {
        let (clock, mut timeline) = timeline(100, Easing::Linear);
        let ticks = Rc::new(RefCell::new(Vec::new()));

        let ticks_clone = ticks.clone();
        timeline.on_tick(move |p| ticks_clone.borrow_mut().push(p));
        timeline.start();

        clock.advance_ms(25);
        assert_eq!(timeline.advance(), TimelineStatus::Running(0.25));
        clock.advance_ms(50);
        assert_eq!(timeline.advance(), TimelineStatus::Running(0.75));
        clock.advance_ms(50);
        assert_eq!(timeline.advance(), TimelineStatus::Completed);
        assert_eq!(timeline.advance(), TimelineStatus::Inactive);

        assert_eq!(*ticks.borrow(), vec![0.25, 0.75, 1.0]);
        assert!(timeline.is_finished());
    }

    #[test]
    fn test_finish_fires_exactly_once_after_last_tick() {
        let (clock, mut timeline) = timeline(100, Easing::EaseOut);
        let log = Rc::new(RefCell::new(Vec::new()));

        let tick_log = log.clone();
        timeline.on_tick(move |p| tick_log.borrow_mut().push(format!("tick {}", p)));
        let finish_log = log.clone();
        timeline.on_finish(move || finish_log.borrow_mut().push("finish".to_string()));
        timeline.start();

        clock.advance_ms(500);
        timeline.advance();
        timeline.advance();
        clock.advance_ms(500);
        timeline.advance();

        assert_eq!(*log.borrow(), vec!["tick 1", "finish"]);
    }

    #[test]
    fn test_progress_is_non_decreasing() {
        let (clock, mut timeline) = timeline(300, Easing::ease());
        timeline.start();

        let mut last = 0.0;
        loop {
            clock.step_frame();
            let status = timeline.advance();
            assert!(timeline.progress() >= last);
            last = timeline.progress();
            if status == TimelineStatus::Completed {
                break;
            }
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_overshooting_curve_is_clamped() {
        let (clock, mut timeline) = timeline(100, Easing::CubicBezier(0.3, 0.0, 0.4, 1.8));
        timeline.start();

        for _ in 0..10 {
            clock.advance_ms(9);
            timeline.advance();
            assert!(timeline.progress() <= 1.0);
        }
    }

    #[test]
    fn test_off_and_clear_listeners() {
        let (clock, mut timeline) = timeline(100, Easing::Linear);
        let count = Rc::new(RefCell::new(0));

        let count_clone = count.clone();
        let id = timeline.on_tick(move |_| *count_clone.borrow_mut() += 1);
        timeline.on_finish(|| {});
        assert_eq!(timeline.listener_count(), 2);

        timeline.start();
        clock.advance_ms(10);
        timeline.advance();
        assert!(timeline.off(id));
        assert!(!timeline.off(id));

        clock.advance_ms(10);
        timeline.advance();
        assert_eq!(*count.borrow(), 1);

        timeline.clear_listeners();
        assert_eq!(timeline.listener_count(), 0);
    }

    #[test]
    fn test_start_is_once_only() {
        let (clock, mut timeline) = timeline(100, Easing::Linear);
        timeline.start();
        clock.advance_ms(60);
        // A second start must not reset the origin
        timeline.start();
        assert_eq!(timeline.advance(), TimelineStatus::Running(0.6));
    }

    #[test]
    fn test_zero_duration_is_raised() {
        let (clock, mut timeline) = timeline(0, Easing::Linear);
        assert_eq!(timeline.duration(), Duration::from_millis(1));
        timeline.start();
        clock.advance_ms(1);
        assert_eq!(timeline.advance(), TimelineStatus::Completed);
    }
}
