//! Glide Animation System
//!
//! A single linear progress generator and the pieces it is built from.
//!
//! # Features
//!
//! - **Easing**: monotonic curves mapping elapsed fraction to eased progress,
//!   including CSS-compatible cubic beziers
//! - **Clocks**: a monotonic wall clock and a manually driven clock for
//!   deterministic hosts and tests
//! - **Timeline**: a one-shot, time-bounded run that reports non-decreasing
//!   progress to tick listeners and finishes exactly once
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use std::time::Duration;
//! use glide_animation::{AnimationTimeline, Easing, ManualClock, TimelineStatus};
//!
//! let clock = Rc::new(ManualClock::new());
//! let mut timeline = AnimationTimeline::new(Duration::from_millis(200), Easing::Linear, clock.clone());
//! timeline.start();
//!
//! clock.advance_ms(100);
//! assert_eq!(timeline.advance(), TimelineStatus::Running(0.5));
//!
//! clock.advance_ms(100);
//! assert_eq!(timeline.advance(), TimelineStatus::Completed);
//! ```

pub mod clock;
pub mod easing;
pub mod timeline;

pub use clock::{Clock, ManualClock, SystemClock};
pub use easing::Easing;
pub use timeline::{AnimationTimeline, ListenerId, TimelineStatus};
