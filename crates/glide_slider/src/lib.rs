//! Glide Slider
//!
//! Headless carousel navigation: brings items into view with begin, middle,
//! or end alignment, either instantly or through an eased transition, and
//! reports which items are fully or partially visible.
//!
//! # Features
//!
//! - **Target computation**: item offsets aligned, rounded, and clamped to
//!   the scrollable range
//! - **Transitions**: one eased timeline at a time, advanced by the host's
//!   frame callback via [`SliderEngine::tick`]
//! - **Visibility**: strict and loose classification with a tolerance
//! - **Stepping**: next/prev targets derived from what is on screen
//! - **Surfaces**: native offset or transform emulation, chosen by config
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use glide_slider::prelude::*;
//!
//! let clock = Rc::new(ManualClock::new());
//! let items = ItemStrip::uniform(10, 100.0, Orientation::Horizontal);
//! let mut slider = SliderEngine::with_clock(SliderConfig::default(), items, clock.clone()).unwrap();
//! slider.resize(300.0, 1000.0);
//!
//! let visible: Vec<usize> = slider.visible_items(true).iter().map(|v| v.index).collect();
//! assert_eq!(visible, vec![0, 1, 2]);
//!
//! assert_eq!(slider.next(), Navigation::Started { from: 0, target: 300 });
//! while slider.tick() {
//!     clock.step_frame();
//! }
//! assert_eq!(slider.position(), 300);
//! ```

pub mod config;
pub mod engine;
pub mod items;
pub mod visibility;

pub use config::{ConfigError, SliderConfig};
pub use engine::{Direction, DropReason, NavTarget, Navigation, NavigationState, SliderEngine};
pub use items::{ItemMetrics, ItemProvider, ItemStrip};
pub use visibility::{Visibility, VisibleItem, VisibleItems};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, SliderConfig};
    pub use crate::engine::{Direction, DropReason, NavTarget, Navigation, SliderEngine};
    pub use crate::items::{ItemMetrics, ItemProvider, ItemStrip};

    pub use glide_animation::{Clock, Easing, ManualClock, SystemClock};
    pub use glide_core::{event_types, Alignment, Orientation, ScrollPosition, SliderEvent};
    pub use glide_scroll::{ScrollableSurface, SurfaceKind};
}
