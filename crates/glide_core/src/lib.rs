//! Glide Core
//!
//! Shared primitives for the Glide carousel engine:
//!
//! - **Axis vocabulary**: orientation, alignment, and the mapping from an
//!   abstract axis to the concrete geometric property it reads
//! - **Errors**: the small error taxonomy of the navigation core
//! - **Event Dispatch**: notifications emitted by the engine to its host
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Alignment, AxisKind, AxisProperty, Orientation};
//!
//! let axis = Orientation::Vertical;
//! assert_eq!(axis.axis_property(AxisKind::Offset), AxisProperty::Top);
//! assert_eq!(axis.axis_property(AxisKind::Size), AxisProperty::Height);
//!
//! // An item of size 100 centered in a 300 viewport sits 100 past the edge.
//! assert_eq!(Alignment::Middle.shift(300.0, 100.0), 100.0);
//! ```

pub mod axis;
pub mod error;
pub mod events;

pub use axis::{Alignment, AxisKind, AxisProperty, Edges, ItemBox, Orientation, ScrollPosition};
pub use error::{Result, SliderError};
pub use events::{event_types, EventDispatcher, EventHandler, EventType, HandlerId, SliderEvent};
