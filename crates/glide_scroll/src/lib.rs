//! Glide Scrollable Surfaces
//!
//! A scrollable surface owns the current offset along one axis and answers
//! metric queries about the viewport and the content it clips. Two backends
//! implement the same [`ScrollableSurface`] contract:
//!
//! - [`NativeScrollSurface`]: reads and writes a native scroll offset
//! - [`TransformScrollSurface`]: emulates scrolling by translating the
//!   content with a negative offset
//!
//! The backend is picked once, at construction, through [`SurfaceKind`].
//!
//! # Example
//!
//! ```rust
//! use glide_core::Orientation;
//! use glide_scroll::SurfaceKind;
//!
//! let mut surface = SurfaceKind::Transform.create(Orientation::Horizontal);
//! surface.resize(300.0, 500.0);
//! assert_eq!(surface.max_scroll_pos(), 200);
//!
//! surface.set_position(120);
//! assert_eq!(surface.position(), 120);
//! assert!(!surface.is_end_reached(5.0));
//! ```

mod emulated;
mod native;
mod surface;

pub use emulated::TransformScrollSurface;
pub use native::NativeScrollSurface;
pub use surface::{PositionListener, ScrollableSurface, SurfaceKind, SurfaceListenerId};
