//! Axis vocabulary
//!
//! Every metric the engine reads is taken along a single axis. These types
//! let surfaces and item providers agree on which geometric property that
//! axis maps to without the engine branching on orientation itself.

use serde::{Deserialize, Serialize};

/// Integer scroll offset along the active axis, in logical pixels.
///
/// Committed positions always lie in `[0, max_scroll_pos]`.
pub type ScrollPosition = i32;

// ============================================================================
// Orientation
// ============================================================================

/// Axis along which items are laid out and scrolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Items flow left to right (default)
    #[default]
    Horizontal,
    /// Items flow top to bottom
    Vertical,
}

impl Orientation {
    /// Concrete property read for `kind` along this axis
    pub fn axis_property(&self, kind: AxisKind) -> AxisProperty {
        match (self, kind) {
            (Orientation::Horizontal, AxisKind::Offset) => AxisProperty::Left,
            (Orientation::Horizontal, AxisKind::Size) => AxisProperty::Width,
            (Orientation::Vertical, AxisKind::Offset) => AxisProperty::Top,
            (Orientation::Vertical, AxisKind::Size) => AxisProperty::Height,
        }
    }

    /// Split a scalar along this axis into an `(x, y)` pair
    pub fn to_xy(&self, value: f32) -> (f32, f32) {
        match self {
            Orientation::Horizontal => (value, 0.0),
            Orientation::Vertical => (0.0, value),
        }
    }
}

/// Which of the two per-item scalars is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Leading edge position
    Offset,
    /// Outer extent
    Size,
}

/// Geometric property an axis reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisProperty {
    Left,
    Top,
    Width,
    Height,
}

impl AxisProperty {
    /// CSS-style property name, handy for logging and host bindings
    pub fn name(&self) -> &'static str {
        match self {
            AxisProperty::Left => "left",
            AxisProperty::Top => "top",
            AxisProperty::Width => "width",
            AxisProperty::Height => "height",
        }
    }
}

// ============================================================================
// Alignment
// ============================================================================

/// Where a target item should land inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Item's leading edge at the viewport's leading edge (default)
    #[default]
    Begin,
    /// Item centered in the viewport
    Middle,
    /// Item's trailing edge at the viewport's trailing edge
    End,
}

impl Alignment {
    /// Distance subtracted from an item's offset to align it.
    ///
    /// `Begin` is 0, `Middle` is `viewport/2 - size/2`, `End` is
    /// `viewport - size`.
    pub fn shift(&self, viewport_extent: f32, item_size: f32) -> f32 {
        match self {
            Alignment::Begin => 0.0,
            Alignment::Middle => viewport_extent / 2.0 - item_size / 2.0,
            Alignment::End => viewport_extent - item_size,
        }
    }
}

// ============================================================================
// Item Geometry
// ============================================================================

/// Per-side margins
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    /// Same margin on every side
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Horizontal margins only
    pub fn horizontal(value: f32) -> Self {
        Self {
            right: value,
            left: value,
            ..Default::default()
        }
    }
}

/// An item's border box in content coordinates, plus its margins
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub margin: Edges,
}

impl ItemBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            margin: Edges::default(),
        }
    }

    pub fn with_margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Raw border-box value for a property (margins excluded)
    pub fn property(&self, property: AxisProperty) -> f32 {
        match property {
            AxisProperty::Left => self.x,
            AxisProperty::Top => self.y,
            AxisProperty::Width => self.width,
            AxisProperty::Height => self.height,
        }
    }

    /// Leading edge along the axis, including the leading margin
    pub fn outer_offset(&self, orientation: Orientation) -> f32 {
        let border = self.property(orientation.axis_property(AxisKind::Offset));
        match orientation {
            Orientation::Horizontal => border - self.margin.left,
            Orientation::Vertical => border - self.margin.top,
        }
    }

    /// Extent along the axis, including both margins
    pub fn outer_size(&self, orientation: Orientation) -> f32 {
        let border = self.property(orientation.axis_property(AxisKind::Size));
        match orientation {
            Orientation::Horizontal => border + self.margin.left + self.margin.right,
            Orientation::Vertical => border + self.margin.top + self.margin.bottom,
        }
    }
}
