//! # DiagramKit
//!
//! A 2D canvas transform & selection engine for interactive diagram and
//! blueprint editors: coordinate-space conversion, zoom, pan, and
//! multi-mode object selection (rubber-band box selection and hit testing),
//! independent of any rendering technology.
//!
//! ## Architecture
//!
//! DiagramKit is organized as a workspace with two crates:
//!
//! 1. **diagramkit-geometry** - `Point`/`Rect`/`Circle`/`Transform` value
//!    types, collision and containment predicates, distance helpers, and
//!    screen↔canvas coordinate mapping
//! 2. **diagramkit-canvas** - zoom, pan, and selection controllers plus the
//!    zoom policy configuration
//!
//! The engine is purely functional: the host UI captures pointer events,
//! threads the current transform and controller state through the
//! controllers, and renders from whatever comes back. Nothing is stored
//! between calls.
//!
//! ## Usage
//!
//! ```
//! use diagramkit::{
//!     zoom, Point, Rect, SelectableItem, SelectionMode, SelectionState, Transform, ZoomConfig,
//! };
//!
//! let config = ZoomConfig::default();
//! let mut transform = Transform::IDENTITY;
//!
//! // Wheel zoom anchored at the pointer
//! transform = zoom::wheel_zoom(&transform, -120.0, Point::new(400.0, 300.0), &config);
//!
//! // Drag-select everything in a region
//! let items = vec![SelectableItem::new(1, Rect::new(10.0, 10.0, 50.0, 30.0))];
//! let selection = SelectionState::new()
//!     .start_box(Point::new(0.0, 0.0))
//!     .update_box(Point::new(200.0, 200.0))
//!     .end_box(&items, SelectionMode::Single);
//! assert!(selection.selected_ids.contains(&1));
//! ```

pub use diagramkit_canvas as canvas;
pub use diagramkit_geometry as geometry;

pub use diagramkit_canvas::{
    pan, selection, zoom, ConfigError, PanState, PanUpdate, SelectableItem, SelectionMode,
    SelectionState, ZoomConfig,
};
pub use diagramkit_geometry::{
    collision, distance, Circle, Point, Rect, Transform,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
