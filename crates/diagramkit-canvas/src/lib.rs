//! # DiagramKit Canvas
//!
//! Interaction controllers for a 2D diagram canvas: zoom, pan, and
//! multi-mode object selection. Together with `diagramkit-geometry` this
//! crate forms the transform & selection engine behind an interactive
//! diagram editor surface.
//!
//! ## Design
//!
//! The engine is a set of pure transition functions. The host UI owns all
//! state: it captures pointer events, passes the current
//! [`Transform`](diagramkit_geometry::Transform) / [`PanState`] /
//! [`SelectionState`] plus the pointer coordinates into a controller, stores
//! whatever comes back as the new canonical value, and re-renders. The
//! engine holds nothing between calls: there is no interior mutability,
//! no I/O, and no background work, so an in-flight pan or box selection can
//! be cancelled by simply discarding its state.
//!
//! The typical event wiring is:
//!
//! ```text
//! pointer-down  -> PanState::start / SelectionState::start_box
//! pointer-move  -> PanState::update / SelectionState::update_box / update_hover
//! pointer-up    -> PanState::end / SelectionState::end_box
//! wheel         -> zoom::wheel_zoom
//! ```
//!
//! The engine never panics on malformed numeric input; NaN and infinity
//! propagate through the arithmetic. The one guarded path is the
//! degenerate-transform fallback in
//! [`Transform::screen_to_canvas`](diagramkit_geometry::Transform::screen_to_canvas).
//! Configuration is validated once, at [`ZoomConfig`] construction.

pub mod config;
pub mod error;
pub mod pan;
pub mod selection;
pub mod zoom;

pub use config::ZoomConfig;
pub use error::ConfigError;
pub use pan::{PanState, PanUpdate};
pub use selection::{SelectableItem, SelectionMode, SelectionState};
