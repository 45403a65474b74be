//! Object selection: hit testing, hover tracking, and rubber-band box
//! selection.
//!
//! The controller works against a host-supplied slice of [`SelectableItem`]
//! per call; it never stores or indexes the item list. Item order is paint
//! order: the last item in the slice is topmost. Hit testing and box
//! selection are O(n) linear scans over the slice; hosts with very large
//! item counts should pre-filter before calling in.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use diagramkit_geometry::{rects_overlap, Point, Rect};

/// How a selection operation combines with the existing selected set.
///
/// The mode is an explicit parameter on each call, not stored state; the
/// host derives it from modifier keys (plain click = `Single`, shift =
/// `Add`, alt = `Subtract`, ctrl = `Toggle`, or whatever its bindings are).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Replace the selection with the targeted item(s).
    Single,
    /// Add to the selection (alias of [`SelectionMode::Add`]).
    Multiple,
    /// Add to the selection.
    Add,
    /// Remove the targeted item(s) from the selection.
    Subtract,
    /// Flip membership of the targeted item(s).
    Toggle,
}

/// An item the host exposes to selection, described by its bounding box.
///
/// Supplied fresh on every call; the bounds must be in the same coordinate
/// space as the points handed to the controller (typically canvas space,
/// with pointer positions converted by the host first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectableItem {
    pub id: u64,
    pub bounds: Rect,
    /// `false` removes the item from hit testing and selection entirely.
    pub selectable: bool,
    /// Locked items stay hit-testable (pointer targeting still works) but
    /// are never added to or removed from the selection by a box commit.
    pub locked: bool,
}

impl SelectableItem {
    /// Creates a selectable, unlocked item.
    pub fn new(id: u64, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            selectable: true,
            locked: false,
        }
    }
}

/// Selection interaction state, threaded through the host's event handlers.
///
/// `selection_box` is `Some` exactly while a box-drag is in progress
/// (`is_selecting`); committing or cancelling clears it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_ids: HashSet<u64>,
    pub hovered_id: Option<u64>,
    pub selection_box: Option<Rect>,
    pub is_selecting: bool,
}

impl SelectionState {
    /// Creates an empty selection state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single-item selection operation. Pure set arithmetic; no
    /// geometry involved.
    ///
    /// - `Single` clears the set and inserts `item_id`
    /// - `Multiple` / `Add` inserts
    /// - `Subtract` removes
    /// - `Toggle` flips membership
    pub fn select(&self, item_id: u64, mode: SelectionMode) -> Self {
        let mut selected_ids = self.selected_ids.clone();
        match mode {
            SelectionMode::Single => {
                selected_ids.clear();
                selected_ids.insert(item_id);
            }
            SelectionMode::Multiple | SelectionMode::Add => {
                selected_ids.insert(item_id);
            }
            SelectionMode::Subtract => {
                selected_ids.remove(&item_id);
            }
            SelectionMode::Toggle => {
                if !selected_ids.remove(&item_id) {
                    selected_ids.insert(item_id);
                }
            }
        }
        Self {
            selected_ids,
            ..self.clone()
        }
    }

    /// Empties the selection and discards any in-flight selection box.
    pub fn deselect_all(&self) -> Self {
        Self {
            selected_ids: HashSet::new(),
            selection_box: None,
            is_selecting: false,
            ..self.clone()
        }
    }

    /// Starts a box selection: opens a zero-size box anchored at `point`.
    pub fn start_box(&self, point: Point) -> Self {
        Self {
            selection_box: Some(Rect::new(point.x, point.y, 0.0, 0.0)),
            is_selecting: true,
            ..self.clone()
        }
    }

    /// Grows the in-flight selection box toward `point`.
    ///
    /// The signed deltas from the box origin are normalized so the stored
    /// `Rect` keeps non-negative extents regardless of drag direction: a
    /// negative delta shifts the origin to `point` and stores the
    /// magnitude. A no-op unless a box selection is in progress.
    pub fn update_box(&self, point: Point) -> Self {
        let Some(current_box) = self.selection_box.filter(|_| self.is_selecting) else {
            return self.clone();
        };

        let width = point.x - current_box.x;
        let height = point.y - current_box.y;

        Self {
            selection_box: Some(Rect {
                x: if width < 0.0 { point.x } else { current_box.x },
                y: if height < 0.0 { point.y } else { current_box.y },
                width: width.abs(),
                height: height.abs(),
            }),
            ..self.clone()
        }
    }

    /// Commits the box selection against `items` and resets to idle.
    ///
    /// For `Add` / `Multiple` the result seeds from the prior selection;
    /// every other mode starts from empty. Items are visited in slice
    /// order; items with `selectable == false` or `locked == true` are
    /// skipped unconditionally, even under `Subtract` / `Toggle`. Each
    /// remaining item whose bounds overlap the box gets the mode's set
    /// operation applied.
    ///
    /// A zero-size box (a click with no drag) selects nothing; callers
    /// wanting click-to-select must use [`SelectionState::select`] with a
    /// [`hit_test`] result instead of box selection.
    pub fn end_box(&self, items: &[SelectableItem], mode: SelectionMode) -> Self {
        let Some(selection_box) = self.selection_box else {
            return Self {
                selection_box: None,
                is_selecting: false,
                ..self.clone()
            };
        };

        let mut selected_ids = match mode {
            SelectionMode::Add | SelectionMode::Multiple => self.selected_ids.clone(),
            _ => HashSet::new(),
        };

        let degenerate = selection_box.width == 0.0 && selection_box.height == 0.0;
        if !degenerate {
            for item in items {
                if !item.selectable || item.locked {
                    continue;
                }
                if !rects_overlap(&selection_box, &item.bounds) {
                    continue;
                }
                match mode {
                    SelectionMode::Subtract => {
                        selected_ids.remove(&item.id);
                    }
                    SelectionMode::Toggle => {
                        if !selected_ids.remove(&item.id) {
                            selected_ids.insert(item.id);
                        }
                    }
                    _ => {
                        selected_ids.insert(item.id);
                    }
                }
            }
        }

        debug!(selected = selected_ids.len(), "box selection committed");

        Self {
            selected_ids,
            selection_box: None,
            is_selecting: false,
            ..self.clone()
        }
    }

    /// Recomputes the hovered item from the pointer position.
    ///
    /// Returns `None` when the hovered item is unchanged, so the host can
    /// skip a redundant re-render; otherwise the state with the new
    /// `hovered_id` (possibly cleared).
    pub fn update_hover(&self, items: &[SelectableItem], point: Point) -> Option<Self> {
        let hovered_id = hit_test(items, point).map(|item| item.id);
        if hovered_id == self.hovered_id {
            return None;
        }
        Some(Self {
            hovered_id,
            ..self.clone()
        })
    }
}

/// Finds the topmost selectable item whose bounds contain `point`.
///
/// Scans in reverse slice order (last = topmost, matching paint order).
/// Locked items are still returned: locking affects selection membership,
/// not pointer targeting.
pub fn hit_test(items: &[SelectableItem], point: Point) -> Option<&SelectableItem> {
    items
        .iter()
        .rev()
        .find(|item| item.selectable && item.bounds.contains(point))
}

/// Filters `items` down to those currently selected, in slice order.
pub fn selected_items<'a>(
    items: &'a [SelectableItem],
    state: &SelectionState,
) -> Vec<&'a SelectableItem> {
    items
        .iter()
        .filter(|item| state.selected_ids.contains(&item.id))
        .collect()
}
