//! Selection state machine for the interactive grid.
//!
//! Translates pointer events on cells into selection commits. The
//! controller is pure state; the wasm wrapper in `grid::mod` forwards
//! commits to the host's callbacks.

use crate::cell_ref::{format_cell_label, in_bounds};
use crate::grid::GridModel;
use crate::types::{DragState, GridCoord, SelectionMode};

/// What a pointer event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing to report to the host.
    Unchanged,
    /// The position selection was committed; carries the full ordered
    /// label set.
    Selected(Vec<String>),
    /// An occupied cell was clicked; carries the item's index in the
    /// grid model. The position selection is untouched.
    Item(usize),
}

/// Tracks the current selection, the drag gesture, and the active mode.
///
/// State is session-local: it is rebuilt whenever the editing modal
/// opens and nothing carries across mode switches.
#[derive(Debug, Default)]
pub struct SelectionController {
    mode: SelectionMode,
    selected: Vec<String>,
    drag: DragState,
    disabled: bool,
}

impl SelectionController {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch selection modes. Any partial drag is abandoned.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.drag = DragState::Idle;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag = DragState::Idle;
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The committed selection, in commit order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Replace the selection wholesale (e.g. after the position text
    /// field was edited by hand).
    pub fn set_selected(&mut self, labels: Vec<String>) {
        self.selected = labels;
    }

    /// Labels inside the live drag rectangle, for the host's visual
    /// preview. Empty when no drag is in progress.
    pub fn drag_preview(&self) -> Vec<String> {
        match self.drag.preview_bounds() {
            Some((min, max)) => rect_labels(min, max),
            None => Vec::new(),
        }
    }

    /// Pointer down on a cell.
    ///
    /// Occupied cells are intercepted first in every mode: the click
    /// selects the item and never alters the position selection.
    pub fn mouse_down(&mut self, model: &GridModel, coord: GridCoord) -> SelectOutcome {
        if self.disabled || !in_bounds(coord) {
            return SelectOutcome::Unchanged;
        }

        if let Some(cell) = model.cell(coord) {
            if let Some(item_idx) = cell.item {
                return SelectOutcome::Item(item_idx);
            }
        }

        let label = format_cell_label(coord);
        match self.mode {
            SelectionMode::Single => {
                self.selected = vec![label];
                SelectOutcome::Selected(self.selected.clone())
            }
            SelectionMode::Multiple => {
                if let Some(pos) = self.selected.iter().position(|l| l == &label) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(label);
                }
                SelectOutcome::Selected(self.selected.clone())
            }
            SelectionMode::Range => {
                self.drag = DragState::Anchored { anchor: coord };
                SelectOutcome::Unchanged
            }
        }
    }

    /// Pointer moved over a cell. Returns whether the live preview
    /// changed (the host re-highlights only when it did).
    pub fn mouse_move(&mut self, coord: GridCoord) -> bool {
        if self.disabled || !in_bounds(coord) {
            return false;
        }
        match self.drag {
            DragState::Idle => false,
            DragState::Anchored { anchor } | DragState::Dragging { anchor, .. } => {
                let next = DragState::Dragging { anchor, end: coord };
                if self.drag == next {
                    return false;
                }
                self.drag = next;
                true
            }
        }
    }

    /// Pointer released: commit the drag, if any.
    pub fn mouse_up(&mut self) -> SelectOutcome {
        let drag = std::mem::take(&mut self.drag);
        if self.disabled {
            return SelectOutcome::Unchanged;
        }
        match drag {
            DragState::Idle => SelectOutcome::Unchanged,
            DragState::Anchored { anchor } => {
                self.selected = vec![format_cell_label(anchor)];
                SelectOutcome::Selected(self.selected.clone())
            }
            DragState::Dragging { anchor, end } => {
                let min = GridCoord::new(anchor.row.min(end.row), anchor.col.min(end.col));
                let max = GridCoord::new(anchor.row.max(end.row), anchor.col.max(end.col));
                self.selected = rect_labels(min, max);
                SelectOutcome::Selected(self.selected.clone())
            }
        }
    }
}

/// All labels in the rectangle spanned by two normalized corners,
/// row-major.
pub fn rect_labels(min: GridCoord, max: GridCoord) -> Vec<String> {
    let mut labels = Vec::new();
    for row in min.row..=max.row {
        for col in min.col..=max.col {
            labels.push(format_cell_label(GridCoord { row, col }));
        }
    }
    labels
}
