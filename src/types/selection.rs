use crate::types::GridCoord;

/// How clicks on empty cells alter the position selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// A click commits the clicked cell as the sole selection.
    #[default]
    Single,
    /// Press-drag-release commits the bounding rectangle.
    Range,
    /// Each click toggles the clicked cell's membership.
    Multiple,
}

impl SelectionMode {
    /// Parse a mode name as used by the JS host ("single" | "range" | "multiple").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "single" => Some(Self::Single),
            "range" => Some(Self::Range),
            "multiple" => Some(Self::Multiple),
            _ => None,
        }
    }
}

/// Drag gesture state for range selection.
///
/// A tagged state machine rather than nullable start/end fields, so a
/// drag end cannot exist without an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Mouse is down on an empty cell; no movement yet.
    Anchored { anchor: GridCoord },
    /// Mouse has moved; `end` tracks the live preview corner.
    Dragging { anchor: GridCoord, end: GridCoord },
}

impl DragState {
    /// Normalized (min, max) corners of the live preview rectangle, if
    /// a drag is in progress.
    pub fn preview_bounds(&self) -> Option<(GridCoord, GridCoord)> {
        match *self {
            DragState::Idle => None,
            DragState::Anchored { anchor } => Some((anchor, anchor)),
            DragState::Dragging { anchor, end } => Some((
                GridCoord::new(anchor.row.min(end.row), anchor.col.min(end.col)),
                GridCoord::new(anchor.row.max(end.row), anchor.col.max(end.col)),
            )),
        }
    }
}
