use serde::{Deserialize, Serialize};

/// A 0-indexed grid coordinate. Ordering is row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct GridCoord {
    pub row: u32,
    pub col: u32,
}

impl GridCoord {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// One cell of the derived grid view: its label plus the index of the
/// item occupying it, if any. Regenerated whenever the item list
/// changes; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    /// The cell's label ("A1").
    pub label: String,
    /// Index into the grid model's item list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<usize>,
}

impl GridCell {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}
