//! Interactive grid component: cell model + selection handling.
//!
//! `GridModel` is the derived view of which item occupies which cell.
//! `InteractiveGrid` is the wasm-exported wrapper the JS host drives:
//! it feeds pointer events in as (row, col) pairs and receives commits
//! through registered callbacks. Rendering stays on the JS side.

mod selection;

pub use selection::{rect_labels, SelectOutcome, SelectionController};

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;

use crate::cell_ref::{format_cell_label, GRID_COLS, GRID_ROWS};
use crate::position::{decode_cells, decode_spec, encode_spec};
use crate::types::{GridCell, GridCoord, Item, SelectionMode};

/// The derived grid view: one cell per coordinate, each pointing at the
/// occupying item, if any. Rebuilt whenever the item list changes.
#[derive(Debug, Default)]
pub struct GridModel {
    items: Vec<Item>,
    cells: Vec<GridCell>,
}

impl GridModel {
    /// Build the cell grid from an item list.
    ///
    /// Cells claimed by malformed or out-of-bounds placements are
    /// silently left empty. When two items claim the same cell the
    /// later one wins, matching save-time conflict enforcement (the
    /// model itself never re-validates).
    pub fn new(items: Vec<Item>) -> Self {
        let mut cells: Vec<GridCell> = Vec::with_capacity((GRID_ROWS * GRID_COLS) as usize);
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                cells.push(GridCell {
                    label: format_cell_label(GridCoord { row, col }),
                    item: None,
                });
            }
        }

        for (idx, item) in items.iter().enumerate() {
            for coord in decode_cells(&item.grid_position) {
                if let Some(cell) = cells.get_mut(cell_index(coord)) {
                    cell.item = Some(idx);
                }
            }
        }

        Self { items, cells }
    }

    pub fn cell(&self, coord: GridCoord) -> Option<&GridCell> {
        if coord.row >= GRID_ROWS || coord.col >= GRID_COLS {
            return None;
        }
        self.cells.get(cell_index(coord))
    }

    pub fn item_at(&self, coord: GridCoord) -> Option<&Item> {
        let idx = self.cell(coord)?.item?;
        self.items.get(idx)
    }

    pub fn item(&self, idx: usize) -> Option<&Item> {
        self.items.get(idx)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

fn cell_index(coord: GridCoord) -> usize {
    (coord.row * GRID_COLS + coord.col) as usize
}

/// The wasm-exported interactive grid.
///
/// The host feeds pointer events in grid coordinates; selection commits
/// come back through `set_position_callback` with the full ordered label
/// list, and clicks on occupied cells through `set_item_callback` with
/// the item itself.
#[wasm_bindgen]
pub struct InteractiveGrid {
    model: GridModel,
    controller: SelectionController,
    #[cfg(target_arch = "wasm32")]
    on_position_select: Option<Function>,
    #[cfg(target_arch = "wasm32")]
    on_item_select: Option<Function>,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl InteractiveGrid {
    /// Create an empty grid in single-selection mode.
    #[wasm_bindgen(constructor)]
    pub fn new() -> InteractiveGrid {
        console_error_panic_hook::set_once();
        InteractiveGrid {
            model: GridModel::default(),
            controller: SelectionController::new(SelectionMode::Single),
            on_position_select: None,
            on_item_select: None,
        }
    }

    /// Replace the item list (a JS array of items) and rebuild the grid.
    #[wasm_bindgen]
    pub fn load_items(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: Vec<Item> = serde_wasm_bindgen::from_value(items)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.model = GridModel::new(items);
        Ok(())
    }

    /// Set the selection mode: "single", "range", or "multiple".
    #[wasm_bindgen]
    pub fn set_selection_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode = SelectionMode::from_name(mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown selection mode: {mode}")))?;
        self.controller.set_mode(mode);
        Ok(())
    }

    /// Disable or re-enable input (e.g. while a save is in flight).
    #[wasm_bindgen]
    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    /// Replace the selection from a position spec string.
    #[wasm_bindgen]
    pub fn set_selected_spec(&mut self, spec: &str) {
        self.controller.set_selected(decode_spec(spec));
    }

    /// The committed selection as labels, in commit order.
    #[wasm_bindgen]
    pub fn selected_positions(&self) -> Vec<String> {
        self.controller.selected().to_vec()
    }

    /// The committed selection in compact spec form.
    #[wasm_bindgen]
    pub fn selected_spec(&self) -> String {
        encode_spec(self.controller.selected())
    }

    /// Labels inside the live drag rectangle, for highlight rendering.
    #[wasm_bindgen]
    pub fn drag_preview(&self) -> Vec<String> {
        self.controller.drag_preview()
    }

    /// Pointer down on cell (row, col).
    #[wasm_bindgen]
    pub fn mouse_down(&mut self, row: u32, col: u32) {
        let outcome = self
            .controller
            .mouse_down(&self.model, GridCoord { row, col });
        self.dispatch(outcome);
    }

    /// Pointer moved over cell (row, col). Returns whether the drag
    /// preview changed.
    #[wasm_bindgen]
    pub fn mouse_move(&mut self, row: u32, col: u32) -> bool {
        self.controller.mouse_move(GridCoord { row, col })
    }

    /// Pointer released.
    #[wasm_bindgen]
    pub fn mouse_up(&mut self) {
        let outcome = self.controller.mouse_up();
        self.dispatch(outcome);
    }

    /// The cell at (row, col) with its occupying item, as a JS object.
    #[wasm_bindgen]
    pub fn cell_info(&self, row: u32, col: u32) -> JsValue {
        let Some(cell) = self.model.cell(GridCoord { row, col }) else {
            return JsValue::NULL;
        };
        let view = CellView {
            label: cell.label.clone(),
            item: cell.item.and_then(|idx| self.model.item(idx).cloned()),
        };
        serde_wasm_bindgen::to_value(&view).unwrap_or(JsValue::NULL)
    }

    /// Register the selection-commit callback. Receives the full
    /// ordered label array on every commit.
    #[wasm_bindgen]
    pub fn set_position_callback(&mut self, callback: Option<Function>) {
        self.on_position_select = callback;
    }

    /// Register the item-click callback. Receives the clicked item.
    #[wasm_bindgen]
    pub fn set_item_callback(&mut self, callback: Option<Function>) {
        self.on_item_select = callback;
    }
}

#[cfg(target_arch = "wasm32")]
impl InteractiveGrid {
    fn dispatch(&self, outcome: SelectOutcome) {
        match outcome {
            SelectOutcome::Unchanged => {}
            SelectOutcome::Selected(labels) => {
                if let Some(ref callback) = self.on_position_select {
                    let value =
                        serde_wasm_bindgen::to_value(&labels).unwrap_or(JsValue::NULL);
                    let _ = callback.call1(&JsValue::NULL, &value);
                }
            }
            SelectOutcome::Item(idx) => {
                if let (Some(callback), Some(item)) =
                    (self.on_item_select.as_ref(), self.model.item(idx))
                {
                    let value = serde_wasm_bindgen::to_value(item).unwrap_or(JsValue::NULL);
                    let _ = callback.call1(&JsValue::NULL, &value);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for InteractiveGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Cell payload handed to the JS host by `cell_info`.
#[derive(serde::Serialize)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct CellView {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<Item>,
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl InteractiveGrid {
    /// Create a grid over an item list (non-WASM, for testing).
    #[must_use]
    pub fn new_test(items: Vec<Item>) -> Self {
        InteractiveGrid {
            model: GridModel::new(items),
            controller: SelectionController::new(SelectionMode::Single),
        }
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.controller.set_mode(mode);
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.controller.set_disabled(disabled);
    }

    pub fn set_selected_spec(&mut self, spec: &str) {
        self.controller.set_selected(decode_spec(spec));
    }

    pub fn selected_positions(&self) -> &[String] {
        self.controller.selected()
    }

    pub fn selected_spec(&self) -> String {
        encode_spec(self.controller.selected())
    }

    pub fn drag_preview(&self) -> Vec<String> {
        self.controller.drag_preview()
    }

    pub fn mouse_down(&mut self, row: u32, col: u32) -> SelectOutcome {
        self.controller
            .mouse_down(&self.model, GridCoord { row, col })
    }

    pub fn mouse_move(&mut self, row: u32, col: u32) -> bool {
        self.controller.mouse_move(GridCoord { row, col })
    }

    pub fn mouse_up(&mut self) -> SelectOutcome {
        self.controller.mouse_up()
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }
}
