//! gridkeep - inventory grid editor core for the web
//!
//! The selection and placement logic behind a browser-based inventory
//! grid editor, compiled to WebAssembly:
//! - Cell label / position spec codec ("A1", "A1-A3", "A1,B2")
//! - Single / range / multiple selection with drag tracking
//! - Item edit sessions with validation, conflict detection, and an
//!   async save delegated to the host
//!
//! Rendering and persistence stay on the JavaScript side; the host
//! feeds pointer events in grid coordinates and receives commits
//! through callbacks.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { InteractiveGrid } from 'gridkeep';
//! await init();
//! const grid = new InteractiveGrid();
//! grid.load_items(items);
//! grid.set_selection_mode('range');
//! grid.set_position_callback(labels => render(labels));
//! ```

// Codec modules
pub mod cell_ref;
pub mod error;
pub mod position;
pub mod types;

// Component modules
pub mod editor;
pub mod grid;

use wasm_bindgen::prelude::*;

pub use editor::{EditSession, ItemEditor, ItemForm};
pub use grid::{GridModel, InteractiveGrid, SelectOutcome, SelectionController};
pub use types::*;

/// Decode a position spec into its ordered list of cell labels.
#[must_use]
#[wasm_bindgen]
pub fn decode_position(spec: &str) -> Vec<String> {
    position::decode_spec(spec)
}

/// Encode a list of cell labels into the compact spec form.
#[must_use]
#[wasm_bindgen]
pub fn encode_position(labels: Vec<String>) -> String {
    position::encode_spec(&labels)
}

/// Whether two position specs claim any cell in common.
#[must_use]
#[wasm_bindgen]
pub fn position_conflict(a: &str, b: &str) -> bool {
    position::specs_conflict(a, b)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
