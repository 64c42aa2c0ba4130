//! Data types for the inventory grid editor.

mod cell;
mod item;
mod selection;

pub use cell::*;
pub use item::*;
pub use selection::*;
