//! Item editing session and the wasm-exported editor.
//!
//! `EditSession` is the modal's state: form fields, the working
//! selection, validation, and the in-flight save flag. `ItemEditor`
//! wraps a session for the JS host and delegates persistence to a
//! caller-supplied async save function; a rejection is surfaced inline
//! and the form stays editable for another attempt.

mod form;

pub use form::{validate, ItemForm};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::error::GridError;
use crate::position::{decode_spec, encode_spec};
use crate::types::{Category, Item};

/// Shown when a save rejection carries no usable message.
const GENERIC_SAVE_ERROR: &str = "Failed to save item.";

/// One editing session: opened with an item (or empty for a new one),
/// discarded on close. Nothing carries across sessions.
#[derive(Debug)]
pub struct EditSession {
    original: Option<Item>,
    form: ItemForm,
    selected_positions: Vec<String>,
    existing: Vec<Item>,
    saving: bool,
    error: Option<String>,
}

impl EditSession {
    /// Start a session. `item` is the item being edited, or `None` for
    /// a new item (the first category is preselected). The category
    /// list itself stays with the host; only the default is taken.
    pub fn new(item: Option<Item>, existing: Vec<Item>, categories: &[Category]) -> Self {
        let (form, selected_positions) = match &item {
            Some(item) => (ItemForm::from_item(item), decode_spec(&item.grid_position)),
            None => (
                ItemForm::empty(categories.first().map(|c| c.name.as_str())),
                Vec::new(),
            ),
        };
        Self {
            original: item,
            form,
            selected_positions,
            existing,
            saving: false,
            error: None,
        }
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn is_new(&self) -> bool {
        self.original.is_none()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_positions(&self) -> &[String] {
        &self.selected_positions
    }

    // Field setters are ignored while a save is in flight; the form is
    // effectively read-only until the save settles.

    pub fn set_name(&mut self, name: &str) {
        if !self.saving {
            self.form.name = name.to_string();
        }
    }

    pub fn set_description(&mut self, description: &str) {
        if !self.saving {
            self.form.description = description.to_string();
        }
    }

    pub fn set_category(&mut self, category: &str) {
        if !self.saving {
            self.form.category = category.to_string();
        }
    }

    /// Free-text edit of the position field: the text is kept verbatim
    /// and re-decoded into the working selection.
    pub fn set_position_text(&mut self, text: &str) {
        if self.saving {
            return;
        }
        self.form.grid_position = text.to_string();
        self.selected_positions = decode_spec(text);
    }

    /// A selection committed by the grid: re-encoded into the position
    /// field's compact form.
    pub fn select_positions(&mut self, labels: Vec<String>) {
        if self.saving {
            return;
        }
        self.form.grid_position = encode_spec(&labels);
        self.selected_positions = labels;
    }

    /// Validate and, if the form is valid, mark the session saving and
    /// return the trimmed item payload for the caller to persist.
    ///
    /// On a validation failure the message is recorded on the session
    /// and no external call must be made.
    pub fn begin_save(&mut self) -> crate::error::Result<Item> {
        if self.saving {
            return Err(GridError::Save("a save is already in flight".to_string()));
        }
        match form::validate(&self.form, &self.existing, self.original.as_ref().map(|i| i.id)) {
            Ok(()) => {
                self.error = None;
                self.saving = true;
                Ok(self.payload())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// The external save rejected: keep all form state for retry.
    pub fn save_failed(&mut self, message: &str) {
        self.saving = false;
        let message = message.trim();
        self.error = Some(if message.is_empty() {
            GENERIC_SAVE_ERROR.to_string()
        } else {
            message.to_string()
        });
    }

    /// The external save completed.
    pub fn save_succeeded(&mut self) {
        self.saving = false;
        self.error = None;
    }

    fn payload(&self) -> Item {
        Item {
            id: self.original.as_ref().map(|i| i.id).unwrap_or(0),
            name: self.form.name.trim().to_string(),
            description: self.form.description.trim().to_string(),
            category: self.form.category.clone(),
            grid_position: self.form.grid_position.trim().to_string(),
            created_at: self.original.as_ref().and_then(|i| i.created_at.clone()),
            updated_at: None,
        }
    }
}

/// The wasm-exported item editor.
///
/// The host registers an async save function (item → Promise) and an
/// optional done callback; `save()` validates, disables the form, and
/// settles back into an inline error or the done callback.
#[wasm_bindgen]
pub struct ItemEditor {
    session: Rc<RefCell<EditSession>>,
    #[cfg(target_arch = "wasm32")]
    save_fn: Option<Function>,
    #[cfg(target_arch = "wasm32")]
    on_done: Option<Function>,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl ItemEditor {
    /// Open an editing session. `item` may be null/undefined for a new
    /// item; `existing` and `categories` are JS arrays.
    #[wasm_bindgen(constructor)]
    pub fn new(item: JsValue, existing: JsValue, categories: JsValue) -> Result<ItemEditor, JsValue> {
        console_error_panic_hook::set_once();
        let item: Option<Item> = serde_wasm_bindgen::from_value(item)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let existing: Vec<Item> = serde_wasm_bindgen::from_value(existing)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let categories: Vec<Category> = serde_wasm_bindgen::from_value(categories)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(ItemEditor {
            session: Rc::new(RefCell::new(EditSession::new(item, existing, &categories))),
            save_fn: None,
            on_done: None,
        })
    }

    /// Register the async save function `(item) => Promise<void>`.
    #[wasm_bindgen]
    pub fn set_save_function(&mut self, save_fn: Option<Function>) {
        self.save_fn = save_fn;
    }

    /// Register the callback invoked after a successful save.
    #[wasm_bindgen]
    pub fn set_done_callback(&mut self, callback: Option<Function>) {
        self.on_done = callback;
    }

    #[wasm_bindgen]
    pub fn set_name(&self, name: &str) {
        self.session.borrow_mut().set_name(name);
    }

    #[wasm_bindgen]
    pub fn set_description(&self, description: &str) {
        self.session.borrow_mut().set_description(description);
    }

    #[wasm_bindgen]
    pub fn set_category(&self, category: &str) {
        self.session.borrow_mut().set_category(category);
    }

    /// Free-text edit of the position field.
    #[wasm_bindgen]
    pub fn set_position_text(&self, text: &str) {
        self.session.borrow_mut().set_position_text(text);
    }

    /// A selection committed by the interactive grid.
    #[wasm_bindgen]
    pub fn select_positions(&self, labels: Vec<String>) {
        self.session.borrow_mut().select_positions(labels);
    }

    /// The current form fields as a JS object.
    #[wasm_bindgen]
    pub fn form_data(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.session.borrow().form()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn selected_positions(&self) -> Vec<String> {
        self.session.borrow().selected_positions().to_vec()
    }

    #[wasm_bindgen]
    pub fn is_saving(&self) -> bool {
        self.session.borrow().is_saving()
    }

    #[wasm_bindgen]
    pub fn is_new(&self) -> bool {
        self.session.borrow().is_new()
    }

    /// The current inline error message, if any.
    #[wasm_bindgen]
    pub fn error(&self) -> Option<String> {
        self.session.borrow().error().map(ToString::to_string)
    }

    /// Validate and save. Validation failures are recorded on the
    /// session (read them via `error()`); no external call is made for
    /// them. A valid form is handed to the registered save function and
    /// the session stays disabled until its Promise settles.
    #[wasm_bindgen]
    pub fn save(&self) -> Result<(), JsValue> {
        let mut item = match self.session.borrow_mut().begin_save() {
            Ok(item) => item,
            Err(_) => return Ok(()), // message already on the session
        };

        let Some(save_fn) = self.save_fn.clone() else {
            self.session
                .borrow_mut()
                .save_failed("no save function registered");
            return Ok(());
        };

        item.updated_at = Some(String::from(js_sys::Date::new_0().to_iso_string()));
        let value = serde_wasm_bindgen::to_value(&item)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let session = Rc::clone(&self.session);
        let on_done = self.on_done.clone();
        spawn_local(async move {
            let settled = match save_fn.call1(&JsValue::NULL, &value) {
                Ok(ret) => JsFuture::from(js_sys::Promise::resolve(&ret)).await,
                Err(err) => Err(err),
            };
            match settled {
                Ok(_) => {
                    session.borrow_mut().save_succeeded();
                    if let Some(callback) = on_done {
                        let _ = callback.call0(&JsValue::NULL);
                    }
                }
                Err(err) => {
                    session.borrow_mut().save_failed(&rejection_message(&err));
                }
            }
        });

        Ok(())
    }
}

/// Extract a display string from a Promise rejection: `Error.message`
/// when available, the string value itself, else a generic fallback.
#[cfg(target_arch = "wasm32")]
fn rejection_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        let message = String::from(error.message());
        if !message.is_empty() {
            return message;
        }
    }
    err.as_string().unwrap_or_else(|| GENERIC_SAVE_ERROR.to_string())
}

// ============================================================================
// Non-WASM32 Implementation (for tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl ItemEditor {
    /// Open an editing session (non-WASM, for testing).
    #[must_use]
    pub fn new_test(item: Option<Item>, existing: Vec<Item>, categories: &[Category]) -> Self {
        ItemEditor {
            session: Rc::new(RefCell::new(EditSession::new(item, existing, categories))),
        }
    }

    /// Run the full save flow with a synchronous stand-in for the
    /// external persistence call. Returns whether the save succeeded.
    pub fn save_with<F>(&self, save: F) -> bool
    where
        F: FnOnce(&Item) -> std::result::Result<(), String>,
    {
        let item = match self.session.borrow_mut().begin_save() {
            Ok(item) => item,
            Err(_) => return false,
        };
        match save(&item) {
            Ok(()) => {
                self.session.borrow_mut().save_succeeded();
                true
            }
            Err(message) => {
                self.session.borrow_mut().save_failed(&message);
                false
            }
        }
    }

    /// Borrow the underlying session.
    pub fn session(&self) -> std::cell::Ref<'_, EditSession> {
        self.session.borrow()
    }

    /// Mutably borrow the underlying session.
    pub fn session_mut(&self) -> std::cell::RefMut<'_, EditSession> {
        self.session.borrow_mut()
    }
}
