//! Browser bindings for [`datetime_picker`].
//!
//! A page constructs a [`DateTimePicker`] from a JSON options object, wires
//! its DOM events to the interaction methods, and redraws from the JSON
//! returned by [`DateTimePicker::view`]. Confirmed values are handed to the
//! function registered with `setOnConfirm` as `"YYYY-MM-DDTHH:MM"` strings.
//!
//! ```js
//! const picker = new DateTimePicker(JSON.stringify({ minimumDate: record.createdAt }));
//! picker.setOnConfirm((value) => {
//!     save(value);
//!     draw(JSON.parse(picker.view()));
//! });
//! picker.toggle();
//! draw(JSON.parse(picker.view()));
//! ```

use std::cell::RefCell;

use chrono::NaiveDateTime;
use datetime_picker::{DateTimePicker as Picker, PickerOptions};
use wasm_bindgen::prelude::*;

/// Layout of confirmed values handed back to the page.
const CONFIRMED_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[wasm_bindgen]
extern "C" {
    /// A JS function taking the confirmed value.
    #[derive(Clone)]
    pub type ConfirmHandler;

    #[wasm_bindgen(method, js_name = call)]
    fn call(this: &ConfirmHandler, this_arg: &JsValue, value: &str);
}

fn format_confirmed(value: NaiveDateTime) -> String {
    value.format(CONFIRMED_FORMAT).to_string()
}

/// Confirm `picker` and pass the value to `notify` once the picker is no
/// longer borrowed, so `notify` may read or drive the picker again.
fn confirm_and_notify(picker: &RefCell<Picker>, notify: impl FnOnce(&str)) -> Option<String> {
    let confirmed = picker.borrow_mut().confirm().map(format_confirmed);
    if let Some(value) = &confirmed {
        notify(value);
    }
    confirmed
}

/// A picker instance owned by the page.
///
/// Methods take `&self` so a confirm handler can call back into the picker
/// (to redraw from `view()`, say) while `confirm()` is still on the stack.
#[wasm_bindgen]
pub struct DateTimePicker {
    inner: RefCell<Picker>,
    on_confirm: RefCell<Option<ConfirmHandler>>,
}

#[wasm_bindgen]
impl DateTimePicker {
    /// Create a picker from `{"minimumDate": ..., "defaultTime"?: ...}`.
    ///
    /// Malformed JSON throws. An unreadable `minimumDate` does not throw; it
    /// leaves the picker without a lower bound, the way a native date input
    /// treats an invalid `min`.
    #[wasm_bindgen(constructor)]
    pub fn new(options: &str) -> Result<DateTimePicker, JsError> {
        let options = PickerOptions::from_json(options)?;
        Ok(Self {
            inner: RefCell::new(Picker::from_options_lenient(&options)),
            on_confirm: RefCell::new(None),
        })
    }

    /// Register the function called once per confirm.
    #[wasm_bindgen(js_name = setOnConfirm)]
    pub fn set_on_confirm(&self, handler: ConfirmHandler) {
        *self.on_confirm.borrow_mut() = Some(handler);
    }

    pub fn toggle(&self) {
        self.inner.borrow_mut().toggle();
    }

    #[wasm_bindgen(js_name = previousMonth)]
    pub fn previous_month(&self) {
        self.inner.borrow_mut().previous_month();
    }

    #[wasm_bindgen(js_name = nextMonth)]
    pub fn next_month(&self) {
        self.inner.borrow_mut().next_month();
    }

    /// Returns `false` when the year would move the selection before the minimum.
    #[wasm_bindgen(js_name = selectYear)]
    pub fn select_year(&self, year: i32) -> bool {
        self.inner.borrow_mut().select_year(year).is_applied()
    }

    /// Returns `false` when the day is disabled or does not exist.
    #[wasm_bindgen(js_name = selectDay)]
    pub fn select_day(&self, day: u32) -> bool {
        self.inner.borrow_mut().select_day(day).is_applied()
    }

    /// Returns `false` when the time is malformed or before the minimum.
    #[wasm_bindgen(js_name = selectTime)]
    pub fn select_time(&self, value: &str) -> bool {
        self.inner.borrow_mut().select_time(value).is_applied()
    }

    /// Close the popover, notify the confirm handler and return the
    /// confirmed value, or `undefined` if the popover was already closed.
    pub fn confirm(&self) -> Option<String> {
        let handler = self.on_confirm.borrow().clone();
        confirm_and_notify(&self.inner, |value| {
            if let Some(handler) = handler {
                handler.call(&JsValue::NULL, value);
            }
        })
    }

    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open()
    }

    /// The current selection as `"YYYY-MM-DDTHH:MM"`.
    pub fn value(&self) -> String {
        format_confirmed(self.inner.borrow().selected_datetime())
    }

    /// The render projection as a JSON string.
    pub fn view(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.inner.borrow().render())?)
    }
}
