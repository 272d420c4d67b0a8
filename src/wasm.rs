//! WebAssembly bindings.
//!
//! Exposes [`Slider`] to a JavaScript host. Configuration, values, and
//! events cross the boundary as plain JS objects via `serde-wasm-bindgen`.
//! Domain errors are queued and drained with `takeErrors()`.

use crate::control::SliderConfig;
use crate::error::ErrorEvent;
use crate::session::{Slider, SliderEvent, Track};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn events(events: Vec<SliderEvent>) -> Result<JsValue, JsValue> {
    to_js(&events)
}

#[wasm_bindgen(js_name = Slider)]
pub struct WasmSlider {
    inner: Slider,
    errors: Rc<RefCell<Vec<ErrorEvent>>>,
}

#[wasm_bindgen(js_class = Slider)]
impl WasmSlider {
    /// Builds a slider from a config object, e.g.
    /// `{ value: [20, 80], min: 0, max: 100, interval: 1, fixed: true }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmSlider, JsValue> {
        let config: SliderConfig = if config.is_undefined() || config.is_null() {
            SliderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let errors = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&errors);
        let inner = Slider::with_error_handler(config, move |err| {
            sink.borrow_mut().push(err.event());
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmSlider { inner, errors })
    }

    /// Track length in pixels and whether it runs right-to-left or
    /// bottom-to-top.
    #[wasm_bindgen(js_name = setTrack)]
    pub fn set_track(&mut self, length: f64, reverse: bool) {
        self.inner.set_track(Track::new(length).reversed(reverse));
    }

    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        self.inner.set_disabled(index, disabled);
    }

    #[wasm_bindgen(getter)]
    pub fn positions(&self) -> Vec<f64> {
        self.inner.control().positions().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.values())
    }

    #[wasm_bindgen(getter)]
    pub fn handles(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.handles())
    }

    #[wasm_bindgen(getter)]
    pub fn process(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.control().process())
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: JsValue) -> Result<JsValue, JsValue> {
        let value: crate::control::InitialValue =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let produced = self
            .inner
            .set_value(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        events(produced)
    }

    #[wasm_bindgen(js_name = dragStart)]
    pub fn drag_start(&mut self, index: usize) -> Result<JsValue, JsValue> {
        events(self.inner.drag_start(index))
    }

    /// Moves the dragged handle to a pixel offset along the track.
    #[wasm_bindgen(js_name = dragMove)]
    pub fn drag_move(&mut self, offset: f64) -> Result<JsValue, JsValue> {
        events(self.inner.drag_move_px(offset))
    }

    #[wasm_bindgen(js_name = dragEnd)]
    pub fn drag_end(&mut self) -> Result<JsValue, JsValue> {
        events(self.inner.drag_end())
    }

    /// Clicks the rail at a pixel offset.
    pub fn click(&mut self, offset: f64) -> Result<JsValue, JsValue> {
        events(self.inner.click_px(offset))
    }

    /// Returns and clears the queued `{kind, message}` errors.
    #[wasm_bindgen(js_name = takeErrors)]
    pub fn take_errors(&mut self) -> Result<JsValue, JsValue> {
        let drained = std::mem::take(&mut *self.errors.borrow_mut());
        to_js(&drained)
    }
}
