//! city-picker-wasm — WebAssembly bindings for city-picker-core
//!
//! This crate exposes the city picker to JavaScript. The page renders the
//! lists and the alphabet column; this module does the debounced search, the
//! touch-to-letter mapping and holds the selected city.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`)
//! - A `CityPicker` class driven by the page's event loop:
//!   - `setQuery(now, query)` / `touchStart()` / `touchMove(now, y)` / `touchEnd()`
//!   - `tick(now)` returns the events that became due
//!   - `results()`, `letters()`, `hotCities()`, `selectedCity()`
//!   - `onNavigateHome(fn)`, `onLetterSelected(fn)` hook up the page
//! - `get_stats()` for the bundled dataset
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CityPicker } from 'city-picker-wasm';
//!
//! await init();
//! const first = document.querySelector('.alphabet li');
//! const picker = new CityPicker(first.offsetTop, first.offsetHeight);
//! picker.onLetterSelected((letter) => scroller.scrollToElement(groups[letter]));
//! picker.onNavigateHome(() => router.push('/'));
//!
//! input.addEventListener('input', (e) => picker.setQuery(performance.now(), e.target.value));
//! function frame(now) {
//!   for (const ev of picker.tick(now)) {
//!     if (ev.kind === 'resultsUpdated') renderResults(picker.results());
//!   }
//!   requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```
//!
//! Notes
//! -----
//! - `now` arguments are milliseconds, as returned by `performance.now()`.
//! - Returned objects are plain JSON-serializable values.

use city_picker_core::prelude::*;
use serde_json::json;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use std::result::Result;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing city picker WASM module...".into());

    match CityData::load() {
        Ok(data) => {
            let stats = data.stats();
            web_sys::console::log_1(
                &format!(
                    "✓ Loaded {} cities in {} groups",
                    stats.cities, stats.groups
                )
                .into(),
            );
        }
        Err(e) => web_sys::console::error_1(&format!("Bundled dataset failed: {e}").into()),
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn report(err: JsValue) {
    web_sys::console::error_2(&"city picker callback failed:".into(), &err);
}

/* --------------------------------------------------------------------------
   Host adapters
-------------------------------------------------------------------------- */

/// Calls a JS function when a city has been chosen.
#[derive(Default)]
pub struct JsNavigator {
    callback: Option<js_sys::Function>,
}

impl Navigator for JsNavigator {
    fn navigate_home(&mut self) {
        if let Some(f) = &self.callback {
            if let Err(e) = f.call0(&JsValue::NULL) {
                report(e);
            }
        }
    }
}

/// Calls a JS function with the letter the list should scroll to.
#[derive(Default)]
pub struct JsScroller {
    callback: Option<js_sys::Function>,
}

impl ScrollTarget for JsScroller {
    fn scroll_to_group(&mut self, letter: &str) {
        if let Some(f) = &self.callback {
            if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_str(letter)) {
                report(e);
            }
        }
    }
}

/* --------------------------------------------------------------------------
   Picker
-------------------------------------------------------------------------- */

#[wasm_bindgen(js_name = CityPicker)]
pub struct JsCityPicker {
    inner: CityPicker<JsNavigator, JsScroller>,
    clock: ManualClock,
}

impl JsCityPicker {
    fn build(data: CityData, config: &PickerConfig, baseline_y: f32, element_height: f32) -> Self {
        Self {
            inner: CityPicker::new(
                data,
                config,
                Box::new(FixedLayout::new(baseline_y, element_height)),
                JsNavigator::default(),
                JsScroller::default(),
            ),
            clock: ManualClock::new(),
        }
    }

    fn at(&self, now_ms: f64) -> std::time::Duration {
        self.clock.set_millis(now_ms);
        self.clock.now()
    }
}

#[wasm_bindgen(js_class = CityPicker)]
impl JsCityPicker {
    /// Picker over the bundled dataset with default timings.
    #[wasm_bindgen(constructor)]
    pub fn new(baseline_y: f32, element_height: f32) -> Result<JsCityPicker, JsValue> {
        let data = CityData::load().map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(data, &PickerConfig::default(), baseline_y, element_height))
    }

    /// Picker over a caller-supplied dataset and optional TOML config.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(
        json: &str,
        config_toml: Option<String>,
        baseline_y: f32,
        element_height: f32,
    ) -> Result<JsCityPicker, JsValue> {
        let data = CityData::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config = match config_toml {
            Some(text) => {
                PickerConfig::from_toml_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            None => PickerConfig::default(),
        };
        Ok(Self::build(data, &config, baseline_y, element_height))
    }

    #[wasm_bindgen(js_name = onNavigateHome)]
    pub fn on_navigate_home(&mut self, callback: js_sys::Function) {
        self.inner.navigator_mut().callback = Some(callback);
    }

    #[wasm_bindgen(js_name = onLetterSelected)]
    pub fn on_letter_selected(&mut self, callback: js_sys::Function) {
        self.inner.scroller_mut().callback = Some(callback);
    }

    /// Call after the letter column is re-laid out.
    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, baseline_y: f32, element_height: f32) {
        self.inner
            .alphabet_mut()
            .set_layout(Box::new(FixedLayout::new(baseline_y, element_height)));
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, now_ms: f64, query: String) {
        let now = self.at(now_ms);
        self.inner.set_query(now, query);
    }

    /// Fire due timers; returns the resulting events as an array.
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        let now = self.at(now_ms);
        let events = self.inner.tick(now);
        to_js(&events)
    }

    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.results())
    }

    pub fn letters(&self) -> Vec<String> {
        self.inner.letters().to_vec()
    }

    #[wasm_bindgen(js_name = hotCities)]
    pub fn hot_cities(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.hot_cities())
    }

    /// Cities under one letter, or `undefined`.
    pub fn group(&self, letter: &str) -> Result<JsValue, JsValue> {
        match self.inner.dataset().group(letter) {
            Some(group) => to_js(group.cities()),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = touchStart)]
    pub fn touch_start(&mut self) {
        self.inner.touch_start();
    }

    #[wasm_bindgen(js_name = touchMove)]
    pub fn touch_move(&mut self, now_ms: f64, pointer_y: f32) {
        let now = self.at(now_ms);
        self.inner.touch_move(now, pointer_y);
    }

    #[wasm_bindgen(js_name = touchEnd)]
    pub fn touch_end(&mut self) {
        self.inner.touch_end();
    }

    pub fn choose(&mut self, name: &str) {
        self.inner.choose(name);
    }

    #[wasm_bindgen(js_name = chooseHot)]
    pub fn choose_hot(&mut self, index: usize) -> bool {
        self.inner.choose_hot(index).is_some()
    }

    #[wasm_bindgen(js_name = chooseGrouped)]
    pub fn choose_grouped(&mut self, letter: &str, index: usize) -> bool {
        self.inner.choose_grouped(letter, index).is_some()
    }

    #[wasm_bindgen(js_name = chooseResult)]
    pub fn choose_result(&mut self, index: usize) -> bool {
        self.inner.choose_result(index).is_some()
    }

    #[wasm_bindgen(js_name = selectedCity)]
    pub fn selected_city(&self) -> String {
        self.inner.selected_city().to_string()
    }

    /// Cancel pending timers before the page drops the picker.
    pub fn teardown(&mut self) {
        self.inner.teardown();
    }
}

/* --------------------------------------------------------------------------
   Dataset info
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let data = CityData::load().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let stats = data.stats();
    let stats = json!({
        "groups": stats.groups,
        "cities": stats.cities,
        "hotCities": stats.hot_cities
    });

    to_js(&stats)
}
