// crates/city-picker-core/src/picker.rs
use crate::alphabet::{AlphabetTracker, LayoutMetrics};
use crate::config::PickerConfig;
use crate::context::{AppContext, Navigator, ScrollTarget};
use crate::model::{find_named, CityData, CityDataset, CityRecord};
use crate::search::SearchIndex;
use log::debug;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Something the presentation layer should react to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PickerEvent {
    /// A debounced search finished.
    ResultsUpdated { query: String, count: usize },
    /// The alphabet column resolved a letter; the list has been scrolled to it.
    LetterSelected { letter: String },
    /// A city was chosen; the store has been updated and navigation triggered.
    CitySelected { name: String },
}

/// The city selection screen without its rendering.
///
/// Owns the search index, the alphabet tracker and the [`AppContext`], and
/// forwards letter and city selections to its [`ScrollTarget`] and
/// [`Navigator`]. Hosts call [`tick`](Self::tick) from their event loop.
pub struct CityPicker<N: Navigator, S: ScrollTarget> {
    hot_cities: Vec<CityRecord>,
    dataset: Arc<CityDataset>,
    context: AppContext,
    search: SearchIndex,
    alphabet: AlphabetTracker,
    navigator: N,
    scroller: S,
}

impl<N: Navigator, S: ScrollTarget> CityPicker<N, S> {
    pub fn new(
        data: CityData,
        config: &PickerConfig,
        layout: Box<dyn LayoutMetrics>,
        navigator: N,
        scroller: S,
    ) -> Self {
        let dataset = Arc::new(data.cities);
        let search = SearchIndex::new(Some(dataset.clone()), config.search_debounce());
        let alphabet = AlphabetTracker::new(Some(dataset.clone()), layout, config.touch_debounce())
            .with_emit_after_release(config.emit_after_release);
        Self {
            hot_cities: data.hot_cities,
            dataset,
            context: AppContext::new(config.default_city.clone()),
            search,
            alphabet,
            navigator,
            scroller,
        }
    }

    /// Replace the hot list and the grouped list.
    pub fn set_data(&mut self, data: CityData) {
        let dataset = Arc::new(data.cities);
        self.hot_cities = data.hot_cities;
        self.search.set_dataset(Some(dataset.clone()));
        self.alphabet.set_dataset(Some(dataset.clone()));
        self.dataset = dataset;
        debug!("picker data replaced: {:?}", self.dataset.stats());
    }

    pub fn hot_cities(&self) -> &[CityRecord] {
        &self.hot_cities
    }

    pub fn dataset(&self) -> &CityDataset {
        &self.dataset
    }

    pub fn letters(&self) -> &[String] {
        self.alphabet.letters()
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn selected_city(&self) -> &str {
        self.context.selected_city()
    }

    pub fn search(&self) -> &SearchIndex {
        &self.search
    }

    pub fn alphabet(&self) -> &AlphabetTracker {
        &self.alphabet
    }

    pub fn alphabet_mut(&mut self) -> &mut AlphabetTracker {
        &mut self.alphabet
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    pub fn set_query(&mut self, now: Duration, query: impl Into<String>) {
        self.search.set_query(now, query);
    }

    pub fn results(&self) -> &[CityRecord] {
        self.search.results()
    }

    pub fn touch_start(&mut self) {
        self.alphabet.on_touch_start();
    }

    pub fn touch_move(&mut self, now: Duration, pointer_y: f32) {
        self.alphabet.on_touch_move(now, pointer_y);
    }

    pub fn touch_end(&mut self) {
        self.alphabet.on_touch_end();
    }

    /// Fire whatever timers are due and dispatch their effects.
    pub fn tick(&mut self, now: Duration) -> Vec<PickerEvent> {
        let mut events = Vec::new();
        if self.search.poll(now) {
            events.push(PickerEvent::ResultsUpdated {
                query: self.search.query().to_string(),
                count: self.search.results().len(),
            });
        }
        if let Some(letter) = self.alphabet.poll(now) {
            self.scroller.scroll_to_group(&letter);
            events.push(PickerEvent::LetterSelected { letter });
        }
        events
    }

    /// Finish a pending search now instead of waiting out the window.
    pub fn flush_search(&mut self) -> Option<PickerEvent> {
        self.search.flush().then(|| PickerEvent::ResultsUpdated {
            query: self.search.query().to_string(),
            count: self.search.results().len(),
        })
    }

    /// Choose a city by name: update the store, then navigate home.
    pub fn choose(&mut self, name: &str) -> PickerEvent {
        self.context.select_city(name);
        self.navigator.navigate_home();
        PickerEvent::CitySelected {
            name: name.to_string(),
        }
    }

    /// Look a city up by exact name, hot list first.
    pub fn find_by_name(&self, name: &str) -> Option<&CityRecord> {
        find_named(&self.hot_cities, &self.dataset, name)
    }

    /// Choose the `index`-th hot city.
    pub fn choose_hot(&mut self, index: usize) -> Option<PickerEvent> {
        let name = self.hot_cities.get(index)?.name.clone();
        Some(self.choose(&name))
    }

    /// Choose the `index`-th city under group `letter`.
    pub fn choose_grouped(&mut self, letter: &str, index: usize) -> Option<PickerEvent> {
        let name = self.dataset.group(letter)?.cities.get(index)?.name.clone();
        Some(self.choose(&name))
    }

    /// Choose the `index`-th entry of the current search results.
    pub fn choose_result(&mut self, index: usize) -> Option<PickerEvent> {
        let name = self.search.results().get(index)?.name.clone();
        Some(self.choose(&name))
    }

    /// Cancel pending timers so nothing fires into a torn-down screen.
    pub fn teardown(&mut self) {
        self.search.cancel();
        self.alphabet.cancel();
    }
}
