// crates/city-picker-core/src/search.rs
use crate::model::{CityDataset, CityRecord};
use crate::text::contains_exact;
use crate::timer::{Debouncer, TimerHandle};
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/// Substring search over a grouped dataset.
pub trait CitySearch {
    /// Records whose `spell` or `name` contains `query` verbatim.
    ///
    /// Case-sensitive and unnormalized. Results follow dataset order (group
    /// order, then within-group order) and are never re-ranked. An empty
    /// query matches nothing.
    fn find_cities_by_substring(&self, query: &str) -> Vec<&CityRecord>;
}

impl CitySearch for CityDataset {
    fn find_cities_by_substring(&self, query: &str) -> Vec<&CityRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        self.iter()
            .map(|(_, city)| city)
            .filter(|city| contains_exact(&city.spell, query) || contains_exact(&city.name, query))
            .collect()
    }
}

/// Match `query` against an optional dataset. An absent dataset matches nothing.
pub fn search(query: &str, dataset: Option<&CityDataset>) -> Vec<CityRecord> {
    dataset
        .map(|ds| ds.find_cities_by_substring(query).into_iter().cloned().collect())
        .unwrap_or_default()
}

/// The last completed search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<CityRecord>,
}

/// Debounced search over a shared dataset.
///
/// [`set_query`](Self::set_query) only records input and re-arms the timer;
/// matching happens in [`poll`](Self::poll) once input has been quiet for
/// the debounce window. Each burst of input yields at most one computation.
#[derive(Debug)]
pub struct SearchIndex {
    dataset: Option<Arc<CityDataset>>,
    input: String,
    state: SearchState,
    timer: Debouncer<String>,
    revision: u64,
}

impl SearchIndex {
    pub fn new(dataset: Option<Arc<CityDataset>>, debounce: Duration) -> Self {
        Self {
            dataset,
            input: String::new(),
            state: SearchState::default(),
            timer: Debouncer::new(debounce),
            revision: 0,
        }
    }

    /// Swap the dataset. Current results stay until the next computation.
    pub fn set_dataset(&mut self, dataset: Option<Arc<CityDataset>>) {
        self.dataset = dataset;
    }

    pub fn dataset(&self) -> Option<&CityDataset> {
        self.dataset.as_deref()
    }

    /// Record new input and restart the debounce window.
    pub fn set_query(&mut self, now: Duration, query: impl Into<String>) -> TimerHandle {
        self.input = query.into();
        self.timer.schedule(now, self.input.clone())
    }

    /// Latest input, which may not have been matched yet.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Run the pending computation if its window has elapsed.
    ///
    /// Returns `true` when results were recomputed.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.timer.poll(now) {
            Some(query) => {
                self.compute(query);
                true
            }
            None => false,
        }
    }

    /// Run the pending computation now, ignoring the window.
    pub fn flush(&mut self) -> bool {
        match self.timer.flush() {
            Some(query) => {
                self.compute(query);
                true
            }
            None => false,
        }
    }

    /// Drop any pending computation.
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn results(&self) -> &[CityRecord] {
        &self.state.results
    }

    /// Number of computations performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn compute(&mut self, query: String) {
        let results = search(&query, self.dataset.as_deref());
        self.revision += 1;
        debug!(
            "search #{}: {:?} -> {} result(s)",
            self.revision,
            query,
            results.len()
        );
        self.state = SearchState { query, results };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn dataset() -> Arc<CityDataset> {
        Arc::new(CityDataset::from_groups([
            (
                "B",
                vec![
                    CityRecord::new("1", "北京", "beijing"),
                    CityRecord::new("2", "包头", "baotou"),
                ],
            ),
            ("N", vec![CityRecord::new("3", "南京", "nanjing")]),
        ]))
    }

    #[test]
    fn matches_spell_or_name_in_dataset_order() {
        let ds = dataset();
        let names: Vec<_> = ds
            .find_cities_by_substring("jing")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["北京", "南京"]);

        let by_name: Vec<_> = ds.find_cities_by_substring("京").into_iter().map(|c| c.id.as_str()).collect();
        assert_eq!(by_name, vec!["1", "3"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(dataset().find_cities_by_substring("Jing").is_empty());
    }

    #[test]
    fn absent_dataset_is_empty() {
        assert!(search("jing", None).is_empty());
    }

    #[test]
    fn burst_is_coalesced_into_one_computation() {
        let mut index = SearchIndex::new(Some(dataset()), ms(200));
        index.set_query(ms(0), "b");
        index.set_query(ms(100), "ba");
        index.set_query(ms(199), "bao");
        assert!(!index.poll(ms(300)));
        assert!(index.poll(ms(399)));
        assert_eq!(index.revision(), 1);
        assert_eq!(index.query(), "bao");
        assert_eq!(index.results().len(), 1);
        assert!(!index.poll(ms(10_000)));
    }

    #[test]
    fn empty_query_clears_results() {
        let mut index = SearchIndex::new(Some(dataset()), ms(200));
        index.set_query(ms(0), "jing");
        index.flush();
        assert_eq!(index.results().len(), 2);

        index.set_query(ms(500), "");
        assert!(index.poll(ms(700)));
        assert!(index.results().is_empty());
        assert_eq!(index.revision(), 2);
    }

    #[test]
    fn cancel_drops_pending_computation() {
        let mut index = SearchIndex::new(Some(dataset()), ms(200));
        index.set_query(ms(0), "jing");
        assert!(index.cancel());
        assert!(!index.poll(ms(1_000)));
        assert_eq!(index.revision(), 0);
        assert_eq!(index.input(), "jing");
    }
}
