// crates/city-picker-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and hands the payload to
//! `serde_json`. Supplies the picker's input: the hot list and the grouped
//! city list.

use crate::error::Result;
use crate::model::CityData;
use log::debug;
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::Path;

mod common_io;

pub use common_io::{is_gzip, open_stream};

/// Sample dataset compiled into the crate.
static BUNDLED_DATA: &str = include_str!("../../data/cities.json");

// Single in-process cache so the bundled data is parsed only once.
static CITY_DATA_CACHE: OnceCell<CityData> = OnceCell::new();

impl CityData {
    /// The bundled sample dataset, parsed once per process.
    pub fn load() -> Result<Self> {
        CITY_DATA_CACHE
            .get_or_try_init(|| Self::from_json_str(BUNDLED_DATA))
            .cloned()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load a dataset from disk. `*.gz` files are decompressed on the fly.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let data = Self::from_reader(reader)?;
        debug!("loaded {}: {:?}", path.display(), data.stats());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PickerError;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "hotCities": [{"id": "1", "name": "北京", "spell": "beijing"}],
        "cities": {
            "B": [{"id": "1", "name": "北京", "spell": "beijing"}],
            "A": [{"id": "2", "name": "鞍山", "spell": "anshan"}]
        }
    }"#;

    #[test]
    fn bundled_dataset_loads() {
        let data = CityData::load().unwrap();
        assert!(!data.hot_cities().is_empty());
        assert!(!data.cities().is_empty());
        assert_eq!(data.cities().letters().first(), Some(&"A"));
    }

    #[test]
    fn loads_plain_json_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let data = CityData::load_from_path(file.path()).unwrap();
        assert_eq!(data.cities().letters(), vec!["B", "A"]);
        assert_eq!(data.stats().hot_cities, 1);
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_gzipped_json_from_disk() {
        use flate2::{write::GzEncoder, Compression};

        let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
        encoder.write_all(SAMPLE.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let data = CityData::load_from_path(file.path()).unwrap();
        assert_eq!(data.stats().cities, 2);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = CityData::load_from_path("/no/such/cities.json").unwrap_err();
        assert!(matches!(err, PickerError::NotFound(_)));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = CityData::from_json_str("{\"cities\": [").unwrap_err();
        assert!(matches!(err, PickerError::Json(_)));
    }
}
