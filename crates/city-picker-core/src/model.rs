// crates/city-picker-core/src/model.rs
use crate::text::{group_key, FALLBACK_GROUP};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single selectable city.
///
/// `spell` is the transliterated form of `name` and acts as an alternate
/// search key. Missing or `null` fields in source data deserialize as empty
/// strings so matching never has to deal with absent values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub spell: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl CityRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, spell: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            spell: spell.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spell(&self) -> &str {
        &self.spell
    }
}

/// One alphabet bucket: a group key and its cities in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityGroup {
    pub key: String,
    pub cities: Vec<CityRecord>,
}

impl CityGroup {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cities(&self) -> &[CityRecord] {
        &self.cities
    }
}

/// Grouped city list.
///
/// Groups are kept in a `Vec` so insertion order is display order. Every
/// record lives in exactly one group; constructors merge repeated keys into
/// the first group carrying that key.
///
/// Serialized as a JSON object whose key order is the group order:
///
/// ```rust
/// use city_picker_core::CityDataset;
///
/// let ds: CityDataset = serde_json::from_str(
///     r#"{"B": [{"id":"1","name":"北京","spell":"beijing"}], "A": []}"#,
/// ).unwrap();
/// assert_eq!(ds.letters(), vec!["B", "A"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CityDataset {
    groups: Vec<CityGroup>,
}

/// A record together with the key of the group that holds it.
pub type GroupedCity<'a> = (&'a str, &'a CityRecord);

impl CityDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit `(key, records)` pairs, keeping their order.
    pub fn from_groups<K, I>(groups: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<CityRecord>)>,
    {
        let mut ds = Self::new();
        for (key, cities) in groups {
            ds.push_group(key, cities);
        }
        ds
    }

    /// Group a flat list of records by their transliterated first letter.
    ///
    /// Groups come out A–Z with the fallback group `#` last; records keep
    /// their input order inside each group.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CityRecord>,
    {
        let mut buckets: BTreeMap<String, Vec<CityRecord>> = BTreeMap::new();
        let mut fallback = Vec::new();
        for record in records {
            let key = group_key(&record.spell, &record.name);
            if key == FALLBACK_GROUP {
                fallback.push(record);
            } else {
                buckets.entry(key).or_default().push(record);
            }
        }

        let mut ds = Self::from_groups(buckets);
        if !fallback.is_empty() {
            ds.push_group(FALLBACK_GROUP, fallback);
        }
        ds
    }

    /// Append `cities` under `key`, merging into an existing group if the
    /// key is already present.
    pub fn push_group(&mut self, key: impl Into<String>, cities: Vec<CityRecord>) {
        let key = key.into();
        match self.groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.cities.extend(cities),
            None => self.groups.push(CityGroup { key, cities }),
        }
    }

    pub fn groups(&self) -> &[CityGroup] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&CityGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Group keys in display order.
    pub fn letters(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    /// Every record in display order: group order, then within-group order.
    pub fn iter(&self) -> impl Iterator<Item = GroupedCity<'_>> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.cities.iter().map(move |c| (g.key.as_str(), c)))
    }

    /// Total number of records across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.cities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            groups: self.groups.len(),
            cities: self.len(),
            hot_cities: 0,
        }
    }
}

impl Serialize for CityDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.key, &group.cities)?;
        }
        map.end()
    }
}

struct DatasetVisitor;

impl<'de> Visitor<'de> for DatasetVisitor {
    type Value = CityDataset;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from group key to a list of cities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut ds = CityDataset::new();
        while let Some((key, cities)) = access.next_entry::<String, Vec<CityRecord>>()? {
            ds.push_group(key, cities);
        }
        Ok(ds)
    }
}

impl<'de> Deserialize<'de> for CityDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DatasetVisitor)
    }
}

/// Everything a city picker screen needs: the hot list and the grouped list.
///
/// JSON shape:
///
/// ```json
/// { "hotCities": [ {"id": "1", "name": "北京", "spell": "beijing"} ],
///   "cities": { "A": [ ... ], "B": [ ... ] } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityData {
    #[serde(rename = "hotCities", default)]
    pub hot_cities: Vec<CityRecord>,
    #[serde(default)]
    pub cities: CityDataset,
}

impl CityData {
    pub fn hot_cities(&self) -> &[CityRecord] {
        &self.hot_cities
    }

    pub fn cities(&self) -> &CityDataset {
        &self.cities
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            hot_cities: self.hot_cities.len(),
            ..self.cities.stats()
        }
    }

    /// Find a city by exact name, looking at the hot list first.
    pub fn find_by_name(&self, name: &str) -> Option<&CityRecord> {
        find_named(&self.hot_cities, &self.cities, name)
    }
}

pub(crate) fn find_named<'a>(
    hot_cities: &'a [CityRecord],
    cities: &'a CityDataset,
    name: &str,
) -> Option<&'a CityRecord> {
    hot_cities
        .iter()
        .find(|c| c.name == name)
        .or_else(|| cities.iter().map(|(_, c)| c).find(|c| c.name == name))
}

/// Simple aggregate counts for a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub groups: usize,
    pub cities: usize,
    pub hot_cities: usize,
}
