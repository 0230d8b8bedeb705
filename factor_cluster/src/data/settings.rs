use std::{
    collections::{btree_map::Entry, BTreeMap},
    str::FromStr,
};

use crate::{
    error::{InvalidSettingValue, InvalidSettingsSource},
    AnyError,
};

pub const SETTING_NUMBER_OF_SHARDS: &str = "index.number_of_shards";
pub const SETTING_NUMBER_OF_REPLICAS: &str = "index.number_of_replicas";
pub const SETTING_READ_ONLY: &str = "index.blocks.read_only";
pub const SETTING_BLOCKS_READ: &str = "index.blocks.read";
pub const SETTING_BLOCKS_WRITE: &str = "index.blocks.write";

/// Flattened, immutable key/value configuration.
///
/// Nested configuration is represented with `.` separated keys, so
/// `{"index": {"number_of_shards": 3}}` becomes `index.number_of_shards = "3"`.
/// Values are kept as strings and only interpreted on read.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Settings(BTreeMap<String, String>);

impl Settings {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    pub fn into_builder(self) -> SettingsBuilder {
        SettingsBuilder { entries: self.0 }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|v| v.as_str())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parse the value of `key` into `T`.
    ///
    /// Returns `Ok(None)` if the key is not set.
    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>, InvalidSettingValue>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| InvalidSettingValue::new(key, raw, e.to_string())),
            None => Ok(None),
        }
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, InvalidSettingValue> {
        let raw = match self.get(key) {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => Ok(Some(true)),
            "false" | "off" | "no" | "0" => Ok(Some(false)),
            _ => Err(InvalidSettingValue::new(key, raw, "expected a boolean")),
        }
    }

    /// All settings below `prefix`, with the prefix stripped from the keys.
    ///
    /// A trailing `.` is implied: `by_prefix("index")` returns
    /// `number_of_shards` for `index.number_of_shards`.
    pub fn by_prefix(&self, prefix: &str) -> Settings {
        let prefix = if prefix.ends_with('.') {
            prefix.to_string()
        } else {
            format!("{}.", prefix)
        };

        self.0
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .map(|(key, value)| (key[prefix.len()..].to_string(), value.clone()))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Load settings from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, AnyError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        let settings = Self::from_json(&value)?;
        Ok(settings)
    }

    /// Flatten a JSON object into settings.
    ///
    /// Objects are joined with `.`, array items are keyed by their position
    /// and `null` values are skipped.
    /// Fails if two entries flatten to the same key, for example
    /// `{"a": {"b": 1}, "a.b": 2}`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, InvalidSettingsSource> {
        let object = value.as_object().ok_or_else(|| {
            InvalidSettingsSource::new(format!(
                "expected a JSON object at the root, got {}",
                json_kind(value)
            ))
        })?;

        let mut entries = BTreeMap::new();
        for (key, value) in object {
            flatten_json(key.clone(), value, &mut entries)?;
        }
        Ok(Self(entries))
    }
}

fn flatten_json(
    path: String,
    value: &serde_json::Value,
    out: &mut BTreeMap<String, String>,
) -> Result<(), InvalidSettingsSource> {
    use serde_json::Value;

    let leaf = match value {
        Value::Null => return Ok(()),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_json(format!("{}.{}", path, index), item, out)?;
            }
            return Ok(());
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_json(format!("{}.{}", path, key), item, out)?;
            }
            return Ok(());
        }
    };

    match out.entry(path) {
        Entry::Vacant(entry) => {
            entry.insert(leaf);
            Ok(())
        }
        Entry::Occupied(entry) => Err(InvalidSettingsSource::new(format!(
            "duplicate setting key '{}'",
            entry.key()
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<K: Into<String>, V: Into<String>> std::iter::FromIterator<(K, V)> for Settings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl serde::Serialize for Settings {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Settings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = BTreeMap::deserialize(deserializer)?;
        Ok(Self(inner))
    }
}

/// Mutable builder for [`Settings`].
#[derive(Clone, Default, Debug)]
pub struct SettingsBuilder {
    entries: BTreeMap<String, String>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn put(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.entries.insert(key.into(), value.to_string());
        self
    }

    /// Copy all entries of `settings`, overwriting existing keys.
    pub fn put_all(mut self, settings: &Settings) -> Self {
        self.entries.extend(
            settings
                .0
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.entries.remove(key);
        self
    }

    pub fn build(self) -> Settings {
        Settings(self.entries)
    }
}
