use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ErrorKind, Result};

/// Field names the calendar endpoint reads. The client forwards them
/// untouched; defaults are applied server-side.
pub mod fields {
    pub const CROP: &str = "crop";
    pub const SOWING_DATE: &str = "sowing_date";
    pub const DURATION_DAYS: &str = "duration_days";
}

/// Flattened name/value view of a submitted form.
///
/// Serializes as a flat JSON object. A name inserted twice keeps the later
/// value, the same as assigning each form entry onto a plain object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: BTreeMap<String, String>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds a payload from raw form entries, as read from `FormData`. An
    /// entry whose name or value is not text (a file input) is skipped; for a
    /// repeated name the last text entry wins.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, Option<String>)>,
    {
        let mut payload = FormPayload::new();
        for entry in entries {
            match entry {
                (Some(name), Some(value)) => payload.insert(name, value),
                (Some(name), None) => log::debug!("skipping non-text field {name}"),
                (None, _) => log::debug!("skipping form entry without a text name"),
            }
        }
        payload
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a `name=value` pair. The value may be empty or contain `=`.
    pub fn parse_pair(pair: &str) -> Result<(String, String)> {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| ErrorKind::ParseError(format!("expected name=value, got {pair:?}")))?;

        if name.is_empty() {
            return Err(ErrorKind::ParseError(format!("empty field name in {pair:?}")).into());
        }

        Ok((name.to_string(), value.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = FormPayload::new();
        for (name, value) in iter {
            payload.insert(name, value);
        }
        payload
    }
}
