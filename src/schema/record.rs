use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Header, Value};

/// Field names checked, in order, when resolving a record's title.
pub const TITLE_FIELDS: [&str; 3] = ["track_name", "title", "name"];

/// Shown in place of a title when a record has none.
pub const TITLE_PLACEHOLDER: &str = "<no title>";

/// One parsed data row: header name → coerced value, in header order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Pair each header name with the value at the same position.
    ///
    /// Callers reconcile `values` to the header width first; any surplus on
    /// either side is dropped, like `zip`. A repeated header name keeps its
    /// first position and takes the later value.
    pub fn from_row(header: &Header, values: Vec<Value>) -> Self {
        header
            .iter()
            .map(str::to_string)
            .zip(values)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The first of `track_name`, `title`, `name` that exists, else the first
    /// field. `None` only for a record with no fields at all.
    pub fn title(&self) -> Option<&Value> {
        TITLE_FIELDS
            .iter()
            .find_map(|key| self.fields.get(*key))
            .or_else(|| self.fields.values().next())
    }

    pub fn track_id(&self) -> Option<&Value> {
        self.fields.get("track_id")
    }

    pub fn duration_ms(&self) -> Option<&Value> {
        self.fields.get("duration_ms")
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.title() {
            Some(Value::Text(title)) => write!(f, "<Song {:?}>", title),
            Some(number) => write!(f, "<Song {}>", number),
            None => write!(f, "<Song {}>", TITLE_PLACEHOLDER),
        }
    }
}
