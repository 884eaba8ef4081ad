use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Answers keyed by question id (e.g. `phq9_q3`), in the order the caller
/// supplied them.
///
/// Values are kept as raw JSON so that non-integer answers reach the
/// validator and are reported by question id rather than failing
/// deserialization of the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(Map<String, Value>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A new set holding only the answers whose id starts with `prefix`.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for ResponseSet {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for ResponseSet {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Value::from(v)))
                .collect(),
        )
    }
}
