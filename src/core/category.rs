use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Ordered map keyed by category, iterated in `CategorySet` order.
pub type CategoryMap<T> = IndexMap<String, T>;

/// Closed, ordered set of category keys declared once per chart.
///
/// Order drives legend ordering and color assignment, so it is preserved
/// exactly as given. The set is never empty and never holds duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    keys: SmallVec<[String; 4]>,
}

impl CategorySet {
    pub fn new<I, S>(keys: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: SmallVec<[String; 4]> = SmallVec::new();
        for key in keys {
            let key = key.into();
            if key.is_empty() {
                return Err(ChartError::InvalidArgument(
                    "category key must not be empty".to_owned(),
                ));
            }
            if out.iter().any(|existing| *existing == key) {
                return Err(ChartError::InvalidArgument(format!(
                    "duplicate category key `{key}`"
                )));
            }
            out.push(key);
        }
        if out.is_empty() {
            return Err(ChartError::InvalidArgument(
                "category set must not be empty".to_owned(),
            ));
        }
        Ok(Self { keys: out })
    }

    /// Stress levels in legend order.
    #[must_use]
    pub fn stress_levels() -> Self {
        Self::from_static(&["Low", "Moderate", "High"])
    }

    #[must_use]
    pub fn generations() -> Self {
        Self::from_static(&["Gen Z", "Millennials"])
    }

    /// Daily time-use metrics, stacked bottom to top in this order.
    #[must_use]
    pub fn lifestyle_metrics() -> Self {
        Self::from_static(&["Study", "Sleep", "Social", "Activity"])
    }

    fn from_static(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(|key| (*key).to_owned()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always `false` for a constructed set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index_of(key).is_some()
    }

    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Builds a map with one entry per category, in set order.
    pub fn map_with<T>(&self, mut value_at: impl FnMut(usize) -> T) -> CategoryMap<T> {
        self.keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.clone(), value_at(index)))
            .collect()
    }
}

impl TryFrom<Vec<String>> for CategorySet {
    type Error = ChartError;

    fn try_from(keys: Vec<String>) -> ChartResult<Self> {
        Self::new(keys)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.keys.into_vec()
    }
}
