use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single named asset value inside an [`AssetBreakdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetValue {
    pub name: String,
    pub value: f64,
}

/// Asset label → monetary value, kept in source column order.
///
/// Re-inserting an existing name overwrites its value in place, so names are
/// unique and [`AssetBreakdown::total`] is always the sum of what is stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetBreakdown {
    entries: Vec<AssetValue>,
}

impl AssetBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.value = value,
            None => self.entries.push(AssetValue { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetValue> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.value).sum()
    }
}

impl<N: Into<String>> FromIterator<(N, f64)> for AssetBreakdown {
    fn from_iter<I: IntoIterator<Item = (N, f64)>>(iter: I) -> Self {
        let mut breakdown = AssetBreakdown::new();
        for (name, value) in iter {
            breakdown.insert(name, value);
        }
        breakdown
    }
}

/// One dated snapshot of physical/other asset values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    pub date: NaiveDate,

    /// Every non-date column of the assets sheet, even when zero
    pub values_by_asset_name: AssetBreakdown,

    /// Sum of `values_by_asset_name`
    pub total: f64,
}

impl AssetSnapshot {
    /// Build a snapshot; `total` is derived from the breakdown.
    pub fn new(date: NaiveDate, values_by_asset_name: AssetBreakdown) -> Self {
        let total = values_by_asset_name.total();
        Self {
            date,
            values_by_asset_name,
            total,
        }
    }
}
