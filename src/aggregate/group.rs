use std::hash::Hash;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CategoryMap, CategorySet};

/// Arithmetic mean of `value_of` per category.
///
/// Rows whose category is absent or outside `categories` are dropped.
/// Non-finite values are excluded from the mean rather than counted as zero;
/// a category with no finite value reports `0.0`.
pub fn group_mean<R, C, V>(
    rows: &[R],
    category_of: C,
    value_of: V,
    categories: &CategorySet,
) -> CategoryMap<f64>
where
    C: Fn(&R) -> Option<&str>,
    V: Fn(&R) -> f64,
{
    let mut sums = vec![0.0_f64; categories.len()];
    let mut counts = vec![0_usize; categories.len()];
    let mut dropped = 0_usize;

    for row in rows {
        let Some(index) = category_of(row).and_then(|key| categories.index_of(key)) else {
            dropped += 1;
            continue;
        };
        let value = value_of(row);
        if !value.is_finite() {
            dropped += 1;
            continue;
        }
        sums[index] += value;
        counts[index] += 1;
    }

    if dropped > 0 {
        trace!(
            dropped,
            rows = rows.len(),
            "group mean skipped rows outside category set or with non-finite values"
        );
    }

    categories.map_with(|index| {
        if counts[index] == 0 {
            0.0
        } else {
            sums[index] / counts[index] as f64
        }
    })
}

/// Number of rows per category; categories with no rows report `0`.
pub fn group_count<R, C>(rows: &[R], category_of: C, categories: &CategorySet) -> CategoryMap<usize>
where
    C: Fn(&R) -> Option<&str>,
{
    let mut counts = vec![0_usize; categories.len()];
    for row in rows {
        if let Some(index) = category_of(row).and_then(|key| categories.index_of(key)) {
            counts[index] += 1;
        }
    }
    categories.map_with(|index| counts[index])
}

/// Share of rows per category relative to the rows inside the set.
///
/// Shares sum to `1.0` whenever at least one row matches; otherwise every
/// share is `0.0`.
pub fn group_share<R, C>(rows: &[R], category_of: C, categories: &CategorySet) -> CategoryMap<f64>
where
    C: Fn(&R) -> Option<&str>,
{
    let counts = group_count(rows, category_of, categories);
    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(key, count)| {
            let share = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            (key, share)
        })
        .collect()
}

/// One heatmap cell: rows falling in `bucket` with category `category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossCell<B> {
    pub bucket: B,
    pub category: String,
    pub count: usize,
}

/// Two-way count table in bucket-major order.
///
/// Every `(bucket, category)` pair gets a cell, zero cells included, so the
/// output length is always `buckets.len() * categories.len()`. Rows whose
/// bucket or category is unknown are dropped.
pub fn cross_count<R, B, K, C>(
    rows: &[R],
    bucket_of: K,
    buckets: &[B],
    category_of: C,
    categories: &CategorySet,
) -> Vec<CrossCell<B>>
where
    B: Clone + Eq + Hash,
    K: Fn(&R) -> Option<B>,
    C: Fn(&R) -> Option<&str>,
{
    let bucket_index: IndexMap<&B, usize> = buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| (bucket, index))
        .collect();
    let width = categories.len();
    let mut counts = vec![0_usize; buckets.len() * width];

    for row in rows {
        let Some(bucket) = bucket_of(row) else {
            continue;
        };
        let Some(&row_index) = bucket_index.get(&bucket) else {
            continue;
        };
        let Some(column) = category_of(row).and_then(|key| categories.index_of(key)) else {
            continue;
        };
        counts[row_index * width + column] += 1;
    }

    let mut cells = Vec::with_capacity(counts.len());
    for (row_index, bucket) in buckets.iter().enumerate() {
        for (column, category) in categories.iter().enumerate() {
            cells.push(CrossCell {
                bucket: bucket.clone(),
                category: category.to_owned(),
                count: counts[row_index * width + column],
            });
        }
    }
    cells
}

/// Rounds a finite value to its integer bucket; non-finite values have none.
#[must_use]
pub fn round_bucket(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < i64::MIN as f64 || rounded > i64::MAX as f64 {
        return None;
    }
    Some(rounded as i64)
}
