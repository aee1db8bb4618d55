use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Vertical extent of one layer within one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    pub baseline: f64,
    pub top: f64,
}

impl StackSegment {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.baseline
    }
}

/// All segments of one stacked series, one per group in row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackLayer<K> {
    pub key: K,
    pub segments: Vec<StackSegment>,
}

/// Cumulative stacking of `keys` over each group in `rows`.
///
/// Layer `i` starts where the sum of `keys[..i]` ends, so the first key sits
/// at the bottom and the last layer's top equals the group total. Non-finite
/// values contribute nothing to the stack.
pub fn stack_layers<R, K, F>(rows: &[R], keys: &[K], value_of: F) -> Vec<StackLayer<K>>
where
    K: Clone,
    F: Fn(&R, &K) -> f64,
{
    let mut running = vec![0.0_f64; rows.len()];
    let mut layers = Vec::with_capacity(keys.len());
    let mut skipped = 0_usize;

    for key in keys {
        let mut segments = Vec::with_capacity(rows.len());
        for (group, row) in rows.iter().enumerate() {
            let value = value_of(row, key);
            let value = if value.is_finite() {
                value
            } else {
                skipped += 1;
                0.0
            };
            let baseline = running[group];
            let top = baseline + value;
            running[group] = top;
            segments.push(StackSegment { baseline, top });
        }
        layers.push(StackLayer {
            key: key.clone(),
            segments,
        });
    }

    if skipped > 0 {
        trace!(skipped, "stack treated non-finite values as zero");
    }
    layers
}

/// Highest `top` across every layer; `0.0` when there is nothing stacked.
#[must_use]
pub fn stack_extent<K>(layers: &[StackLayer<K>]) -> f64 {
    layers
        .iter()
        .flat_map(|layer| layer.segments.iter())
        .map(|segment| OrderedFloat(segment.top))
        .max()
        .map_or(0.0, |top| top.0)
}
