use serde::{Deserialize, Serialize};

use crate::core::{CategoryMap, CategorySet};
use crate::error::{ChartError, ChartResult};

use super::{Emphasis, HighlightController, HighlightPhase};

pub const HIGHLIGHT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of a controller, used by regression tests and debug
/// tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSnapshot {
    pub categories: CategorySet,
    pub phase: HighlightPhase,
    pub active: Option<String>,
    pub hovered: Option<String>,
    pub emphasis: CategoryMap<Emphasis>,
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: HighlightSnapshot,
}

impl HighlightSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = HighlightSnapshotJsonContractV1 {
            schema_version: HIGHLIGHT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidArgument(format!(
                "failed to serialize highlight snapshot contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<HighlightSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: HighlightSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidArgument(format!(
                    "failed to parse highlight snapshot json payload: {e}"
                ))
            })?;
        if payload.schema_version != HIGHLIGHT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidArgument(format!(
                "unsupported highlight snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<T> HighlightController<T> {
    #[must_use]
    pub fn snapshot(&self) -> HighlightSnapshot {
        HighlightSnapshot {
            categories: self.categories().clone(),
            phase: self.phase(),
            active: self.state().active().map(str::to_owned),
            hovered: self.state().hovered().map(str::to_owned),
            emphasis: self.emphasis_map(),
            revision: self.revision(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
