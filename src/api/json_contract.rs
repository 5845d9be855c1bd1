use serde::{Deserialize, Serialize};

use crate::error::{NarrativeError, NarrativeResult};
use crate::render::Renderer;

use super::{NarrativeEngine, NarrativeSnapshot};

pub const NARRATIVE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: NarrativeSnapshot,
}

impl NarrativeSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> NarrativeResult<String> {
        let payload = NarrativeSnapshotJsonContractV1 {
            schema_version: NARRATIVE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            NarrativeError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 payload.
    pub fn from_json_compat_str(input: &str) -> NarrativeResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<NarrativeSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: NarrativeSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                NarrativeError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != NARRATIVE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(NarrativeError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> NarrativeEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> NarrativeResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
