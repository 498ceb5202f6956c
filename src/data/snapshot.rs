//! Snapshot format: the JSON document written by the export job and loaded
//! wholesale by the server at startup in snapshot mode. Zone keys with no
//! matching zone entry are tolerated and simply never match a request.

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::npc::NpcRecord;

pub const DEFAULT_SNAPSHOT_PATH: &str = "data/npc-data.json";
pub const SNAPSHOT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Zone {
    pub short_name: String,
    pub long_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcSnapshot {
    pub version: String,
    /// RFC 3339 UTC timestamp recorded by the export job.
    pub exported: String,
    /// Ordered by long_name at export time; served verbatim.
    pub zones: Vec<Zone>,
    #[serde(rename = "npcsByZone")]
    pub npcs_by_zone: BTreeMap<String, Vec<NpcRecord>>,
}

impl NpcSnapshot {
    pub fn npc_count(&self) -> usize {
        self.npcs_by_zone.values().map(Vec::len).sum()
    }

    /// NPCs for a zone key; an unknown key is an empty slice, not an error.
    pub fn zone_npcs(&self, zone: &str) -> &[NpcRecord] {
        match self.npcs_by_zone.get(zone) {
            Some(npcs) => npcs,
            None => &[],
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the snapshot from disk. Failure here is startup-fatal for the
/// snapshot-mode server.
pub fn load_snapshot(path: &str) -> Result<NpcSnapshot, SnapshotError> {
    let data = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| SnapshotError::Parse {
        path: path.to_string(),
        source,
    })
}
