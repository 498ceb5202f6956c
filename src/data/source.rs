//! Unified NPC source for the server: one capability over the startup-loaded
//! snapshot and the live MySQL pool, so the filter/enrich/order pipeline is
//! implemented once regardless of where the rows come from.

use std::sync::Arc;

use serde_json::json;
use sqlx::MySqlPool;
use thiserror::Error;

use crate::data::db;
use crate::data::npc::NpcRecord;
use crate::data::snapshot::{NpcSnapshot, Zone};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("backing store query failed: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Clone)]
pub enum NpcSource {
    Snapshot(Arc<NpcSnapshot>),
    Live(MySqlPool),
}

impl NpcSource {
    pub async fn zones(&self) -> Result<Vec<Zone>, SourceError> {
        match self {
            NpcSource::Snapshot(snapshot) => Ok(snapshot.zones.clone()),
            NpcSource::Live(pool) => Ok(db::fetch_zones(pool).await?),
        }
    }

    /// Candidate records for a zone key. Live mode pushes the level ceiling
    /// and body-type narrowing into SQL; snapshot mode returns the zone slice
    /// and leaves all filtering to the shared pipeline. An unknown zone is an
    /// empty list in both modes.
    pub async fn npcs_for_zone(
        &self,
        zone: &str,
        max_level: Option<i64>,
        required_bodytype: Option<i64>,
    ) -> Result<Vec<NpcRecord>, SourceError> {
        match self {
            NpcSource::Snapshot(snapshot) => Ok(snapshot.zone_npcs(zone).to_vec()),
            NpcSource::Live(pool) => {
                Ok(db::fetch_zone_npcs(pool, zone, max_level, required_bodytype).await?)
            }
        }
    }

    /// Health payload: loaded counts in snapshot mode, a ping round trip in
    /// live mode.
    pub async fn health(&self) -> Result<serde_json::Value, SourceError> {
        match self {
            NpcSource::Snapshot(snapshot) => Ok(json!({
                "status": "ok",
                "dataSource": "snapshot",
                "zones": snapshot.zones.len(),
                "npcs": snapshot.npc_count(),
            })),
            NpcSource::Live(pool) => {
                db::ping(pool).await?;
                Ok(json!({
                    "status": "ok",
                    "dataSource": "mysql",
                }))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NpcSource::Snapshot(_) => "snapshot",
            NpcSource::Live(_) => "mysql",
        }
    }
}
