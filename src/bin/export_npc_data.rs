//! Export the NPC/zone dataset from MySQL into data/npc-data.json, the
//! snapshot the server loads in snapshot mode. Reads DB_* env vars (and a
//! .env file via dotenvy). Run whenever the source database changes.

use std::collections::BTreeMap;
use std::fs;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};

use charmfinder::config::DbConfig;
use charmfinder::data::db;
use charmfinder::data::snapshot::{NpcSnapshot, DEFAULT_SNAPSHOT_PATH, SNAPSHOT_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "export_npc_data=info".into()),
        )
        .init();

    let config = DbConfig::from_env().context("database configuration incomplete")?;
    tracing::info!(host = %config.host, database = %config.database, "connecting to database");
    let pool = db::connect(&config)
        .await
        .context("failed to connect to database")?;

    let zones = db::fetch_zones(&pool).await.context("failed to fetch zones")?;
    tracing::info!(zones = zones.len(), "fetched zones");

    let rows = db::fetch_all_spawnable_npcs(&pool)
        .await
        .context("failed to fetch NPC spawn records")?;
    tracing::info!(records = rows.len(), "fetched NPC spawn records");

    let mut npcs_by_zone: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for row in rows {
        npcs_by_zone.entry(row.zone).or_default().push(row.npc);
    }

    let snapshot = NpcSnapshot {
        version: SNAPSHOT_VERSION.to_string(),
        exported: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        zones,
        npcs_by_zone,
    };

    if let Some(parent) = std::path::Path::new(DEFAULT_SNAPSHOT_PATH).parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }
    let json = serde_json::to_string_pretty(&snapshot).context("failed to serialize snapshot")?;
    fs::write(DEFAULT_SNAPSHOT_PATH, &json)
        .with_context(|| format!("failed to write {DEFAULT_SNAPSHOT_PATH}"))?;

    println!("=== Export Complete ===");
    println!("Zones: {}", snapshot.zones.len());
    println!("Total NPC records: {}", snapshot.npc_count());
    println!("File size: {:.2} MB", json.len() as f64 / (1024.0 * 1024.0));
    println!("Output: {DEFAULT_SNAPSHOT_PATH}");
    Ok(())
}
