//! MySQL access shared by live mode and the export job. The per-request query
//! pushes zone, level ceiling, the always-excluded body types, and the
//! spell's body-type narrowing into SQL; class and ability-string checks stay
//! in the shared in-memory filter pass.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::DbConfig;
use crate::data::npc::NpcRecord;
use crate::data::snapshot::Zone;

const MAX_POOL_CONNECTIONS: u32 = 5;

/// Columns are CAST and aliased so rows decode straight into NpcRecord
/// regardless of the unsigned/tinyint column types in the source schema.
const NPC_COLUMNS: &str = "\
    CAST(n.id AS SIGNED) AS id, \
    n.name AS name, \
    CAST(n.level AS SIGNED) AS level, \
    CAST(n.maxlevel AS SIGNED) AS maxlevel, \
    CAST(n.hp AS SIGNED) AS hp, \
    CAST(n.mindmg AS SIGNED) AS mindmg, \
    CAST(n.maxdmg AS SIGNED) AS maxdmg, \
    CAST(n.attack_delay AS SIGNED) AS attack_delay, \
    CAST(n.runspeed AS DOUBLE) AS runspeed, \
    CAST(n.MR AS SIGNED) AS magic_resist, \
    CAST(n.FR AS SIGNED) AS fire_resist, \
    CAST(n.CR AS SIGNED) AS cold_resist, \
    CAST(n.PR AS SIGNED) AS poison_resist, \
    CAST(n.DR AS SIGNED) AS disease_resist, \
    CAST(n.bodytype AS SIGNED) AS bodytype, \
    CAST(n.race AS SIGNED) AS race, \
    CAST(n.class AS SIGNED) AS class, \
    n.special_abilities AS special_abilities";

const SPAWN_JOINS: &str = "\
    FROM npc_types n \
    INNER JOIN spawnentry se ON n.id = se.npcID \
    INNER JOIN spawngroup sg ON se.spawngroupID = sg.id \
    INNER JOIN spawn2 s ON sg.id = s.spawngroupID";

const BASE_NPC_PREDICATES: &str = "\
    n.hp > 0 \
    AND n.level > 0 \
    AND n.bodytype NOT IN (11, 66, 67) \
    AND n.runspeed > 0";

pub async fn connect(config: &DbConfig) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(MAX_POOL_CONNECTIONS)
        .connect(&config.url())
        .await
}

/// Round-trip check used by /api/health in live mode.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// All zones that have at least one spawn point and a display name,
/// ordered by display name.
pub async fn fetch_zones(pool: &MySqlPool) -> Result<Vec<Zone>, sqlx::Error> {
    let sql = "\
        SELECT DISTINCT z.short_name, z.long_name \
        FROM zone z \
        INNER JOIN spawn2 s ON z.short_name = s.zone \
        WHERE z.long_name IS NOT NULL AND z.long_name != '' \
        ORDER BY z.long_name";
    sqlx::query_as::<_, Zone>(sql).fetch_all(pool).await
}

/// NPC templates spawning in one zone, with the optional level ceiling and
/// body-type narrowing applied in SQL.
pub async fn fetch_zone_npcs(
    pool: &MySqlPool,
    zone: &str,
    max_level: Option<i64>,
    required_bodytype: Option<i64>,
) -> Result<Vec<NpcRecord>, sqlx::Error> {
    let mut sql = format!(
        "SELECT DISTINCT {NPC_COLUMNS} {SPAWN_JOINS} WHERE s.zone = ? AND {BASE_NPC_PREDICATES}"
    );
    if max_level.is_some() {
        sql.push_str(" AND n.level <= ?");
    }
    if required_bodytype.is_some() {
        sql.push_str(" AND n.bodytype = ?");
    }

    let mut query = sqlx::query_as::<_, NpcRecord>(&sql).bind(zone);
    if let Some(level) = max_level {
        query = query.bind(level);
    }
    if let Some(bodytype) = required_bodytype {
        query = query.bind(bodytype);
    }
    query.fetch_all(pool).await
}

/// One spawnable NPC row tagged with its zone key; used by the export job to
/// build the npcsByZone index.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NpcSpawnRow {
    pub zone: String,
    #[sqlx(flatten)]
    pub npc: NpcRecord,
}

/// Every spawnable NPC row across all zones, for the export job.
pub async fn fetch_all_spawnable_npcs(pool: &MySqlPool) -> Result<Vec<NpcSpawnRow>, sqlx::Error> {
    let sql = format!(
        "SELECT DISTINCT s.zone AS zone, {NPC_COLUMNS} {SPAWN_JOINS} WHERE {BASE_NPC_PREDICATES}"
    );
    sqlx::query_as::<_, NpcSpawnRow>(&sql).fetch_all(pool).await
}
