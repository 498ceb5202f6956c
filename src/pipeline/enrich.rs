//! Enrichment: decorate a surviving record with display-ready derived fields.
//! A pure projection; re-running it over the same base fields reproduces the
//! same output.

use serde::Serialize;

use crate::data::bodytypes::bodytype_name;
use crate::data::classes::class_name;
use crate::data::npc::NpcRecord;

/// An NpcRecord plus derived display fields. Serializes as the base record
/// with the derived fields spliced in, matching what the client table reads.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedNpc {
    #[serde(flatten)]
    pub npc: NpcRecord,
    pub class_name: String,
    pub bodytype_name: String,
    pub level_range: String,
    /// The spawn range tops out above what the spell can charm; the base
    /// level is still eligible.
    pub exceeds_charm_level: bool,
    pub has_summon: bool,
    pub hp_per_level: i64,
}

pub fn enrich(npc: NpcRecord, max_level: Option<i64>) -> EnrichedNpc {
    let class_name = class_name(npc.class).unwrap_or("Unknown").to_string();
    let bodytype_name = bodytype_name(npc.bodytype)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Type {}", npc.bodytype));
    let level_range = if npc.maxlevel > npc.level {
        format!("{}-{}", npc.level, npc.maxlevel)
    } else {
        npc.level.to_string()
    };
    let exceeds_charm_level = max_level.is_some_and(|ceiling| npc.maxlevel > ceiling);
    let has_summon = npc.has_summon();
    let hp_per_level = ((npc.hp as f64) / (npc.level as f64)).round() as i64;

    EnrichedNpc {
        npc,
        class_name,
        bodytype_name,
        level_range,
        exceeds_charm_level,
        has_summon,
        hp_per_level,
    }
}
