//! Eligibility filter: decides which raw records a given charm spell and
//! level ceiling leave in play. The same rules run in both deployment modes;
//! live mode merely pre-applies the cheap ones in SQL.

use crate::data::bodytypes::is_always_excluded;
use crate::data::classes::is_service_class;
use crate::data::npc::NpcRecord;
use crate::data::spells::CharmSpell;

pub fn filter(
    npcs: Vec<NpcRecord>,
    max_level: Option<i64>,
    spell: Option<&CharmSpell>,
) -> Vec<NpcRecord> {
    npcs.into_iter()
        .filter(|npc| is_eligible(npc, max_level, spell))
        .collect()
}

/// A record is eligible when every exclusion rule passes. A level above the
/// ceiling drops the record entirely; a maxlevel range poking above the
/// ceiling is only flagged later by enrichment.
pub fn is_eligible(npc: &NpcRecord, max_level: Option<i64>, spell: Option<&CharmSpell>) -> bool {
    // Source data is pre-filtered on these, but re-check.
    if npc.hp <= 0 || npc.level <= 0 {
        return false;
    }
    if max_level.is_some_and(|ceiling| npc.level > ceiling) {
        return false;
    }
    if npc.is_uncharmable() {
        return false;
    }
    if is_service_class(npc.class) {
        return false;
    }
    if is_always_excluded(npc.bodytype) {
        return false;
    }
    if let Some(required) = spell.and_then(|spell| spell.restriction.required_bodytype()) {
        if npc.bodytype != required {
            return false;
        }
    }
    true
}
