//! Raw NPC template records as exported from the database or queried live,
//! plus the ability-string flags the pipeline cares about.
//!
//! `special_abilities` is a loosely structured wire format: `^`-separated
//! segments, each a comma-separated `ability_id,param[,..]` tuple. It is
//! tokenized rather than substring-matched so ability 14 is never confused
//! with ability 114.

use serde::{Deserialize, Serialize};

/// Ability 14 with param 1 marks the template uncharmable.
const UNCHARMABLE_ABILITY_ID: &str = "14";
/// Ability 1 with param 1 means the NPC can summon.
const SUMMON_ABILITY_ID: &str = "1";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct NpcRecord {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub maxlevel: i64,
    pub hp: i64,
    pub mindmg: i64,
    pub maxdmg: i64,
    #[serde(default)]
    pub attack_delay: i64,
    #[serde(default)]
    pub runspeed: f64,
    pub magic_resist: i64,
    pub fire_resist: i64,
    pub cold_resist: i64,
    pub poison_resist: i64,
    pub disease_resist: i64,
    pub bodytype: i64,
    pub race: i64,
    pub class: i64,
    #[serde(default)]
    pub special_abilities: Option<String>,
}

impl NpcRecord {
    pub fn is_uncharmable(&self) -> bool {
        has_enabled_ability(self.special_abilities.as_deref(), UNCHARMABLE_ABILITY_ID)
    }

    pub fn has_summon(&self) -> bool {
        has_enabled_ability(self.special_abilities.as_deref(), SUMMON_ABILITY_ID)
    }
}

/// True when the ability string contains `ability_id` with its first
/// parameter set to 1. An absent string means no abilities.
fn has_enabled_ability(special_abilities: Option<&str>, ability_id: &str) -> bool {
    let Some(raw) = special_abilities else {
        return false;
    };
    raw.split('^').any(|segment| {
        let mut fields = segment.split(',');
        fields.next().map(str::trim) == Some(ability_id)
            && fields.next().map(str::trim) == Some("1")
    })
}
