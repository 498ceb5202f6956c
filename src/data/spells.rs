//! Static charm spell catalog: Enchanter and Bard charms take any eligible
//! body type; Necromancer charms are undead-only and Druid charms animal-only.
//! Served verbatim by /api/charm-spells.

use serde::Serialize;

use crate::data::bodytypes::{BODYTYPE_ANIMAL, BODYTYPE_UNDEAD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BodytypeRestriction {
    Any,
    Undead,
    Animal,
}

impl BodytypeRestriction {
    /// The single body-type code this restriction narrows to, if any.
    pub fn required_bodytype(self) -> Option<i64> {
        match self {
            BodytypeRestriction::Any => None,
            BodytypeRestriction::Undead => Some(BODYTYPE_UNDEAD),
            BodytypeRestriction::Animal => Some(BODYTYPE_ANIMAL),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CharmSpell {
    pub id: i64,
    pub name: &'static str,
    #[serde(rename = "maxLevel")]
    pub max_level: i64,
    pub classes: &'static [&'static str],
    #[serde(rename = "bodytype")]
    pub restriction: BodytypeRestriction,
}

const ENCHANTER: &[&str] = &["Enchanter"];
const BARD: &[&str] = &["Bard"];
const NECROMANCER: &[&str] = &["Necromancer"];
const DRUID: &[&str] = &["Druid"];

macro_rules! spell {
    ($id:expr, $name:expr, $max:expr, $classes:expr, $restriction:expr) => {
        CharmSpell {
            id: $id,
            name: $name,
            max_level: $max,
            classes: $classes,
            restriction: $restriction,
        }
    };
}

use BodytypeRestriction::{Animal, Any, Undead};

pub const CHARM_SPELLS: &[CharmSpell] = &[
    spell!(1, "Command of Druzzil", 64, ENCHANTER, Any),
    spell!(2, "Dictate", 58, ENCHANTER, Any),
    spell!(3, "Beckon", 57, ENCHANTER, Any),
    spell!(4, "Boltran's Agacerie", 53, ENCHANTER, Any),
    spell!(5, "Allure", 51, ENCHANTER, Any),
    spell!(6, "Cajoling Whispers", 46, ENCHANTER, Any),
    spell!(7, "Dire Charm", 46, ENCHANTER, Any),
    spell!(8, "Beguile", 37, ENCHANTER, Any),
    spell!(9, "Charm", 25, ENCHANTER, Any),
    spell!(10, "Call of the Banshee", 57, BARD, Any),
    spell!(11, "Solon's Bewitching Bravura", 51, BARD, Any),
    spell!(12, "Solon's Song of the Sirens", 37, BARD, Any),
    spell!(13, "Word of Terris (undead)", 60, NECROMANCER, Undead),
    spell!(14, "Enslave Death (undead)", 55, NECROMANCER, Undead),
    spell!(15, "Thrall of Bones (undead)", 53, NECROMANCER, Undead),
    spell!(16, "Cajole Undead (undead)", 51, NECROMANCER, Undead),
    spell!(17, "Beguile Undead (undead)", 46, NECROMANCER, Undead),
    spell!(18, "Dire Charm (undead)", 46, NECROMANCER, Undead),
    spell!(19, "Dominate Undead (undead)", 32, NECROMANCER, Undead),
    spell!(20, "Command of Tunare (animal)", 60, DRUID, Animal),
    spell!(21, "Call of Karana (animal)", 53, DRUID, Animal),
    spell!(22, "Allure of the Wild (animal)", 49, DRUID, Animal),
    spell!(23, "Dire Charm (animal)", 46, DRUID, Animal),
    spell!(24, "Beguile Animals (animal)", 43, DRUID, Animal),
    spell!(25, "Tunare's Request (animal)", 35, DRUID, Animal),
    spell!(26, "Charm Animals (animal)", 33, DRUID, Animal),
    spell!(27, "Befriend Animal (animal)", 24, DRUID, Animal),
];

pub fn find_spell(id: i64) -> Option<&'static CharmSpell> {
    CHARM_SPELLS.iter().find(|spell| spell.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_seven_unique_spells() {
        assert_eq!(CHARM_SPELLS.len(), 27);
        for (index, spell) in CHARM_SPELLS.iter().enumerate() {
            assert_eq!(spell.id as usize, index + 1, "ids should be dense");
        }
    }

    #[test]
    fn restricted_spells_narrow_to_one_bodytype() {
        let necro = find_spell(19).unwrap();
        assert_eq!(necro.restriction.required_bodytype(), Some(BODYTYPE_UNDEAD));
        let druid = find_spell(26).unwrap();
        assert_eq!(druid.restriction.required_bodytype(), Some(BODYTYPE_ANIMAL));
        let enchanter = find_spell(4).unwrap();
        assert_eq!(enchanter.restriction.required_bodytype(), None);
    }

    #[test]
    fn catalog_serializes_with_wire_field_names() {
        let json = serde_json::to_value(find_spell(4).unwrap()).unwrap();
        assert_eq!(json["name"], "Boltran's Agacerie");
        assert_eq!(json["maxLevel"], 53);
        assert_eq!(json["bodytype"], "any");
        assert_eq!(json["classes"][0], "Enchanter");
    }
}
