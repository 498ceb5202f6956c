//! NPC class-id reference table, including the non-combat service classes the
//! filter always excludes.

/// Classes that never engage in charm-worthy combat: Merchant, Banker, and
/// their GM variants.
pub const SERVICE_CLASSES: [i64; 6] = [20, 21, 40, 41, 60, 61];

pub fn is_service_class(class: i64) -> bool {
    SERVICE_CLASSES.contains(&class)
}

/// Display name for an NPC class code. Unknown codes are rendered as
/// "Unknown" by the enrichment stage.
pub fn class_name(class: i64) -> Option<&'static str> {
    let name = match class {
        1 => "Warrior",
        2 => "Cleric",
        3 => "Paladin",
        4 => "Ranger",
        5 => "Shadow Knight",
        6 => "Druid",
        7 => "Monk",
        8 => "Bard",
        9 => "Rogue",
        10 => "Shaman",
        11 => "Necromancer",
        12 => "Wizard",
        13 => "Magician",
        14 => "Enchanter",
        15 => "Beastlord",
        16 => "Berserker",
        20 => "Merchant",
        21 => "Banker",
        40 => "Warrior GM",
        41 => "Cleric GM",
        60 => "Merchant GM",
        61 => "Banker GM",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_classes_cover_gm_variants() {
        for class in [20, 21, 40, 41, 60, 61] {
            assert!(is_service_class(class), "class {class} should be service");
        }
        assert!(!is_service_class(1));
        assert!(!is_service_class(14));
    }

    #[test]
    fn unmapped_class_yields_none() {
        assert_eq!(class_name(14), Some("Enchanter"));
        assert_eq!(class_name(99), None);
    }
}
