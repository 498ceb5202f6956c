//! Body-type reference table and the exclusion codes used by the eligibility
//! filter. Undead/animal-restricted spells narrow to a single code; the
//! always-excluded set applies regardless of spell.

pub const BODYTYPE_HUMANOID: i64 = 1;
pub const BODYTYPE_UNDEAD: i64 = 3;
pub const BODYTYPE_ATENHA_RA: i64 = 11;
pub const BODYTYPE_ANIMAL: i64 = 21;
pub const BODYTYPE_TRAP: i64 = 66;
pub const BODYTYPE_TIMER: i64 = 67;

/// Non-creature or special-purpose templates, never charmable: Atenha Ra,
/// Trap, Timer.
pub const ALWAYS_EXCLUDED_BODYTYPES: [i64; 3] =
    [BODYTYPE_ATENHA_RA, BODYTYPE_TRAP, BODYTYPE_TIMER];

pub fn is_always_excluded(bodytype: i64) -> bool {
    ALWAYS_EXCLUDED_BODYTYPES.contains(&bodytype)
}

pub fn bodytype_name(bodytype: i64) -> Option<&'static str> {
    let name = match bodytype {
        1 => "Humanoid",
        2 => "Lycanthrope",
        3 => "Undead",
        4 => "Giant",
        5 => "Construct",
        6 => "Extraplanar",
        7 => "Magical",
        8 => "Summoned",
        9 => "No Target",
        10 => "Vampire",
        11 => "Atenha Ra",
        12 => "Greater Akheva",
        13 => "Khati Sha",
        21 => "Animal",
        22 => "Insect",
        23 => "Monster",
        24 => "Summoned2",
        25 => "Plant",
        26 => "Dragon",
        27 => "Summoned3",
        28 => "Dragon2",
        65 => "Untargetable",
        66 => "Trap",
        67 => "Timer",
        _ => return None,
    };
    Some(name)
}
