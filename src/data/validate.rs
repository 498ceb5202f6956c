//! Snapshot dataset validation for the `validate` command: structural
//! problems surface here instead of as confusing empty results at request
//! time.

use std::collections::HashSet;

use crate::data::snapshot::NpcSnapshot;

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    /// Tolerated oddities: the server still runs, but the data is worth a look.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_snapshot(snapshot: &NpcSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut seen = HashSet::new();
    for zone in &snapshot.zones {
        if !seen.insert(zone.short_name.clone()) {
            report
                .errors
                .push(format!("duplicate zone short_name '{}'", zone.short_name));
        }
        if zone.long_name.trim().is_empty() {
            report
                .errors
                .push(format!("zone '{}' has an empty long_name", zone.short_name));
        }
    }

    for (zone_key, npcs) in &snapshot.npcs_by_zone {
        if !seen.contains(zone_key.as_str()) {
            // Orphaned keys just yield empty result sets.
            report
                .warnings
                .push(format!("npc zone key '{zone_key}' has no zone entry"));
        }
        for npc in npcs {
            if npc.hp <= 0 {
                report
                    .errors
                    .push(format!("npc {} '{}' has hp {}", npc.id, npc.name, npc.hp));
            }
            if npc.level <= 0 {
                report.errors.push(format!(
                    "npc {} '{}' has level {}",
                    npc.id, npc.name, npc.level
                ));
            }
            if npc.maxlevel < npc.level {
                report.errors.push(format!(
                    "npc {} '{}' has maxlevel {} below level {}",
                    npc.id, npc.name, npc.maxlevel, npc.level
                ));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::npc::NpcRecord;
    use crate::data::snapshot::Zone;
    use std::collections::BTreeMap;

    fn npc(id: i64, level: i64, maxlevel: i64, hp: i64) -> NpcRecord {
        NpcRecord {
            id,
            name: format!("npc_{id}"),
            level,
            maxlevel,
            hp,
            mindmg: 1,
            maxdmg: 10,
            attack_delay: 30,
            runspeed: 1.25,
            magic_resist: 10,
            fire_resist: 10,
            cold_resist: 10,
            poison_resist: 10,
            disease_resist: 10,
            bodytype: 21,
            race: 43,
            class: 1,
            special_abilities: None,
        }
    }

    fn snapshot(zones: Vec<Zone>, npcs_by_zone: BTreeMap<String, Vec<NpcRecord>>) -> NpcSnapshot {
        NpcSnapshot {
            version: "1.0".to_string(),
            exported: "2024-05-01T00:00:00Z".to_string(),
            zones,
            npcs_by_zone,
        }
    }

    #[test]
    fn clean_snapshot_passes() {
        let zones = vec![Zone {
            short_name: "gfaydark".to_string(),
            long_name: "Greater Faydark".to_string(),
        }];
        let mut by_zone = BTreeMap::new();
        by_zone.insert("gfaydark".to_string(), vec![npc(1, 4, 6, 120)]);

        let report = validate_snapshot(&snapshot(zones, by_zone));
        assert!(report.is_ok());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn orphaned_zone_key_is_a_warning_not_an_error() {
        let mut by_zone = BTreeMap::new();
        by_zone.insert("nowhere".to_string(), vec![npc(1, 4, 6, 120)]);

        let report = validate_snapshot(&snapshot(Vec::new(), by_zone));
        assert!(report.is_ok());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn inverted_level_range_is_an_error() {
        let zones = vec![Zone {
            short_name: "mistmoore".to_string(),
            long_name: "Castle Mistmoore".to_string(),
        }];
        let mut by_zone = BTreeMap::new();
        by_zone.insert("mistmoore".to_string(), vec![npc(2, 30, 25, 3000)]);

        let report = validate_snapshot(&snapshot(zones, by_zone));
        assert!(!report.is_ok());
        assert!(report.errors[0].contains("maxlevel"));
    }
}
