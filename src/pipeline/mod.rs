//! The charm-target pipeline: eligibility filter, enrichment, ordering.
//! Pure functions over records from any NpcSource; the server applies them
//! per request and never mutates the underlying data.

pub mod enrich;
pub mod filter;

pub use enrich::{enrich, EnrichedNpc};
pub use filter::{filter, is_eligible};

use crate::data::npc::NpcRecord;
use crate::data::spells::CharmSpell;

/// Run the full pipeline for one request: filter, enrich, order.
pub fn run(
    npcs: Vec<NpcRecord>,
    max_level: Option<i64>,
    spell: Option<&CharmSpell>,
) -> Vec<EnrichedNpc> {
    let mut enriched: Vec<EnrichedNpc> = filter(npcs, max_level, spell)
        .into_iter()
        .map(|npc| enrich(npc, max_level))
        .collect();
    order(&mut enriched);
    enriched
}

/// Most dangerous viable targets first: maxdmg desc, level desc, name asc.
pub fn order(npcs: &mut [EnrichedNpc]) {
    npcs.sort_by(|a, b| {
        b.npc
            .maxdmg
            .cmp(&a.npc.maxdmg)
            .then_with(|| b.npc.level.cmp(&a.npc.level))
            .then_with(|| a.npc.name.cmp(&b.npc.name))
    });
}
