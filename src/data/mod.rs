//! Reference tables, the NPC record model, the snapshot format, and the
//! backing-store access behind the unified NpcSource.

pub mod bodytypes;
pub mod classes;
pub mod db;
pub mod npc;
pub mod snapshot;
pub mod source;
pub mod spells;
pub mod validate;
