//! Shared test fixture: an in-memory clip table covering every reachable
//! state of both entity kinds, with frame handles shaped like the asset
//! files (`<kind>/<state>_<facing>/<index>`).

use crate::clips::{ClipTable, EntityKind, Facing};

pub fn table() -> ClipTable {
    let mut table = ClipTable::new();
    table.set_frame_interval(EntityKind::Player, 60.0);
    table.set_frame_interval(EntityKind::Cat, 60.0);
    for facing in [Facing::Left, Facing::Right] {
        insert(&mut table, EntityKind::Player, facing, "idle", 1);
        insert(&mut table, EntityKind::Player, facing, "walk", 4);
        insert(&mut table, EntityKind::Cat, facing, "idle", 2);
        insert(&mut table, EntityKind::Cat, facing, "look", 6);
        insert(&mut table, EntityKind::Cat, facing, "wake", 2);
        insert(&mut table, EntityKind::Cat, facing, "walk", 4);
    }
    table
}

fn insert(table: &mut ClipTable, kind: EntityKind, facing: Facing, state: &str, count: usize) {
    let kind_label = match kind {
        EntityKind::Player => "player",
        EntityKind::Cat => "cat",
    };
    let side = match facing {
        Facing::Left => "left",
        Facing::Right => "right",
    };
    let frames = (0..count)
        .map(|i| format!("{kind_label}/{state}_{side}/{i:03}"))
        .collect();
    table.insert_clip(kind, facing, state, frames);
}
