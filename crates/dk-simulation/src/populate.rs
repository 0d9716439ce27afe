use dk_core::component::Position;
use dk_core::map::Point;
use dk_core::{Entity, EntityStore};
use log::debug;
use rand::Rng;

use crate::archetype;
use crate::error::SimResult;

/// How many entities a population pass placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PopulationReport {
    /// Monsters spawned.
    pub monsters: usize,
    /// Items spawned.
    pub items: usize,
}

/// Sample up to `attempts` tiles of `open` for one with no blocking entity.
pub fn find_free_tile<R: Rng>(
    store: &EntityStore,
    open: &[Point],
    rng: &mut R,
    attempts: usize,
) -> Option<Position> {
    if open.is_empty() {
        return None;
    }
    (0..attempts)
        .map(|_| open[rng.random_range(0..open.len())])
        .find(|p| store.blocking_entity_at(p.x, p.y).is_none())
        .map(|p| Position::new(p.x, p.y))
}

/// Scatter monsters, then items, over the open tiles.
///
/// Each placement samples up to `attempts` tiles. The first placement that
/// finds no free tile ends its phase: the map is considered full.
pub fn populate<R: Rng>(
    store: &mut EntityStore,
    open: &[Point],
    rng: &mut R,
    monster_count: usize,
    item_count: usize,
    attempts: usize,
) -> SimResult<PopulationReport> {
    let monsters = place(store, open, rng, monster_count, attempts, archetype::random_monster)?;
    let items = place(store, open, rng, item_count, attempts, archetype::random_item)?;
    debug!("populated cave with {monsters} monsters and {items} items");
    Ok(PopulationReport { monsters, items })
}

fn place<R: Rng>(
    store: &mut EntityStore,
    open: &[Point],
    rng: &mut R,
    count: usize,
    attempts: usize,
    make: fn(&mut R, Position) -> Entity,
) -> SimResult<usize> {
    let mut placed = 0;
    for _ in 0..count {
        let Some(pos) = find_free_tile(store, open, rng, attempts) else {
            break;
        };
        store.spawn(make(rng, pos))?;
        placed += 1;
    }
    Ok(placed)
}
