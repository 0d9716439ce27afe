use dk_core::component::{Component, ComponentKind, Position};
use dk_core::EntityId;
use log::trace;
use rand::Rng;

use crate::context::SimContext;
use crate::error::SimResult;
use crate::systems::ai::basic_melee;
use crate::systems::combat::{AttackOutcome, attack};

/// What a single step attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The entity lacks the capabilities to act.
    Idle,
    /// The destination tile is impassable.
    Blocked,
    /// A blocking entity stood on the destination and was attacked.
    Attacked(AttackOutcome),
    /// The entity moved.
    Moved,
}

/// Move an entity by `(dx, dy)`.
///
/// Player-style entities (movement, controllable, position) step directly.
/// Anything else is handed to its AI system, if it carries one.
pub fn movement(
    ctx: &mut SimContext<'_>,
    actor: EntityId,
    dx: i32,
    dy: i32,
) -> SimResult<StepOutcome> {
    let Some(entity) = ctx.entity(actor) else {
        return Ok(StepOutcome::Idle);
    };

    if entity.has_all(&[
        ComponentKind::Movement,
        ComponentKind::Controllable,
        ComponentKind::Position,
    ]) {
        return step(ctx, actor, dx, dy);
    }

    match entity.ai_kind() {
        Some(ComponentKind::RandomMovement) => random_movement(ctx, actor),
        Some(ComponentKind::BasicMeleeAi) => basic_melee(ctx, actor),
        _ => Ok(StepOutcome::Idle),
    }
}

/// Wander one step in a uniformly random direction, staying put included.
pub fn random_movement(ctx: &mut SimContext<'_>, actor: EntityId) -> SimResult<StepOutcome> {
    if !ctx
        .store
        .has_all(actor, &[ComponentKind::Movement, ComponentKind::Position])
    {
        return Ok(StepOutcome::Idle);
    }
    let dx = ctx.rng.random_range(-1..=1);
    let dy = ctx.rng.random_range(-1..=1);
    step(ctx, actor, dx, dy)
}

/// Resolve a step: impassable tiles stop it, a blocking occupant is attacked,
/// otherwise the position is rewritten.
pub fn step(ctx: &mut SimContext<'_>, actor: EntityId, dx: i32, dy: i32) -> SimResult<StepOutcome> {
    let Some(pos) = ctx.entity(actor).and_then(|e| e.position()) else {
        return Ok(StepOutcome::Idle);
    };
    let dest = pos.offset(dx, dy);

    if ctx.map.is_blocked(dest.x, dest.y) {
        return Ok(StepOutcome::Blocked);
    }

    if let Some(target) = ctx.store.blocking_entity_at(dest.x, dest.y).map(|e| e.id()) {
        let outcome = attack(ctx, actor, target)?;
        return Ok(StepOutcome::Attacked(outcome));
    }

    ctx.store.remove_component(actor, ComponentKind::Position)?;
    ctx.store
        .add_component(actor, Component::Position(Position::new(dest.x, dest.y)))?;
    trace!("{actor} moved to ({}, {})", dest.x, dest.y);
    Ok(StepOutcome::Moved)
}

#[cfg(test)]
mod tests {
    use dk_core::component::{Appearance, Attacker, HitPoints, layer};
    use dk_core::{Entity, EntityStore, GameMap};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::message::MessageLog;

    fn walker(x: i32, y: i32, extra: &[Component]) -> Entity {
        let mut e = Entity::with_components([
            Component::Position(Position::new(x, y)),
            Component::Appearance(Appearance::new('@', "white", layer::ACTOR, "Walker")),
            Component::Movement,
            Component::Blocking,
        ]);
        e.add_components(extra.iter().cloned());
        e
    }

    fn room() -> GameMap {
        let mut map = GameMap::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                map.set_wall(x, y, map.is_border(x, y));
            }
        }
        map
    }

    #[test]
    fn controllable_entity_moves() {
        let map = room();
        let mut store = EntityStore::new();
        let mut log = MessageLog::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        let id = store.spawn(walker(3, 3, &[Component::Controllable])).unwrap();
        let mut ctx = SimContext {
            store: &mut store,
            map: &map,
            log: &mut log,
            rng: &mut rng,
        };

        assert_eq!(movement(&mut ctx, id, 1, -1).unwrap(), StepOutcome::Moved);
        assert_eq!(store.get(id).unwrap().position(), Some(Position::new(4, 2)));
    }

    #[test]
    fn walls_stop_movement() {
        let map = room();
        let mut store = EntityStore::new();
        let mut log = MessageLog::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        let id = store.spawn(walker(1, 1, &[Component::Controllable])).unwrap();
        let mut ctx = SimContext {
            store: &mut store,
            map: &map,
            log: &mut log,
            rng: &mut rng,
        };

        assert_eq!(movement(&mut ctx, id, -1, 0).unwrap(), StepOutcome::Blocked);
        assert_eq!(store.get(id).unwrap().position(), Some(Position::new(1, 1)));
        assert!(log.is_empty());
    }

    #[test]
    fn occupied_tile_turns_into_attack() {
        let map = room();
        let mut store = EntityStore::new();
        let mut log = MessageLog::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        let id = store
            .spawn(walker(
                3,
                3,
                &[
                    Component::Controllable,
                    Component::Attacker(Attacker { attack: 1, defense: 0 }),
                ],
            ))
            .unwrap();
        let rock = store
            .spawn(Entity::with_components([
                Component::Position(Position::new(4, 3)),
                Component::Blocking,
                Component::HitPoints(HitPoints::full(100)),
            ]))
            .unwrap();
        let mut ctx = SimContext {
            store: &mut store,
            map: &map,
            log: &mut log,
            rng: &mut rng,
        };

        let outcome = movement(&mut ctx, id, 1, 0).unwrap();
        assert!(matches!(outcome, StepOutcome::Attacked(_)));
        assert_eq!(store.get(id).unwrap().position(), Some(Position::new(3, 3)));
        assert!(store.contains(rock));
    }

    #[test]
    fn entity_without_capabilities_idles() {
        let map = room();
        let mut store = EntityStore::new();
        let mut log = MessageLog::new(0);
        let mut rng = StdRng::seed_from_u64(1);
        let id = store
            .spawn(Entity::with_components([Component::Position(Position::new(2, 2))]))
            .unwrap();
        let mut ctx = SimContext {
            store: &mut store,
            map: &map,
            log: &mut log,
            rng: &mut rng,
        };
        assert_eq!(movement(&mut ctx, id, 1, 0).unwrap(), StepOutcome::Idle);
    }

    #[test]
    fn random_walk_stays_in_bounds() {
        let map = room();
        let mut store = EntityStore::new();
        let mut log = MessageLog::new(0);
        let mut rng = StdRng::seed_from_u64(9);
        let id = store
            .spawn(walker(4, 4, &[Component::RandomMovement]))
            .unwrap();
        let mut ctx = SimContext {
            store: &mut store,
            map: &map,
            log: &mut log,
            rng: &mut rng,
        };

        for _ in 0..200 {
            movement(&mut ctx, id, 0, 0).unwrap();
            let pos = ctx.entity(id).unwrap().position().unwrap();
            assert!(!map.is_wall(pos.x, pos.y));
        }
    }
}
