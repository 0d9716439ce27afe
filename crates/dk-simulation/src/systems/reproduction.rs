use dk_core::component::{Component, ComponentKind, Position, Reproducer};
use dk_core::{Entity, EntityId};
use log::debug;
use rand::Rng;

use crate::context::SimContext;
use crate::error::SimResult;

/// Give a reproducing entity its chance to spawn a copy on an adjacent tile.
///
/// The copy is returned, not stored: the caller appends it to the store once
/// the current sweep is over. `pending` holds copies already produced in this
/// sweep; their tiles count as occupied.
///
/// When the roll succeeds the parent loses one reproduction whether or not a
/// free tile was found. A copy starts with the parent's remaining count minus
/// two and half its chance.
pub fn reproduce(
    ctx: &mut SimContext<'_>,
    actor: EntityId,
    pending: &[Entity],
) -> SimResult<Option<Entity>> {
    let Some(parent) = ctx.entity(actor) else {
        return Ok(None);
    };
    let Some(reproducer) = parent.reproducer() else {
        return Ok(None);
    };

    let roll = ctx.rng.random_range(0..100);
    if reproducer.times_remaining <= 0 || roll > reproducer.percent_chance {
        return Ok(None);
    }

    let child = match ctx.entity(actor).and_then(Entity::position) {
        Some(pos) => {
            let dest = pos.offset(ctx.rng.random_range(-1..=1), ctx.rng.random_range(-1..=1));
            if is_free(ctx, pending, dest) {
                ctx.entity(actor).map(|parent| {
                    let mut child = parent.duplicate();
                    child.add_component(Component::Position(dest));
                    child.add_component(Component::Reproducer(Reproducer {
                        max_times: reproducer.max_times,
                        times_remaining: reproducer.times_remaining - 2,
                        percent_chance: reproducer.percent_chance / 2,
                    }));
                    child
                })
            } else {
                None
            }
        }
        None => None,
    };

    ctx.store.remove_component(actor, ComponentKind::Reproducer)?;
    ctx.store.add_component(
        actor,
        Component::Reproducer(Reproducer {
            times_remaining: reproducer.times_remaining - 1,
            ..reproducer
        }),
    )?;

    if let Some(child) = &child {
        debug!("{actor} spawned {} at {:?}", child.id(), child.position());
    }
    Ok(child)
}

fn is_free(ctx: &SimContext<'_>, pending: &[Entity], dest: Position) -> bool {
    !ctx.map.is_blocked(dest.x, dest.y)
        && ctx.store.blocking_entity_at(dest.x, dest.y).is_none()
        && !pending.iter().any(|e| {
            e.has_component(ComponentKind::Blocking) && e.position() == Some(dest)
        })
}
