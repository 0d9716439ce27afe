use dk_core::component::{BasicMeleeAi, Component, ComponentKind};
use dk_core::EntityId;
use log::trace;

use crate::context::SimContext;
use crate::error::SimResult;
use crate::systems::movement::{StepOutcome, random_movement, step};

/// Round half up, matching `floor(f + 0.5)`.
fn round(f: f64) -> f64 {
    (f + 0.5).floor()
}

/// Chase and attack the player while standing on a tile the player can see;
/// otherwise wander.
///
/// Acquiring a new target logs a glare message. The step toward the target is
/// the rounded unit vector of the straight-line offset.
pub fn basic_melee(ctx: &mut SimContext<'_>, actor: EntityId) -> SimResult<StepOutcome> {
    let Some(entity) = ctx.entity(actor) else {
        return Ok(StepOutcome::Idle);
    };
    if !entity.has_all(&[
        ComponentKind::Position,
        ComponentKind::Movement,
        ComponentKind::Appearance,
        ComponentKind::BasicMeleeAi,
    ]) {
        return Ok(StepOutcome::Idle);
    }
    let (Some(pos), Some(mut ai)) = (entity.position(), entity.basic_melee_ai()) else {
        return Ok(StepOutcome::Idle);
    };

    if !ctx.map.is_visible(pos.x, pos.y) {
        return random_movement(ctx, actor);
    }

    let Some((target, target_pos)) = ctx
        .store
        .player()
        .and_then(|p| p.position().map(|tp| (p.id(), tp)))
    else {
        return random_movement(ctx, actor);
    };

    if ai.target != Some(target) {
        ai.target = Some(target);
        let glare = format!(
            "The {} throws an angry glare at {}!",
            ctx.tagged_name(actor),
            ctx.tagged_name(target)
        );
        ctx.say(glare);
        ctx.store.remove_component(actor, ComponentKind::BasicMeleeAi)?;
        ctx.store
            .add_component(actor, Component::BasicMeleeAi(BasicMeleeAi { target: ai.target }))?;
    }

    let ox = f64::from(target_pos.x - pos.x);
    let oy = f64::from(target_pos.y - pos.y);
    let distance = round((ox * ox + oy * oy).sqrt());
    if distance == 0.0 {
        return Ok(StepOutcome::Idle);
    }
    let dx = round(ox / distance) as i32;
    let dy = round(oy / distance) as i32;
    trace!("{actor} closes in on {target} by ({dx}, {dy})");

    step(ctx, actor, dx, dy)
}
