use dk_core::component::{Component, ComponentKind, Killable};
use dk_core::EntityId;
use log::debug;
use rand::Rng;

use crate::context::SimContext;
use crate::error::SimResult;

/// Components a killed entity loses. What remains is an inert corpse.
const STRIPPED_ON_DEATH: [ComponentKind; 6] = [
    ComponentKind::Movement,
    ComponentKind::Attacker,
    ComponentKind::Blocking,
    ComponentKind::RandomMovement,
    ComponentKind::HitPoints,
    ComponentKind::Reproducer,
];

/// Exclusive upper bound of the attack roll.
const ATTACK_ROLL: i32 = 6;

/// How an attack resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The attacker cannot attack, or targeted itself.
    Ignored,
    /// The target has no hit points. Nothing happens beyond a message.
    Bump,
    /// Total attack did not exceed the target's defense.
    Miss,
    /// Damage was dealt.
    Hit {
        /// Damage dealt.
        damage: i32,
    },
    /// Damage was dealt and the target became a corpse.
    Kill {
        /// Damage dealt.
        damage: i32,
    },
}

/// Resolve a melee attack of `attacker` against `target`.
///
/// The attack total is the attacker's attack plus a roll in `[0, 6)`. Any
/// excess over the target's defense (0 without an attacker component) is
/// dealt as damage. Messages are only logged when the player is involved.
pub fn attack(
    ctx: &mut SimContext<'_>,
    attacker: EntityId,
    target: EntityId,
) -> SimResult<AttackOutcome> {
    if attacker == target {
        return Ok(AttackOutcome::Ignored);
    }
    let Some(stats) = ctx.entity(attacker).and_then(|e| e.attacker()) else {
        return Ok(AttackOutcome::Ignored);
    };
    let Some(defender) = ctx.entity(target) else {
        return Ok(AttackOutcome::Ignored);
    };

    let player_involved = ctx.is_player(attacker) || ctx.is_player(target);
    let a_name = ctx.tagged_name(attacker);
    let t_name = ctx.tagged_name(target);

    let mut hp = match (defender.hit_points(), defender.appearance()) {
        (Some(hp), Some(_)) => hp,
        (None, Some(_)) => {
            if player_involved {
                ctx.say(format!("{a_name} bumps into the {t_name}"));
            }
            return Ok(AttackOutcome::Bump);
        }
        (_, None) => return Ok(AttackOutcome::Ignored),
    };
    let defense = defender.attacker().map(|a| a.defense).unwrap_or(0);
    let killable = defender.killable().cloned();

    let total = stats.attack + ctx.rng.random_range(0..ATTACK_ROLL);
    if total <= defense {
        if player_involved {
            ctx.say(format!("{a_name} attacks the {t_name}, but does no damage!"));
        }
        return Ok(AttackOutcome::Miss);
    }

    let damage = total - defense;
    hp.current -= damage;
    ctx.store.remove_component(target, ComponentKind::HitPoints)?;
    ctx.store.add_component(target, Component::HitPoints(hp))?;
    if player_involved {
        ctx.say(format!(
            "{a_name} attacks the {t_name} for {damage} points of damage."
        ));
    }

    if hp.current > 0 {
        return Ok(AttackOutcome::Hit { damage });
    }
    let Some(killable) = killable else {
        return Ok(AttackOutcome::Hit { damage });
    };

    if player_involved {
        ctx.say(format!("The {t_name} has been killed!"));
    }
    kill(ctx, target, &killable)?;
    Ok(AttackOutcome::Kill { damage })
}

/// Turn `target` into a corpse in one step.
fn kill(ctx: &mut SimContext<'_>, target: EntityId, killable: &Killable) -> SimResult<()> {
    let Some(appearance) = ctx.entity(target).and_then(|e| e.appearance()).cloned() else {
        return Ok(());
    };
    let corpse = killable.corpse_of(&appearance);
    debug!("{target} died and became {}", corpse.name);

    ctx.store.remove_component(target, ComponentKind::Appearance)?;
    ctx.store.add_component(target, Component::Appearance(corpse))?;
    ctx.store.remove_components(target, &STRIPPED_ON_DEATH)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use dk_core::component::{Appearance, Attacker, HitPoints, Position, Reproducer, layer};
    use dk_core::{Entity, EntityStore, GameMap};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::message::MessageLog;

    struct Arena {
        store: EntityStore,
        map: GameMap,
        log: MessageLog,
        rng: StdRng,
    }

    impl Arena {
        fn new(seed: u64) -> Self {
            Self {
                store: EntityStore::new(),
                map: GameMap::new(10, 10),
                log: MessageLog::new(0),
                rng: StdRng::seed_from_u64(seed),
            }
        }

        fn fighter(
            &mut self,
            name: &str,
            attack: i32,
            defense: i32,
            hp: i32,
            player: bool,
        ) -> EntityId {
            let mut e = Entity::with_components([
                Component::Position(Position::new(1, 1)),
                Component::Appearance(Appearance::new('x', "red", layer::ACTOR, name)),
                Component::Attacker(Attacker { attack, defense }),
                Component::HitPoints(HitPoints::full(hp)),
                Component::Blocking,
                Component::Movement,
                Component::Killable(Killable::new("Remains of", '%', "dark red")),
            ]);
            if player {
                e.add_component(Component::Player);
            }
            self.store.spawn(e).unwrap()
        }

        fn attack(&mut self, a: EntityId, t: EntityId) -> AttackOutcome {
            let mut ctx = SimContext {
                store: &mut self.store,
                map: &self.map,
                log: &mut self.log,
                rng: &mut self.rng,
            };
            attack(&mut ctx, a, t).unwrap()
        }
    }

    #[test]
    fn self_attack_is_ignored() {
        let mut arena = Arena::new(1);
        let p = arena.fighter("Player", 5, 5, 20, true);
        assert_eq!(arena.attack(p, p), AttackOutcome::Ignored);
        assert!(arena.log.is_empty());
    }

    #[test]
    fn attacker_without_stats_is_ignored() {
        let mut arena = Arena::new(1);
        let target = arena.fighter("Goblin", 2, 2, 5, false);
        let rock = arena
            .store
            .spawn(Entity::with_components([Component::Position(Position::new(1, 2))]))
            .unwrap();
        assert_eq!(arena.attack(rock, target), AttackOutcome::Ignored);
    }

    #[test]
    fn bump_into_entity_without_hit_points() {
        let mut arena = Arena::new(1);
        let p = arena.fighter("Player", 5, 5, 20, true);
        let statue = arena
            .store
            .spawn(Entity::with_components([
                Component::Position(Position::new(2, 1)),
                Component::Appearance(Appearance::new('&', "gray", layer::ACTOR, "Statue")),
                Component::Blocking,
            ]))
            .unwrap();
        assert_eq!(arena.attack(p, statue), AttackOutcome::Bump);
        assert_eq!(
            arena.log.latest(),
            Some("[color=red]Player[/color] bumps into the [color=gray]Statue[/color]")
        );
    }

    #[test]
    fn overwhelming_defense_never_damages() {
        let mut arena = Arena::new(3);
        let p = arena.fighter("Player", 1, 5, 20, true);
        let wall = arena.fighter("Golem", 1, 6, 10, false);
        for _ in 0..50 {
            assert_eq!(arena.attack(p, wall), AttackOutcome::Miss);
        }
        assert_eq!(arena.store.get(wall).unwrap().hit_points().unwrap().current, 10);
        assert!(arena.log.latest().unwrap().ends_with("but does no damage!"));
    }

    #[test]
    fn monster_fights_are_silent() {
        let mut arena = Arena::new(3);
        let a = arena.fighter("Orc", 7, 5, 15, false);
        let b = arena.fighter("Goblin", 2, 2, 5, false);
        arena.attack(a, b);
        assert!(arena.log.is_empty());
    }

    #[test]
    fn death_leaves_inert_corpse() {
        let mut arena = Arena::new(5);
        let p = arena.fighter("Player", 10, 0, 20, true);
        let g = arena.fighter("Goblin", 2, 2, 5, false);
        arena
            .store
            .add_component(g, Component::Reproducer(Reproducer::new(3, 50)))
            .unwrap();

        let outcome = arena.attack(p, g);
        assert!(matches!(outcome, AttackOutcome::Kill { .. }));

        let corpse = arena.store.get(g).unwrap();
        for kind in STRIPPED_ON_DEATH {
            assert!(!corpse.has_component(kind), "{kind} should be gone");
        }
        let app = corpse.appearance().unwrap();
        assert_eq!(app.glyph, '%');
        assert_eq!(app.name, "Remains of Goblin");
        assert_eq!(app.layer, layer::CORPSE);
        assert!(corpse.has_component(ComponentKind::Position));
        assert_eq!(
            arena.log.latest(),
            Some("The [color=red]Goblin[/color] has been killed!")
        );
        assert!(arena.store.blocking_entity_at(1, 1).is_some_and(|e| e.id() == p));
    }

    #[test]
    fn hit_without_killable_keeps_entity() {
        let mut arena = Arena::new(5);
        let p = arena.fighter("Player", 10, 0, 20, true);
        let dummy = arena.fighter("Dummy", 0, 0, 1, false);
        arena
            .store
            .remove_component(dummy, ComponentKind::Killable)
            .unwrap();
        assert!(matches!(arena.attack(p, dummy), AttackOutcome::Hit { .. }));
        assert!(arena.store.has_component(dummy, ComponentKind::Blocking));
    }

    proptest! {
        #[test]
        fn damage_stays_in_bounds(
            seed in any::<u64>(),
            attack in 0i32..15,
            defense in 0i32..15,
        ) {
            let mut arena = Arena::new(seed);
            let p = arena.fighter("Player", attack, 0, 100, true);
            let t = arena.fighter("Target", 0, defense, 1000, false);

            match arena.attack(p, t) {
                AttackOutcome::Hit { damage } => {
                    prop_assert!(damage >= 1);
                    prop_assert!(damage <= attack + 5 - defense);
                    let hp = arena.store.get(t).unwrap().hit_points().unwrap();
                    prop_assert_eq!(hp.current, 1000 - damage);
                }
                AttackOutcome::Miss => {
                    prop_assert!(defense >= attack);
                    let hp = arena.store.get(t).unwrap().hit_points().unwrap();
                    prop_assert_eq!(hp.current, 1000);
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
