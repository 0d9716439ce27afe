//! Entity templates. An archetype is nothing more than a component list.

use dk_core::component::{
    Appearance, Attacker, BasicMeleeAi, Component, Description, HitPoints, Inventory, Killable,
    Lootable, Position, Reproducer, layer,
};
use dk_core::Entity;
use rand::Rng;

/// Starting and maximum player health.
pub const PLAYER_MAX_HP: i32 = 20;

/// Stable item type ids.
pub mod item_type {
    /// Dark red potion.
    pub const DARK_RED_POTION: u32 = 1;
    /// Bright green potion.
    pub const BRIGHT_GREEN_POTION: u32 = 2;
}

fn remains(glyph: char, color: &str) -> Component {
    Component::Killable(Killable::new("Remains of", glyph, color))
}

/// The player: controllable, fighting, with an inventory of `inventory_capacity` slots.
pub fn player(pos: Position, inventory_capacity: usize) -> Entity {
    Entity::with_components([
        Component::Player,
        Component::Position(pos),
        Component::Appearance(Appearance::new('@', "white", layer::ACTOR, "Player")),
        Component::Movement,
        Component::Controllable,
        Component::Attacker(Attacker { attack: 5, defense: 5 }),
        Component::HitPoints(HitPoints::full(PLAYER_MAX_HP)),
        Component::Blocking,
        Component::Killable(Killable::new("Here lies", '%', "dark red")),
        Component::Inventory(Inventory::with_capacity(inventory_capacity)),
    ])
}

fn melee_monster(
    pos: Position,
    glyph: char,
    color: &str,
    name: &str,
    hp: i32,
    attack: i32,
    defense: i32,
) -> Entity {
    Entity::with_components([
        Component::Position(pos),
        Component::Appearance(Appearance::new(glyph, color, layer::ACTOR, name)),
        Component::HitPoints(HitPoints::full(hp)),
        Component::Blocking,
        Component::Movement,
        Component::BasicMeleeAi(BasicMeleeAi::default()),
        Component::Attacker(Attacker { attack, defense }),
        remains('%', "dark red"),
    ])
}

/// Slow and sturdy.
pub fn troll(pos: Position) -> Entity {
    melee_monster(pos, 'T', "dark green", "Troll", 20, 10, 7)
}

/// Middle of the road.
pub fn orc(pos: Position) -> Entity {
    melee_monster(pos, 'o', "darker green", "Orc", 15, 7, 5)
}

/// Weak but common.
pub fn goblin(pos: Position) -> Entity {
    melee_monster(pos, 'g', "green", "Goblin", 5, 2, 2)
}

/// A stationary spreader. No movement, no attack.
pub fn fungus(pos: Position) -> Entity {
    Entity::with_components([
        Component::Position(pos),
        Component::Appearance(Appearance::new('f', "yellow", layer::ACTOR, "Fungus")),
        Component::HitPoints(HitPoints::full(5)),
        Component::Blocking,
        Component::Reproducer(Reproducer::new(8, 25)),
        remains('.', "yellow"),
    ])
}

fn potion(pos: Position, color: &str, name: &str, item_type: u32, liquid: &str) -> Entity {
    Entity::with_components([
        Component::Position(pos),
        Component::Appearance(Appearance::new('!', color, layer::ITEM, name)),
        Component::Lootable(Lootable::on_floor(item_type)),
        Component::Stackable,
        Component::Description(Description {
            short: format!("An unmarked, single dose, vial of a {liquid} liquid."),
            long: String::new(),
        }),
    ])
}

/// A potion of dark red liquid.
pub fn dark_red_potion(pos: Position) -> Entity {
    potion(pos, "dark red", "Dark Red Potion", item_type::DARK_RED_POTION, "dark red")
}

/// A potion of bright green liquid.
pub fn bright_green_potion(pos: Position) -> Entity {
    potion(
        pos,
        "light green",
        "Bright Green Potion",
        item_type::BRIGHT_GREEN_POTION,
        "bright green",
    )
}

/// Roll a monster: 6% troll, 15% orc, 50% goblin, the rest fungus.
pub fn random_monster<R: Rng>(rng: &mut R, pos: Position) -> Entity {
    match rng.random_range(0..100) {
        0..=5 => troll(pos),
        6..=20 => orc(pos),
        21..=70 => goblin(pos),
        _ => fungus(pos),
    }
}

/// Roll an item: roughly even odds between the two potions.
pub fn random_item<R: Rng>(rng: &mut R, pos: Position) -> Entity {
    if rng.random_range(0..100) >= 49 {
        dark_red_potion(pos)
    } else {
        bright_green_potion(pos)
    }
}

#[cfg(test)]
mod tests {
    use dk_core::ComponentKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn player_has_controls_and_inventory() {
        let p = player(Position::new(1, 2), 32);
        assert!(p.is_player());
        assert!(p.has_all(&[
            ComponentKind::Movement,
            ComponentKind::Controllable,
            ComponentKind::Position,
            ComponentKind::Inventory,
            ComponentKind::Blocking,
        ]));
        assert_eq!(p.inventory().unwrap().capacity, 32);
        assert_eq!(p.hit_points().unwrap().max, PLAYER_MAX_HP);
        assert_eq!(p.ai_kind(), None);
    }

    #[test]
    fn monsters_carry_melee_ai() {
        for m in [troll, orc, goblin] {
            let e = m(Position::new(0, 0));
            assert_eq!(e.ai_kind(), Some(ComponentKind::BasicMeleeAi));
            assert!(e.has_component(ComponentKind::Killable));
        }
        let g = goblin(Position::new(0, 0));
        assert_eq!(g.hit_points().unwrap().max, 5);
        assert_eq!(g.attacker().unwrap(), Attacker { attack: 2, defense: 2 });
    }

    #[test]
    fn fungus_spreads_but_never_moves() {
        let f = fungus(Position::new(0, 0));
        assert!(!f.has_component(ComponentKind::Movement));
        assert!(!f.has_component(ComponentKind::Attacker));
        assert_eq!(f.reproducer().unwrap(), Reproducer::new(8, 25));
        assert_eq!(f.killable().unwrap().glyph, '.');
    }

    #[test]
    fn rolls_cover_every_archetype() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut names = std::collections::BTreeSet::new();
        for _ in 0..500 {
            names.insert(random_monster(&mut rng, Position::new(0, 0)).name().to_string());
            names.insert(random_item(&mut rng, Position::new(0, 0)).name().to_string());
        }
        let names: Vec<_> = names.into_iter().collect();
        assert_eq!(
            names,
            vec![
                "Bright Green Potion",
                "Dark Red Potion",
                "Fungus",
                "Goblin",
                "Orc",
                "Troll"
            ]
        );
    }
}
