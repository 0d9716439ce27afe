use std::collections::BTreeMap;

use dk_core::component::{Component, ComponentKind, Inventory, Lootable};
use dk_core::{Entity, EntityId, EntityStore};
use log::debug;

use crate::context::SimContext;
use crate::error::SimResult;
use crate::keys::InventoryKeys;

/// How a pickup attempt resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// The actor cannot carry anything.
    Ignored,
    /// Nothing lies on the actor's tile.
    NothingHere,
    /// The first thing on the tile cannot be picked up.
    NotLootable,
    /// The inventory is at capacity, or the item is already held.
    InventoryFull,
    /// Every inventory letter is taken.
    NoFreeKey,
    /// The item moved into the inventory under `key`.
    PickedUp {
        /// The item picked up.
        item: EntityId,
        /// The inventory letter assigned.
        key: char,
    },
}

/// Pick up the first item on the actor's tile.
///
/// The item gets the letter of a held item with the same display name, or the
/// lowest free letter otherwise. The updated key table is handed back; when
/// the pickup fails it is returned untouched.
pub fn pickup(
    ctx: &mut SimContext<'_>,
    actor: EntityId,
    mut keys: InventoryKeys,
) -> SimResult<(InventoryKeys, PickupOutcome)> {
    let Some(holder) = ctx.entity(actor) else {
        return Ok((keys, PickupOutcome::Ignored));
    };
    let (Some(mut inventory), Some(pos), Some(_)) = (
        holder.inventory().cloned(),
        holder.position(),
        holder.appearance(),
    ) else {
        return Ok((keys, PickupOutcome::Ignored));
    };

    let Some(item) = ctx
        .store
        .entities_at(pos.x, pos.y)
        .into_iter()
        .find(|e| e.id() != actor)
    else {
        ctx.say("There is nothing to pick up here!");
        return Ok((keys, PickupOutcome::NothingHere));
    };
    let item_id = item.id();
    let item_name = item.name().to_string();
    let lootable = item.lootable();
    let i_name = ctx.tagged_name(item_id);

    let Some(lootable) = lootable else {
        ctx.say(format!("Cannot pick up that {i_name}"));
        return Ok((keys, PickupOutcome::NotLootable));
    };

    if inventory.is_full() || lootable.in_inventory {
        ctx.say(format!(
            "Your inventory is full, and you cannot pick up the {i_name}"
        ));
        return Ok((keys, PickupOutcome::InventoryFull));
    }

    let key = match existing_key(ctx.store, &inventory, &item_name) {
        Some(key) => key,
        None => match keys.allocate() {
            Some(key) => key,
            None => {
                ctx.say(format!(
                    "You have no free inventory letter for the {i_name}"
                ));
                return Ok((keys, PickupOutcome::NoFreeKey));
            }
        },
    };

    ctx.store.remove_components(
        item_id,
        &[ComponentKind::Lootable, ComponentKind::Position],
    )?;
    ctx.store.add_component(
        item_id,
        Component::Lootable(Lootable {
            in_inventory: true,
            owner: Some(actor),
            key: Some(key),
            ..lootable
        }),
    )?;

    inventory.items.push(item_id);
    ctx.store.remove_component(actor, ComponentKind::Inventory)?;
    ctx.store
        .add_component(actor, Component::Inventory(inventory))?;

    let a_name = ctx.tagged_name(actor);
    ctx.say(format!("{a_name} picks up the {i_name}"));
    debug!("{actor} picked up {item_id} as '{key}'");

    Ok((keys, PickupOutcome::PickedUp { item: item_id, key }))
}

/// Letter already assigned to a held item named `name`.
fn existing_key(store: &EntityStore, inventory: &Inventory, name: &str) -> Option<char> {
    inventory
        .items
        .iter()
        .filter_map(|id| store.get(*id))
        .filter(|e| e.name() == name)
        .find_map(|e| e.lootable().and_then(|l| l.key))
}

fn held_items<'s>(store: &'s EntityStore, owner: EntityId) -> impl Iterator<Item = &'s Entity> {
    store
        .get(owner)
        .and_then(Entity::inventory)
        .map(|inv| inv.items.clone())
        .unwrap_or_default()
        .into_iter()
        .filter_map(move |id| store.get(id))
}

/// The held item bound to `key`, if any.
pub fn find_item_with_key(store: &EntityStore, owner: EntityId, key: char) -> Option<&Entity> {
    held_items(store, owner).find(|e| e.lootable().and_then(|l| l.key) == Some(key))
}

/// How many held items share `name`.
pub fn count_item_instances(store: &EntityStore, owner: EntityId, name: &str) -> usize {
    held_items(store, owner).filter(|e| e.name() == name).count()
}

/// One grouped line of the inventory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLine {
    /// Hotkey of the first item in the group.
    pub key: char,
    /// Display name.
    pub name: String,
    /// Color name.
    pub color: String,
    /// Items in the group.
    pub count: usize,
}

/// The inventory listing shown by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    /// Slots taken.
    pub used: usize,
    /// Slots available.
    pub capacity: usize,
    /// Held items grouped by key, name and color, ordered by key.
    pub lines: Vec<InventoryLine>,
}

/// Build the grouped inventory listing for `owner`.
pub fn inventory_view(store: &EntityStore, owner: EntityId) -> Option<InventoryView> {
    let inventory = store.get(owner)?.inventory()?;

    let mut groups: BTreeMap<(char, String, String), usize> = BTreeMap::new();
    for item in held_items(store, owner) {
        let (Some(app), Some(key)) = (item.appearance(), item.lootable().and_then(|l| l.key))
        else {
            continue;
        };
        *groups
            .entry((key, app.name.clone(), app.color.clone()))
            .or_default() += 1;
    }

    Some(InventoryView {
        used: inventory.items.len(),
        capacity: inventory.capacity,
        lines: groups
            .into_iter()
            .map(|((key, name, color), count)| InventoryLine {
                key,
                name,
                color,
                count,
            })
            .collect(),
    })
}
