use std::fmt;

use crate::entity::EntityId;

/// Render layers. Lower layers are drawn first.
pub mod layer {
    /// The tile map itself.
    pub const MAP: u8 = 0;
    /// Corpses left behind by killed entities.
    pub const CORPSE: u8 = 2;
    /// Items lying on the floor.
    pub const ITEM: u8 = 2;
    /// Living actors, the player included.
    pub const ACTOR: u8 = 3;
    /// The examine cursor.
    pub const EXAMINE: u8 = 4;
}

/// The closed set of component tags an entity can carry.
///
/// The declaration order is the iteration order of an entity's components,
/// which also decides which AI marker wins if an entity carries more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    /// Marks the player-controlled entity.
    Player,
    /// World coordinates.
    Position,
    /// Glyph, color, render layer, and display name.
    Appearance,
    /// The entity is able to move.
    Movement,
    /// The entity's movement is driven by player input.
    Controllable,
    /// Attack and defense stats.
    Attacker,
    /// Current and maximum hit points.
    HitPoints,
    /// The entity occupies its tile.
    Blocking,
    /// The entity leaves a corpse when its hit points run out.
    Killable,
    /// AI: wanders aimlessly.
    RandomMovement,
    /// AI: closes in on and attacks a target.
    BasicMeleeAi,
    /// The entity spawns copies of itself.
    Reproducer,
    /// The entity carries items.
    Inventory,
    /// The entity can be picked up.
    Lootable,
    /// Identical items group together in inventory listings.
    Stackable,
    /// Short and long descriptive text.
    Description,
}

impl ComponentKind {
    /// Every component kind, in declaration order.
    pub const ALL: [ComponentKind; 16] = [
        Self::Player,
        Self::Position,
        Self::Appearance,
        Self::Movement,
        Self::Controllable,
        Self::Attacker,
        Self::HitPoints,
        Self::Blocking,
        Self::Killable,
        Self::RandomMovement,
        Self::BasicMeleeAi,
        Self::Reproducer,
        Self::Inventory,
        Self::Lootable,
        Self::Stackable,
        Self::Description,
    ];

    /// Returns true for the AI marker kinds.
    pub fn is_ai(self) -> bool {
        matches!(self, Self::RandomMovement | Self::BasicMeleeAi)
    }

    /// Stable snake_case name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Position => "position",
            Self::Appearance => "appearance",
            Self::Movement => "movement",
            Self::Controllable => "controllable",
            Self::Attacker => "attacker",
            Self::HitPoints => "hitpoints",
            Self::Blocking => "block",
            Self::Killable => "killable",
            Self::RandomMovement => "random_movement",
            Self::BasicMeleeAi => "basic_melee_ai",
            Self::Reproducer => "reproducer",
            Self::Inventory => "inventory",
            Self::Lootable => "lootable",
            Self::Stackable => "stackable",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component value. Each variant belongs to exactly one [`ComponentKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// See [`ComponentKind::Player`].
    Player,
    /// See [`ComponentKind::Position`].
    Position(Position),
    /// See [`ComponentKind::Appearance`].
    Appearance(Appearance),
    /// See [`ComponentKind::Movement`].
    Movement,
    /// See [`ComponentKind::Controllable`].
    Controllable,
    /// See [`ComponentKind::Attacker`].
    Attacker(Attacker),
    /// See [`ComponentKind::HitPoints`].
    HitPoints(HitPoints),
    /// See [`ComponentKind::Blocking`].
    Blocking,
    /// See [`ComponentKind::Killable`].
    Killable(Killable),
    /// See [`ComponentKind::RandomMovement`].
    RandomMovement,
    /// See [`ComponentKind::BasicMeleeAi`].
    BasicMeleeAi(BasicMeleeAi),
    /// See [`ComponentKind::Reproducer`].
    Reproducer(Reproducer),
    /// See [`ComponentKind::Inventory`].
    Inventory(Inventory),
    /// See [`ComponentKind::Lootable`].
    Lootable(Lootable),
    /// See [`ComponentKind::Stackable`].
    Stackable,
    /// See [`ComponentKind::Description`].
    Description(Description),
}

impl Component {
    /// The kind tag of this component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Player => ComponentKind::Player,
            Self::Position(_) => ComponentKind::Position,
            Self::Appearance(_) => ComponentKind::Appearance,
            Self::Movement => ComponentKind::Movement,
            Self::Controllable => ComponentKind::Controllable,
            Self::Attacker(_) => ComponentKind::Attacker,
            Self::HitPoints(_) => ComponentKind::HitPoints,
            Self::Blocking => ComponentKind::Blocking,
            Self::Killable(_) => ComponentKind::Killable,
            Self::RandomMovement => ComponentKind::RandomMovement,
            Self::BasicMeleeAi(_) => ComponentKind::BasicMeleeAi,
            Self::Reproducer(_) => ComponentKind::Reproducer,
            Self::Inventory(_) => ComponentKind::Inventory,
            Self::Lootable(_) => ComponentKind::Lootable,
            Self::Stackable => ComponentKind::Stackable,
            Self::Description(_) => ComponentKind::Description,
        }
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// World coordinates of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// How an entity is drawn and named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Single-character glyph.
    pub glyph: char,
    /// Color name understood by the renderer (e.g. "dark green").
    pub color: String,
    /// Render layer, see [`layer`].
    pub layer: u8,
    /// Display name.
    pub name: String,
}

impl Appearance {
    /// Create an appearance.
    pub fn new(glyph: char, color: impl Into<String>, layer: u8, name: impl Into<String>) -> Self {
        Self {
            glyph,
            color: color.into(),
            layer,
            name: name.into(),
        }
    }

    /// The display name wrapped in color markup for the message log.
    pub fn tagged_name(&self) -> String {
        format!("[color={}]{}[/color]", self.color, self.name)
    }
}

/// Melee strength. Damage dealt is attack minus the target's defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attacker {
    /// Raw hit strength.
    pub attack: i32,
    /// Subtracted from incoming attacks.
    pub defense: i32,
}

/// Current and maximum health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitPoints {
    /// Remaining health. Zero or below means dead.
    pub current: i32,
    /// Upper bound for healing.
    pub max: i32,
}

impl HitPoints {
    /// Full health.
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }
}

/// What an entity turns into when it dies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Killable {
    /// Prefix prepended to the display name, e.g. "Remains of".
    pub prefix: String,
    /// Corpse glyph.
    pub glyph: char,
    /// Corpse color.
    pub color: String,
}

impl Killable {
    /// Create a killable marker.
    pub fn new(prefix: impl Into<String>, glyph: char, color: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            glyph,
            color: color.into(),
        }
    }

    /// The corpse form of `appearance`.
    pub fn corpse_of(&self, appearance: &Appearance) -> Appearance {
        Appearance {
            glyph: self.glyph,
            color: self.color.clone(),
            layer: layer::CORPSE,
            name: format!("{} {}", self.prefix, appearance.name),
        }
    }
}

/// Melee AI state. The target is a lookup key into the store, never an owner:
/// the target may later lose its components or vanish and lookups return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasicMeleeAi {
    /// The currently selected target.
    pub target: Option<EntityId>,
}

/// Self-replication parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reproducer {
    /// Reproductions this entity started with.
    pub max_times: i32,
    /// Reproductions left.
    pub times_remaining: i32,
    /// Chance per turn, in percent.
    pub percent_chance: i32,
}

impl Reproducer {
    /// A fresh reproducer with all of its reproductions left.
    pub fn new(max_times: i32, percent_chance: i32) -> Self {
        Self {
            max_times,
            times_remaining: max_times,
            percent_chance,
        }
    }
}

/// Items carried by an entity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    /// Maximum number of items.
    pub capacity: usize,
    /// Held items, in pickup order.
    pub items: Vec<EntityId>,
}

impl Inventory {
    /// An empty inventory.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    /// Whether no more items fit.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

/// Pickup state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Lootable {
    /// Whether the item currently sits in an inventory.
    pub in_inventory: bool,
    /// The holder, looked up through the store.
    pub owner: Option<EntityId>,
    /// Stable item type id.
    pub item_type: u32,
    /// Inventory letter, once picked up.
    pub key: Option<char>,
}

impl Lootable {
    /// A lootable item of the given type lying on the floor.
    pub fn on_floor(item_type: u32) -> Self {
        Self {
            item_type,
            ..Self::default()
        }
    }
}

/// Flavor text shown on the item information subscreen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Description {
    /// One-line summary.
    pub short: String,
    /// Longer text. Often empty.
    pub long: String,
}
