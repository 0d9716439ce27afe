use dk_core::component::Position;
use dk_core::map::Point;
use dk_core::{ComponentKind, Entity, EntityId, EntityStore, FieldOfVision, GameMap};
use dk_mapgen::build_cavern;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::archetype;
use crate::config::GameConfig;
use crate::context::SimContext;
use crate::error::{SimError, SimResult};
use crate::examine::ExamineCursor;
use crate::keys::InventoryKeys;
use crate::message::MessageLog;
use crate::populate::populate;
use crate::systems::{self, InventoryView};
use crate::turn::{Intent, Mode, Outcome, TurnPhase};

/// First line in the message log.
pub const WELCOME: &str =
    "You find yourself in the caverns of eternal sadness...you start to feel a little more sad.";

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderable {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Glyph to draw.
    pub glyph: char,
    /// Color name.
    pub color: String,
    /// Draw order, lowest first.
    pub layer: u8,
}

/// Sidebar stats for the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStats {
    /// Display name.
    pub name: String,
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
}

/// Contents of the item information subscreen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    /// `"{key} - {name}"`, the name in color markup.
    pub title: String,
    /// One-line description.
    pub short: String,
    /// Extended description.
    pub long: String,
    /// Held items sharing this item's display name.
    pub count: usize,
}

/// The top-level game orchestrator.
///
/// Owns the entity store, the map, the RNG, the message log and the turn
/// state. Player intents go in through [`Game::handle_intent`]; the renderer
/// reads everything else through the accessors.
pub struct Game {
    store: EntityStore,
    map: GameMap,
    open_tiles: Vec<Point>,
    fov: FieldOfVision,
    log: MessageLog,
    rng: StdRng,
    phase: TurnPhase,
    mode: Mode,
    keys: InventoryKeys,
    cursor: Option<ExamineCursor>,
    selected_item: Option<EntityId>,
    player: EntityId,
    turns: u64,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("turns", &self.turns)
            .field("mode", &self.mode)
            .field("entities", &self.store.len())
            .field("messages", &self.log.len())
            .finish()
    }
}

impl Game {
    /// Build a new world: generate the cave, place the player and populate.
    pub fn new(config: GameConfig) -> SimResult<Self> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let cave = build_cavern(config.map_width, config.map_height, &mut rng, &config.cave)?;
        info!(
            "new game: seed {}, {}x{} map, {} open tiles",
            config.seed,
            config.map_width,
            config.map_height,
            cave.main_cavern.len()
        );
        Self::build(config, cave.map, cave.main_cavern, cave.spawn, rng)
    }

    /// Build a world on a prepared map. `open_tiles` are the population
    /// candidates and `spawn` is the player's starting tile.
    pub fn with_map(
        config: GameConfig,
        map: GameMap,
        open_tiles: Vec<Point>,
        spawn: Point,
    ) -> SimResult<Self> {
        let rng = StdRng::seed_from_u64(config.seed);
        Self::build(config, map, open_tiles, spawn, rng)
    }

    fn build(
        config: GameConfig,
        map: GameMap,
        open_tiles: Vec<Point>,
        spawn: Point,
        mut rng: StdRng,
    ) -> SimResult<Self> {
        let mut store = EntityStore::new();
        let player = store.spawn(archetype::player(
            Position::new(spawn.x, spawn.y),
            config.inventory_capacity,
        ))?;

        let report = populate(
            &mut store,
            &open_tiles,
            &mut rng,
            config.monster_count,
            config.item_count,
            config.placement_attempts,
        )?;
        info!(
            "placed {} of {} monsters and {} of {} items",
            report.monsters, config.monster_count, report.items, config.item_count
        );

        let mut game = Self {
            store,
            map,
            open_tiles,
            fov: FieldOfVision::with_torch_radius(config.torch_radius),
            log: MessageLog::new(config.message_log_capacity),
            rng,
            phase: TurnPhase::PlayerTurn,
            mode: Mode::Normal,
            keys: InventoryKeys::new(),
            cursor: None,
            selected_item: None,
            player,
            turns: 0,
        };
        game.refresh_fov();
        game.log.push(WELCOME);
        Ok(game)
    }

    fn ctx(&mut self) -> SimContext<'_> {
        SimContext {
            store: &mut self.store,
            map: &self.map,
            log: &mut self.log,
            rng: &mut self.rng,
        }
    }

    fn refresh_fov(&mut self) {
        if let Some(pos) = self.player_position() {
            self.fov.ray_cast(pos.x, pos.y, &mut self.map);
        }
    }

    // -----------------------------------------------------------------------
    // Turn resolution
    // -----------------------------------------------------------------------

    /// Resolve one player intent. A turn-consuming action is followed by the
    /// full mob sweep before this returns.
    pub fn handle_intent(&mut self, intent: Intent) -> SimResult<Outcome> {
        if self.phase != TurnPhase::PlayerTurn {
            return Ok(Outcome::Ignored);
        }

        let outcome = match self.mode {
            Mode::Normal => self.handle_normal(intent)?,
            Mode::Examining => self.handle_examining(intent),
            Mode::Menu => self.handle_menu(intent),
            Mode::InformationSubscreen => self.handle_subscreen(intent),
        };

        if outcome == Outcome::TurnTaken {
            self.refresh_fov();
            self.phase = TurnPhase::MobTurn;
            self.run_mob_turn()?;
            self.phase = TurnPhase::PlayerTurn;
            self.turns += 1;
            self.refresh_fov();
        }
        Ok(outcome)
    }

    fn handle_normal(&mut self, intent: Intent) -> SimResult<Outcome> {
        if intent.takes_turn() && !self.is_player_alive() {
            return Ok(Outcome::Ignored);
        }

        match intent {
            Intent::Move { dx, dy } => {
                let player = self.player;
                let outcome = systems::movement(&mut self.ctx(), player, dx, dy)?;
                trace!("player step ({dx}, {dy}): {outcome:?}");
                Ok(Outcome::TurnTaken)
            }
            Intent::Wait => Ok(Outcome::TurnTaken),
            Intent::Pickup => {
                let (player, keys) = (self.player, self.keys);
                let (keys, _) = systems::pickup(&mut self.ctx(), player, keys)?;
                self.keys = keys;
                Ok(Outcome::TurnTaken)
            }
            Intent::ToggleExamine => {
                let Some(pos) = self.player_position() else {
                    return Ok(Outcome::Ignored);
                };
                self.cursor = Some(ExamineCursor::new(pos.x, pos.y));
                self.mode = Mode::Examining;
                Ok(Outcome::FreeAction)
            }
            Intent::OpenInventory => {
                self.mode = Mode::Menu;
                Ok(Outcome::FreeAction)
            }
            Intent::Cancel => Ok(Outcome::FreeAction),
            Intent::SelectItem(_) => Ok(Outcome::Ignored),
        }
    }

    fn handle_examining(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Move { dx, dy } => {
                if let Some(cursor) = self.cursor.as_mut() {
                    cursor.move_by(dx, dy, &self.map);
                }
                Outcome::FreeAction
            }
            Intent::ToggleExamine | Intent::Cancel => {
                self.cursor = None;
                self.mode = Mode::Normal;
                Outcome::FreeAction
            }
            _ => Outcome::Ignored,
        }
    }

    fn handle_menu(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Cancel => {
                self.mode = Mode::Normal;
                Outcome::FreeAction
            }
            Intent::SelectItem(key) => self.select_item(key),
            _ => Outcome::Ignored,
        }
    }

    fn handle_subscreen(&mut self, intent: Intent) -> Outcome {
        match intent {
            Intent::Cancel => {
                self.selected_item = None;
                self.mode = Mode::Menu;
                Outcome::FreeAction
            }
            Intent::SelectItem(key) => self.select_item(key),
            _ => Outcome::Ignored,
        }
    }

    fn select_item(&mut self, key: char) -> Outcome {
        match systems::find_item_with_key(&self.store, self.player, key) {
            Some(item) => {
                self.selected_item = Some(item.id());
                self.mode = Mode::InformationSubscreen;
                Outcome::FreeAction
            }
            None => Outcome::Ignored,
        }
    }

    /// Drive every non-player entity once, then reproduction. Copies spawned
    /// during the sweep join the store only after it finishes.
    fn run_mob_turn(&mut self) -> SimResult<()> {
        let mut spawned: Vec<Entity> = Vec::new();
        for id in self.store.ids() {
            if id == self.player || self.store.has_component(id, ComponentKind::Player) {
                continue;
            }
            let mut ctx = self.ctx();
            systems::movement(&mut ctx, id, 0, 0)?;
            if let Some(child) = systems::reproduce(&mut ctx, id, &spawned)? {
                spawned.push(child);
            }
        }
        if !spawned.is_empty() {
            debug!("turn {}: {} new entities", self.turns + 1, spawned.len());
        }
        self.store.extend(spawned)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries for the renderer
    // -----------------------------------------------------------------------

    /// The player's entity id.
    pub fn player_id(&self) -> EntityId {
        self.player
    }

    /// The player entity. Fails if it was removed.
    pub fn player(&self) -> SimResult<&Entity> {
        self.store.get(self.player).ok_or(SimError::NoPlayer)
    }

    /// Where the player stands.
    pub fn player_position(&self) -> Option<Position> {
        self.store.get(self.player).and_then(Entity::position)
    }

    /// True while the player still has hit points left.
    pub fn is_player_alive(&self) -> bool {
        self.store
            .get(self.player)
            .and_then(Entity::hit_points)
            .is_some_and(|hp| hp.current > 0)
    }

    /// Name and health for the sidebar.
    pub fn player_stats(&self) -> Option<PlayerStats> {
        let player = self.store.get(self.player)?;
        let (hp, max_hp) = player
            .hit_points()
            .map(|hp| (hp.current, hp.max))
            .unwrap_or((0, archetype::PLAYER_MAX_HP));
        Some(PlayerStats {
            name: player.name().to_string(),
            hp,
            max_hp,
        })
    }

    /// Every entity with a position and appearance, lowest layer first.
    pub fn renderables(&self) -> Vec<Renderable> {
        let mut out: Vec<Renderable> = self
            .store
            .iter()
            .filter_map(|e| {
                let (pos, app) = (e.position()?, e.appearance()?);
                Some(Renderable {
                    x: pos.x,
                    y: pos.y,
                    glyph: app.glyph,
                    color: app.color.clone(),
                    layer: app.layer,
                })
            })
            .collect();
        out.sort_by_key(|r| r.layer);
        out
    }

    /// The current level.
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Tiles the population pass drew from.
    pub fn open_tiles(&self) -> &[Point] {
        &self.open_tiles
    }

    /// All entities.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access for tooling and scripted scenarios.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// The message log.
    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    /// Current input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whose turn it is.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Completed turns.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    /// Current inventory letter allocation.
    pub fn inventory_keys(&self) -> InventoryKeys {
        self.keys
    }

    /// Player sight radius.
    pub fn torch_radius(&self) -> i32 {
        self.fov.torch_radius()
    }

    /// The player's grouped inventory.
    pub fn inventory_view(&self) -> Option<InventoryView> {
        systems::inventory_view(&self.store, self.player)
    }

    /// Details of the item chosen in the menu, if any.
    pub fn selected_item_info(&self) -> Option<ItemInfo> {
        let item = self.store.get(self.selected_item?)?;
        let app = item.appearance()?;
        let key = item.lootable()?.key?;
        let desc = item.description().cloned().unwrap_or_default();
        Some(ItemInfo {
            title: format!("{key} - {}", app.tagged_name()),
            short: desc.short,
            long: desc.long,
            count: systems::count_item_instances(&self.store, self.player, &app.name),
        })
    }

    /// The examine cursor, while examining.
    pub fn examine_cursor(&self) -> Option<ExamineCursor> {
        self.cursor
    }

    /// Description of the tile under the examine cursor.
    pub fn examine_text(&self) -> Option<String> {
        self.cursor.map(|c| c.describe(&self.store, &self.map))
    }
}
