use dk_core::component::layer;
use dk_core::{EntityStore, GameMap};

/// Free-moving cursor used to inspect tiles without spending a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamineCursor {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Glyph drawn at the cursor.
    pub glyph: char,
    /// Draw layer, above everything else.
    pub layer: u8,
}

impl ExamineCursor {
    /// A cursor at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            glyph: '_',
            layer: layer::EXAMINE,
        }
    }

    /// Move by `(dx, dy)`. Each axis that would leave the map stays put.
    pub fn move_by(&mut self, dx: i32, dy: i32, map: &GameMap) {
        let nx = self.x + dx;
        if nx >= 0 && nx < map.width() {
            self.x = nx;
        }
        let ny = self.y + dy;
        if ny >= 0 && ny < map.height() {
            self.y = ny;
        }
    }

    /// What the player knows about the tile under the cursor.
    ///
    /// Entities are only named on currently visible tiles. A remembered tile
    /// shows its terrain alone.
    pub fn describe(&self, store: &EntityStore, map: &GameMap) -> String {
        if !map.is_visible_or_explored(self.x, self.y) {
            return "You cannot see here...".to_string();
        }
        if map.is_visible(self.x, self.y) {
            let names = store.names_at(self.x, self.y);
            if !names.is_empty() {
                return names;
            }
        }
        if map.is_wall(self.x, self.y) {
            "A cavern wall, made of some kind of rock".to_string()
        } else {
            "A cavern floor, covered in dirt and stones".to_string()
        }
    }
}
