/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// A point at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single map cell.
///
/// A tile is a wall iff it is both `blocked` and `blocks_sight`. Either flag
/// can be set alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Impassable.
    pub blocked: bool,
    /// Stops rays.
    pub blocks_sight: bool,
    /// Flood-fill marker used during generation.
    pub visited: bool,
    /// Ever seen. Never reset once set.
    pub explored: bool,
    /// Seen during the most recent field-of-vision pass.
    pub visible: bool,
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Tile {
    /// An open floor tile.
    pub fn floor(x: i32, y: i32) -> Self {
        Self {
            blocked: false,
            blocks_sight: false,
            visited: false,
            explored: false,
            visible: false,
            x,
            y,
        }
    }

    /// A solid wall tile.
    pub fn wall(x: i32, y: i32) -> Self {
        Self {
            blocked: true,
            blocks_sight: true,
            ..Self::floor(x, y)
        }
    }

    /// Blocked and opaque.
    pub fn is_wall(&self) -> bool {
        self.blocked && self.blocks_sight
    }

    /// Turn this tile into a wall (`true`) or open floor (`false`).
    pub fn set_wall(&mut self, wall: bool) {
        self.blocked = wall;
        self.blocks_sight = wall;
    }
}

/// A `width x height` grid of tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl GameMap {
    /// An all-floor map. Non-positive dimensions produce an empty map.
    ///
    /// Allocates one tile per cell; callers bound the size beforehand.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut tiles = Vec::with_capacity(Self::cell_count(width, height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::floor(x, y));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    /// Number of cells in a `width` x `height` grid, or `None` when it does
    /// not fit in `usize`. Negative sides count as zero.
    pub fn cell_count(width: i32, height: i32) -> Option<usize> {
        let w = usize::try_from(width.max(0)).ok()?;
        let h = usize::try_from(height.max(0)).ok()?;
        w.checked_mul(h)
    }

    /// Width in tiles.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `(x, y)` lies on the map.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Whether `(x, y)` lies on the outermost ring.
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    /// The tile at `(x, y)`, or `None` out of bounds.
    pub fn tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    /// Mutable access to the tile at `(x, y)`.
    pub fn tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// All tiles, row-major.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All tiles, row-major, mutable.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Out-of-bounds coordinates count as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_none_or(|t| t.blocked)
    }

    /// Out-of-bounds coordinates count as wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_none_or(Tile::is_wall)
    }

    /// Set or clear a wall. Out-of-bounds coordinates are ignored.
    pub fn set_wall(&mut self, x: i32, y: i32, wall: bool) {
        if let Some(tile) = self.tile_mut(x, y) {
            tile.set_wall(wall);
        }
    }

    /// Seen in the latest field-of-vision pass.
    pub fn is_visible(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.visible)
    }

    /// Seen at some point.
    pub fn is_explored(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.explored)
    }

    /// Either visible now or seen before. False out of bounds.
    pub fn is_visible_or_explored(&self, x: i32, y: i32) -> bool {
        self.tile(x, y).is_some_and(|t| t.visible || t.explored)
    }

    /// Clear every `visible` flag. `explored` is untouched.
    pub fn reset_visibility(&mut self) {
        for tile in &mut self.tiles {
            tile.visible = false;
        }
    }

    /// Clear every flood-fill marker.
    pub fn reset_visited(&mut self) {
        for tile in &mut self.tiles {
            tile.visited = false;
        }
    }

    /// Number of non-wall tiles.
    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_wall()).count()
    }
}
