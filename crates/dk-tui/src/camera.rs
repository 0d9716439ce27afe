//! Viewport over the map.

/// The window of map tiles currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    /// Leftmost visible column.
    pub x: i32,
    /// Topmost visible row.
    pub y: i32,
    /// Columns on screen.
    pub width: i32,
    /// Rows on screen.
    pub height: i32,
}

impl Camera {
    /// A camera at the origin.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Change the view size. Negative sizes clamp to zero.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
    }

    /// Center on `(target_x, target_y)`. The view never scrolls past the map
    /// edge; a map smaller than the view is pinned to the top left.
    pub fn move_to(&mut self, target_x: i32, target_y: i32, map_width: i32, map_height: i32) {
        self.x = (target_x - self.width / 2).clamp(0, (map_width - self.width).max(0));
        self.y = (target_y - self.height / 2).clamp(0, (map_height - self.height).max(0));
    }

    /// Screen cell of a map coordinate, or `None` when it is off screen.
    pub fn to_camera_coordinates(&self, map_x: i32, map_y: i32) -> Option<(i32, i32)> {
        let (cx, cy) = (map_x - self.x, map_y - self.y);
        if cx < 0 || cy < 0 || cx >= self.width || cy >= self.height {
            return None;
        }
        Some((cx, cy))
    }
}
