use std::f64::consts::PI;

use log::trace;

use crate::map::GameMap;

/// Number of rays cast per pass, one per integer degree.
const RAYS: usize = 360;

/// Default view distance, in steps.
pub const DEFAULT_TORCH_RADIUS: i32 = 6;

/// Radial ray caster with precomputed trig tables.
///
/// Rays are cast at whole-degree resolution, so narrow diagonal gaps can
/// appear at long range.
#[derive(Debug, Clone)]
pub struct FieldOfVision {
    sin_table: [f64; RAYS],
    cos_table: [f64; RAYS],
    torch_radius: i32,
}

impl FieldOfVision {
    /// A caster using the default torch radius.
    pub fn new() -> Self {
        let mut sin_table = [0.0; RAYS];
        let mut cos_table = [0.0; RAYS];
        for (deg, (s, c)) in sin_table.iter_mut().zip(cos_table.iter_mut()).enumerate() {
            let rad = deg as f64 * PI / 180.0;
            *s = rad.sin();
            *c = rad.cos();
        }
        Self {
            sin_table,
            cos_table,
            torch_radius: DEFAULT_TORCH_RADIUS,
        }
    }

    /// A caster with the given radius, or the default radius if `radius <= 0`.
    pub fn with_torch_radius(radius: i32) -> Self {
        let mut fov = Self::new();
        fov.set_torch_radius(radius);
        fov
    }

    /// Sight radius in tiles.
    pub fn torch_radius(&self) -> i32 {
        self.torch_radius
    }

    /// Non-positive radii are ignored.
    pub fn set_torch_radius(&mut self, radius: i32) {
        if radius > 0 {
            self.torch_radius = radius;
        }
    }

    /// Recompute visibility from `(origin_x, origin_y)`.
    ///
    /// Clears every `visible` flag, then walks each ray outward one unit step
    /// at a time, marking tiles explored and visible. A ray stops after the
    /// first tile that blocks sight, or when it leaves the map.
    pub fn ray_cast(&self, origin_x: i32, origin_y: i32, map: &mut GameMap) {
        map.reset_visibility();

        if let Some(origin) = map.tile_mut(origin_x, origin_y) {
            origin.explored = true;
            origin.visible = true;
        }

        let max_x = f64::from(map.width() - 1);
        let max_y = f64::from(map.height() - 1);

        for deg in 0..RAYS {
            let ax = self.sin_table[deg];
            let ay = self.cos_table[deg];
            let mut x = f64::from(origin_x);
            let mut y = f64::from(origin_y);

            for _ in 0..self.torch_radius {
                x -= ax;
                y -= ay;

                if x < 0.0 || x > max_x || y < 0.0 || y > max_y {
                    break;
                }

                let Some(tile) = map.tile_mut(x as i32, y as i32) else {
                    break;
                };
                tile.explored = true;
                tile.visible = true;
                if tile.blocks_sight {
                    break;
                }
            }
        }

        trace!(
            "fov from ({origin_x}, {origin_y}) radius {}",
            self.torch_radius
        );
    }
}

impl Default for FieldOfVision {
    fn default() -> Self {
        Self::new()
    }
}
