use dk_core::map::{GameMap, Point};

use crate::error::{MapGenError, MapGenResult};

/// Turn `map` into a single empty room ringed by walls and return its
/// interior tiles.
pub fn generate_arena(map: &mut GameMap) -> MapGenResult<Vec<Point>> {
    let (width, height) = (map.width(), map.height());
    if width < 3 || height < 3 {
        return Err(MapGenError::InvalidDimensions { width, height });
    }

    let mut interior = Vec::with_capacity(((width - 2) * (height - 2)) as usize);
    for y in 0..height {
        for x in 0..width {
            let wall = map.is_border(x, y);
            map.set_wall(x, y, wall);
            if !wall {
                interior.push(Point::new(x, y));
            }
        }
    }
    Ok(interior)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_has_walled_rim() {
        let mut map = GameMap::new(6, 5);
        let interior = generate_arena(&mut map).unwrap();
        assert_eq!(interior.len(), 4 * 3);
        assert!(map.is_wall(0, 0));
        assert!(map.is_wall(5, 2));
        assert!(map.is_wall(3, 4));
        assert!(!map.is_wall(1, 1));
        assert_eq!(map.floor_count(), interior.len());
    }

    #[test]
    fn arena_rejects_degenerate_map() {
        let mut map = GameMap::new(2, 2);
        assert!(generate_arena(&mut map).is_err());
    }
}
