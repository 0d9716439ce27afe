use dk_core::map::{GameMap, Point};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::CaveConfig;
use crate::error::{MapGenError, MapGenResult};

/// Largest map, in tiles, the generator will build.
pub const MAX_MAP_TILES: i64 = 1 << 22;

/// A generated cave together with its single open region.
#[derive(Debug, Clone)]
pub struct Cavern {
    /// The finished map.
    pub map: GameMap,
    /// Every open tile. All of them are 4-connected to each other.
    pub main_cavern: Vec<Point>,
    /// A uniformly chosen tile of the main cavern.
    pub spawn: Point,
}

/// Build a cave, retrying with fresh seeds drawn from `rng` until one yields a
/// non-empty main cavern or `config.max_attempts` runs out.
pub fn build_cavern(
    width: i32,
    height: i32,
    rng: &mut StdRng,
    config: &CaveConfig,
) -> MapGenResult<Cavern> {
    check_dimensions(width, height)?;

    for attempt in 1..=config.max_attempts {
        let seed: u64 = rng.random();
        let mut attempt_rng = StdRng::seed_from_u64(seed);
        let mut map = GameMap::new(width, height);

        match generate_cavern(&mut map, &mut attempt_rng, config) {
            Ok(main_cavern) => {
                let spawn = main_cavern[attempt_rng.random_range(0..main_cavern.len())];
                debug!(
                    "cave {width}x{height} seed {seed}: attempt {attempt}, {} open, spawn ({}, {})",
                    main_cavern.len(),
                    spawn.x,
                    spawn.y
                );
                return Ok(Cavern {
                    map,
                    main_cavern,
                    spawn,
                });
            }
            Err(MapGenError::EmptyCavern) => {
                warn!("cave attempt {attempt} (seed {seed}) produced no open tiles, retrying");
            }
            Err(e) => return Err(e),
        }
    }

    Err(MapGenError::Exhausted {
        attempts: config.max_attempts,
    })
}

/// Carve a cave into `map` and return the tiles of its main cavern.
///
/// Every tile of `map` is overwritten. Fails with [`MapGenError::EmptyCavern`]
/// when no open tile survives smoothing.
pub fn generate_cavern<R: Rng>(
    map: &mut GameMap,
    rng: &mut R,
    config: &CaveConfig,
) -> MapGenResult<Vec<Point>> {
    check_dimensions(map.width(), map.height())?;

    seed_noise(map, rng, config.wall_chance);

    for _ in 0..config.smoothing_passes {
        smooth(map, |near, far| near >= 5 || far <= 2);
    }
    for _ in 0..config.cleanup_passes {
        smooth(map, |near, _| near >= 5);
    }

    seal_border(map);

    let mut caverns = find_caverns(map);
    caverns.sort_by_key(Vec::len);

    let Some(main) = caverns.pop() else {
        return Err(MapGenError::EmptyCavern);
    };

    for minor in &caverns {
        for p in minor {
            map.set_wall(p.x, p.y, true);
        }
    }
    debug!(
        "sealed {} minor caverns, main cavern has {} tiles",
        caverns.len(),
        main.len()
    );

    Ok(main)
}

fn check_dimensions(width: i32, height: i32) -> MapGenResult<()> {
    if width < 3 || height < 3 {
        return Err(MapGenError::InvalidDimensions { width, height });
    }
    if i64::from(width) * i64::from(height) > MAX_MAP_TILES {
        return Err(MapGenError::TooLarge {
            width,
            height,
            max_tiles: MAX_MAP_TILES,
        });
    }
    Ok(())
}

fn seed_noise<R: Rng>(map: &mut GameMap, rng: &mut R, wall_chance: u32) {
    for tile in map.tiles_mut() {
        let wall = rng.random_range(0..100) < wall_chance;
        tile.set_wall(wall);
        tile.visited = false;
        tile.explored = false;
        tile.visible = false;
    }
}

/// One in-place cellular-automaton pass. `rule(near, far)` receives the wall
/// counts within Chebyshev distance 1 and 2 (the tile itself included) and
/// decides whether the tile becomes wall.
fn smooth(map: &mut GameMap, rule: impl Fn(usize, usize) -> bool) {
    for y in 0..map.height() {
        for x in 0..map.width() {
            let near = walls_within(map, x, y, 1);
            let far = walls_within(map, x, y, 2);
            map.set_wall(x, y, rule(near, far));
        }
    }
}

/// Off-map coordinates count as wall.
fn walls_within(map: &GameMap, x: i32, y: i32, n: i32) -> usize {
    let mut count = 0;
    for dy in -n..=n {
        for dx in -n..=n {
            if map.is_wall(x + dx, y + dy) {
                count += 1;
            }
        }
    }
    count
}

fn seal_border(map: &mut GameMap) {
    for y in 0..map.height() {
        for x in 0..map.width() {
            if map.is_border(x, y) {
                map.set_wall(x, y, true);
            }
        }
    }
}

/// Collect every 4-connected open region. Uses an explicit stack so large
/// maps cannot overflow the call stack.
fn find_caverns(map: &mut GameMap) -> Vec<Vec<Point>> {
    map.reset_visited();
    let mut caverns = Vec::new();

    for y in 0..map.height() {
        for x in 0..map.width() {
            let Some(tile) = map.tile_mut(x, y) else {
                continue;
            };
            if tile.visited {
                continue;
            }
            if tile.is_wall() {
                tile.visited = true;
                continue;
            }

            let mut region = Vec::new();
            let mut stack = vec![Point::new(x, y)];
            while let Some(p) = stack.pop() {
                let Some(node) = map.tile_mut(p.x, p.y) else {
                    continue;
                };
                if node.visited || node.is_wall() {
                    continue;
                }
                node.visited = true;
                region.push(p);

                for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                    let (nx, ny) = (p.x + dx, p.y + dy);
                    if !map.is_wall(nx, ny) {
                        stack.push(Point::new(nx, ny));
                    }
                }
            }
            caverns.push(region);
        }
    }

    caverns
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use proptest::prelude::*;

    use super::*;

    fn reachable_from(map: &GameMap, start: Point) -> HashSet<Point> {
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            if map.is_wall(p.x, p.y) || !seen.insert(p) {
                continue;
            }
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                queue.push_back(Point::new(p.x + dx, p.y + dy));
            }
        }
        seen
    }

    #[test]
    fn default_cave_is_sealed_and_connected() {
        let mut rng = StdRng::seed_from_u64(42);
        let cave = build_cavern(100, 100, &mut rng, &CaveConfig::default()).unwrap();

        assert!(!cave.map.is_wall(cave.spawn.x, cave.spawn.y));
        assert!(cave.main_cavern.contains(&cave.spawn));
        assert_eq!(cave.map.floor_count(), cave.main_cavern.len());
        assert_eq!(
            reachable_from(&cave.map, cave.spawn).len(),
            cave.main_cavern.len()
        );
    }

    #[test]
    fn same_seed_same_cave() {
        let config = CaveConfig::default();
        let a = build_cavern(60, 40, &mut StdRng::seed_from_u64(7), &config).unwrap();
        let b = build_cavern(60, 40, &mut StdRng::seed_from_u64(7), &config).unwrap();
        assert_eq!(a.map, b.map);
        assert_eq!(a.spawn, b.spawn);
    }

    #[test]
    fn all_wall_noise_is_rejected() {
        let config = CaveConfig::default().with_wall_chance(100).with_max_attempts(3);
        let mut map = GameMap::new(20, 20);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            generate_cavern(&mut map, &mut rng, &config),
            Err(MapGenError::EmptyCavern)
        ));
        assert!(matches!(
            build_cavern(20, 20, &mut rng, &config),
            Err(MapGenError::Exhausted { attempts: 3 })
        ));
    }

    #[test]
    fn tiny_maps_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_cavern(2, 10, &mut rng, &CaveConfig::default()),
            Err(MapGenError::InvalidDimensions { width: 2, height: 10 })
        ));
    }

    #[test]
    fn oversized_maps_are_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            build_cavern(50_000, 50_000, &mut rng, &CaveConfig::default()),
            Err(MapGenError::TooLarge {
                width: 50_000,
                height: 50_000,
                ..
            })
        ));
        assert!(matches!(
            build_cavern(i32::MAX, 3, &mut rng, &CaveConfig::default()),
            Err(MapGenError::TooLarge { .. })
        ));
        assert!(check_dimensions(2048, 2048).is_ok());
        assert!(check_dimensions(2048, 2049).is_err());
    }

    #[test]
    fn flood_fill_splits_regions() {
        // Two open pockets separated by a wall column.
        let mut map = GameMap::new(7, 4);
        for y in 0..4 {
            for x in 0..7 {
                let wall = map.is_border(x, y) || x == 3;
                map.set_wall(x, y, wall);
            }
        }
        let mut caverns = find_caverns(&mut map);
        caverns.sort_by_key(Vec::len);
        assert_eq!(caverns.len(), 2);
        assert_eq!(caverns[0].len(), 4);
        assert_eq!(caverns[1].len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn caves_are_sealed_and_connected(
            seed in any::<u64>(),
            width in 12i32..48,
            height in 12i32..48,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = CaveConfig::default().with_max_attempts(50);
            let Ok(cave) = build_cavern(width, height, &mut rng, &config) else {
                return Ok(());
            };

            for y in 0..height {
                for x in 0..width {
                    if cave.map.is_border(x, y) {
                        prop_assert!(cave.map.is_wall(x, y));
                    }
                }
            }

            let reachable = reachable_from(&cave.map, cave.spawn);
            prop_assert_eq!(reachable.len(), cave.map.floor_count());
            prop_assert_eq!(reachable.len(), cave.main_cavern.len());
        }
    }
}
