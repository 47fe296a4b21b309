use glam::DVec2;

use iso_tiles::{CoordinateMapper, TileGrid, TileKey, WaveEffect};

fn create_test_grid() -> TileGrid {
    let mut grid = TileGrid::new();

    for i in 0..4 {
        for j in 0..4 {
            grid.set_tile(TileKey::new(i, j), ((i + j) % 3) as u32, false);
        }
    }

    grid
}

#[test]
fn test_set_and_remove_tiles() {
    let mut grid = TileGrid::new();
    let key = TileKey::new(-7, 12);

    assert!(grid.is_empty());
    assert!(!grid.is_occupied(key));
    assert_eq!(grid.tile_type(key), None);

    grid.set_tile(key, 3, true);

    assert!(grid.is_occupied(key));
    assert_eq!(grid.len(), 1);
    assert_eq!(grid.tile_type(key), Some(3));
    assert!(grid.tile(key).unwrap().flipped);

    grid.remove_tile(key);

    assert!(!grid.is_occupied(key));
    assert!(grid.is_empty());

    // removing twice is fine
    grid.remove_tile(key);
    assert!(grid.is_empty());
}

#[test]
fn test_keys_have_no_bounds() {
    let mut grid = TileGrid::new();

    for key in [
        TileKey::new(i32::MIN, i32::MAX),
        TileKey::new(-1, -1),
        TileKey::new(1_000_000, -1_000_000),
    ] {
        grid.set_tile(key, 1, false);
        assert!(grid.is_occupied(key));
    }

    assert_eq!(grid.len(), 3);
}

#[test]
fn test_set_tile_overwrites() {
    let mut grid = TileGrid::new();
    let key = TileKey::new(1, 1);

    grid.set_tile(key, 1, true);
    grid.set_persistent_offset(key, 0.75);
    grid.set_tile(key, 2, false);

    let tile = grid.tile(key).unwrap();

    assert_eq!(grid.len(), 1);
    assert_eq!(tile.type_id, 2);
    assert!(!tile.flipped);
    assert_eq!(tile.persistent_offset, 0.75);
}

#[test]
fn test_set_tile_type_only_on_occupied() {
    let mut grid = create_test_grid();

    grid.set_tile_type(TileKey::new(0, 0), 9);
    grid.set_tile_type(TileKey::new(10, 10), 9);

    assert_eq!(grid.tile_type(TileKey::new(0, 0)), Some(9));
    assert!(!grid.is_occupied(TileKey::new(10, 10)));
}

#[test]
fn test_flip_tile() {
    let mut grid = create_test_grid();
    let key = TileKey::new(2, 3);

    grid.flip_tile(key);
    assert!(grid.tile(key).unwrap().flipped);

    grid.flip_tile(key);
    assert!(!grid.tile(key).unwrap().flipped);

    // unoccupied tiles stay unoccupied
    grid.flip_tile(TileKey::new(-1, 0));
    assert!(!grid.is_occupied(TileKey::new(-1, 0)));
}

#[test]
fn test_persistent_offset() {
    let mut grid = create_test_grid();
    let key = TileKey::new(1, 2);
    let empty = TileKey::new(9, 9);

    assert_eq!(grid.persistent_offset(key), 0.0);

    grid.set_persistent_offset(key, -1.25);
    grid.set_persistent_offset(empty, 3.0);

    assert_eq!(grid.persistent_offset(key), -1.25);
    assert_eq!(grid.effective_offset(key), -1.25);
    assert_eq!(grid.persistent_offset(empty), 0.0);
    assert_eq!(grid.effective_offset(empty), 0.0);

    // offsets go with the tile
    grid.remove_tile(key);
    grid.set_tile(key, 0, false);
    assert_eq!(grid.persistent_offset(key), 0.0);
}

#[test]
fn test_effective_offset_adds_animation() {
    let mut grid = create_test_grid();
    let key = TileKey::new(0, 0);
    let effect = WaveEffect::radial(DVec2::ZERO);
    let contribution = effect.offset_at(key);

    grid.set_persistent_offset(key, 0.5);
    grid.spawn_effect(effect);

    assert!(contribution < 0.0);
    assert_eq!(grid.effective_offset(key), 0.5 + contribution);

    // unoccupied tiles get the animation part only
    let outside = TileKey::new(-1, 0);

    assert_eq!(
        grid.effective_offset(outside),
        grid.animations().offset_at(outside)
    );
}

#[test]
fn test_advance_until_effects_decay() {
    let mut grid = create_test_grid();

    grid.spawn_effect(WaveEffect::cross(DVec2::new(1.0, 1.0)).with_dampening(0.5));
    grid.spawn_effect(WaveEffect::radial(DVec2::new(3.0, 0.0)).with_dampening(0.25));

    let mut frames = 0;

    while !grid.animations().is_empty() {
        grid.advance(0.125);
        frames += 1;

        assert!(frames <= 32);
    }

    assert_eq!(frames, 32);

    for (key, _) in &grid {
        assert_eq!(grid.effective_offset(key), 0.0);
    }
}

#[test]
fn test_clear_effects() {
    let mut grid = create_test_grid();

    grid.spawn_effect(WaveEffect::radial(DVec2::ZERO));
    grid.clear_effects();

    assert!(grid.animations().is_empty());
    assert_eq!(grid.effective_offset(TileKey::new(0, 0)), 0.0);
}

#[test]
fn test_iteration_in_key_order() {
    let mut grid = TileGrid::new();

    grid.set_tile(TileKey::new(2, 0), 0, false);
    grid.set_tile(TileKey::new(-1, 5), 0, false);
    grid.set_tile(TileKey::new(0, -3), 0, false);
    grid.set_tile(TileKey::new(0, -4), 0, false);

    let keys: Vec<TileKey> = grid.iter().map(|(key, _)| key).collect();

    assert_eq!(
        keys,
        vec![
            TileKey::new(-1, 5),
            TileKey::new(0, -4),
            TileKey::new(0, -3),
            TileKey::new(2, 0),
        ]
    );
}

#[test]
fn test_tile_to_screen_and_pick() {
    let mut grid = create_test_grid();
    let mapper = CoordinateMapper::new(64.0, 32.0, DVec2::new(320.0, 40.0));
    let key = TileKey::new(2, 1);

    assert_eq!(grid.tile_to_screen(key, &mapper), mapper.iso_to_screen(key, 0.0));

    grid.set_persistent_offset(key, -1.0);

    // raised by a quarter cell
    assert_eq!(
        grid.tile_to_screen(key, &mapper),
        mapper.iso_to_screen(key, 0.0) - DVec2::new(0.0, 8.0)
    );

    let point = mapper.iso_to_screen(key, 0.0) + DVec2::new(0.0, 4.0);

    assert_eq!(grid.pick(&mapper, point), Some(key));
}

#[test]
fn test_pick_skips_empty_cells() {
    let mut grid = create_test_grid();
    let mapper = CoordinateMapper::default();
    let key = TileKey::new(1, 2);
    let point = mapper.iso_to_screen(key, 0.0) + DVec2::new(0.0, 4.0);

    assert_eq!(grid.pick(&mapper, point), Some(key));

    grid.remove_tile(key);

    assert_eq!(grid.pick(&mapper, point), None);
    assert_eq!(mapper.screen_to_iso(point), key);

    let outside = mapper.iso_to_screen(TileKey::new(10, -7), 0.0) + DVec2::new(0.0, 4.0);

    assert_eq!(grid.pick(&mapper, outside), None);
}
