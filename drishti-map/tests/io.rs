//! Image and config file round trips.

use image::{DynamicImage, GrayImage, Luma};
use tempfile::TempDir;

use drishti_map::io::{belief_image, load_obstacle_grid, obstacle_image, save_png};
use drishti_map::{CellIndex, DrishtiConfig, Error, Session};

fn bordered_map(n: u32) -> GrayImage {
    GrayImage::from_fn(n, n, |x, y| {
        if x == 0 || y == 0 || x == n - 1 || y == n - 1 {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

#[test]
fn test_load_map_run_and_export() {
    let dir = TempDir::new().unwrap();
    let map_path = dir.path().join("room.png");
    bordered_map(60).save(&map_path).unwrap();

    let world = load_obstacle_grid(&map_path, [6.0, 6.0]).unwrap();
    assert_eq!(world.rows(), 60);
    assert_eq!(world.pixels_per_meter(), 10.0);
    assert_eq!(world.obstacle_count(), 4 * 60 - 4);
    assert!(world.is_obstacle(CellIndex::new(0, 17)));

    let mut session = Session::from_config(world, &DrishtiConfig::default()).unwrap();
    for _ in 0..30 {
        session.tick(1.0 / 30.0, None);
    }

    let out = dir.path().join("belief.png");
    save_png(&DynamicImage::ImageLuma8(belief_image(session.belief())), &out).unwrap();
    let reloaded = image::open(&out).unwrap().into_luma8();
    assert_eq!(reloaded.dimensions(), (60, 60));
    // Wall straight right of the start is bright, interior along the beam dark
    assert!(reloaded.get_pixel(59, 30).0[0] > 200);
    assert!(reloaded.get_pixel(45, 30).0[0] < 50);
}

#[test]
fn test_obstacle_image_round_trip() {
    let dir = TempDir::new().unwrap();
    let map_path = dir.path().join("room.png");
    bordered_map(20).save(&map_path).unwrap();

    let world = load_obstacle_grid(&map_path, [2.0, 2.0]).unwrap();
    let out = dir.path().join("truth.png");
    save_png(&DynamicImage::ImageLuma8(obstacle_image(&world)), &out).unwrap();

    let again = load_obstacle_grid(&out, [2.0, 2.0]).unwrap();
    assert_eq!(again.obstacles(), world.obstacles());
}

#[test]
fn test_map_scale_mismatch() {
    let dir = TempDir::new().unwrap();
    let map_path = dir.path().join("wide.png");
    GrayImage::from_fn(40, 20, |_, _| Luma([255u8]))
        .save(&map_path)
        .unwrap();

    let err = load_obstacle_grid(&map_path, [20.0, 20.0]).unwrap_err();
    assert!(matches!(err, Error::ScaleMismatch { .. }));
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "sensor:\n  range_resolution: 0.05\nsim:\n  dt: 0.1\n").unwrap();

    let config = DrishtiConfig::load(&path).unwrap();
    assert_eq!(config.sensor.range_resolution, 0.05);
    assert_eq!(config.sim.dt, 0.1);
    assert!(DrishtiConfig::load(&dir.path().join("missing.yaml")).is_err());
}
