use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::city::{generate_city, lot_capacity, CityLayout};
use crate::traffic::{car_pose, generate_traffic};
use crate::wave::generate_wave;

#[test]
fn test_city_skips_boulevard_and_parks() {
    let layout = CityLayout::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let plan = generate_city(&mut rng, &layout);

    let total = (layout.rows * layout.cols) as usize;
    assert!(!plan.lots.is_empty());
    assert!(plan.lots.len() < total, "open spaces must be skipped");

    for lot in &plan.lots {
        // Jitter is at most 1 unit, so nothing lands on the boulevard centre line.
        assert!(lot.center.x.abs() > layout.spacing * 0.75 - 1.0);
        assert!(lot.size.x >= 7.0 && lot.size.x <= 13.0);
        assert!(lot.size.z >= 7.0 && lot.size.z <= 13.0);
        assert!(lot.size.y >= 18.0 && lot.size.y <= 96.0);
        // Buildings stand on the ground.
        assert!((lot.center.y - lot.size.y / 2.0).abs() < 1e-4);
    }
}

#[test]
fn test_city_is_deterministic_per_seed() {
    let layout = CityLayout::default();
    let a = generate_city(&mut ChaCha8Rng::seed_from_u64(99), &layout);
    let b = generate_city(&mut ChaCha8Rng::seed_from_u64(99), &layout);
    assert_eq!(a.lots, b.lots);

    let c = generate_city(&mut ChaCha8Rng::seed_from_u64(100), &layout);
    assert_eq!(a.lots.len(), c.lots.len(), "lot count depends only on the layout");
    assert_ne!(a.lots, c.lots);
}

#[test]
fn test_small_layout_lot_count() {
    // 3x3 at spacing 18: x in {-18, 0, 18}; the x = 0 column is boulevard.
    let layout = CityLayout {
        rows: 3,
        cols: 3,
        spacing: 18.0,
    };
    let plan = generate_city(&mut ChaCha8Rng::seed_from_u64(1), &layout);
    assert_eq!(plan.lots.len(), 6);
}

#[test]
fn test_wave_parameters_in_range() {
    let layout = CityLayout::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let wave = generate_wave(&mut rng, &layout, 8);
    assert_eq!(wave.len(), 8);

    for seed in &wave {
        assert!(seed.radius >= 120.0 && seed.radius <= 340.0);
        assert!(seed.altitude >= 40.0 && seed.altitude <= 130.0);
        let rate = seed.angular_velocity.abs();
        assert!(rate >= 0.14 && rate <= 0.39 + 1e-6);
        assert!(seed.shot_cooldown >= 0.65 && seed.shot_cooldown < 1.25);
        assert!(seed.patrol_center.x.abs() <= layout.half_width() * 0.15 + 1e-3);
        assert_eq!(seed.patrol_center.y, seed.altitude);

        let spawn = seed.spawn_position();
        let ring = glam::Vec2::new(spawn.x - seed.patrol_center.x, spawn.z - seed.patrol_center.z);
        assert!((ring.length() - seed.radius).abs() < 1e-2);
    }
}

#[test]
fn test_traffic_loops_along_lanes() {
    let layout = CityLayout::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let cars = generate_traffic(&mut rng, &layout, 42);
    assert_eq!(cars.len(), 42);

    let span = layout.half_width() + layout.spacing * 0.65;
    for car in &cars {
        for step in 0..50 {
            let (pos, _heading) = car_pose(car, &layout, step as f64 * 0.73);
            if car.along_z {
                assert_eq!(pos.x, car.lane_offset);
                assert!(pos.z.abs() <= span + 1e-3);
            } else {
                assert_eq!(pos.z, car.lane_offset);
                assert!(pos.x.abs() <= span + 1e-3);
            }
        }
    }
}

#[test]
fn test_lot_capacity_saturates_on_huge_grids() {
    let layout = CityLayout::default();
    assert_eq!(lot_capacity(&layout), (layout.rows * layout.cols) as usize);

    let huge = CityLayout {
        rows: u32::MAX,
        cols: u32::MAX,
        ..layout
    };
    assert_eq!(lot_capacity(&huge), 4096);
}
