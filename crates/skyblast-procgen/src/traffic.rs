//! Cosmetic street traffic.

use glam::Vec3;
use rand::Rng;

use skyblast_core::components::Car;
use skyblast_core::types::{lerp, Color};

use crate::city::CityLayout;

/// Car body centre height above the road.
const CAR_RIDE_HEIGHT: f32 = 0.48;

/// Place `count` cars on the boulevard lanes, alternating z- and x-aligned streets.
pub fn generate_traffic<R: Rng>(rng: &mut R, layout: &CityLayout, count: usize) -> Vec<Car> {
    let s = layout.spacing;
    let lanes_z = [-(s * 2.5), 0.0, s * 2.5];
    let lanes_x = [-(s * 2.5), s * 2.5];

    (0..count)
        .map(|i| {
            let along_z = i % 2 == 0;
            let lane_offset = if along_z {
                lanes_z[i % lanes_z.len()]
            } else {
                lanes_x[i % lanes_x.len()]
            };
            let base_speed = if along_z { 14.0 } else { 12.0 };
            let speed = base_speed + rng.gen::<f32>() * 10.0;
            let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            let phase = rng.gen::<f32>();
            let tint = rng.gen_range(0..0x30u32);

            Car {
                along_z,
                lane_offset,
                speed,
                direction,
                phase,
                color: Color(0x4f6fd0 + (tint << 8) + tint),
            }
        })
        .collect()
}

/// Position and heading of a car at time `now`. Cars loop along their lane.
pub fn car_pose(car: &Car, layout: &CityLayout, now: f64) -> (Vec3, f32) {
    let span_x = layout.half_width() + layout.spacing * 0.65;
    let span_z = layout.half_depth() + layout.spacing * 0.65;
    let t = ((car.phase as f64 + now * (car.speed as f64 / 120.0)).rem_euclid(1.0)) as f32;

    if car.along_z {
        let z = lerp(-span_z, span_z, t) * car.direction;
        let heading = if car.direction > 0.0 { 0.0 } else { std::f32::consts::PI };
        (Vec3::new(car.lane_offset, CAR_RIDE_HEIGHT, z), heading)
    } else {
        let x = lerp(-span_x, span_x, t) * car.direction;
        let heading = if car.direction > 0.0 {
            std::f32::consts::FRAC_PI_2
        } else {
            -std::f32::consts::FRAC_PI_2
        };
        (Vec3::new(x, CAR_RIDE_HEIGHT, car.lane_offset), heading)
    }
}
