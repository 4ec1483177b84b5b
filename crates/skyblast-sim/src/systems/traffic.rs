//! Street traffic. Purely cosmetic: cars never collide with anything.

use glam::Vec3;

use skyblast_core::components::Car;
use skyblast_procgen::car_pose;

use crate::context::SimContext;

#[derive(Debug, Clone, Default)]
pub struct Traffic {
    pub cars: Vec<Car>,
    /// Pose per car for the current frame: position and heading.
    pub poses: Vec<(Vec3, f32)>,
}

pub fn run(ctx: &mut SimContext) {
    let now = ctx.time.elapsed_secs;
    let layout = ctx.config.city;
    let traffic = &mut ctx.traffic;
    traffic.poses.clear();
    traffic
        .poses
        .extend(traffic.cars.iter().map(|car| car_pose(car, &layout, now)));
}
