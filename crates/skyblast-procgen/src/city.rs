//! City grid generation.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use skyblast_core::constants::{CITY_COLS, CITY_ROWS, CITY_SPACING};

/// Grid dimensions for the city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityLayout {
    pub rows: u32,
    pub cols: u32,
    pub spacing: f32,
}

impl Default for CityLayout {
    fn default() -> Self {
        Self {
            rows: CITY_ROWS,
            cols: CITY_COLS,
            spacing: CITY_SPACING,
        }
    }
}

impl CityLayout {
    /// Half extent of the lot grid along x.
    pub fn half_width(&self) -> f32 {
        (self.cols.saturating_sub(1)) as f32 * self.spacing * 0.5
    }

    /// Half extent of the lot grid along z.
    pub fn half_depth(&self) -> f32 {
        (self.rows.saturating_sub(1)) as f32 * self.spacing * 0.5
    }

    /// Lots kept clear: the central boulevard and the two side parks.
    pub fn is_open_space(&self, x: f32, z: f32) -> bool {
        let boulevard = x.abs() < self.spacing * 0.75;
        let park = z.abs() < self.spacing * 0.55 && x.abs() > self.spacing * 3.0;
        boulevard || park
    }
}

/// One building to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingLot {
    /// Box centre.
    pub center: Vec3,
    /// Full extents (width, height, depth).
    pub size: Vec3,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CityPlan {
    pub lots: Vec<BuildingLot>,
}

/// Upper bound on lots to preallocate. Absurd grids saturate instead of overflowing.
pub fn lot_capacity(layout: &CityLayout) -> usize {
    const MAX_PREALLOC: usize = 4096;
    (layout.rows.saturating_mul(layout.cols) as usize).min(MAX_PREALLOC)
}

/// Lay out one building per grid lot, skipping open spaces.
pub fn generate_city<R: Rng>(rng: &mut R, layout: &CityLayout) -> CityPlan {
    let half_w = layout.half_width();
    let half_d = layout.half_depth();
    let mut lots = Vec::with_capacity(lot_capacity(layout));

    for r in 0..layout.rows {
        for c in 0..layout.cols {
            let x = c as f32 * layout.spacing - half_w;
            let z = r as f32 * layout.spacing - half_d;
            if layout.is_open_space(x, z) {
                continue;
            }

            let w = 7.0 + rng.gen::<f32>() * 6.0;
            let d = 7.0 + rng.gen::<f32>() * 6.0;
            let h = 18.0 + rng.gen::<f32>() * 78.0;
            let jitter_x = rng.gen::<f32>() * 2.0 - 1.0;
            let jitter_z = rng.gen::<f32>() * 2.0 - 1.0;

            lots.push(BuildingLot {
                center: Vec3::new(x + jitter_x, h / 2.0, z + jitter_z),
                size: Vec3::new(w, h, d),
            });
        }
    }

    CityPlan { lots }
}
