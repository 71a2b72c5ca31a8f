use hecs::World;

use super::components::{Placement, Tint};
use crate::infrastructure::rendering::ObjectTransform;

/// Objects are laid out inside the cube [-EXTENT, EXTENT]^3
pub const EXTENT: f32 = 1.0;
/// Fraction of a grid cell a cube fills
const FILL: f32 = 0.7;
const GOLDEN_ANGLE: f32 = 2.399_963;

/// Cells per axis of the smallest cubic grid holding `count` objects
pub fn grid_side(count: u32) -> u32 {
    if count == 0 {
        return 0;
    }
    let mut side = (count as f64).cbrt().floor() as u32;
    while u64::from(side).pow(3) < u64::from(count) {
        side += 1;
    }
    side
}

/// Placement and color of the `index`th object of a `side`^3 grid
pub fn grid_member(index: u32, side: u32) -> (Placement, Tint) {
    let cell = 2.0 * EXTENT / side as f32;
    let x = index % side;
    let y = (index / side) % side;
    let z = index / (side * side);
    let coord = |i: u32| -EXTENT + cell * (i as f32 + 0.5);
    let position = [coord(x), coord(y), coord(z)];
    let color = |c: f32| 0.25 + 0.75 * (c + EXTENT) / (2.0 * EXTENT);

    (
        Placement {
            position,
            half_extent: cell * FILL * 0.5,
            phase: (index as f32 * GOLDEN_ANGLE) % std::f32::consts::TAU,
        },
        Tint([color(position[0]), color(position[1]), color(position[2]), 1.0]),
    )
}

/// Spawn `count` objects on a cubic grid.
pub fn spawn_grid(world: &mut World, count: u32) {
    let side = grid_side(count);

    #[cfg(feature = "parallel")]
    let members: Vec<(Placement, Tint)> = {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(|i| grid_member(i, side)).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let members = (0..count).map(|i| grid_member(i, side));

    world.spawn_batch(members).for_each(drop);
}

/// Flatten the world into GPU transforms.
pub fn gather_transforms(world: &World) -> Vec<ObjectTransform> {
    world
        .query::<(&Placement, &Tint)>()
        .iter()
        .map(|(_, (placement, tint))| {
            ObjectTransform::new(placement.position, placement.half_extent, tint.0, placement.phase)
        })
        .collect()
}
