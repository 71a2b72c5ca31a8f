use primitive_bench_wasm::ecs::{
    Population,
    components::{Placement, Tint},
    systems::{EXTENT, grid_member, grid_side},
};
use quickcheck_macros::quickcheck;

#[test]
fn replace_discards_previous_generation() {
    let mut population = Population::new();
    population.replace(1000);
    assert_eq!(population.len(), 1000);

    population.replace(10);
    assert_eq!(population.len(), 10);
    assert_eq!(population.transforms().len(), 10);

    population.replace(0);
    assert!(population.is_empty());
    assert!(population.transforms().is_empty());
}

#[test]
fn every_entity_has_placement_and_tint() {
    let mut population = Population::new();
    population.replace(64);
    let mut query = population.world.query::<(&Placement, &Tint)>();
    assert_eq!(query.iter().count(), 64);
}

#[test]
fn grid_side_is_smallest_cube() {
    assert_eq!(grid_side(0), 0);
    assert_eq!(grid_side(1), 1);
    assert_eq!(grid_side(8), 2);
    assert_eq!(grid_side(9), 3);
    assert_eq!(grid_side(27), 3);
    assert_eq!(grid_side(1_000_000), 100);
    assert_eq!(grid_side(u32::MAX), 1626);
}

#[test]
fn grid_members_do_not_overlap() {
    let side = grid_side(27);
    let (a, _) = grid_member(0, side);
    let (b, _) = grid_member(1, side);
    let gap = (b.position[0] - a.position[0]).abs();
    assert!(a.half_extent + b.half_extent < gap);
}

#[quickcheck]
fn members_stay_inside_extent(count: u32, index: u32) -> bool {
    let count = count % 200_000 + 1;
    let index = index % count;
    let (placement, tint) = grid_member(index, grid_side(count));
    let inside = placement
        .position
        .iter()
        .all(|c| c - placement.half_extent >= -EXTENT && c + placement.half_extent <= EXTENT);
    let opaque = tint.0[3] == 1.0 && tint.0.iter().all(|c| (0.0..=1.0).contains(c));
    inside && opaque && placement.half_extent > 0.0
}
