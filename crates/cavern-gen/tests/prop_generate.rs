use cavern_gen::generate;
use cavern_grid::{Tile, regions_of};
use proptest::prelude::*;

fn arb_dims() -> impl Strategy<Value = (i32, i32)> {
    (1i32..40, 1i32..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Same inputs, same grid.
    #[test]
    fn generation_is_deterministic(
        (w, h) in arb_dims(),
        seed in "[a-z0-9]{1,12}",
        fill in 0i32..=100,
    ) {
        let a = generate(w, h, &seed, fill, 10, 10).unwrap();
        let b = generate(w, h, &seed, fill, 10, 10).unwrap();
        prop_assert_eq!(a, b);
    }

    // The outer ring is wall before and after padding.
    #[test]
    fn border_is_always_solid(
        (w, h) in arb_dims(),
        seed in "[a-z]{1,8}",
        fill in -20i32..=120,
        wall_thr in 0u32..200,
        room_thr in 0u32..200,
        border in 0usize..6,
    ) {
        let g = generate(w, h, &seed, fill, wall_thr, room_thr).unwrap();
        prop_assert!(g.edge_is_solid());
        prop_assert!(g.padded(border).edge_is_solid());
    }

    // After cleanup no room is below the room threshold, and every wall
    // region not anchored to the ring meets the wall threshold.
    #[test]
    fn thresholds_hold_after_cleanup(
        (w, h) in arb_dims(),
        seed in "[a-z]{1,8}",
        fill in 30i32..=60,
        wall_thr in 0u32..60,
        room_thr in 0u32..60,
    ) {
        let g = generate(w, h, &seed, fill, wall_thr, room_thr).unwrap();
        for room in regions_of(&g, Tile::Open) {
            prop_assert!(room.len() >= room_thr as usize);
        }
        for wall in regions_of(&g, Tile::Wall) {
            prop_assert!(wall.touches_edge(&g) || wall.len() >= wall_thr as usize);
        }
    }

    // Region sizes add back up to the tile counts of the generated grid.
    #[test]
    fn regions_cover_generated_grid(
        (w, h) in arb_dims(),
        seed in "[a-z]{1,8}",
    ) {
        let g = generate(w, h, &seed, 47, 5, 5).unwrap();
        for tile in [Tile::Wall, Tile::Open] {
            let total: usize = regions_of(&g, tile).iter().map(|r| r.len()).sum();
            prop_assert_eq!(total, g.count(tile));
        }
    }
}
