use std::borrow::Cow;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stadium_planner_core::{SeatLayout, SeatRatio, maintain_cost, max_income, plan, ratio_of};

const SWEEP_SEED: u64 = 0x5EA7_C0DE;
const SWEEP_ROUNDS: usize = 400;

fn random_layout(rng: &mut ChaCha8Rng, max_per_sector: u32) -> SeatLayout {
    SeatLayout::new(
        rng.gen_range(0..=max_per_sector),
        rng.gen_range(0..=max_per_sector),
        rng.gen_range(0..=max_per_sector),
        rng.gen_range(0..=max_per_sector),
    )
}

fn random_ratio(rng: &mut ChaCha8Rng) -> SeatRatio {
    loop {
        let ratio = SeatRatio::new(
            rng.gen_range(0..=3),
            rng.gen_range(0..=12),
            rng.gen_range(0..=24),
            rng.gen_range(0..=48),
        );
        if ratio.total_weight() > 0 {
            return ratio;
        }
    }
}

#[test]
fn plans_never_shrink_and_hit_the_exact_total() {
    let mut rng = ChaCha8Rng::seed_from_u64(SWEEP_SEED);
    for _ in 0..SWEEP_ROUNDS {
        let current = random_layout(&mut rng, 5_000);
        let ratio = random_ratio(&mut rng);
        let desired: i64 = rng.gen_range(0..=40_000);
        let current_total = i64::try_from(current.total_seats()).unwrap();

        let result = plan(desired, &current, &ratio).unwrap();
        assert!(
            result.dominates(&current),
            "{current:?} shrank to {result:?} (desired {desired}, ratio {ratio})"
        );
        assert_eq!(
            i64::try_from(result.total_seats()).unwrap(),
            desired.max(current_total),
            "wrong total for {current:?} -> {desired} at {ratio}"
        );
        if desired <= current_total {
            assert!(matches!(result, Cow::Borrowed(_)));
            assert_eq!(*result, current);
        }
    }
}

#[test]
fn plans_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(SWEEP_SEED ^ 0xFF);
    for _ in 0..50 {
        let current = random_layout(&mut rng, 2_000);
        let ratio = random_ratio(&mut rng);
        let desired: i64 = rng.gen_range(0..=20_000);
        assert_eq!(
            plan(desired, &current, &ratio).unwrap(),
            plan(desired, &current, &ratio).unwrap()
        );
    }
}

#[test]
fn empty_stadium_reaches_presets_exactly_on_multiples() {
    for preset in [SeatRatio::DEFAULT, SeatRatio::MAINTENANCE_OPTIMIZED] {
        let weight = i64::try_from(preset.total_weight()).unwrap();
        for multiple in 1..=40u32 {
            let result = plan(weight * i64::from(multiple), &SeatLayout::EMPTY, &preset)
                .unwrap()
                .into_owned();
            let expected = SeatLayout::new(
                preset.vip * multiple,
                preset.covered * multiple,
                preset.standard * multiple,
                preset.standing * multiple,
            );
            assert_eq!(result, expected, "preset {preset} x{multiple}");
            assert_eq!(ratio_of(&result), preset);
        }
    }
}

#[test]
fn metrics_are_pure() {
    let mut rng = ChaCha8Rng::seed_from_u64(SWEEP_SEED.rotate_left(7));
    for _ in 0..100 {
        let layout = random_layout(&mut rng, 50_000);
        let price: i64 = rng.gen_range(1..=60);
        assert_eq!(max_income(&layout, price), max_income(&layout, price));
        assert_eq!(maintain_cost(&layout), maintain_cost(&layout));
    }
    assert_eq!(max_income(&SeatLayout::EMPTY, 1_000), 0);
    assert_eq!(ratio_of(&SeatLayout::EMPTY), SeatRatio::new(0, 0, 0, 0));
}
