//! Seat allocation planner.
//!
//! Grows a stadium to a desired capacity without removing any seat, steering
//! the new layout towards a target ratio between the categories.
//!
//! The plan is computed in two phases:
//!
//! 1. The *ideal* layout splits the desired total by the ratio (real valued),
//!    and the *deficit* of a category is the whole number of seats it lacks to
//!    reach its ideal share.
//! 2. If all deficits fit in the seats to add, every deficit is closed and the
//!    leftover is dealt round-robin. Otherwise seats are handed out one at a
//!    time to the category furthest below its ideal; ties go to the category
//!    that comes first in [`SeatCategory::ALL`].

use std::borrow::Cow;

use log::debug;
use thiserror::Error;

use crate::numbers::{ceil_f64_to_u32, u64_to_f64};
use crate::seats::{SeatCategory, SeatLayout, SeatRatio};

/// Category that absorbs seats once every category has reached its ideal.
const OVERFLOW_CATEGORY: SeatCategory = SeatCategory::Standing;
const CATEGORY_COUNT: u64 = 4;

/// Reasons the planner refuses an input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    #[error("desired total {desired} is not a valid seat count")]
    InvalidTotal { desired: i64 },
    #[error("seat ratio {ratio} has no weight")]
    InvalidRatio { ratio: SeatRatio },
}

/// Plan a layout holding `desired_total` seats.
///
/// The result never has fewer seats than `current` in any category and holds
/// exactly `max(desired_total, current total)` seats. When the stadium is
/// already large enough, `current` is handed back borrowed.
///
/// # Errors
///
/// Returns [`PlanError::InvalidTotal`] for a negative total or one beyond the
/// `u32` seat range, and [`PlanError::InvalidRatio`] for a ratio whose
/// weights sum to zero.
pub fn plan<'a>(
    desired_total: i64,
    current: &'a SeatLayout,
    ratio: &SeatRatio,
) -> Result<Cow<'a, SeatLayout>, PlanError> {
    let invalid_total = PlanError::InvalidTotal {
        desired: desired_total,
    };
    let desired = u32::try_from(desired_total).map_err(|_| invalid_total)?;
    let desired = u64::from(desired);
    let total_weight = ratio.total_weight();
    if total_weight == 0 {
        return Err(PlanError::InvalidRatio { ratio: *ratio });
    }

    let current_total = current.total_seats();
    if desired <= current_total {
        return Ok(Cow::Borrowed(current));
    }
    let remaining = desired - current_total;

    let ideal = ideal_layout(desired, ratio, total_weight);
    let deficit = SeatCategory::ALL.map(|category| {
        u64::from(ceil_f64_to_u32(
            ideal[category.index()] - f64::from(current.get(category)),
        ))
    });
    let total_deficit: u64 = deficit.iter().sum();

    let seats = if total_deficit > remaining {
        debug!(
            "planner: deficit {total_deficit} exceeds {remaining} seats to add, allocating greedily"
        );
        distribute_greedy(current, &ideal, remaining)
    } else {
        debug!("planner: closing deficit {total_deficit} of {remaining} seats to add");
        distribute_with_extra(current, &deficit, remaining - total_deficit)
    };

    into_layout(seats)
        .map(Cow::Owned)
        .ok_or(invalid_total)
}

/// Real-valued per-category share of `desired` seats.
fn ideal_layout(desired: u64, ratio: &SeatRatio, total_weight: u64) -> [f64; 4] {
    let desired = u64_to_f64(desired);
    let total_weight = u64_to_f64(total_weight);
    SeatCategory::ALL.map(|category| desired * f64::from(ratio.get(category)) / total_weight)
}

fn seats_of(layout: &SeatLayout) -> [u64; 4] {
    SeatCategory::ALL.map(|category| u64::from(layout.get(category)))
}

fn into_layout(seats: [u64; 4]) -> Option<SeatLayout> {
    let [vip, covered, standard, standing] = seats;
    Some(SeatLayout::new(
        u32::try_from(vip).ok()?,
        u32::try_from(covered).ok()?,
        u32::try_from(standard).ok()?,
        u32::try_from(standing).ok()?,
    ))
}

/// Hand out seats one at a time to the category with the largest gap to its
/// ideal share, then to [`OVERFLOW_CATEGORY`] once no category is below ideal.
fn distribute_greedy(current: &SeatLayout, ideal: &[f64; 4], mut remaining: u64) -> [u64; 4] {
    let mut seats = seats_of(current);
    while remaining > 0 {
        let target = largest_gap(&seats, ideal).unwrap_or(OVERFLOW_CATEGORY.index());
        seats[target] += 1;
        remaining -= 1;
    }
    seats
}

/// Index of the category furthest below its ideal. First in order wins ties.
fn largest_gap(seats: &[u64; 4], ideal: &[f64; 4]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, (held, target)) in seats.iter().zip(ideal).enumerate() {
        let gap = target - u64_to_f64(*held);
        if gap <= 0.0 {
            continue;
        }
        if best.is_none_or(|(_, best_gap)| gap > best_gap) {
            best = Some((index, gap));
        }
    }
    best.map(|(index, _)| index)
}

/// Close every deficit, then deal `extra` seats round-robin in canonical order.
fn distribute_with_extra(current: &SeatLayout, deficit: &[u64; 4], extra: u64) -> [u64; 4] {
    let mut seats = seats_of(current);
    let laps = extra / CATEGORY_COUNT;
    let partial = extra % CATEGORY_COUNT;
    for (position, (held, missing)) in (0u64..).zip(seats.iter_mut().zip(deficit)) {
        let bonus = u64::from(position < partial);
        *held += missing + laps + bonus;
    }
    seats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planned(desired: i64, current: SeatLayout, ratio: SeatRatio) -> SeatLayout {
        plan(desired, &current, &ratio).unwrap().into_owned()
    }

    #[test]
    fn reaches_default_ratio_from_uniform_stadium() {
        let result = planned(2_900, SeatLayout::new(100, 100, 100, 100), SeatRatio::DEFAULT);
        assert_eq!(result, SeatLayout::new(100, 400, 800, 1_600));
        assert_eq!(result.total_seats(), 2_900);
    }

    #[test]
    fn fills_each_missing_category() {
        let target = SeatLayout::new(100, 400, 800, 1_600);
        for category in SeatCategory::ALL {
            let current = target.with(category, 0);
            assert_eq!(
                planned(2_900, current, SeatRatio::DEFAULT),
                target,
                "missing {category}"
            );
        }
    }

    #[test]
    fn large_enough_stadium_is_returned_borrowed() {
        let current = SeatLayout::new(10, 10, 10, 10);
        let result = plan(20, &current, &SeatRatio::DEFAULT).unwrap();
        assert!(matches!(result, Cow::Borrowed(layout) if std::ptr::eq(layout, &current)));
        let exact = plan(40, &current, &SeatRatio::DEFAULT).unwrap();
        assert!(matches!(exact, Cow::Borrowed(_)));
    }

    #[test]
    fn empty_stadium_gets_exact_ratio() {
        let result = planned(29, SeatLayout::EMPTY, SeatRatio::DEFAULT);
        assert_eq!(result, SeatLayout::new(1, 4, 8, 16));
    }

    #[test]
    fn uneven_total_drops_smallest_fractions() {
        // Ideal 1.07 / 4.28 / 8.55 / 17.10: the three smallest fractional
        // gaps (vip, standing, covered) are the ones left open.
        let result = planned(31, SeatLayout::EMPTY, SeatRatio::DEFAULT);
        assert_eq!(result, SeatLayout::new(1, 4, 9, 17));
    }

    #[test]
    fn greedy_feeds_largest_gap_first() {
        let result = planned(110, SeatLayout::new(0, 0, 0, 100), SeatRatio::DEFAULT);
        assert_eq!(result, SeatLayout::new(0, 0, 10, 100));

        let result = planned(500, SeatLayout::new(100, 100, 100, 100), SeatRatio::DEFAULT);
        assert_eq!(result, SeatLayout::new(100, 100, 100, 200));
    }

    #[test]
    fn greedy_ties_follow_category_order() {
        let even = SeatRatio::new(1, 1, 1, 1);
        assert_eq!(planned(2, SeatLayout::EMPTY, even), SeatLayout::new(1, 1, 0, 0));
        assert_eq!(planned(3, SeatLayout::EMPTY, even), SeatLayout::new(1, 1, 1, 0));
    }

    #[test]
    fn greedy_overflow_goes_to_standing() {
        let current = SeatLayout::new(5, 5, 5, 5);
        let seats = distribute_greedy(&current, &[1.0, 1.0, 1.0, 1.0], 3);
        assert_eq!(seats, [5, 5, 5, 8]);
    }

    #[test]
    fn extra_seats_are_dealt_round_robin() {
        let seats = distribute_with_extra(&SeatLayout::new(1, 1, 1, 1), &[1, 0, 2, 0], 6);
        assert_eq!(seats, [4, 3, 4, 2]);
    }

    #[test]
    fn never_shrinks_a_category() {
        let current = SeatLayout::new(40, 30, 20, 10);
        let result = planned(200, current, SeatRatio::DEFAULT);
        assert!(result.dominates(&current));
        assert_eq!(result.total_seats(), 200);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        let current = SeatLayout::new(1, 1, 1, 1);
        assert_eq!(
            plan(-1, &current, &SeatRatio::DEFAULT),
            Err(PlanError::InvalidTotal { desired: -1 })
        );
        let too_large = i64::from(u32::MAX) + 1;
        assert_eq!(
            plan(too_large, &current, &SeatRatio::DEFAULT),
            Err(PlanError::InvalidTotal { desired: too_large })
        );
        assert_eq!(
            plan(100, &current, &SeatRatio::default()),
            Err(PlanError::InvalidRatio {
                ratio: SeatRatio::default()
            })
        );
    }
}
