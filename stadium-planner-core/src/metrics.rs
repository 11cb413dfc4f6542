//! Stadium economics: income, maintenance, seat ratio and construction curves.
//!
//! Every function here is pure. Money is expressed in whole units of the host
//! game's currency.

use crate::constants::{
    BUILD_COST_SCALE, BUILD_COST_UNIT, BUILD_TIME_BASE, BUILD_TIME_SEATS_PER_UNIT,
    COST_CURVE_DENOMINATOR, COST_CURVE_NUMERATOR, MAINTAIN_COST_SCALE, MAINTAIN_COST_UNIT,
};
use crate::numbers::{ceil_f64_to_i64, round_f64_to_u32};
use crate::seats::{SeasonTickets, SeatCategory, SeatLayout, SeatRatio};

/// Income of a sold-out match: base price times the weighted seat count.
/// Saturates instead of overflowing for absurd prices.
#[must_use]
pub fn max_income(layout: &SeatLayout, base_ticket_price: i64) -> i64 {
    let weighted: i64 = layout
        .iter()
        .map(|(category, seats)| {
            i64::from(seats) * i64::from(category.factors().ticket_multiplier)
        })
        .sum();
    base_ticket_price.saturating_mul(weighted)
}

/// Income of a sold-out match counting only seats not covered by season tickets.
///
/// A category with more season tickets than seats contributes a negative
/// amount; over-subscription is surfaced rather than floored.
#[must_use]
pub fn max_income_excluding_season_tickets(
    layout: &SeatLayout,
    base_ticket_price: i64,
    season_tickets: &SeasonTickets,
) -> i64 {
    let weighted: i64 = layout
        .iter()
        .map(|(category, seats)| {
            let open = i64::from(seats) - i64::from(season_tickets.get(category));
            open * i64::from(category.factors().ticket_multiplier)
        })
        .sum();
    base_ticket_price.saturating_mul(weighted)
}

/// Maintenance cost of a single sector.
#[must_use]
pub fn sector_maintain_cost(seats: u32, maintain_cost_factor: u32) -> i64 {
    let scaled = f64::from(seats) * f64::from(maintain_cost_factor);
    let squared = scaled * scaled;
    ceil_f64_to_i64(MAINTAIN_COST_SCALE * squared * COST_CURVE_NUMERATOR / COST_CURVE_DENOMINATOR)
        .saturating_mul(MAINTAIN_COST_UNIT)
}

/// Maintenance cost of the whole stadium (sum over sectors).
#[must_use]
pub fn maintain_cost(layout: &SeatLayout) -> i64 {
    layout
        .iter()
        .map(|(category, seats)| sector_maintain_cost(seats, category.factors().maintain_cost_factor))
        .fold(0, i64::saturating_add)
}

/// Current proportion between the categories, normalized by the smallest
/// non-empty category. An empty stadium yields an all-zero ratio.
#[must_use]
pub fn ratio_of(layout: &SeatLayout) -> SeatRatio {
    let Some(unit) = layout
        .iter()
        .map(|(_, seats)| seats)
        .filter(|seats| *seats > 0)
        .min()
    else {
        return SeatRatio::default();
    };
    let unit = f64::from(unit);
    let normalize = |category: SeatCategory| round_f64_to_u32(f64::from(layout.get(category)) / unit);
    SeatRatio::new(
        normalize(SeatCategory::Vip),
        normalize(SeatCategory::Covered),
        normalize(SeatCategory::Standard),
        normalize(SeatCategory::Standing),
    )
}

/// Cost of growing one sector from `old_seats` to `new_seats`.
///
/// Shrinking or keeping a sector is free: the zero branch covers `new <= old`.
#[must_use]
pub fn sector_build_cost(new_seats: u32, old_seats: u32, maintain_cost_factor: u32) -> i64 {
    if new_seats <= old_seats {
        return 0;
    }
    let factor = f64::from(maintain_cost_factor);
    let new_scaled = f64::from(new_seats) * factor;
    let old_scaled = f64::from(old_seats) * factor;
    let delta = new_scaled * new_scaled - old_scaled * old_scaled;
    ceil_f64_to_i64(BUILD_COST_SCALE * delta * COST_CURVE_NUMERATOR / COST_CURVE_DENOMINATOR)
        .saturating_mul(BUILD_COST_UNIT)
}

/// Time needed to rebuild one sector. Any change, growth or demolition, takes
/// at least one unit; an untouched sector takes none.
#[must_use]
pub fn sector_build_time(new_seats: u32, old_seats: u32, build_time_factor: u32) -> u32 {
    if new_seats == old_seats {
        return 0;
    }
    let changed = f64::from(new_seats.abs_diff(old_seats));
    round_f64_to_u32(
        BUILD_TIME_BASE + f64::from(build_time_factor) * changed / BUILD_TIME_SEATS_PER_UNIT,
    )
}
