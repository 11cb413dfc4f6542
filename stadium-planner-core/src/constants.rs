//! Centralized economic constants for the stadium formulas.
//!
//! These values mirror the host game's stadium economics. They are plain
//! constants so that a change in the game's rules is a reviewed code change
//! rather than a runtime toggle.

use crate::seats::SeatCategory;

/// Per-category coefficients used by the income, maintenance and build formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorFactors {
    pub ticket_multiplier: u32,
    pub maintain_cost_factor: u32,
    pub build_time_factor: u32,
}

pub(crate) const VIP_FACTORS: SectorFactors = SectorFactors {
    ticket_multiplier: 12,
    maintain_cost_factor: 12,
    build_time_factor: 40,
};

pub(crate) const COVERED_FACTORS: SectorFactors = SectorFactors {
    ticket_multiplier: 4,
    maintain_cost_factor: 4,
    build_time_factor: 20,
};

pub(crate) const STANDARD_FACTORS: SectorFactors = SectorFactors {
    ticket_multiplier: 2,
    maintain_cost_factor: 2,
    build_time_factor: 10,
};

pub(crate) const STANDING_FACTORS: SectorFactors = SectorFactors {
    ticket_multiplier: 1,
    maintain_cost_factor: 1,
    build_time_factor: 5,
};

/// Look up the factor row for a category.
#[must_use]
pub const fn sector_factors(category: SeatCategory) -> SectorFactors {
    match category {
        SeatCategory::Vip => VIP_FACTORS,
        SeatCategory::Covered => COVERED_FACTORS,
        SeatCategory::Standard => STANDARD_FACTORS,
        SeatCategory::Standing => STANDING_FACTORS,
    }
}

// Maintenance ---------------------------------------------------------------
pub(crate) const MAINTAIN_COST_SCALE: f64 = 0.01;
pub(crate) const MAINTAIN_COST_UNIT: i64 = 100;

// Construction --------------------------------------------------------------
pub(crate) const BUILD_COST_SCALE: f64 = 0.15;
pub(crate) const BUILD_COST_UNIT: i64 = 2_500;
pub(crate) const BUILD_TIME_BASE: f64 = 1.0;
pub(crate) const BUILD_TIME_SEATS_PER_UNIT: f64 = 1_000.0;

// Shared by the maintenance and construction curves.
pub(crate) const COST_CURVE_NUMERATOR: f64 = 4.5;
pub(crate) const COST_CURVE_DENOMINATOR: f64 = 32_400.0;

// Planner input bounds --------------------------------------------------------
pub(crate) const DEFAULT_MAX_SEATS: u32 = 1_000_000;
pub(crate) const DEFAULT_VIP_WEIGHT_MAX: u32 = 1;
pub(crate) const DEFAULT_MIN_WEIGHT: u32 = 1;

// Host data bounds -------------------------------------------------------------
/// Largest standing-place price accepted from the host.
pub(crate) const MAX_BASE_TICKET_PRICE: f64 = 1_000_000.0;
