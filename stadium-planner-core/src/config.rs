//! Planner input bounds and defaults.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_MAX_SEATS, DEFAULT_MIN_WEIGHT, DEFAULT_VIP_WEIGHT_MAX};
use crate::seats::SeatRatio;

const DEFAULT_PLANNER_DATA: &str = include_str!("../assets/planner.json");

/// How the target ratio is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerMode {
    /// `1-4-8-16`.
    #[default]
    Default,
    /// `1-3-6-12`.
    MaintenanceOptimized,
    /// User-edited weights.
    Custom,
}

impl PlannerMode {
    /// Preset ratio for this mode; `None` for [`PlannerMode::Custom`].
    #[must_use]
    pub const fn preset_ratio(self) -> Option<SeatRatio> {
        match self {
            Self::Default => Some(SeatRatio::DEFAULT),
            Self::MaintenanceOptimized => Some(SeatRatio::MAINTENANCE_OPTIMIZED),
            Self::Custom => None,
        }
    }
}

/// Errors raised when planner configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_seats must be positive")]
    NoSeatCap,
    #[error("min_weight must be at least 1 (got {min_weight})")]
    ZeroMinWeight { min_weight: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound for the desired total.
    #[serde(default = "PlannerConfig::default_max_seats")]
    pub max_seats: u32,
    /// Upper bound for the vip weight of a custom ratio.
    #[serde(default = "PlannerConfig::default_vip_weight_max")]
    pub vip_weight_max: u32,
    /// Lower bound for the covered, standard and standing weights of a custom ratio.
    #[serde(default = "PlannerConfig::default_min_weight")]
    pub min_weight: u32,
    #[serde(default)]
    pub default_mode: PlannerMode,
}

impl PlannerConfig {
    const fn default_max_seats() -> u32 {
        DEFAULT_MAX_SEATS
    }

    const fn default_vip_weight_max() -> u32 {
        DEFAULT_VIP_WEIGHT_MAX
    }

    const fn default_min_weight() -> u32 {
        DEFAULT_MIN_WEIGHT
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_PLANNER_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }

    /// Parse a configuration document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_seats == 0 {
            return Err(ConfigError::NoSeatCap);
        }
        if self.min_weight == 0 {
            return Err(ConfigError::ZeroMinWeight {
                min_weight: self.min_weight,
            });
        }
        Ok(())
    }

    /// Clamp user-entered ratio weights: vip to `0..=vip_weight_max`, every
    /// other category to at least `min_weight`.
    #[must_use]
    pub fn clamp_ratio(&self, ratio: SeatRatio) -> SeatRatio {
        SeatRatio::new(
            ratio.vip.min(self.vip_weight_max),
            ratio.covered.max(self.min_weight),
            ratio.standard.max(self.min_weight),
            ratio.standing.max(self.min_weight),
        )
    }

    /// Clamp a desired total to `[current_total, max_seats]`. A missing input
    /// falls back to the current total. The lower bound wins when the stadium
    /// is already above the cap.
    #[must_use]
    pub fn clamp_desired_total(&self, desired: Option<i64>, current_total: u64) -> i64 {
        let floor = i64::try_from(current_total).unwrap_or(i64::MAX);
        let Some(desired) = desired else {
            return floor;
        };
        desired.min(i64::from(self.max_seats)).max(floor)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_seats: Self::default_max_seats(),
            vip_weight_max: Self::default_vip_weight_max(),
            min_weight: Self::default_min_weight(),
            default_mode: PlannerMode::default(),
        }
    }
}
