//! Seat categories, seat layouts, target ratios and season tickets.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{SectorFactors, sector_factors};

/// The four seat categories of a stadium, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatCategory {
    Vip,
    Covered,
    Standard,
    Standing,
}

impl SeatCategory {
    /// Canonical order. Also the planner's tie-break and round-robin order.
    pub const ALL: [Self; 4] = [Self::Vip, Self::Covered, Self::Standard, Self::Standing];

    /// Position of this category in [`Self::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Vip => 0,
            Self::Covered => 1,
            Self::Standard => 2,
            Self::Standing => 3,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Vip => "vip",
            Self::Covered => "covered",
            Self::Standard => "standard",
            Self::Standing => "standing",
        }
    }

    #[must_use]
    pub const fn factors(self) -> SectorFactors {
        sector_factors(self)
    }
}

impl fmt::Display for SeatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Absolute seat counts per category. Immutable: every edit yields a new layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatLayout {
    pub vip: u32,
    pub covered: u32,
    pub standard: u32,
    pub standing: u32,
}

impl SeatLayout {
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(vip: u32, covered: u32, standard: u32, standing: u32) -> Self {
        Self {
            vip,
            covered,
            standard,
            standing,
        }
    }

    /// Build a layout by evaluating `f` once per category.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(SeatCategory) -> u32) -> Self {
        Self::new(
            f(SeatCategory::Vip),
            f(SeatCategory::Covered),
            f(SeatCategory::Standard),
            f(SeatCategory::Standing),
        )
    }

    #[must_use]
    pub const fn get(&self, category: SeatCategory) -> u32 {
        match category {
            SeatCategory::Vip => self.vip,
            SeatCategory::Covered => self.covered,
            SeatCategory::Standard => self.standard,
            SeatCategory::Standing => self.standing,
        }
    }

    /// Copy of this layout with one category replaced.
    #[must_use]
    pub const fn with(mut self, category: SeatCategory, seats: u32) -> Self {
        match category {
            SeatCategory::Vip => self.vip = seats,
            SeatCategory::Covered => self.covered = seats,
            SeatCategory::Standard => self.standard = seats,
            SeatCategory::Standing => self.standing = seats,
        }
        self
    }

    #[must_use]
    pub fn total_seats(&self) -> u64 {
        SeatCategory::ALL
            .iter()
            .map(|category| u64::from(self.get(*category)))
            .sum()
    }

    /// True when every category holds at least as many seats as in `other`.
    #[must_use]
    pub fn dominates(&self, other: &Self) -> bool {
        SeatCategory::ALL
            .iter()
            .all(|category| self.get(*category) >= other.get(*category))
    }

    /// Iterate `(category, seats)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (SeatCategory, u32)> + '_ {
        SeatCategory::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}

impl Index<SeatCategory> for SeatLayout {
    type Output = u32;

    fn index(&self, category: SeatCategory) -> &Self::Output {
        match category {
            SeatCategory::Vip => &self.vip,
            SeatCategory::Covered => &self.covered,
            SeatCategory::Standard => &self.standard,
            SeatCategory::Standing => &self.standing,
        }
    }
}

/// Relative weights between the categories, e.g. `1-4-8-16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatRatio {
    pub vip: u32,
    pub covered: u32,
    pub standard: u32,
    pub standing: u32,
}

impl SeatRatio {
    /// Default target proportion.
    pub const DEFAULT: Self = Self::new(1, 4, 8, 16);
    /// Proportion that keeps maintenance low for a given capacity.
    pub const MAINTENANCE_OPTIMIZED: Self = Self::new(1, 3, 6, 12);

    #[must_use]
    pub const fn new(vip: u32, covered: u32, standard: u32, standing: u32) -> Self {
        Self {
            vip,
            covered,
            standard,
            standing,
        }
    }

    #[must_use]
    pub const fn get(&self, category: SeatCategory) -> u32 {
        match category {
            SeatCategory::Vip => self.vip,
            SeatCategory::Covered => self.covered,
            SeatCategory::Standard => self.standard,
            SeatCategory::Standing => self.standing,
        }
    }

    #[must_use]
    pub fn total_weight(&self) -> u64 {
        SeatCategory::ALL
            .iter()
            .map(|category| u64::from(self.get(*category)))
            .sum()
    }
}

impl fmt::Display for SeatRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.vip, self.covered, self.standard, self.standing
        )
    }
}

/// Failure to read a ratio written as `vip-covered-standard-standing`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatioParseError {
    #[error("expected 4 dash-separated weights, found {found}")]
    WrongArity { found: usize },
    #[error("weight {position} is not a non-negative integer: {raw:?}")]
    InvalidWeight { position: usize, raw: String },
}

impl FromStr for SeatRatio {
    type Err = RatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').map(str::trim).collect();
        if parts.len() != SeatCategory::ALL.len() {
            return Err(RatioParseError::WrongArity { found: parts.len() });
        }
        let mut weights = [0u32; 4];
        for (position, (slot, raw)) in weights.iter_mut().zip(&parts).enumerate() {
            *slot = raw
                .parse::<u32>()
                .map_err(|_| RatioParseError::InvalidWeight {
                    position,
                    raw: (*raw).to_string(),
                })?;
        }
        Ok(Self::new(weights[0], weights[1], weights[2], weights[3]))
    }
}

/// Seats already sold as season tickets, per category plus the host's total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeasonTickets {
    pub vip: u32,
    pub covered: u32,
    pub standard: u32,
    pub standing: u32,
    pub total: u32,
}

impl SeasonTickets {
    #[must_use]
    pub const fn new(vip: u32, covered: u32, standard: u32, standing: u32, total: u32) -> Self {
        Self {
            vip,
            covered,
            standard,
            standing,
            total,
        }
    }

    #[must_use]
    pub const fn get(&self, category: SeatCategory) -> u32 {
        match category {
            SeatCategory::Vip => self.vip,
            SeatCategory::Covered => self.covered,
            SeatCategory::Standard => self.standard,
            SeatCategory::Standing => self.standing,
        }
    }
}
