//! Construction deltas between the current and a planned stadium.
use serde::{Deserialize, Serialize};

use crate::metrics::{sector_build_cost, sector_build_time};
use crate::seats::{SeatCategory, SeatLayout};
use crate::stadium::Stadium;

/// Cost and duration of rebuilding a single sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorUpgrade {
    pub category: SeatCategory,
    pub current_seats: u32,
    pub planned_seats: u32,
    pub build_cost: i64,
    pub build_time: u32,
}

impl SectorUpgrade {
    /// Signed seat change for this sector.
    #[must_use]
    pub fn seat_delta(&self) -> i64 {
        i64::from(self.planned_seats) - i64::from(self.current_seats)
    }
}

/// Aggregate of all sector upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSummary {
    pub sectors: [SectorUpgrade; 4],
    /// Sum of sector costs.
    pub total_cost: i64,
    /// Slowest sector; sectors are built in parallel.
    pub total_time: u32,
}

/// Pairing of a current and a planned stadium, used only to compute deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeManager {
    current: Stadium,
    planned: Stadium,
    base_ticket_price: i64,
}

impl UpgradeManager {
    /// `planned` defaults to `current` when absent.
    #[must_use]
    pub fn new(current: SeatLayout, base_ticket_price: i64, planned: Option<SeatLayout>) -> Self {
        Self {
            current: Stadium::new(current),
            planned: Stadium::new(planned.unwrap_or(current)),
            base_ticket_price,
        }
    }

    #[must_use]
    pub fn from_stadium(current: &Stadium, base_ticket_price: i64) -> Self {
        Self::new(current.layout(), base_ticket_price, None)
    }

    pub fn set_planned_layout(&mut self, layout: SeatLayout) {
        self.planned = Stadium::new(layout);
    }

    #[must_use]
    pub const fn current(&self) -> &Stadium {
        &self.current
    }

    #[must_use]
    pub const fn planned(&self) -> &Stadium {
        &self.planned
    }

    #[must_use]
    pub const fn base_ticket_price(&self) -> i64 {
        self.base_ticket_price
    }

    #[must_use]
    pub fn sector_build_cost(&self, category: SeatCategory) -> i64 {
        sector_build_cost(
            self.planned.layout().get(category),
            self.current.layout().get(category),
            category.factors().maintain_cost_factor,
        )
    }

    #[must_use]
    pub fn sector_build_time(&self, category: SeatCategory) -> u32 {
        sector_build_time(
            self.planned.layout().get(category),
            self.current.layout().get(category),
            category.factors().build_time_factor,
        )
    }

    #[must_use]
    pub fn total_build_cost(&self) -> i64 {
        SeatCategory::ALL
            .iter()
            .map(|category| self.sector_build_cost(*category))
            .fold(0, i64::saturating_add)
    }

    #[must_use]
    pub fn total_build_time(&self) -> u32 {
        SeatCategory::ALL
            .iter()
            .map(|category| self.sector_build_time(*category))
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn sector(&self, category: SeatCategory) -> SectorUpgrade {
        SectorUpgrade {
            category,
            current_seats: self.current.layout().get(category),
            planned_seats: self.planned.layout().get(category),
            build_cost: self.sector_build_cost(category),
            build_time: self.sector_build_time(category),
        }
    }

    #[must_use]
    pub fn summary(&self) -> UpgradeSummary {
        UpgradeSummary {
            sectors: SeatCategory::ALL.map(|category| self.sector(category)),
            total_cost: self.total_build_cost(),
            total_time: self.total_build_time(),
        }
    }
}
