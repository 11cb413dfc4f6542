//! A stadium as seen by the planner: a seat layout with derived figures.
use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::seats::{SeasonTickets, SeatLayout, SeatRatio};

/// Seat layout plus behavior. Figures are recomputed on every call.
///
/// Two stadiums are equal when their layouts are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stadium {
    layout: SeatLayout,
}

impl Stadium {
    #[must_use]
    pub const fn new(layout: SeatLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub const fn layout(&self) -> SeatLayout {
        self.layout
    }

    #[must_use]
    pub fn total_seats(&self) -> u64 {
        self.layout.total_seats()
    }

    #[must_use]
    pub fn max_income(&self, base_ticket_price: i64) -> i64 {
        metrics::max_income(&self.layout, base_ticket_price)
    }

    #[must_use]
    pub fn max_income_excluding_season_tickets(
        &self,
        base_ticket_price: i64,
        season_tickets: &SeasonTickets,
    ) -> i64 {
        metrics::max_income_excluding_season_tickets(
            &self.layout,
            base_ticket_price,
            season_tickets,
        )
    }

    #[must_use]
    pub fn maintain_cost(&self) -> i64 {
        metrics::maintain_cost(&self.layout)
    }

    #[must_use]
    pub fn ratio(&self) -> SeatRatio {
        metrics::ratio_of(&self.layout)
    }

    #[must_use]
    pub fn is_different_layout(&self, other: &Self) -> bool {
        self.layout != other.layout
    }
}

impl From<SeatLayout> for Stadium {
    fn from(layout: SeatLayout) -> Self {
        Self::new(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figures_follow_the_layout() {
        let stadium = Stadium::new(SeatLayout::new(2, 2, 2, 2));
        // (2*12 + 2*4 + 2*2 + 2*1) * 5
        assert_eq!(stadium.max_income(5), 190);
        assert_eq!(stadium.max_income(5), stadium.max_income(5));
        assert_eq!(stadium.total_seats(), 8);
        assert_eq!(stadium.ratio(), SeatRatio::new(1, 1, 1, 1));
    }

    #[test]
    fn equality_is_structural() {
        let a = Stadium::new(SeatLayout::new(1, 2, 3, 4));
        let b = Stadium::from(SeatLayout::new(1, 2, 3, 4));
        assert_eq!(a, b);
        assert!(!a.is_different_layout(&b));
        assert!(a.is_different_layout(&Stadium::new(SeatLayout::new(1, 2, 3, 5))));
    }
}
