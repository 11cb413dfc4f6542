//! Display-ready figures for the current and planned stadium.
use serde::{Deserialize, Serialize};

use crate::seats::{SeasonTickets, SeatLayout, SeatRatio};
use crate::stadium::Stadium;
use crate::store::State;
use crate::upgrade::{UpgradeManager, UpgradeSummary};

/// Figures of one stadium under the state's pricing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumFigures {
    pub layout: SeatLayout,
    pub total_seats: u64,
    pub ratio: SeatRatio,
    pub max_income: i64,
    pub max_income_excluding_season_tickets: i64,
    pub maintain_cost: i64,
}

impl StadiumFigures {
    #[must_use]
    pub fn of(stadium: &Stadium, base_ticket_price: i64, season_tickets: &SeasonTickets) -> Self {
        Self {
            layout: stadium.layout(),
            total_seats: stadium.total_seats(),
            ratio: stadium.ratio(),
            max_income: stadium.max_income(base_ticket_price),
            max_income_excluding_season_tickets: stadium
                .max_income_excluding_season_tickets(base_ticket_price, season_tickets),
            maintain_cost: stadium.maintain_cost(),
        }
    }
}

/// Planned figures, their difference to the current ones and the work needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFigures {
    pub figures: StadiumFigures,
    pub seat_delta: i64,
    pub max_income_delta: i64,
    pub max_income_excluding_season_tickets_delta: i64,
    pub maintain_cost_delta: i64,
    pub upgrade: UpgradeSummary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StadiumReport {
    pub base_ticket_price: i64,
    pub current: StadiumFigures,
    pub plan: Option<PlanFigures>,
}

impl StadiumReport {
    #[must_use]
    pub fn from_state(state: &State) -> Self {
        let price = state.base_ticket_price;
        let current = StadiumFigures::of(&state.current, price, &state.season_tickets);
        let plan = state.planned.map(|planned| {
            let figures = StadiumFigures::of(&planned, price, &state.season_tickets);
            let upgrade =
                UpgradeManager::new(state.current.layout(), price, Some(planned.layout())).summary();
            PlanFigures {
                seat_delta: i64::try_from(figures.total_seats).unwrap_or(i64::MAX)
                    - i64::try_from(current.total_seats).unwrap_or(i64::MAX),
                max_income_delta: figures.max_income.saturating_sub(current.max_income),
                max_income_excluding_season_tickets_delta: figures
                    .max_income_excluding_season_tickets
                    .saturating_sub(current.max_income_excluding_season_tickets),
                maintain_cost_delta: figures.maintain_cost.saturating_sub(current.maintain_cost),
                figures,
                upgrade,
            }
        });
        Self {
            base_ticket_price: price,
            current,
            plan,
        }
    }
}
