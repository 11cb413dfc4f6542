//! Stadium Planner Core
//!
//! Platform-agnostic logic behind the stadium planner widget: seat layouts,
//! stadium economics, the seat allocation planner and the observable state
//! the widget renders from. Page scraping and DOM rendering live in the host.

pub mod config;
pub mod constants;
pub mod controller;
pub mod metrics;
pub mod numbers;
pub mod planner;
pub mod report;
pub mod seats;
pub mod snapshot;
pub mod stadium;
pub mod store;
pub mod upgrade;

use anyhow::Context;
use log::info;

// Re-export commonly used types
pub use config::{ConfigError, PlannerConfig, PlannerMode};
pub use constants::{SectorFactors, sector_factors};
pub use controller::{PlannerController, StadiumView, attach_view, parse_desired_total};
pub use metrics::{
    maintain_cost, max_income, max_income_excluding_season_tickets, ratio_of, sector_build_cost,
    sector_build_time, sector_maintain_cost,
};
pub use planner::{PlanError, plan};
pub use report::{PlanFigures, StadiumFigures, StadiumReport};
pub use seats::{RatioParseError, SeasonTickets, SeatCategory, SeatLayout, SeatRatio};
pub use snapshot::{SnapshotError, StadiumSnapshot};
pub use stadium::Stadium;
pub use store::{Listener, State, StateUpdate, Store, SubscriptionId};
pub use upgrade::{SectorUpgrade, UpgradeManager, UpgradeSummary};

/// Trait for abstracting where the host's stadium data comes from.
/// Platform-specific implementations should provide this.
pub trait SnapshotProvider {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the stadium data currently shown by the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be obtained or parsed.
    fn load_snapshot(&self) -> Result<StadiumSnapshot, Self::Error>;
}

/// Provider over a JSON document already fetched by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSnapshot(pub String);

impl SnapshotProvider for JsonSnapshot {
    type Error = SnapshotError;

    fn load_snapshot(&self) -> Result<StadiumSnapshot, Self::Error> {
        StadiumSnapshot::from_json(&self.0)
    }
}

/// Entry point tying a snapshot source to planner state.
pub struct PlannerEngine<P>
where
    P: SnapshotProvider,
{
    provider: P,
    config: PlannerConfig,
}

impl<P> PlannerEngine<P>
where
    P: SnapshotProvider,
{
    /// Create an engine with the provided snapshot source and configuration.
    pub const fn new(provider: P, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Controller preconfigured with this engine's bounds.
    #[must_use]
    pub fn controller(&self) -> PlannerController {
        PlannerController::new(self.config.clone())
    }

    /// Build the initial store from a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the snapshot cannot
    /// be loaded or is degenerate.
    pub fn create_store(&self) -> anyhow::Result<Store> {
        self.config
            .validate()
            .context("invalid planner configuration")?;
        let state = self.load_state()?;
        info!(
            "engine: stadium with {} seats at base price {}",
            state.current.total_seats(),
            state.base_ticket_price
        );
        Ok(Store::new(state))
    }

    /// Re-read the host data and publish it as the current stadium. The plan
    /// is kept.
    ///
    /// Returns whether subscribers were notified.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded or is degenerate; the
    /// store is left untouched in that case.
    pub fn refresh(&self, store: &mut Store) -> anyhow::Result<bool> {
        let state = self.load_state()?;
        let changed = store.set_state(
            StateUpdate::new()
                .current(state.current.layout())
                .base_ticket_price(state.base_ticket_price)
                .season_tickets(state.season_tickets),
        );
        if changed {
            info!("engine: host data changed");
        }
        Ok(changed)
    }

    fn load_state(&self) -> anyhow::Result<State> {
        let snapshot = self
            .provider
            .load_snapshot()
            .context("could not read stadium data")?;
        snapshot
            .to_state()
            .context("stadium data is incomplete")
    }
}
