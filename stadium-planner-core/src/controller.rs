//! Glue between a presentation surface and the planner.
//!
//! Rendering is left to the host: a [`StadiumView`] only receives reports.
//! The [`PlannerController`] keeps the user's inputs, clamps them and writes
//! plans into the [`Store`].
use log::info;

use crate::config::{PlannerConfig, PlannerMode};
use crate::planner::{PlanError, plan};
use crate::report::StadiumReport;
use crate::seats::SeatRatio;
use crate::store::{State, StateUpdate, Store, SubscriptionId};

/// A surface that displays stadium reports.
pub trait StadiumView {
    fn render(&mut self, report: &StadiumReport);
}

/// Subscribe `view` to `store`. The view renders right away and again after
/// every meaningful state change.
#[must_use = "dropping the id makes the view impossible to detach"]
pub fn attach_view<V>(store: &mut Store, mut view: V) -> SubscriptionId
where
    V: StadiumView + 'static,
{
    store.subscribe(move |state, _| view.render(&StadiumReport::from_state(state)))
}

/// Read a desired-total field. Anything that is not an integer counts as empty.
#[must_use]
pub fn parse_desired_total(input: &str) -> Option<i64> {
    input.trim().parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerController {
    config: PlannerConfig,
    mode: PlannerMode,
    custom_ratio: SeatRatio,
    desired_total: Option<i64>,
}

impl PlannerController {
    #[must_use]
    pub fn new(config: PlannerConfig) -> Self {
        let custom_ratio = config.clamp_ratio(SeatRatio::DEFAULT);
        Self {
            mode: config.default_mode,
            config,
            custom_ratio,
            desired_total: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[must_use]
    pub const fn mode(&self) -> PlannerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PlannerMode) {
        self.mode = mode;
    }

    #[must_use]
    pub const fn custom_ratio(&self) -> SeatRatio {
        self.custom_ratio
    }

    /// Store user-edited weights, clamped to the configured bounds.
    pub fn set_custom_ratio(&mut self, ratio: SeatRatio) {
        self.custom_ratio = self.config.clamp_ratio(ratio);
    }

    #[must_use]
    pub const fn desired_total(&self) -> Option<i64> {
        self.desired_total
    }

    /// `None` means the input field does not hold a number.
    pub fn set_desired_total(&mut self, desired: Option<i64>) {
        self.desired_total = desired;
    }

    /// Target ratio for the selected mode.
    #[must_use]
    pub fn ratio(&self) -> SeatRatio {
        self.mode.preset_ratio().unwrap_or(self.custom_ratio)
    }

    /// Desired total clamped to `[current total, max_seats]`.
    #[must_use]
    pub fn clamped_desired_total(&self, state: &State) -> i64 {
        self.config
            .clamp_desired_total(self.desired_total, state.current.total_seats())
    }

    /// Plan with the current inputs and publish the result as the planned
    /// stadium. The clamped total replaces the raw input, as a form field
    /// would after correction.
    ///
    /// Returns whether the store notified its subscribers.
    ///
    /// # Errors
    ///
    /// Returns the planner's error if the inputs are degenerate, which the
    /// configured clamps normally prevent.
    pub fn request_plan(&mut self, store: &mut Store) -> Result<bool, PlanError> {
        let desired = self.clamped_desired_total(store.state());
        self.desired_total = Some(desired);
        let ratio = self.ratio();
        let current = store.state().current.layout();
        let planned = plan(desired, &current, &ratio)?.into_owned();
        info!("planner: {desired} seats at ratio {ratio} -> {planned:?}");
        Ok(store.set_state(StateUpdate::new().planned(Some(planned))))
    }

    /// Drop the plan, if any.
    pub fn clear_plan(&self, store: &mut Store) -> bool {
        store.set_state(StateUpdate::new().planned(None))
    }
}

impl Default for PlannerController {
    fn default() -> Self {
        Self::new(PlannerConfig::default_config())
    }
}
