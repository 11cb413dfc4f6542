//! Observable planner state.
//!
//! Holds the current stadium, the planned stadium and the pricing context.
//! Subscribers are called synchronously, in registration order, and only when
//! an update changes something they could display.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::seats::{SeasonTickets, SeatLayout};
use crate::stadium::Stadium;

/// Snapshot of everything the planner UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Ground truth from the host page. Never written by the planner.
    pub current: Stadium,
    /// Last plan, if the user asked for one.
    pub planned: Option<Stadium>,
    pub base_ticket_price: i64,
    #[serde(default)]
    pub season_tickets: SeasonTickets,
}

impl State {
    #[must_use]
    pub const fn new(
        current: SeatLayout,
        base_ticket_price: i64,
        season_tickets: SeasonTickets,
    ) -> Self {
        Self {
            current: Stadium::new(current),
            planned: None,
            base_ticket_price,
            season_tickets,
        }
    }

    /// Planned stadium, or the current one when nothing is planned yet.
    #[must_use]
    pub fn planned_or_current(&self) -> &Stadium {
        self.planned.as_ref().unwrap_or(&self.current)
    }
}

/// Partial update merged into the state by [`Store::set_state`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateUpdate {
    current: Option<Stadium>,
    planned: Option<Option<Stadium>>,
    base_ticket_price: Option<i64>,
    season_tickets: Option<SeasonTickets>,
}

impl StateUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(mut self, layout: SeatLayout) -> Self {
        self.current = Some(Stadium::new(layout));
        self
    }

    /// `None` clears the plan.
    #[must_use]
    pub fn planned(mut self, layout: Option<SeatLayout>) -> Self {
        self.planned = Some(layout.map(Stadium::new));
        self
    }

    #[must_use]
    pub const fn base_ticket_price(mut self, price: i64) -> Self {
        self.base_ticket_price = Some(price);
        self
    }

    #[must_use]
    pub const fn season_tickets(mut self, tickets: SeasonTickets) -> Self {
        self.season_tickets = Some(tickets);
        self
    }

    fn merge_into(self, state: &State) -> State {
        State {
            current: self.current.unwrap_or(state.current),
            planned: self.planned.unwrap_or(state.planned),
            base_ticket_price: self.base_ticket_price.unwrap_or(state.base_ticket_price),
            season_tickets: self.season_tickets.unwrap_or(state.season_tickets),
        }
    }
}

/// Handle returned by [`Store::subscribe`]; pass it to [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Listener called with `(new_state, previous_state)`.
pub type Listener = Box<dyn FnMut(&State, &State)>;

/// Single-threaded observable holder of [`State`].
pub struct Store {
    state: State,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Store {
    #[must_use]
    pub fn new(initial: State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Merge `update` into the state and notify subscribers if anything
    /// changed. Layouts compare structurally, prices and tickets by value.
    ///
    /// Returns whether subscribers were notified.
    pub fn set_state(&mut self, update: StateUpdate) -> bool {
        let next = update.merge_into(&self.state);
        if next == self.state {
            return false;
        }
        let previous = std::mem::replace(&mut self.state, next);
        debug!(
            "store: state changed, notifying {} listener(s)",
            self.listeners.len()
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.state, &previous);
        }
        true
    }

    /// Register `listener` and call it once right away with the current state
    /// (as both new and previous state).
    #[must_use = "dropping the id makes the listener impossible to remove"]
    pub fn subscribe(&mut self, listener: impl FnMut(&State, &State) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let mut listener: Listener = Box::new(listener);
        listener(&self.state, &self.state);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
