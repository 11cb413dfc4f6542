//! Stadium data embedded in the host page.
//!
//! The host serves a JSON document describing the club's stadium. Only the
//! stands, the season tickets and the standing-place price matter here; every
//! other field is ignored.
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::MAX_BASE_TICKET_PRICE;
use crate::numbers::{i64_to_u32, round_f64_to_i64};
use crate::seats::{SeasonTickets, SeatLayout};
use crate::store::State;

/// Failure to turn a host document into planner state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("stadium data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stadium data is missing or has an invalid `{field}`")]
    Degenerate { field: &'static str },
}

/// Seat counts as the host reports them (`sta`, `std`, `cov`, `vip`, `tot`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandCounts {
    #[serde(default)]
    pub sta: i64,
    #[serde(default)]
    pub std: i64,
    #[serde(default)]
    pub cov: i64,
    #[serde(default)]
    pub vip: i64,
    #[serde(default)]
    pub tot: Option<i64>,
}

impl StandCounts {
    fn per_category(&self, field: &'static str) -> Result<[u32; 4], SnapshotError> {
        let convert = |count: i64| i64_to_u32(count).ok_or(SnapshotError::Degenerate { field });
        Ok([
            convert(self.vip)?,
            convert(self.cov)?,
            convert(self.std)?,
            convert(self.sta)?,
        ])
    }

    /// Compare the reported total with the already validated `counts`.
    fn warn_on_total_mismatch(&self, counts: &[u32; 4], field: &'static str) {
        if let Some(reported) = self.tot {
            let summed: u64 = counts.iter().copied().map(u64::from).sum();
            if u64::try_from(reported).ok() != Some(summed) {
                warn!("snapshot: {field} total {reported} differs from category sum {summed}");
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StadiumSection {
    #[serde(default)]
    pub stands: Option<StandCounts>,
    #[serde(rename = "seasTkts", default)]
    pub season_tickets: Option<StandCounts>,
}

/// Parsed host document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StadiumSnapshot {
    #[serde(default)]
    pub stadium: Option<StadiumSection>,
    #[serde(rename = "standingPlacePrice", default)]
    pub standing_place_price: Option<f64>,
}

impl StadiumSnapshot {
    /// Parse the host's JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of the expected shape.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Current seat layout.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Degenerate`] when the stands are absent or a
    /// count is negative or too large.
    pub fn layout(&self) -> Result<SeatLayout, SnapshotError> {
        let stands = self
            .stadium
            .as_ref()
            .and_then(|stadium| stadium.stands.as_ref())
            .ok_or(SnapshotError::Degenerate {
                field: "stadium.stands",
            })?;
        let counts = stands.per_category("stadium.stands")?;
        stands.warn_on_total_mismatch(&counts, "stands");
        let [vip, covered, standard, standing] = counts;
        Ok(SeatLayout::new(vip, covered, standard, standing))
    }

    /// Season tickets; all zero when the host does not report any.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Degenerate`] when a count is negative or too large.
    pub fn season_tickets(&self) -> Result<SeasonTickets, SnapshotError> {
        let Some(tickets) = self
            .stadium
            .as_ref()
            .and_then(|stadium| stadium.season_tickets.as_ref())
        else {
            return Ok(SeasonTickets::default());
        };
        let field = "stadium.seasTkts";
        let counts = tickets.per_category(field)?;
        tickets.warn_on_total_mismatch(&counts, "seasTkts");
        let [vip, covered, standard, standing] = counts;
        let summed = u64::from(vip) + u64::from(covered) + u64::from(standard) + u64::from(standing);
        let total = match tickets.tot {
            Some(total) => i64_to_u32(total).ok_or(SnapshotError::Degenerate { field })?,
            None => u32::try_from(summed).map_err(|_| SnapshotError::Degenerate { field })?,
        };
        Ok(SeasonTickets::new(vip, covered, standard, standing, total))
    }

    /// Price of a standing place, the base every other ticket price derives from.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Degenerate`] when the price is absent, negative,
    /// fractional, not finite or above the accepted maximum.
    pub fn base_ticket_price(&self) -> Result<i64, SnapshotError> {
        let degenerate = || SnapshotError::Degenerate {
            field: "standingPlacePrice",
        };
        let price = self.standing_place_price.ok_or_else(degenerate)?;
        if !price.is_finite()
            || price < 0.0
            || price.fract() != 0.0
            || price > MAX_BASE_TICKET_PRICE
        {
            return Err(degenerate());
        }
        Ok(round_f64_to_i64(price))
    }

    /// Initial planner state: host figures, nothing planned.
    ///
    /// # Errors
    ///
    /// Returns the first degenerate field found.
    pub fn to_state(&self) -> Result<State, SnapshotError> {
        Ok(State::new(
            self.layout()?,
            self.base_ticket_price()?,
            self.season_tickets()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_DATA: &str = r#"{
        "stadium": {
            "name": "Stadio Comunale",
            "spaces": { "commercial": 1, "supporters": 0, "toilets": 2, "parking": 1, "sidelineAdv": 0 },
            "stands": { "sta": 11040, "std": 5520, "cov": 2760, "vip": 690, "tot": 20010 },
            "seasTkts": { "sta": 4000, "std": 1500, "cov": 300, "vip": 50, "tot": 5850 },
            "seasTktsPercentage": { "sta": 36, "std": 27, "cov": 11, "vip": 7 }
        },
        "isOwner": true,
        "teamID": 42,
        "seatBuilding": [],
        "standingPlacePrice": 28
    }"#;

    #[test]
    fn parses_host_document() {
        let snapshot = StadiumSnapshot::from_json(PAGE_DATA).unwrap();
        let state = snapshot.to_state().unwrap();
        assert_eq!(state.current.layout(), SeatLayout::new(690, 2_760, 5_520, 11_040));
        assert_eq!(state.base_ticket_price, 28);
        assert_eq!(
            state.season_tickets,
            SeasonTickets::new(50, 300, 1_500, 4_000, 5_850)
        );
        assert!(state.planned.is_none());
    }

    #[test]
    fn missing_season_tickets_default_to_zero() {
        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":1,"std":2,"cov":3,"vip":4}},"standingPlacePrice":10}"#,
        )
        .unwrap();
        assert_eq!(snapshot.season_tickets().unwrap(), SeasonTickets::default());
        assert_eq!(snapshot.layout().unwrap(), SeatLayout::new(4, 3, 2, 1));
    }

    #[test]
    fn missing_stands_is_degenerate() {
        let snapshot = StadiumSnapshot::from_json(r#"{"standingPlacePrice":10}"#).unwrap();
        assert!(matches!(
            snapshot.to_state(),
            Err(SnapshotError::Degenerate {
                field: "stadium.stands"
            })
        ));
    }

    #[test]
    fn negative_counts_and_prices_are_degenerate() {
        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":-1,"std":2,"cov":3,"vip":4}},"standingPlacePrice":-3}"#,
        )
        .unwrap();
        assert!(matches!(snapshot.layout(), Err(SnapshotError::Degenerate { .. })));
        assert!(matches!(
            snapshot.base_ticket_price(),
            Err(SnapshotError::Degenerate {
                field: "standingPlacePrice"
            })
        ));
    }

    #[test]
    fn out_of_range_counts_are_degenerate_even_with_a_reported_total() {
        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":9223372036854775807,"std":1,"cov":1,"vip":1,"tot":0}},"standingPlacePrice":28}"#,
        )
        .unwrap();
        assert!(matches!(
            snapshot.to_state(),
            Err(SnapshotError::Degenerate {
                field: "stadium.stands"
            })
        ));

        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":1,"std":1,"cov":1,"vip":1},
                "seasTkts":{"sta":9223372036854775807,"vip":9223372036854775807,"tot":3}},
                "standingPlacePrice":28}"#,
        )
        .unwrap();
        assert!(matches!(
            snapshot.season_tickets(),
            Err(SnapshotError::Degenerate {
                field: "stadium.seasTkts"
            })
        ));
    }

    #[test]
    fn mismatched_total_only_warns() {
        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":1,"std":2,"cov":3,"vip":4,"tot":-5}},"standingPlacePrice":28}"#,
        )
        .unwrap();
        assert_eq!(snapshot.layout().unwrap(), SeatLayout::new(4, 3, 2, 1));
    }

    #[test]
    fn unreasonable_prices_are_degenerate() {
        for price in ["1e16", "1e19", "28.5", "1000001"] {
            let json = format!(
                r#"{{"stadium":{{"stands":{{"sta":1000}}}},"standingPlacePrice":{price}}}"#
            );
            let snapshot = StadiumSnapshot::from_json(&json).unwrap();
            assert!(
                matches!(
                    snapshot.base_ticket_price(),
                    Err(SnapshotError::Degenerate {
                        field: "standingPlacePrice"
                    })
                ),
                "price {price}"
            );
        }
        let snapshot = StadiumSnapshot::from_json(
            r#"{"stadium":{"stands":{"sta":1000}},"standingPlacePrice":1000000}"#,
        )
        .unwrap();
        assert_eq!(snapshot.base_ticket_price().unwrap(), 1_000_000);
        assert_eq!(snapshot.to_state().unwrap().current.max_income(1_000_000), 1_000_000_000);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            StadiumSnapshot::from_json("<html>"),
            Err(SnapshotError::Json(_))
        ));
    }
}
