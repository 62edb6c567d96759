//! Standout cohorts: persistent vehicle pools with their own behaviour.
//!
//! Pools are built once at startup and never mutated.  Whether a member is
//! active on a given day is redrawn every day by the composer.

use std::ops::Range;

use bx_core::{CoreResult, Discrete, SimRng, VehicleIdentity, VehicleType};

use crate::identity;

/// Behavioural profile of a standout pool.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum CohortKind {
    /// Cross in every weekday morning and out every weekday evening.
    Commuter,
    /// Refrigerated logistics trucks making a few alternating hops.
    Chilled,
    /// Delivery vans crossing many times a day in random directions.
    Smuggler,
}

impl CohortKind {
    pub const ALL: [CohortKind; 3] = [CohortKind::Commuter, CohortKind::Chilled, CohortKind::Smuggler];

    pub fn as_str(self) -> &'static str {
        match self {
            CohortKind::Commuter => "commuter",
            CohortKind::Chilled  => "chilled",
            CohortKind::Smuggler => "smuggler",
        }
    }

    /// Every member of a pool shares one category.
    pub fn vehicle_type(self) -> VehicleType {
        match self {
            CohortKind::Commuter => VehicleType::PassengerCar,
            CohortKind::Chilled  => VehicleType::Truck,
            CohortKind::Smuggler => VehicleType::DeliveryVan,
        }
    }

    /// Registration-country mix of the pool.
    pub fn nationality(self) -> &'static [(&'static str, f64)] {
        match self {
            CohortKind::Commuter => &[("DE", 0.55), ("FR", 0.18), ("IT", 0.17), ("AT", 0.07), ("LI", 0.03)],
            CohortKind::Chilled  => &[("IT", 0.35), ("FR", 0.25), ("DE", 0.25), ("AT", 0.15)],
            CohortKind::Smuggler => &[
                ("DE", 0.25), ("FR", 0.12), ("IT", 0.20), ("AT", 0.08), ("AL", 0.10),
                ("RS", 0.08), ("BA", 0.07), ("RO", 0.05), ("BG", 0.05),
            ],
        }
    }

    /// Probability that a member is active on a given day.  Commuters are
    /// driven by the weekday calendar instead.
    pub fn activation_prob(self) -> Option<f64> {
        match self {
            CohortKind::Commuter => None,
            CohortKind::Chilled  => Some(0.35),
            CohortKind::Smuggler => Some(0.25),
        }
    }

    /// Crossings emitted by an active member (half-open).  Commuters always
    /// make one inbound and one outbound crossing.
    pub fn events_per_activation(self) -> Option<Range<u32>> {
        match self {
            CohortKind::Commuter => None,
            CohortKind::Chilled  => Some(2..6),
            CohortKind::Smuggler => Some(6..20),
        }
    }

    /// Scale applied to the configured missing probability.
    pub fn missing_factor(self) -> f64 {
        match self {
            CohortKind::Smuggler => 1.2,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for CohortKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed-size pool of identities sharing one behavioural profile.
#[derive(Clone, Debug)]
pub struct StandoutCohort {
    pub kind:    CohortKind,
    pub members: Vec<VehicleIdentity>,
}

impl StandoutCohort {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The three standout pools of a run.
#[derive(Clone, Debug)]
pub struct StandoutPools {
    pub commuters: StandoutCohort,
    pub chilled:   StandoutCohort,
    pub smugglers: StandoutCohort,
}

impl StandoutPools {
    /// Build all three pools.
    ///
    /// Draw order: all commuter countries, all chilled countries, all
    /// smuggler countries; then per pool (same order) all plates, all
    /// colours, all brands.
    pub fn build(rng: &mut SimRng, commuters: usize, chilled: usize, smugglers: usize) -> CoreResult<Self> {
        let commuter_cc = draw_countries(rng, CohortKind::Commuter, commuters)?;
        let chilled_cc = draw_countries(rng, CohortKind::Chilled, chilled)?;
        let smuggler_cc = draw_countries(rng, CohortKind::Smuggler, smugglers)?;

        let commuters = build_members(rng, CohortKind::Commuter, &commuter_cc);
        let chilled = build_members(rng, CohortKind::Chilled, &chilled_cc);
        let smugglers = build_members(rng, CohortKind::Smuggler, &smuggler_cc);
        Ok(Self { commuters, chilled, smugglers })
    }

    pub fn total(&self) -> usize {
        self.commuters.len() + self.chilled.len() + self.smugglers.len()
    }
}

fn draw_countries(rng: &mut SimRng, kind: CohortKind, n: usize) -> CoreResult<Vec<&'static str>> {
    let dist = Discrete::new(kind.nationality().iter().copied())?;
    Ok((0..n).map(|_| dist.draw(rng)).collect())
}

fn build_members(rng: &mut SimRng, kind: CohortKind, countries: &[&'static str]) -> StandoutCohort {
    let vehicle_type = kind.vehicle_type();
    let plates: Vec<String> = countries.iter().map(|cc| identity::plate(rng, cc)).collect();
    let colours: Vec<_> = countries.iter().map(|_| identity::colour(rng)).collect();
    let brands: Vec<_> = countries.iter().map(|_| identity::brand(rng, vehicle_type)).collect();

    let members = countries
        .iter()
        .zip(plates)
        .zip(colours)
        .zip(brands)
        .map(|(((&country, plate), colour), brand)| VehicleIdentity {
            country,
            plate,
            vehicle_type,
            colour,
            brand,
        })
        .collect();

    StandoutCohort { kind, members }
}
