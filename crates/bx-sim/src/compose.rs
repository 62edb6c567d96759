//! The daily event composer.
//!
//! # Per-day pipeline
//!
//! ```text
//! ① Baseline IN   — `incoming_target` independent rows
//! ② Baseline OUT  — `outgoing_target` independent rows
//! ③ Commuters     — weekdays only: one morning IN + one evening OUT each
//! ④ Chilled       — active members: 2–5 alternating crossings
//! ⑤ Smugglers     — active members: 6–19 crossings, random direction
//! ⑥ Sort          — stable, by timestamp, per stream
//! ⑦ Misplace      — bounded swaps, IN then OUT
//! ```
//!
//! Every step draws from the shared `SimRng` in the order above; reordering
//! any of them changes the dataset for the same seed.

use std::ops::Range;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use bx_core::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, at_offset, is_weekday};
use bx_core::vehicle::VEHICLE_TYPE_WEIGHTS;
use bx_core::{Colour, CoreResult, CrossingEvent, Direction, Discrete, SimRng, VehicleIdentity, VehicleType};

use crate::arrivals::sequential_seconds;
use crate::cohort::{CohortKind, StandoutCohort, StandoutPools};
use crate::identity;
use crate::misplace::apply_misplacements;
use crate::schedule::DaySchedule;
use crate::weights::CountryWeights;

/// Commuter inbound window, seconds after midnight.
pub const MORNING_WINDOW: Range<u32> = 5 * SECONDS_PER_HOUR..10 * SECONDS_PER_HOUR;

/// Commuter outbound window, seconds after midnight.
pub const EVENING_WINDOW: Range<u32> = 15 * SECONDS_PER_HOUR..20 * SECONDS_PER_HOUR;

/// Tunables of the per-day composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposeParams {
    /// Probability that a scheduled standout crossing goes unrecorded.
    pub missing_prob:        f64,
    pub misplace_per_day:    usize,
    pub misplace_max_offset: usize,
}

impl Default for ComposeParams {
    fn default() -> Self {
        Self { missing_prob: 0.015, misplace_per_day: 50, misplace_max_offset: 250 }
    }
}

/// Row counts per source for one stream pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub incoming: usize,
    pub outgoing: usize,
}

impl SourceCounts {
    fn bump(&mut self, direction: Direction) {
        match direction {
            Direction::Incoming => self.incoming += 1,
            Direction::Outgoing => self.outgoing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.incoming + self.outgoing
    }
}

/// Where a day's rows came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DayStats {
    pub baseline:         SourceCounts,
    pub commuter:         SourceCounts,
    pub chilled:          SourceCounts,
    pub smuggler:         SourceCounts,
    pub active_chilled:   usize,
    pub active_smugglers: usize,
}

/// The two ordered streams of one simulated day.
#[derive(Clone, Debug)]
pub struct DayBatch {
    pub day:      NaiveDate,
    pub incoming: Vec<CrossingEvent>,
    pub outgoing: Vec<CrossingEvent>,
    pub stats:    DayStats,
}

impl DayBatch {
    pub fn stream(&self, direction: Direction) -> &[CrossingEvent] {
        match direction {
            Direction::Incoming => &self.incoming,
            Direction::Outgoing => &self.outgoing,
        }
    }

    pub fn stream_mut(&mut self, direction: Direction) -> &mut Vec<CrossingEvent> {
        match direction {
            Direction::Incoming => &mut self.incoming,
            Direction::Outgoing => &mut self.outgoing,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }
}

/// Merges baseline traffic with the standout cohorts into per-day streams.
pub struct DailyComposer {
    countries:     Discrete<&'static str>,
    vehicle_types: Discrete<VehicleType>,
    pools:         StandoutPools,
    params:        ComposeParams,
}

impl DailyComposer {
    pub fn new(weights: &CountryWeights, pools: StandoutPools, params: ComposeParams) -> CoreResult<Self> {
        Ok(Self {
            countries: weights.distribution()?,
            vehicle_types: Discrete::new(VEHICLE_TYPE_WEIGHTS)?,
            pools,
            params,
        })
    }

    pub fn pools(&self) -> &StandoutPools {
        &self.pools
    }

    pub fn params(&self) -> &ComposeParams {
        &self.params
    }

    /// Produce both streams for one day, sorted then misplaced.
    pub fn compose(&self, rng: &mut SimRng, schedule: &DaySchedule) -> DayBatch {
        let mut batch = self.assemble(rng, schedule);

        for direction in Direction::BOTH {
            batch.stream_mut(direction).sort_by_key(|e| e.ts);
        }
        for direction in Direction::BOTH {
            apply_misplacements(
                rng,
                batch.stream_mut(direction),
                self.params.misplace_per_day,
                self.params.misplace_max_offset,
            );
        }

        debug!(
            day = %schedule.day,
            incoming = batch.incoming.len(),
            outgoing = batch.outgoing.len(),
            commuter = batch.stats.commuter.total(),
            chilled = batch.stats.chilled.total(),
            smuggler = batch.stats.smuggler.total(),
            "composed day"
        );
        batch
    }

    /// Steps ① to ⑤: both streams in insertion order, unsorted.
    pub(crate) fn assemble(&self, rng: &mut SimRng, schedule: &DaySchedule) -> DayBatch {
        let start = schedule.day_start;
        let mut batch = DayBatch {
            day:      schedule.day,
            incoming: self.baseline(rng, start, schedule.incoming_target),
            outgoing: Vec::new(),
            stats:    DayStats::default(),
        };
        batch.outgoing = self.baseline(rng, start, schedule.outgoing_target);
        batch.stats.baseline = SourceCounts {
            incoming: batch.incoming.len(),
            outgoing: batch.outgoing.len(),
        };

        if is_weekday(schedule.day) {
            batch.stats.commuter = self.inject_commuters(rng, start, &mut batch);
        }
        let (chilled, active_chilled) = self.inject_roaming(rng, start, &self.pools.chilled, &mut batch);
        batch.stats.chilled = chilled;
        batch.stats.active_chilled = active_chilled;
        let (smuggler, active_smugglers) = self.inject_roaming(rng, start, &self.pools.smugglers, &mut batch);
        batch.stats.smuggler = smuggler;
        batch.stats.active_smugglers = active_smugglers;
        batch
    }

    /// `n` independent rows.  Draws, each over all rows before the next:
    /// countries, plates, vehicle types, colours, brands, crossings, times.
    pub(crate) fn baseline(&self, rng: &mut SimRng, start: DateTime<Utc>, n: usize) -> Vec<CrossingEvent> {
        let countries: Vec<&'static str> = (0..n).map(|_| self.countries.draw(rng)).collect();
        let plates: Vec<String> = countries.iter().map(|cc| identity::plate(rng, cc)).collect();
        let types: Vec<VehicleType> = (0..n).map(|_| self.vehicle_types.draw(rng)).collect();
        let colours: Vec<Colour> = (0..n).map(|_| identity::colour(rng)).collect();
        let brands: Vec<&'static str> = types.iter().map(|&vt| identity::brand(rng, vt)).collect();
        let locations: Vec<&'static str> = countries.iter().map(|cc| identity::crossing(rng, cc)).collect();
        let secs = sequential_seconds(rng, n);

        countries
            .into_iter()
            .zip(plates)
            .zip(types)
            .zip(colours)
            .zip(brands)
            .zip(locations)
            .zip(secs)
            .map(|((((((country, plate), vehicle_type), colour), brand), location), s)| CrossingEvent {
                ts: at_offset(start, s),
                identity: VehicleIdentity { country, plate, vehicle_type, colour, brand },
                location,
            })
            .collect()
    }

    /// Morning IN and evening OUT for every commuter, each independently
    /// dropped.  Draws: all IN times, all OUT times, all IN keeps, all OUT
    /// keeps, then one crossing per kept IN row and per kept OUT row.
    pub(crate) fn inject_commuters(&self, rng: &mut SimRng, start: DateTime<Utc>, batch: &mut DayBatch) -> SourceCounts {
        let members = &self.pools.commuters.members;
        let p = self.params.missing_prob;

        let in_secs: Vec<u32> = members.iter().map(|_| rng.gen_range(MORNING_WINDOW)).collect();
        let out_secs: Vec<u32> = members.iter().map(|_| rng.gen_range(EVENING_WINDOW)).collect();
        let keep_in: Vec<bool> = members.iter().map(|_| !rng.gen_bool(p)).collect();
        let keep_out: Vec<bool> = members.iter().map(|_| !rng.gen_bool(p)).collect();

        let mut counts = SourceCounts::default();
        for (direction, secs, keep) in [
            (Direction::Incoming, in_secs, keep_in),
            (Direction::Outgoing, out_secs, keep_out),
        ] {
            let kept = members.iter().zip(secs).zip(keep).filter(|(_, k)| *k);
            for ((member, s), _) in kept {
                let event = CrossingEvent {
                    ts:       at_offset(start, s),
                    identity: member.clone(),
                    location: identity::crossing(rng, member.country),
                };
                batch.stream_mut(direction).push(event);
                counts.bump(direction);
            }
        }
        counts
    }

    /// Chilled and smuggler injection.  Returns the row counts and the number
    /// of members active today.
    ///
    /// Draws: one activation per member; then per active member `k`, `k`
    /// times, `k` directions (smugglers only), and per event a drop check
    /// followed by a crossing if kept.
    pub(crate) fn inject_roaming(
        &self,
        rng:    &mut SimRng,
        start:  DateTime<Utc>,
        cohort: &StandoutCohort,
        batch:  &mut DayBatch,
    ) -> (SourceCounts, usize) {
        let mut counts = SourceCounts::default();
        let (Some(p_active), Some(k_range)) =
            (cohort.kind.activation_prob(), cohort.kind.events_per_activation())
        else {
            return (counts, 0);
        };
        if cohort.is_empty() {
            return (counts, 0);
        }

        let active: Vec<bool> = cohort.members.iter().map(|_| rng.gen_bool(p_active)).collect();
        let p_drop = self.params.missing_prob * cohort.kind.missing_factor();
        let mut active_count = 0;

        for (member, _) in cohort.members.iter().zip(active).filter(|(_, a)| *a) {
            active_count += 1;
            let k = rng.gen_range(k_range.clone()) as usize;
            let secs: Vec<u32> = (0..k).map(|_| rng.gen_range(0..SECONDS_PER_DAY)).collect();
            let directions = directions(rng, cohort.kind, k);

            for (s, direction) in secs.into_iter().zip(directions) {
                if rng.gen_bool(p_drop) {
                    continue;
                }
                let event = CrossingEvent {
                    ts:       at_offset(start, s),
                    identity: member.clone(),
                    location: identity::crossing(rng, member.country),
                };
                batch.stream_mut(direction).push(event);
                counts.bump(direction);
            }
        }
        (counts, active_count)
    }
}

/// Chilled trucks alternate IN, OUT, IN, …; smugglers pick each direction
/// with a fair coin.
fn directions(rng: &mut SimRng, kind: CohortKind, k: usize) -> Vec<Direction> {
    match kind {
        CohortKind::Smuggler => (0..k)
            .map(|_| if rng.gen_bool(0.5) { Direction::Incoming } else { Direction::Outgoing })
            .collect(),
        _ => (0..k)
            .map(|i| if i % 2 == 0 { Direction::Incoming } else { Direction::Outgoing })
            .collect(),
    }
}
