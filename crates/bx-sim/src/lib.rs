//! `bx-sim` — the border-crossing event engine.
//!
//! # Day loop
//!
//! ```text
//! build:  CountryWeights → commuter pool → chilled pool → smuggler pool
//! for day in start_date .. start_date + total_days:
//!   ① Schedule  — jittered incoming / outgoing targets
//!   ② Compose   — baseline IN, baseline OUT, commuters (Mon–Fri),
//!                 chilled, smugglers; stable sort by timestamp
//!   ③ Misplace  — bounded positional swaps, IN then OUT
//!   ④ Encode    — single-letter country codes on country and plate
//!   ⑤ Observer  — `on_day(&DayBatch)`
//! ```
//!
//! Every component takes the run's `&mut SimRng` explicitly; the order above
//! is the draw order, so a fixed seed reproduces the dataset exactly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bx_core::SimConfig;
//! use bx_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod codec;
pub mod cohort;
pub mod compose;
pub mod error;
pub mod identity;
pub mod misplace;
pub mod observer;
pub mod schedule;
pub mod sim;
pub mod weights;


pub use arrivals::sequential_seconds;
pub use builder::SimBuilder;
pub use codec::{encode_event, encode_stream};
pub use cohort::{CohortKind, StandoutCohort, StandoutPools};
pub use compose::{ComposeParams, DailyComposer, DayBatch, DayStats, SourceCounts};
pub use error::{SimError, SimResult};
pub use misplace::apply_misplacements;
pub use observer::{NoopObserver, SimObserver};
pub use schedule::DaySchedule;
pub use sim::Sim;
pub use weights::CountryWeights;
