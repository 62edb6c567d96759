//! `bx-core` — foundational types for the border-crossing event generator.
//!
//! This crate is a dependency of every other `bx-*` crate.  It intentionally
//! has no `bx-*` dependencies and minimal external ones.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`rng`]         | `SimRng` (the single run-wide generator handle)           |
//! | [`dist`]        | `Discrete<T>` inverse-CDF weighted tables                 |
//! | [`vehicle`]     | `VehicleType`, `Colour`, brand and plate-letter tables    |
//! | [`country`]     | Country groups, crossing corridors, `to_iso1`             |
//! | [`event`]       | `VehicleIdentity`, `CrossingEvent`, `Direction`           |
//! | [`time`]        | Day-start and second-of-day helpers                       |
//! | [`config`]      | `SimConfig`                                               |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `SimConfig`.             |

pub mod config;
pub mod country;
pub mod dist;
pub mod error;
pub mod event;
pub mod rng;
pub mod time;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use dist::Discrete;
pub use error::{CoreError, CoreResult};
pub use event::{CrossingEvent, Direction, EVENT_COLUMNS, VehicleIdentity};
pub use rng::SimRng;
pub use vehicle::{Colour, VehicleType};
