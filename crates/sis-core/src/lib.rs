//! `sis-core` — foundational types for the `rust_sis` epidemic simulator.
//!
//! This crate is a dependency of every other `sis-*` crate.  It intentionally
//! has no `sis-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `RunId`                                    |
//! | [`time`]      | `Step` (daily step counter)                           |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (run-level)          |
//! | [`params`]    | `SimParams` and its validation                        |
//! | [`immunity`]  | `ImmunityModel` (exponential waning)                  |
//! | [`error`]     | `SisError`, `SisResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod immunity;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SisError, SisResult};
pub use ids::{AgentId, RunId};
pub use immunity::ImmunityModel;
pub use params::SimParams;
pub use rng::{AgentRng, SimRng};
pub use time::Step;
