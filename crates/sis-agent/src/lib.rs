//! `sis-agent` — Structure-of-Arrays population storage for `rust_sis`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`store`]   | `Health`, `Population` (SoA arrays), `AgentRngs`      |
//! | [`builder`] | `PopulationBuilder` (initial-infected seeding)        |

pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use store::{AgentRngs, Health, Population, NEVER_RECOVERED};
