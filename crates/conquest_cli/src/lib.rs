//! # Conquest Console Runner
//!
//! Startup and shutdown around the game core:
//! - Load a scenario (RON) or use the built-in frontier board
//! - Build the registries and issue one attack
//! - Print the attempt, dice and result
//! - Release everything before exit

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod runner;
pub mod scenario;

pub use runner::{run_scenario, RunError, RunReport};
pub use scenario::{PlannedAttack, Scenario, ScenarioError};
