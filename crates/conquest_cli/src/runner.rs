//! One scripted console run.
//!
//! Builds the scenario, announces the attack, resolves it if it is valid and
//! releases every registry before returning. Report lines go to the supplied
//! writer; they are meant for people, not parsers.

use std::io::{self, Write};

use conquest_core::combat::{AttackReport, CombatResult};
use conquest_core::dice::DiceRoller;
use conquest_core::error::WarError;
use conquest_core::lifecycle::ReleaseSummary;
use thiserror::Error;
use tracing::info;

use crate::scenario::{Scenario, ScenarioError};

/// Error type for a console run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The scenario could not be loaded or built.
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    /// The core rejected an operation.
    #[error("Game error: {0}")]
    Game(#[from] WarError),
    /// Writing the report failed.
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Scenario that was played.
    pub scenario: String,
    /// What happened to the attack.
    pub attack: AttackReport,
    /// What the final release freed.
    pub release: ReleaseSummary,
}

/// Play `scenario` once with `dice`, writing the report to `out`.
///
/// # Errors
///
/// Returns [`RunError`] if the scenario cannot be built, the core fails, or
/// `out` cannot be written.
pub fn run_scenario<D, W>(
    scenario: &Scenario,
    dice: &mut D,
    out: &mut W,
) -> Result<RunReport, RunError>
where
    D: DiceRoller + ?Sized,
    W: Write,
{
    info!("Starting scenario '{}'", scenario.name);
    let (mut campaign, plan) = scenario.build()?;

    let board = campaign.territories();
    let from_name = board.territory(plan.from)?.name().to_owned();
    let to_name = board.territory(plan.to)?.name().to_owned();
    writeln!(
        out,
        "Attack attempt from {from_name} to {to_name} by {}",
        plan.player
    )?;

    let attack = campaign.attack(plan.from, plan.to, plan.player, dice)?;
    match attack {
        AttackReport::Rejected(reason) => {
            writeln!(out, "Invalid attack: {reason}.")?;
        }
        AttackReport::Resolved(outcome) => {
            writeln!(out, "Valid attack. Resolving combat...")?;
            writeln!(
                out,
                "Attack roll: {} | defense roll: {}",
                outcome.rolls.attack, outcome.rolls.defend
            )?;
            match outcome.result {
                CombatResult::Conquered { new_owner } => {
                    writeln!(out, "Territory {to_name} conquered by {new_owner}!")?;
                }
                CombatResult::DefenderLostArmy { remaining } => {
                    writeln!(out, "{to_name} loses 1 army ({remaining} left)")?;
                }
                CombatResult::AttackerLostArmy { remaining } => {
                    writeln!(out, "{from_name} loses 1 army ({remaining} left)")?;
                }
            }
        }
    }

    let release = campaign.release();
    writeln!(
        out,
        "Released {} territories and {} missions. Shutting down.",
        release.territories, release.missions
    )?;

    Ok(RunReport {
        scenario: scenario.name.clone(),
        attack,
        release,
    })
}
