//! Command-line interface for the Waypath route planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_LANDMARKS: &str = "landmarks";
pub(crate) const ARG_PLAN_LABELS: &str = "labels";
pub(crate) const ARG_PLAN_VARIANT: &str = "variant";
pub(crate) const ARG_PLAN_SHORTCUT_WEIGHT: &str = "shortcut-weight";
pub(crate) const ARG_PLAN_MODE: &str = "mode";
pub(crate) const ARG_PLAN_REFINE: &str = "refine";
pub(crate) const ENV_PLAN_REQUEST: &str = "WAYPATH_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_PLAN_LANDMARKS: &str = "WAYPATH_CMDS_PLAN_LANDMARKS";
pub(crate) const ENV_PLAN_LABELS: &str = "WAYPATH_CMDS_PLAN_LABELS";
pub(crate) const ENV_PLAN_VARIANT: &str = "WAYPATH_CMDS_PLAN_VARIANT";

/// Run the Waypath CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waypath",
    about = "Plan short routes through named map waypoints",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a set of target waypoints into a short open route.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
