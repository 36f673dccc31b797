//! Plan command implementation for the Waypath CLI.

use std::collections::BTreeMap;
use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waypath_core::{CoordinateMap, LabelTable, PlanRequest, PlanResponse, Planner};
use waypath_planner::{
    DEFAULT_SHORTCUT_WEIGHT, GreedyPlanner, GreedyPlannerConfig, PlanningMode,
};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_PLAN_LABELS, ARG_PLAN_LANDMARKS, ARG_PLAN_MODE, ARG_PLAN_REFINE, ARG_PLAN_REQUEST,
    ARG_PLAN_SHORTCUT_WEIGHT, ARG_PLAN_VARIANT, CliError, ENV_PLAN_LABELS, ENV_PLAN_LANDMARKS,
    ENV_PLAN_REQUEST, ENV_PLAN_VARIANT,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the targets of a JSON-encoded PlanRequest into a short \
                 open route. Coordinates come from a landmarks mapping of \
                 waypoint names to [x, y] pixel positions; an optional label \
                 table annotates each stop for one map variant.",
    about = "Plan a route through target waypoints"
)]
#[ortho_config(prefix = "WAYPATH")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the landmarks coordinate mapping.
    #[arg(long = ARG_PLAN_LANDMARKS, value_name = "path")]
    #[serde(default)]
    pub(crate) landmarks: Option<Utf8PathBuf>,
    /// Path to a variant-keyed label table.
    #[arg(long = ARG_PLAN_LABELS, value_name = "path")]
    #[serde(default)]
    pub(crate) labels: Option<Utf8PathBuf>,
    /// Map variant whose labels annotate the route.
    #[arg(long = ARG_PLAN_VARIANT, value_name = "key")]
    #[serde(default)]
    pub(crate) variant: Option<String>,
    /// Weight given to every shortcut edge.
    #[arg(long = ARG_PLAN_SHORTCUT_WEIGHT, value_name = "weight")]
    #[serde(default)]
    pub(crate) shortcut_weight: Option<f64>,
    /// Leg weighting: `direct` or `shortest-path`.
    #[arg(long = ARG_PLAN_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<PlanningMode>,
    /// Improve the greedy route with 2-opt.
    #[arg(long = ARG_PLAN_REFINE)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub(crate) refine: bool,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Label table path paired with the variant to read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LabelSource {
    pub(crate) path: Utf8PathBuf,
    pub(crate) variant: String,
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the coordinate mapping.
    pub(crate) landmarks: Utf8PathBuf,
    /// Optional label annotation.
    pub(crate) labels: Option<LabelSource>,
    /// Planner tunables.
    pub(crate) planner: GreedyPlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.landmarks, ARG_PLAN_LANDMARKS)?;
        if let Some(labels) = &self.labels {
            Self::require_existing(&labels.path, ARG_PLAN_LABELS)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let landmarks = args.landmarks.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_LANDMARKS,
            env: ENV_PLAN_LANDMARKS,
        })?;
        let labels = match (args.labels, args.variant) {
            (Some(path), Some(variant)) => Some(LabelSource { path, variant }),
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLAN_VARIANT,
                    env: ENV_PLAN_VARIANT,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLAN_LABELS,
                    env: ENV_PLAN_LABELS,
                });
            }
            (None, None) => None,
        };
        let planner = GreedyPlannerConfig {
            shortcut_weight: args.shortcut_weight.unwrap_or(DEFAULT_SHORTCUT_WEIGHT),
            mode: args.mode.unwrap_or_default(),
            refine: args.refine,
        };

        Ok(Self {
            request_path,
            landmarks,
            labels,
            planner,
        })
    }
}

/// JSON document printed by `plan`.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    #[serde(flatten)]
    response: &'a PlanResponse,
    /// Labels of the route's stops for the requested variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<BTreeMap<&'a str, &'a str>>,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_plan(&config, writer)
}

pub(super) fn execute_plan(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let request = load_plan_request(&config.request_path)?;
    let store = load_landmarks(&config.landmarks)?;
    let labels = config
        .labels
        .as_ref()
        .map(|source| load_labels(&source.path).map(|table| (source, table)))
        .transpose()?;

    let planner = GreedyPlanner::with_config(store, config.planner);
    let response = planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })?;
    log::info!(
        "route through {} targets: {}",
        response.route.len(),
        response.route
    );

    let stop_labels = labels
        .as_ref()
        .map(|(source, table)| route_labels(&response, source, table))
        .transpose()?;
    write_plan_output(
        writer,
        &PlanOutput {
            response: &response,
            labels: stop_labels,
        },
    )
}

fn route_labels<'a>(
    response: &'a PlanResponse,
    source: &LabelSource,
    table: &'a LabelTable,
) -> Result<BTreeMap<&'a str, &'a str>, CliError> {
    let labels = table
        .labels_for(&source.variant)
        .ok_or_else(|| CliError::UnknownVariant {
            path: source.path.clone(),
            variant: source.variant.clone(),
        })?;
    Ok(response
        .route
        .waypoints()
        .iter()
        .filter_map(|stop| {
            labels
                .get(stop)
                .map(|label| (stop.as_str(), label.as_str()))
        })
        .collect())
}

fn open_input(path: &Utf8Path, field: &'static str) -> Result<impl std::io::Read, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let reader = open_input(path, ARG_PLAN_REQUEST)?;
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the landmarks coordinate mapping from disk.
pub(super) fn load_landmarks(path: &Utf8Path) -> Result<CoordinateMap, CliError> {
    let reader = open_input(path, ARG_PLAN_LANDMARKS)?;
    CoordinateMap::from_json_reader(reader).map_err(|source| CliError::ParseLandmarks {
        path: path.to_path_buf(),
        source,
    })
}

fn load_labels(path: &Utf8Path) -> Result<LabelTable, CliError> {
    let reader = open_input(path, ARG_PLAN_LABELS)?;
    LabelTable::from_json_reader(reader).map_err(|source| CliError::ParseLabels {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_output(writer: &mut dyn Write, output: &PlanOutput<'_>) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialisePlanOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer.write_all(b"\n").map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
