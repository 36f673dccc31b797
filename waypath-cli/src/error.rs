//! Error types emitted by the Waypath CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use waypath_core::{CoordinateMapError, LabelTableError, PlanError};

/// Errors emitted by the Waypath CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// An input file could not be opened.
    #[error("failed to open {field} file at {path:?}: {source}")]
    OpenInput {
        /// Flag naming the input.
        field: &'static str,
        /// Path as configured.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The coordinate mapping could not be decoded.
    #[error("failed to parse landmarks at {path:?}: {source}")]
    ParseLandmarks {
        /// Landmarks file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: CoordinateMapError,
    },
    /// The label table could not be decoded.
    #[error("failed to parse labels at {path:?}: {source}")]
    ParseLabels {
        /// Labels file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: LabelTableError,
    },
    /// The plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        /// Request file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// `--labels` named a variant the table does not contain.
    #[error("label table {path:?} has no variant {variant:?}")]
    UnknownVariant {
        /// Labels file.
        path: Utf8PathBuf,
        /// Requested variant key.
        variant: String,
    },
    /// The planner rejected the request.
    #[error("planning failed: {source}")]
    Plan {
        /// Planner failure.
        #[source]
        source: PlanError,
    },
    /// Serialising the plan output failed.
    #[error("failed to serialise plan output: {0}")]
    SerialisePlanOutput(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}
