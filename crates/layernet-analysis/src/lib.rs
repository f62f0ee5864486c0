#![forbid(unsafe_code)]
//! layernet-analysis library.
//!
//! - [`backbone`]: noise-corrected backbone of a weighted projection
//!   (binomial test against a strength-preserving null model).
//! - [`supra`]: temporal supra-graph from per-year layers with
//!   configurable normalization and inter-layer coupling.
//! - [`pipeline`]: yearly matrices through both stages.
//!
//! # Conventions
//!
//! - **Errors**: `layernet_core::Error` from the algorithms; `anyhow::Result`
//!   from the pipeline.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod backbone;
pub mod pipeline;
pub mod supra;

pub use backbone::{ScoredEdge, extract_backbone, extract_backbone_with, score_edges};
pub use pipeline::{PipelineOutput, run_pipeline};
pub use supra::{
    EdgeKind, SupraEdge, SupraGraph, SupraNode, SupraStats, Transition, build_supragraph,
    coupling_schedule,
};
