//! Yearly projections → backbones → layers → supra-graph.
//!
//! Each year is filtered independently; only the final coupling step looks
//! across years. Every label of a year's projection becomes a node of that
//! layer, whether or not any of its edges survive the filter.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use layernet_core::{AdjacencyMatrix, EdgeRecord, LayerNetConfig, WeightedGraph};
use tracing::{info, instrument};

use crate::backbone::extract_backbone_with;
use crate::supra::{SupraGraph, build_supragraph};

/// Everything the pipeline produced, keyed by year.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Significant edges per year, in edge-list order.
    pub backbones: BTreeMap<i32, Vec<EdgeRecord>>,
    /// Per-year layers: every projection label plus the backbone edges.
    pub layers: BTreeMap<i32, WeightedGraph>,
    /// All layers stitched together.
    pub supra: SupraGraph,
}

/// Run backbone extraction per year and stitch the resulting layers.
///
/// # Errors
///
/// Returns an error if the backbone configuration is invalid, if a layer
/// cannot be assembled, or if supra-graph construction fails (no years,
/// missing reference year).
#[instrument(skip_all, fields(years = yearly.len()))]
pub fn run_pipeline(
    yearly: &BTreeMap<i32, AdjacencyMatrix>,
    config: &LayerNetConfig,
) -> Result<PipelineOutput> {
    let mut backbones = BTreeMap::new();
    let mut layers = BTreeMap::new();

    for (&year, matrix) in yearly {
        let backbone = extract_backbone_with(matrix, &config.backbone)
            .with_context(|| format!("backbone extraction for {year}"))?;
        let layer = WeightedGraph::from_edge_records(matrix.labels().iter().cloned(), &backbone)
            .with_context(|| format!("layer assembly for {year}"))?;
        info!(
            year,
            nodes = layer.node_count(),
            kept = backbone.len(),
            "layer ready"
        );
        backbones.insert(year, backbone);
        layers.insert(year, layer);
    }

    let supra = build_supragraph(&layers, &config.supra).context("supra-graph construction")?;
    info!(
        nodes = supra.node_count(),
        edges = supra.edge_count(),
        "pipeline complete"
    );

    Ok(PipelineOutput {
        backbones,
        layers,
        supra,
    })
}
