//! Supra-graph construction.
//!
//! ## Steps
//!
//! 1. For each year (ascending), add `(label, year)` for every node of the
//!    layer, isolated ones included.
//! 2. Add every layer edge as an intra edge with weight `w / divisor`.
//! 3. Take the reference label set from the reference layer (earliest year
//!    unless configured otherwise).
//! 4. For each consecutive year pair, connect `(label, t)` to
//!    `(label, t+1)` for every reference label with the transition's
//!    coupling weight. A reference label absent from a layer still gets its
//!    `(label, year)` node so coupling is never skipped.

use std::collections::BTreeMap;

use layernet_core::{Error, ReferenceLayer, Result, SupraConfig, WeightedGraph};
use tracing::{debug, instrument, warn};

use super::coupling::coupling_schedule;
use super::{EdgeKind, SupraEdge, SupraGraph, SupraNode};

/// Build the supra-graph of `layers` under `config`.
///
/// # Errors
///
/// - [`Error::NoLayers`] if `layers` is empty.
/// - [`Error::MissingYear`] if the configured reference year is absent.
#[instrument(skip(layers, config), fields(layers = layers.len()))]
pub fn build_supragraph(
    layers: &BTreeMap<i32, WeightedGraph>,
    config: &SupraConfig,
) -> Result<SupraGraph> {
    let reference = reference_labels(layers, config.reference_layer)?;
    let divisor = config.weight_divisor();

    let mut supra = SupraGraph {
        years: layers.keys().copied().collect(),
        ..SupraGraph::default()
    };

    for (&year, layer) in layers {
        for label in layer.nodes() {
            supra.ensure_node(SupraNode::new(label, year));
        }
        for (u, v, w) in layer.edges() {
            let (a, _) = supra.ensure_node(SupraNode::new(u, year));
            let (b, _) = supra.ensure_node(SupraNode::new(v, year));
            supra.add_edge(
                a,
                b,
                SupraEdge {
                    weight: w / divisor,
                    kind: EdgeKind::Intra,
                },
            );
        }
        debug!(
            year,
            nodes = layer.node_count(),
            edges = layer.edge_count(),
            "layer added"
        );
    }

    let transitions = coupling_schedule(layers, config);
    for transition in &transitions {
        let mut created = 0_usize;
        for label in &reference {
            let (a, new_a) = supra.ensure_node(SupraNode::new(label.as_str(), transition.from));
            let (b, new_b) = supra.ensure_node(SupraNode::new(label.as_str(), transition.to));
            created += usize::from(new_a) + usize::from(new_b);
            supra.add_edge(
                a,
                b,
                SupraEdge {
                    weight: transition.omega,
                    kind: EdgeKind::Inter,
                },
            );
        }
        if created > 0 {
            warn!(
                from = transition.from,
                to = transition.to,
                created,
                "reference labels missing from layer; nodes created for coupling"
            );
        }
        debug!(
            from = transition.from,
            to = transition.to,
            omega = transition.omega,
            "layers coupled"
        );
    }
    supra.transitions = transitions;

    debug!(
        nodes = supra.node_count(),
        intra = supra.intra_edge_count(),
        inter = supra.inter_edge_count(),
        "supra-graph built"
    );
    Ok(supra)
}

/// Node labels of the reference layer, in that layer's order.
fn reference_labels(
    layers: &BTreeMap<i32, WeightedGraph>,
    reference: ReferenceLayer,
) -> Result<Vec<String>> {
    let layer = match reference {
        ReferenceLayer::Earliest => layers.values().next().ok_or(Error::NoLayers)?,
        ReferenceLayer::Year(year) => {
            if layers.is_empty() {
                return Err(Error::NoLayers);
            }
            layers.get(&year).ok_or(Error::MissingYear(year))?
        }
    };
    Ok(layer.nodes().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(nodes: &[&str], edges: &[(&str, &str, f64)]) -> WeightedGraph {
        let mut g = WeightedGraph::with_nodes(nodes.iter().copied());
        for (u, v, w) in edges {
            g.add_edge(u, v, *w).expect("edge");
        }
        g
    }

    #[test]
    fn empty_input_is_an_error() {
        let layers = BTreeMap::new();
        assert_eq!(
            build_supragraph(&layers, &SupraConfig::new(false)).expect_err("empty"),
            Error::NoLayers
        );
    }

    #[test]
    fn missing_reference_year_is_an_error() {
        let mut layers = BTreeMap::new();
        layers.insert(1995, layer(&["A"], &[]));
        let config = SupraConfig::new(false).with_reference_layer(ReferenceLayer::Year(1990));
        assert_eq!(
            build_supragraph(&layers, &config).expect_err("missing year"),
            Error::MissingYear(1990)
        );
    }

    #[test]
    fn explicit_reference_year_drives_coupling() {
        let mut layers = BTreeMap::new();
        layers.insert(1990, layer(&["A"], &[]));
        layers.insert(1991, layer(&["A", "B"], &[]));
        let config = SupraConfig::new(false).with_reference_layer(ReferenceLayer::Year(1991));
        let supra = build_supragraph(&layers, &config).expect("build");
        assert_eq!(supra.inter_edge_count(), 2);
        assert!(supra.contains_node("B", 1990), "created for coupling");
    }

    #[test]
    fn intra_weights_are_divided() {
        let mut layers = BTreeMap::new();
        layers.insert(2000, layer(&["A", "B"], &[("A", "B", 189.0)]));
        let supra = build_supragraph(&layers, &SupraConfig::new(true)).expect("build");
        let edge = supra
            .edge(&SupraNode::new("A", 2000), &SupraNode::new("B", 2000))
            .expect("intra edge");
        assert_eq!(edge.kind, EdgeKind::Intra);
        assert!((edge.weight - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_layer_has_only_intra_edges() {
        let mut layers = BTreeMap::new();
        layers.insert(2000, layer(&["A", "B", "C"], &[("A", "B", 3.0)]));
        let supra = build_supragraph(&layers, &SupraConfig::new(false)).expect("build");
        assert_eq!(supra.node_count(), 3);
        assert_eq!(supra.intra_edge_count(), 1);
        assert_eq!(supra.inter_edge_count(), 0);
        assert!(supra.transitions().is_empty());
    }
}
