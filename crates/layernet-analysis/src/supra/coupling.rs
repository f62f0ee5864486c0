//! Inter-layer coupling policy.
//!
//! The coupling weight of the transition `t → t+1` is decided by the
//! earlier layer `t`:
//!
//! - fixed: `omega` for every transition;
//! - adaptive: `1.0` for years up to the regime-change year, otherwise the
//!   mean raw edge weight of layer `t`, or `1.0` if it has no edges.

use std::collections::BTreeMap;

use layernet_core::{SupraConfig, WeightedGraph};
use serde::Serialize;

/// One coupling step between consecutive layers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    /// Earlier year; its layer decides the coupling.
    pub from: i32,
    /// Next year present in the input.
    pub to: i32,
    /// Weight of every inter edge between the two layers.
    pub omega: f64,
}

/// Adaptive coupling contributed by `layer` (year `year`) to the next
/// transition. Uses raw, un-normalized weights.
#[must_use]
pub fn adaptive_omega(year: i32, layer: &WeightedGraph, regime_change_year: i32) -> f64 {
    if year <= regime_change_year {
        return 1.0;
    }
    layer.mean_weight().unwrap_or(1.0)
}

/// Coupling for every consecutive pair of years in `layers`, ascending.
#[must_use]
pub fn coupling_schedule(
    layers: &BTreeMap<i32, WeightedGraph>,
    config: &SupraConfig,
) -> Vec<Transition> {
    let years: Vec<(&i32, &WeightedGraph)> = layers.iter().collect();
    years
        .windows(2)
        .map(|pair| {
            let (&from, layer) = pair[0];
            let (&to, _) = pair[1];
            let omega = if config.adaptive_omega {
                adaptive_omega(from, layer, config.regime_change_year)
            } else {
                config.omega
            };
            Transition { from, to, omega }
        })
        .collect()
}
