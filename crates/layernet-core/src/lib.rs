#![forbid(unsafe_code)]
//! layernet-core library.
//!
//! Data model shared by the backbone filter and the supra-graph builder:
//! dense label-indexed adjacency matrices, sparse edge records, per-year
//! weighted layers and bipartite incidence matrices.
//!
//! # Conventions
//!
//! - **Errors**: Typed [`Error`] for input validation; `anyhow::Result` at
//!   I/O boundaries (configuration loading).
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod codec;
pub mod config;
pub mod error;
pub mod model;

pub use codec::to_edge_list;
pub use config::{
    BackboneConfig, LayerNetConfig, ReferenceLayer, SupraConfig, TrialCount, load_config,
};
pub use error::{Error, Result};
pub use model::{AdjacencyMatrix, EdgeRecord, IncidenceMatrix, Projection, WeightedGraph};
