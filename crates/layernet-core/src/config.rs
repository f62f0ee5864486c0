//! Analysis configuration: backbone significance and supra-graph coupling.
//!
//! Loaded from a TOML file with one section per stage:
//!
//! ```toml
//! [backbone]
//! alpha = 0.05
//! trial_count = "exact"
//!
//! [supra]
//! normalize_weights = true
//! adaptive_omega = true
//! omega = 1.0
//! normalization_divisor = 189.0
//! regime_change_year = 2001
//! reference_layer = "earliest"   # or { year = 1990 }
//! ```
//!
//! `supra.normalize_weights` has no default and must be stated.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerNetConfig {
    /// `[backbone]`, optional.
    #[serde(default)]
    pub backbone: BackboneConfig,
    /// `[supra]`, required for `normalize_weights`.
    pub supra: SupraConfig,
}

impl LayerNetConfig {
    #[must_use]
    pub fn new(backbone: BackboneConfig, supra: SupraConfig) -> Self {
        Self { backbone, supra }
    }
}

// ---------------------------------------------------------------------------
// Backbone
// ---------------------------------------------------------------------------

/// How the total network weight `W` is used as the binomial trial count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialCount {
    /// Pass `W` unchanged, fractional or not.
    #[default]
    Exact,
    /// Round `W` half-to-even before testing.
    Rounded,
}

impl TrialCount {
    /// Trial count to use for a network of total weight `total`.
    #[must_use]
    pub fn resolve(self, total: f64) -> f64 {
        match self {
            Self::Exact => total,
            Self::Rounded => total.round_ties_even(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackboneConfig {
    /// Significance level; edges with p-value `< alpha` are kept.
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// How `W` becomes the binomial trial count.
    #[serde(default)]
    pub trial_count: TrialCount,
}

impl Default for BackboneConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            trial_count: TrialCount::default(),
        }
    }
}

impl BackboneConfig {
    #[must_use]
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_trial_count(mut self, trial_count: TrialCount) -> Self {
        self.trial_count = trial_count;
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidAlpha`] unless `alpha` is finite and in `[0, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.alpha.is_finite() && (0.0..=1.0).contains(&self.alpha) {
            Ok(())
        } else {
            Err(Error::InvalidAlpha(self.alpha))
        }
    }
}

// ---------------------------------------------------------------------------
// Supra-graph
// ---------------------------------------------------------------------------

/// Which layer supplies the node set used for inter-layer coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLayer {
    /// The earliest year present.
    #[default]
    Earliest,
    /// A fixed year, which must be present.
    Year(i32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupraConfig {
    /// Fixed inter-layer coupling, used only when `adaptive_omega` is off.
    #[serde(default = "default_omega")]
    pub omega: f64,
    /// Divide intra-layer weights by `normalization_divisor`.
    pub normalize_weights: bool,
    /// Derive coupling per year instead of using `omega`.
    #[serde(default = "default_true")]
    pub adaptive_omega: bool,
    /// Ceiling used for normalization (largest weight in the reference data).
    #[serde(default = "default_normalization_divisor")]
    pub normalization_divisor: f64,
    /// Years up to and including this one couple with weight 1.0 under
    /// adaptive omega.
    #[serde(default = "default_regime_change_year")]
    pub regime_change_year: i32,
    /// Layer whose labels are coupled across every transition.
    #[serde(default)]
    pub reference_layer: ReferenceLayer,
}

impl SupraConfig {
    /// Adaptive coupling, default constants, explicit normalization choice.
    #[must_use]
    pub fn new(normalize_weights: bool) -> Self {
        Self {
            omega: default_omega(),
            normalize_weights,
            adaptive_omega: true,
            normalization_divisor: default_normalization_divisor(),
            regime_change_year: default_regime_change_year(),
            reference_layer: ReferenceLayer::default(),
        }
    }

    /// Switch to a fixed coupling weight.
    #[must_use]
    pub const fn with_fixed_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self.adaptive_omega = false;
        self
    }

    #[must_use]
    pub const fn with_normalization_divisor(mut self, divisor: f64) -> Self {
        self.normalization_divisor = divisor;
        self
    }

    #[must_use]
    pub const fn with_regime_change_year(mut self, year: i32) -> Self {
        self.regime_change_year = year;
        self
    }

    #[must_use]
    pub const fn with_reference_layer(mut self, reference: ReferenceLayer) -> Self {
        self.reference_layer = reference;
        self
    }

    /// Divisor applied to intra-layer weights: the normalization ceiling
    /// when normalizing, `1.0` otherwise.
    #[must_use]
    pub fn weight_divisor(&self) -> f64 {
        if self.normalize_weights {
            self.normalization_divisor
        } else {
            1.0
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a configuration document.
///
/// # Errors
///
/// Returns an error on TOML syntax errors, a missing
/// `supra.normalize_weights`, or out-of-domain values.
pub fn parse_config(content: &str) -> Result<LayerNetConfig> {
    let config: LayerNetConfig = toml::from_str(content).context("Failed to parse config")?;
    check(&config)?;
    Ok(config)
}

/// Load the configuration at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if a value is
/// out of domain.
pub fn load_config(path: &Path) -> Result<LayerNetConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: LayerNetConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    check(&config).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

fn check(config: &LayerNetConfig) -> Result<()> {
    config.backbone.validate()?;
    ensure!(
        config.supra.omega.is_finite(),
        "supra.omega must be finite, got {}",
        config.supra.omega
    );
    ensure!(
        config.supra.normalization_divisor.is_finite() && config.supra.normalization_divisor > 0.0,
        "supra.normalization_divisor must be positive, got {}",
        config.supra.normalization_divisor
    );
    Ok(())
}

const fn default_true() -> bool {
    true
}

const fn default_alpha() -> f64 {
    0.05
}

const fn default_omega() -> f64 {
    1.0
}

const fn default_normalization_divisor() -> f64 {
    189.0
}

const fn default_regime_change_year() -> i32 {
    2001
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_document_uses_defaults() {
        let config = parse_config("[supra]\nnormalize_weights = false\n").expect("parse");
        assert_eq!(config.backbone, BackboneConfig::default());
        assert_eq!(config.supra, SupraConfig::new(false));
        assert!((config.supra.normalization_divisor - 189.0).abs() < f64::EPSILON);
        assert_eq!(config.supra.regime_change_year, 2001);
        assert!(config.supra.adaptive_omega);
    }

    #[test]
    fn normalize_weights_is_required() {
        let err = parse_config("[supra]\nomega = 2.0\n").expect_err("missing field");
        assert!(format!("{err:#}").contains("normalize_weights"));
    }

    #[test]
    fn reference_layer_variants_parse() {
        let config = parse_config(
            "[supra]\nnormalize_weights = true\nreference_layer = { year = 1990 }\n",
        )
        .expect("parse");
        assert_eq!(config.supra.reference_layer, ReferenceLayer::Year(1990));

        let config =
            parse_config("[supra]\nnormalize_weights = true\nreference_layer = \"earliest\"\n")
                .expect("parse");
        assert_eq!(config.supra.reference_layer, ReferenceLayer::Earliest);
    }

    #[test]
    fn trial_count_parses_and_resolves() {
        let config = parse_config(
            "[backbone]\nalpha = 0.01\ntrial_count = \"rounded\"\n[supra]\nnormalize_weights = false\n",
        )
        .expect("parse");
        assert_eq!(config.backbone.trial_count, TrialCount::Rounded);
        assert!((TrialCount::Rounded.resolve(7.5) - 8.0).abs() < f64::EPSILON);
        assert!((TrialCount::Rounded.resolve(6.5) - 6.0).abs() < f64::EPSILON);
        assert!((TrialCount::Exact.resolve(7.5) - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_alpha_is_rejected() {
        let err = parse_config("[backbone]\nalpha = 1.5\n[supra]\nnormalize_weights = false\n")
            .expect_err("bad alpha");
        assert!(format!("{err:#}").contains("alpha"));
    }

    #[test]
    fn non_positive_divisor_is_rejected() {
        assert!(
            parse_config("[supra]\nnormalize_weights = true\nnormalization_divisor = 0.0\n")
                .is_err()
        );
    }

    #[test]
    fn weight_divisor_follows_normalize_flag() {
        assert!((SupraConfig::new(true).weight_divisor() - 189.0).abs() < f64::EPSILON);
        assert!((SupraConfig::new(false).weight_divisor() - 1.0).abs() < f64::EPSILON);
        let custom = SupraConfig::new(true).with_normalization_divisor(10.0);
        assert!((custom.weight_divisor() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("layernet.toml");
        std::fs::write(
            &path,
            "[backbone]\nalpha = 0.01\n[supra]\nnormalize_weights = true\nadaptive_omega = false\nomega = 0.5\n",
        )
        .expect("write config");

        let config = load_config(&path).expect("load");
        assert!((config.backbone.alpha - 0.01).abs() < f64::EPSILON);
        assert!(config.supra.normalize_weights);
        assert!(!config.supra.adaptive_omega);
        assert!((config.supra.omega - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_is_exactly_the_file() {
        let doc = "[backbone]\nalpha = 0.2\ntrial_count = \"rounded\"\n[supra]\nnormalize_weights = false\n";
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("layernet.toml");
        std::fs::write(&path, doc).expect("write config");

        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, parse_config(doc).expect("parse"));
        assert!((loaded.backbone.alpha - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let err = load_config(&path).expect_err("missing");
        assert!(format!("{err:#}").contains("Failed to read"));
    }
}
