//! Parameter types configuring the segmentation stages.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Knobs for the plane-fit, classification and clustering stages.
///
/// Defaults match a tabletop scan at metre scale with ~2 cm resolution.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerParams {
    /// Fraction of the lowest points (by y) used to fit the base plane, in [0, 1].
    pub base_height_percentile: f64,
    /// Maximum |signed distance| to the plane for a point to count as base (> 0).
    pub base_distance_threshold: f64,
    /// Neighbourhood radius in the XZ projection for clustering (> 0).
    pub cluster_radius: f64,
    /// Minimum neighbourhood size (the point itself included) to seed a cluster (>= 1).
    pub min_samples: usize,
}

impl Default for AnalyzerParams {
    fn default() -> Self {
        Self {
            base_height_percentile: 0.15,
            base_distance_threshold: 0.01,
            cluster_radius: 0.08,
            min_samples: 5,
        }
    }
}

impl AnalyzerParams {
    /// Rejects out-of-range parameters. Called once at construction.
    pub fn validate(&self) -> Result<(), Error> {
        if !(0.0..=1.0).contains(&self.base_height_percentile)
            || !self.base_height_percentile.is_finite()
        {
            return Err(Error::InvalidConfig(format!(
                "base_height_percentile must be in [0, 1], got {}",
                self.base_height_percentile
            )));
        }
        if !(self.base_distance_threshold > 0.0) || !self.base_distance_threshold.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "base_distance_threshold must be positive, got {}",
                self.base_distance_threshold
            )));
        }
        if !(self.cluster_radius > 0.0) || !self.cluster_radius.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "cluster_radius must be positive, got {}",
                self.cluster_radius
            )));
        }
        if self.min_samples < 1 {
            return Err(Error::InvalidConfig(
                "min_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
