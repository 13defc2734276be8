//! Scene segmentation over a store snapshot.
//!
//! Overview
//! - Fits the dominant supporting plane to the lowest `base_height_percentile`
//!   slice of the cloud (centroid + covariance + smallest-variance axis).
//! - Classifies every point as base or object candidate by its signed
//!   distance to that plane.
//! - Clusters the candidates by density reachability on their XZ footprint;
//!   candidates no cluster absorbs are demoted back to the base label rather
//!   than reported as singleton objects.
//! - Summarises each cluster as a labelled object with a point count and an
//!   axis-aligned bounding box.
//!
//! Labels are assigned fresh on every call and carry no identity across
//! calls. The analyzer never mutates the store; it only reads the snapshot it
//! is handed.
//!
//! Modules
//! - [`params`] – configuration for all stages.
//! - `plane` – quantile slicing and the 3x3 symmetric eigen-solve.
//! - `cluster` – DBSCAN-style clustering with a grid-bucket neighbour index.
//! - `objects` – per-label bounding-box aggregation.

pub mod params;

mod cluster;
mod objects;
mod plane;

pub use params::AnalyzerParams;

use log::debug;

use crate::error::Error;
use crate::types::{PointSample, Segmentation, SegmentedPoint};

/// Segments a point cloud into a base plane and discrete objects.
#[derive(Clone, Copy, Debug)]
pub struct Analyzer {
    params: AnalyzerParams,
}

impl Analyzer {
    /// Builds an analyzer, rejecting out-of-range parameters.
    pub fn new(params: AnalyzerParams) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    /// Runs the full pipeline: plane fit, base classification, clustering,
    /// object summaries.
    ///
    /// Fewer than 3 points cannot define a plane; such input (the empty
    /// snapshot included) yields the points echoed with the base label, no
    /// objects and no plane.
    pub fn analyze(&self, points: &[PointSample]) -> Segmentation {
        let Some(plane) = plane::fit_base_plane(points, self.params.base_height_percentile)
        else {
            debug!("analyze: {} points, insufficient for a plane fit", points.len());
            return Segmentation {
                points: label_points(points, |_| 0),
                objects: Vec::new(),
                plane: None,
            };
        };

        // Base vs object candidate, by distance to the fitted plane.
        let is_base: Vec<bool> = points
            .iter()
            .map(|p| plane.signed_distance(&p.position()).abs() < self.params.base_distance_threshold)
            .collect();

        // Cluster only the candidates, on their XZ footprint.
        let candidate_idx: Vec<usize> = (0..points.len()).filter(|&i| !is_base[i]).collect();
        let coords: Vec<[f64; 2]> = candidate_idx
            .iter()
            .map(|&i| [points[i].x, points[i].z])
            .collect();
        let cluster_labels = cluster::cluster_xz(
            &coords,
            self.params.cluster_radius,
            self.params.min_samples,
        );

        // Global label space: 0 = base/noise, 1..=K = clusters.
        let mut labels = vec![0u32; points.len()];
        for (&i, cluster) in candidate_idx.iter().zip(&cluster_labels) {
            if let Some(id) = cluster {
                labels[i] = id + 1;
            }
        }

        let objects = objects::summarize_objects(points, &labels);
        debug!(
            "analyze: {} points, {} candidates, {} objects",
            points.len(),
            candidate_idx.len(),
            objects.len()
        );

        Segmentation {
            points: label_points(points, |i| labels[i]),
            objects,
            plane: Some(plane),
        }
    }
}

fn label_points(points: &[PointSample], label: impl Fn(usize) -> u32) -> Vec<SegmentedPoint> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| SegmentedPoint {
            x: p.x,
            y: p.y,
            z: p.z,
            distance: p.distance,
            label: label(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, y: f64, z: f64) -> PointSample {
        PointSample { x, y, z, distance: 1.0 }
    }

    fn default_analyzer() -> Analyzer {
        Analyzer::new(AnalyzerParams::default()).expect("default params")
    }

    #[test]
    fn empty_input_is_a_defined_result() {
        let result = default_analyzer().analyze(&[]);
        assert!(result.points.is_empty());
        assert!(result.objects.is_empty());
        assert!(result.plane.is_none());
    }

    #[test]
    fn one_or_two_points_are_insufficient_data() {
        let analyzer = default_analyzer();
        for points in [
            vec![sample(0.0, 0.0, 0.0)],
            vec![sample(0.0, 0.0, 0.0), sample(1.0, 1.0, 1.0)],
        ] {
            let result = analyzer.analyze(&points);
            assert_eq!(result.points.len(), points.len());
            assert!(result.points.iter().all(|p| p.label == 0));
            assert!(result.objects.is_empty());
            assert!(result.plane.is_none());
        }
    }

    #[test]
    fn analysis_is_deterministic() {
        let mut points = Vec::new();
        for i in 0..8 {
            for j in 0..8 {
                points.push(sample(i as f64 * 0.1, 0.0, j as f64 * 0.1));
            }
        }
        for k in 0..5 {
            points.push(sample(0.35 + k as f64 * 0.005, 0.3, 0.35));
        }

        let analyzer = default_analyzer();
        let a = analyzer.analyze(&points);
        let b = analyzer.analyze(&points);
        let labels_a: Vec<u32> = a.points.iter().map(|p| p.label).collect();
        let labels_b: Vec<u32> = b.points.iter().map(|p| p.label).collect();
        assert_eq!(labels_a, labels_b);
        assert_eq!(a.objects.len(), b.objects.len());
    }

    #[test]
    fn isolated_stray_candidate_is_demoted_to_base() {
        let mut points = Vec::new();
        for i in 0..8 {
            for j in 0..8 {
                points.push(sample(i as f64 * 0.1, 0.0, j as f64 * 0.1));
            }
        }
        // One lone reading well above the plane, with no neighbours.
        points.push(sample(0.35, 0.4, 0.35));

        let result = default_analyzer().analyze(&points);
        assert!(result.objects.is_empty());
        assert!(result.points.iter().all(|p| p.label == 0));
    }
}
