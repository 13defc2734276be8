//! High-level facade tying the sample store to the analyzer.
//!
//! This is the boundary a transport layer (HTTP, CLI, scripts) talks to. It
//! validates samples before the store sees them, owns one store and one
//! analyzer per session, and attaches the configured display units to every
//! response. It knows nothing about any particular transport.

use log::debug;
use rand::Rng;

use crate::analyzer::Analyzer;
use crate::config::ServiceConfig;
use crate::error::Error;
use crate::store::{export_ply, SampleStore};
use crate::types::{Analysis, PointCloud, PointSample};

/// One mapping session: a sample store plus the analyzer over it.
#[derive(Debug)]
pub struct LaserService {
    config: ServiceConfig,
    store: SampleStore,
    analyzer: Analyzer,
}

impl LaserService {
    /// Builds a service from a validated configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, Error> {
        config.validate()?;
        let store = SampleStore::new(config.cell_size);
        let analyzer = Analyzer::new(config.analyzer)?;
        Ok(Self { config, store, analyzer })
    }

    /// Service with the stock tabletop-scan configuration.
    pub fn with_defaults() -> Self {
        // The default config always validates.
        match Self::new(ServiceConfig::default()) {
            Ok(service) => service,
            Err(_) => unreachable!("default configuration is valid"),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Number of occupied cells in the store.
    pub fn cell_count(&self) -> usize {
        self.store.len()
    }

    fn check_finite(sample: &PointSample) -> Result<(), Error> {
        if sample.is_finite() {
            Ok(())
        } else {
            Err(Error::NonFiniteSample {
                x: sample.x,
                y: sample.y,
                z: sample.z,
                distance: sample.distance,
            })
        }
    }

    /// Records one sample, echoing it back on success. Non-finite input is
    /// rejected without touching the store.
    pub fn add_sample(&mut self, x: f64, y: f64, z: f64, distance: f64) -> Result<PointSample, Error> {
        let sample = PointSample { x, y, z, distance };
        Self::check_finite(&sample)?;
        self.store.add_sample(x, y, z, distance);
        Ok(sample)
    }

    /// Records a batch of samples and returns the resulting snapshot.
    ///
    /// The whole batch is validated up front: on a bad sample nothing is
    /// applied, so a rejection never leaves a partial mutation behind.
    pub fn add_samples(&mut self, samples: &[PointSample]) -> Result<PointCloud, Error> {
        for sample in samples {
            Self::check_finite(sample)?;
        }
        for sample in samples {
            self.store.add_sample(sample.x, sample.y, sample.z, sample.distance);
        }
        debug!("add_samples: {} samples, {} cells occupied", samples.len(), self.store.len());
        Ok(self.pointcloud())
    }

    /// Empties the store.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Current snapshot with units and resolution attached.
    pub fn pointcloud(&self) -> PointCloud {
        PointCloud {
            units: self.config.units.clone(),
            cell_size: self.store.cell_size(),
            points: self.store.snapshot(),
        }
    }

    /// Current snapshot as an ASCII PLY document.
    pub fn pointcloud_ply(&self) -> String {
        export_ply(&self.config.units, self.store.cell_size(), &self.store.snapshot())
    }

    /// Segments the current snapshot into base plane and objects.
    pub fn analyze(&self) -> Analysis {
        let segmentation = self.analyzer.analyze(&self.store.snapshot());
        Analysis {
            units: self.config.units.clone(),
            points: segmentation.points,
            objects: segmentation.objects,
            plane: segmentation.plane,
        }
    }

    /// Replaces the map with `n` uniform random samples in [-1, 1]^3, each
    /// with distance = |(x, y, z)|. Demo helper, not tied to any scene.
    pub fn demo_cloud(&mut self, n: usize) -> PointCloud {
        let mut rng = rand::thread_rng();
        self.store.clear();
        for _ in 0..n {
            let x = rng.gen_range(-1.0..1.0);
            let y = rng.gen_range(-1.0..1.0);
            let z = rng.gen_range(-1.0..1.0);
            let distance = f64::sqrt(x * x + y * y + z * z);
            self.store.add_sample(x, y, z, distance);
        }
        self.pointcloud()
    }
}
