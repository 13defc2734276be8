#![doc = include_str!("../README.md")]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

mod service;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{Analyzer, AnalyzerParams};
pub use crate::config::{load_config, ServiceConfig};
pub use crate::error::Error;
pub use crate::service::LaserService;
pub use crate::store::SampleStore;
pub use crate::types::{
    Analysis, ObjectInfo, Plane, PointCloud, PointSample, Segmentation, SegmentedPoint,
};

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::{Analyzer, AnalyzerParams, LaserService, PointSample, ServiceConfig};
}
