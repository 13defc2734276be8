use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One aggregated observation, as exposed by a store snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
}

impl PointSample {
    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// True when every coordinate and the range reading are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.distance.is_finite()
    }
}

/// Plane in Hessian normal form: `normal · p + d = 0`, with `normal.y >= 0`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    /// Signed distance from `p` to the plane.
    pub fn signed_distance(&self, p: &Vector3<f64>) -> f64 {
        self.normal.dot(p) + self.d
    }
}

/// A snapshot point with its segmentation label.
///
/// Label 0 marks the base surface (or unclustered noise); labels 1..=K
/// identify the discrete objects found by the current analysis call.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct SegmentedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
    pub label: u32,
}

/// Per-object statistics: point count and axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ObjectInfo {
    pub label: u32,
    pub num_points: usize,
    pub bbox_min: [f64; 3],
    pub bbox_max: [f64; 3],
}

/// Snapshot of the store, annotated with display units and resolution.
#[derive(Clone, Debug, Serialize)]
pub struct PointCloud {
    pub units: String,
    pub cell_size: f64,
    pub points: Vec<PointSample>,
}

/// Output of one segmentation pass over a snapshot.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Segmentation {
    pub points: Vec<SegmentedPoint>,
    pub objects: Vec<ObjectInfo>,
    pub plane: Option<Plane>,
}

/// A [`Segmentation`] annotated with the service's display units.
#[derive(Clone, Debug, Serialize)]
pub struct Analysis {
    pub units: String,
    pub points: Vec<SegmentedPoint>,
    pub objects: Vec<ObjectInfo>,
    pub plane: Option<Plane>,
}
