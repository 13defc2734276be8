//! Last-sample-per-cell aggregation over the scanned footprint.
//!
//! The XZ plane is discretised into `cell_size`-wide cells; each cell holds
//! only the most recent observation that landed in it. Rescanning a changed
//! region overwrites the stale cells in place, so moved or removed objects
//! fade out without an explicit invalidation pass. Memory is bounded by the
//! number of occupied cells, never by the number of samples received.

mod ply;

pub use ply::export_ply;

use std::collections::HashMap;
use std::time::Instant;

use crate::types::PointSample;

/// Integer cell index in the XZ plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub ix: i64,
    pub iz: i64,
}

/// The last observation seen in one cell. Never averaged, only replaced.
#[derive(Clone, Copy, Debug)]
pub struct CellSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub distance: f64,
    pub timestamp: Instant,
}

/// Heightmap-style sample store keyed by quantised XZ position.
///
/// Assumes already-validated (finite) input; the service boundary rejects
/// non-finite samples before they reach the store.
#[derive(Debug)]
pub struct SampleStore {
    cell_size: f64,
    cells: HashMap<CellKey, CellSample>,
}

impl SampleStore {
    /// Creates an empty store with the given XZ resolution (`cell_size > 0`,
    /// enforced by config validation).
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn cell_index(&self, x: f64, z: f64) -> CellKey {
        CellKey {
            ix: (x / self.cell_size).floor() as i64,
            iz: (z / self.cell_size).floor() as i64,
        }
    }

    /// Records a sample in its cell, replacing whatever was there before.
    pub fn add_sample(&mut self, x: f64, y: f64, z: f64, distance: f64) {
        let key = self.cell_index(x, z);
        self.cells.insert(
            key,
            CellSample {
                x,
                y,
                z,
                distance,
                timestamp: Instant::now(),
            },
        );
    }

    /// Drops every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Materialises one point per occupied cell, in unspecified order.
    ///
    /// The returned vector is detached from the store; later writes do not
    /// affect it.
    pub fn snapshot(&self) -> Vec<PointSample> {
        self.cells
            .values()
            .map(|cell| PointSample {
                x: cell.x,
                y: cell.y,
                z: cell.z,
                distance: cell.distance,
            })
            .collect()
    }
}
