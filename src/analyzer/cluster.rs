//! Density-based clustering of object candidates in the XZ projection.
//!
//! Objects are told apart by where they stand on the base surface, so the
//! neighbourhood metric ignores y and the sensor distance entirely. The rule
//! is the classic DBSCAN one: a point whose closed `eps`-ball contains at
//! least `min_samples` points (itself included) is a core point, clusters are
//! the density-reachable components of core points, and everything else is
//! noise.

use std::collections::HashMap;

use log::debug;

/// Grid-bucket index over 2D points, bucket width = query radius.
///
/// A radius query then only has to scan the 3x3 block of buckets around the
/// query point. Output is identical to the naive all-pairs scan.
struct XzIndex<'a> {
    coords: &'a [[f64; 2]],
    inv_cell: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> XzIndex<'a> {
    fn new(coords: &'a [[f64; 2]], eps: f64) -> Self {
        let inv_cell = 1.0 / eps;
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (i, c) in coords.iter().enumerate() {
            buckets
                .entry(Self::bucket_of(c, inv_cell))
                .or_default()
                .push(i);
        }
        Self { coords, inv_cell, buckets }
    }

    fn bucket_of(c: &[f64; 2], inv_cell: f64) -> (i64, i64) {
        ((c[0] * inv_cell).floor() as i64, (c[1] * inv_cell).floor() as i64)
    }

    /// Indices within the closed ball of radius `eps` around point `idx`,
    /// the point itself included.
    fn neighbors(&self, idx: usize, eps: f64, out: &mut Vec<usize>) {
        out.clear();
        let center = &self.coords[idx];
        let (bx, bz) = Self::bucket_of(center, self.inv_cell);
        let eps2 = eps * eps;
        for dx in -1..=1 {
            for dz in -1..=1 {
                let Some(bucket) = self.buckets.get(&(bx + dx, bz + dz)) else {
                    continue;
                };
                for &j in bucket {
                    let ddx = self.coords[j][0] - center[0];
                    let ddz = self.coords[j][1] - center[1];
                    if ddx * ddx + ddz * ddz <= eps2 {
                        out.push(j);
                    }
                }
            }
        }
    }
}

/// Clusters 2D points by density reachability.
///
/// Returns one entry per point: `Some(cluster_id)` with ids assigned 0-based
/// in discovery order, or `None` for noise. Deterministic for a given input
/// order.
pub(crate) fn cluster_xz(
    coords: &[[f64; 2]],
    eps: f64,
    min_samples: usize,
) -> Vec<Option<u32>> {
    let n = coords.len();
    let mut labels: Vec<Option<u32>> = vec![None; n];
    if n == 0 {
        return labels;
    }

    let index = XzIndex::new(coords, eps);
    let mut visited = vec![false; n];
    let mut queued = vec![false; n];
    let mut neighbors = Vec::new();
    let mut seeds: Vec<usize> = Vec::new();
    let mut cluster_id: u32 = 0;

    for i in 0..n {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        index.neighbors(i, eps, &mut neighbors);
        if neighbors.len() < min_samples {
            // Noise for now; a later cluster may still absorb it as a border
            // point.
            continue;
        }

        labels[i] = Some(cluster_id);
        seeds.clear();
        for &j in &neighbors {
            if !queued[j] {
                queued[j] = true;
                seeds.push(j);
            }
        }

        while let Some(j) = seeds.pop() {
            queued[j] = false;
            if !visited[j] {
                visited[j] = true;
                index.neighbors(j, eps, &mut neighbors);
                if neighbors.len() >= min_samples {
                    for &k in &neighbors {
                        if !queued[k] && (!visited[k] || labels[k].is_none()) {
                            queued[k] = true;
                            seeds.push(k);
                        }
                    }
                }
            }
            if labels[j].is_none() {
                labels[j] = Some(cluster_id);
            }
        }

        cluster_id += 1;
    }

    debug!("clustering: {} points, {} clusters", n, cluster_id);
    labels
}

#[cfg(test)]
mod tests {
    use super::cluster_xz;

    /// Five points packed within a small radius around (cx, cz).
    fn blob(cx: f64, cz: f64) -> Vec<[f64; 2]> {
        vec![
            [cx, cz],
            [cx + 0.02, cz],
            [cx - 0.02, cz],
            [cx, cz + 0.02],
            [cx, cz - 0.02],
        ]
    }

    #[test]
    fn single_blob_forms_one_cluster() {
        let coords = blob(0.0, 0.0);
        let labels = cluster_xz(&coords, 0.08, 5);
        assert!(labels.iter().all(|l| *l == Some(0)));
    }

    #[test]
    fn separated_blobs_get_distinct_ids_in_discovery_order() {
        let mut coords = blob(0.0, 0.0);
        coords.extend(blob(1.0, 1.0));
        let labels = cluster_xz(&coords, 0.08, 5);
        assert!(labels[..5].iter().all(|l| *l == Some(0)));
        assert!(labels[5..].iter().all(|l| *l == Some(1)));
    }

    #[test]
    fn sparse_points_are_noise() {
        let coords = vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]];
        let labels = cluster_xz(&coords, 0.08, 2);
        assert!(labels.iter().all(|l| l.is_none()));
    }

    #[test]
    fn boundary_distance_is_inside_the_ball() {
        // Exactly eps apart: the closed-ball rule keeps them neighbours.
        let coords = vec![[0.0, 0.0], [0.08, 0.0]];
        let labels = cluster_xz(&coords, 0.08, 2);
        assert_eq!(labels[0], Some(0));
        assert_eq!(labels[1], Some(0));
    }

    #[test]
    fn chain_is_density_reachable_through_core_points() {
        // A line of points spaced 0.05 apart with eps 0.08 and min_samples 2:
        // every point is core, the whole chain is one cluster even though the
        // endpoints are far apart.
        let coords: Vec<[f64; 2]> = (0..20).map(|i| [i as f64 * 0.05, 0.0]).collect();
        let labels = cluster_xz(&coords, 0.08, 2);
        assert!(labels.iter().all(|l| *l == Some(0)));
    }

    #[test]
    fn border_point_joins_but_does_not_bridge() {
        // Two dense blobs with one lone point between them, too far from
        // either to be within eps: the blobs stay separate and the middle
        // point stays noise.
        let mut coords = blob(0.0, 0.0);
        coords.push([0.5, 0.0]);
        coords.extend(blob(1.0, 0.0));
        let labels = cluster_xz(&coords, 0.08, 5);
        assert!(labels[..5].iter().all(|l| *l == Some(0)));
        assert_eq!(labels[5], None);
        assert!(labels[6..].iter().all(|l| *l == Some(1)));
    }

    #[test]
    fn empty_input_yields_empty_labels() {
        assert!(cluster_xz(&[], 0.08, 5).is_empty());
    }
}
