//! Base-plane estimation from the lowest slice of the cloud.

use log::debug;
use nalgebra::{Matrix3, Vector3};

use crate::types::{Plane, PointSample};

const JACOBI_MAX_SWEEPS: usize = 32;
const JACOBI_OFF_EPS: f64 = 1e-24;

/// Fits the dominant supporting plane to the points at or below the
/// `percentile` quantile of y. Falls back to the full set when the slice is
/// too small to define a plane.
///
/// Returns `None` only when fewer than 3 points are available in total.
pub(crate) fn fit_base_plane(points: &[PointSample], percentile: f64) -> Option<Plane> {
    if points.len() < 3 {
        return None;
    }

    let threshold = y_quantile(points, percentile);
    let mut subset: Vec<Vector3<f64>> = points
        .iter()
        .filter(|p| p.y <= threshold)
        .map(|p| p.position())
        .collect();
    if subset.len() < 3 {
        debug!(
            "plane fit: only {} points below y-quantile {:.4}, using full cloud",
            subset.len(),
            threshold
        );
        subset = points.iter().map(|p| p.position()).collect();
    }

    let centroid = subset.iter().sum::<Vector3<f64>>() / subset.len() as f64;
    let mut cov = Matrix3::zeros();
    for p in &subset {
        let c = p - centroid;
        cov += c * c.transpose();
    }
    cov /= subset.len() as f64;

    let (eigenvalues, eigenvectors) = symmetric_eigen(&cov);
    let mut min_idx = 0;
    for i in 1..3 {
        if eigenvalues[i] < eigenvalues[min_idx] {
            min_idx = i;
        }
    }

    let mut normal: Vector3<f64> = eigenvectors.column(min_idx).into_owned();
    let norm = normal.norm();
    if norm > 0.0 {
        normal /= norm;
    }
    if normal.y < 0.0 {
        normal = -normal;
    }

    Some(Plane {
        normal,
        d: -normal.dot(&centroid),
    })
}

/// Linear-interpolated quantile of the y coordinates, `q` in [0, 1].
fn y_quantile(points: &[PointSample], q: f64) -> f64 {
    let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    ys.sort_by(|a, b| a.total_cmp(b));

    let pos = q * (ys.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        ys[lo]
    } else {
        ys[lo] + (ys[hi] - ys[lo]) * (pos - lo as f64)
    }
}

/// Eigen-decomposition of a symmetric 3x3 matrix by cyclic Jacobi rotations.
///
/// Returns (eigenvalues, eigenvectors), eigenvector i in column i. The sweep
/// order is fixed, so the result is deterministic for a given input; on a
/// degenerate (repeated-eigenvalue) input the first of the equal eigenvalues
/// in index order wins the smallest-eigenvalue selection above.
fn symmetric_eigen(m: &Matrix3<f64>) -> (Vector3<f64>, Matrix3<f64>) {
    let mut a = *m;
    let mut v = Matrix3::identity();

    for _ in 0..JACOBI_MAX_SWEEPS {
        let off = a[(0, 1)] * a[(0, 1)] + a[(0, 2)] * a[(0, 2)] + a[(1, 2)] * a[(1, 2)];
        if off <= JACOBI_OFF_EPS {
            break;
        }
        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            let apq = a[(p, q)];
            if apq == 0.0 {
                continue;
            }
            let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
            let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
            let c = 1.0 / (t * t + 1.0).sqrt();
            let s = t * c;

            let mut rot = Matrix3::identity();
            rot[(p, p)] = c;
            rot[(q, q)] = c;
            rot[(p, q)] = s;
            rot[(q, p)] = -s;

            a = rot.transpose() * a * rot;
            v *= rot;
        }
    }

    (Vector3::new(a[(0, 0)], a[(1, 1)], a[(2, 2)]), v)
}
