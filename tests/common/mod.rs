use laser_mapper::PointSample;

/// Scatters `nx * nz` samples on the y=0 plane over a `spacing`-pitched grid.
pub fn flat_scatter(nx: usize, nz: usize, spacing: f64) -> Vec<PointSample> {
    assert!(nx > 0 && nz > 0, "grid dimensions must be positive");
    let mut points = Vec::with_capacity(nx * nz);
    for i in 0..nx {
        for j in 0..nz {
            let x = i as f64 * spacing;
            let z = j as f64 * spacing;
            points.push(PointSample { x, y: 0.0, z, distance: (x * x + z * z).sqrt() });
        }
    }
    points
}

/// Five samples at height `y`, packed within 0.02 of (cx, cz) in XZ.
pub fn raised_blob(cx: f64, y: f64, cz: f64) -> Vec<PointSample> {
    [
        (cx, cz),
        (cx + 0.02, cz),
        (cx - 0.02, cz),
        (cx, cz + 0.02),
        (cx, cz - 0.02),
    ]
    .into_iter()
    .map(|(x, z)| PointSample { x, y, z, distance: (x * x + y * y + z * z).sqrt() })
    .collect()
}
