use std::fmt::Write;

use crate::types::PointSample;

/// Formats a snapshot as an ASCII PLY document, one vertex per cell.
pub fn export_ply(units: &str, cell_size: f64, points: &[PointSample]) -> String {
    let mut out = String::new();
    // writeln! to a String cannot fail.
    let _ = writeln!(out, "ply");
    let _ = writeln!(out, "format ascii 1.0");
    let _ = writeln!(out, "comment units={units}");
    let _ = writeln!(out, "comment cell_size={cell_size}");
    let _ = writeln!(out, "element vertex {}", points.len());
    let _ = writeln!(out, "property float x");
    let _ = writeln!(out, "property float y");
    let _ = writeln!(out, "property float z");
    let _ = writeln!(out, "property float distance");
    let _ = writeln!(out, "end_header");
    for p in points {
        let _ = writeln!(out, "{} {} {} {}", p.x, p.y, p.z, p.distance);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::export_ply;
    use crate::types::PointSample;

    #[test]
    fn header_layout() {
        let ply = export_ply("meters", 0.02, &[]);
        let expected = "ply\n\
                        format ascii 1.0\n\
                        comment units=meters\n\
                        comment cell_size=0.02\n\
                        element vertex 0\n\
                        property float x\n\
                        property float y\n\
                        property float z\n\
                        property float distance\n\
                        end_header\n";
        assert_eq!(ply, expected);
    }

    #[test]
    fn one_line_per_point_after_end_header() {
        let points = vec![
            PointSample { x: 0.1, y: 0.2, z: 0.3, distance: 0.5 },
            PointSample { x: 1.0, y: 2.0, z: 3.0, distance: 4.0 },
            PointSample { x: -0.5, y: 0.0, z: 0.25, distance: 0.75 },
        ];
        let ply = export_ply("mm", 0.05, &points);

        assert!(ply.contains("element vertex 3\n"));
        let body: Vec<&str> = ply
            .split("end_header\n")
            .nth(1)
            .expect("header terminator")
            .lines()
            .collect();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0], "0.1 0.2 0.3 0.5");
    }
}
