use laser_mapper::LaserService;

fn main() {
    // Demo stub: scans a synthetic tabletop with one raised block and runs
    // the segmentation pipeline.
    let mut service = LaserService::with_defaults();

    for i in 0..40 {
        for j in 0..40 {
            let x = i as f64 * 0.02 - 0.4;
            let z = j as f64 * 0.02 - 0.4;
            let on_block = (0.0..0.1).contains(&x) && (0.0..0.1).contains(&z);
            let y = if on_block { 0.15 } else { 0.0 };
            let distance = (x * x + y * y + z * z).sqrt();
            if let Err(err) = service.add_sample(x, y, z, distance) {
                eprintln!("sample rejected: {err}");
            }
        }
    }

    let analysis = service.analyze();
    let base = analysis.points.iter().filter(|p| p.label == 0).count();
    println!(
        "cells={} base_points={} objects={}",
        service.cell_count(),
        base,
        analysis.objects.len()
    );
    for obj in &analysis.objects {
        println!(
            "object {}: {} points, bbox [{:.3} {:.3} {:.3}] .. [{:.3} {:.3} {:.3}]",
            obj.label,
            obj.num_points,
            obj.bbox_min[0],
            obj.bbox_min[1],
            obj.bbox_min[2],
            obj.bbox_max[0],
            obj.bbox_max[1],
            obj.bbox_max[2]
        );
    }
}
