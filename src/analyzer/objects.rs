//! Per-object statistics over the labelled cloud.

use std::collections::BTreeMap;

use crate::types::{ObjectInfo, PointSample};

/// Computes point counts and axis-aligned bounding boxes per non-zero label.
///
/// Label 0 (base/noise) is excluded. The BTreeMap walk yields the output in
/// ascending label order.
pub(crate) fn summarize_objects(points: &[PointSample], labels: &[u32]) -> Vec<ObjectInfo> {
    let mut boxes: BTreeMap<u32, ObjectInfo> = BTreeMap::new();
    for (p, &label) in points.iter().zip(labels) {
        if label == 0 {
            continue;
        }
        let entry = boxes.entry(label).or_insert(ObjectInfo {
            label,
            num_points: 0,
            bbox_min: [f64::INFINITY; 3],
            bbox_max: [f64::NEG_INFINITY; 3],
        });
        entry.num_points += 1;
        let coords = [p.x, p.y, p.z];
        for axis in 0..3 {
            entry.bbox_min[axis] = entry.bbox_min[axis].min(coords[axis]);
            entry.bbox_max[axis] = entry.bbox_max[axis].max(coords[axis]);
        }
    }
    boxes.into_values().collect()
}
