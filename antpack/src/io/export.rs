use std::time::Instant;

use itertools::Itertools;

use crate::entities::Instance;
use crate::fitness::fitness;
use crate::geometry::Rectangle;
use crate::geometry::geo_traits::Shape;
use crate::io::ext_repr::{ExtBin, ExtInstance, ExtItem, ExtRect, ExtSolution};

/// Exports a packing of `instance`, found at `time_stamp`, into its external representation.
/// The run time is measured from `epoch`.
pub fn export(
    instance: &Instance,
    packed: &[Rectangle],
    unplaced: &[Rectangle],
    time_stamp: Instant,
    epoch: Instant,
) -> ExtSolution {
    let packed_area: u64 = packed.iter().map(|r| r.area()).sum();
    ExtSolution {
        fitness: fitness(packed, unplaced, &instance.bin),
        density: packed_area as f64 / instance.bin.area() as f64,
        packed: packed.iter().map(export_rect).collect_vec(),
        unplaced: unplaced.iter().map(export_rect).collect_vec(),
        run_time_sec: time_stamp.saturating_duration_since(epoch).as_secs(),
    }
}

/// Exports the instance in its canonical order, one entry per item
pub fn export_instance(instance: &Instance) -> ExtInstance {
    ExtInstance {
        name: instance.name.clone(),
        bin: ExtBin {
            width: instance.bin.width,
            height: instance.bin.height,
        },
        items: instance
            .items
            .items()
            .iter()
            .map(|item| ExtItem {
                width: item.width,
                height: item.height,
                demand: 1,
            })
            .collect_vec(),
    }
}

fn export_rect(r: &Rectangle) -> ExtRect {
    ExtRect {
        item_id: r.item_id,
        x: r.x,
        y: r.y,
        width: r.width,
        height: r.height,
        rotated: r.rotated,
    }
}
