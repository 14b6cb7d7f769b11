use anyhow::{Result, ensure};
use itertools::Itertools;

use crate::entities::{Instance, ItemSet};
use crate::geometry::BinSize;
use crate::io::ext_repr::ExtInstance;

/// Imports an instance into the library, expanding demands and sorting the items by descending area
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let bin = BinSize::try_new(ext_instance.bin.width, ext_instance.bin.height)?;

    for (i, ext_item) in ext_instance.items.iter().enumerate() {
        ensure!(
            ext_item.width > 0 && ext_item.height > 0,
            "item {i} should have strictly positive dimensions, got {}x{}",
            ext_item.width,
            ext_item.height
        );
    }

    let dimensions = ext_instance
        .items
        .iter()
        .flat_map(|ext_item| {
            std::iter::repeat_n((ext_item.width, ext_item.height), ext_item.demand as usize)
        })
        .collect_vec();

    ensure!(
        !dimensions.is_empty(),
        "instance {} should contain at least one item",
        ext_instance.name
    );

    Ok(Instance::new(
        ext_instance.name.clone(),
        ItemSet::new(dimensions),
        bin,
    ))
}
