use anyhow::Result;
use antpack::entities::{Instance, ItemSet};
use antpack::geometry::BinSize;
use itertools::Itertools;
use log::info;
use rand::Rng;

use crate::config::InstanceGenConfig;

/// Generates an instance of `n_items` rectangles with uniformly drawn dimensions within the configured bounds
pub fn generate_instance(config: &InstanceGenConfig, rng: &mut impl Rng) -> Result<Instance> {
    config.validate()?;
    let bin = BinSize::try_new(config.bin_width, config.bin_height)?;

    let dimensions = (0..config.n_items)
        .map(|_| {
            let w = rng.random_range(config.min_width..=config.max_width);
            let h = rng.random_range(config.min_height..=config.max_height);
            (w, h)
        })
        .collect_vec();

    let instance = Instance::new(
        format!("random_{}", config.n_items),
        ItemSet::new(dimensions),
        bin,
    );
    info!(
        "[GEN] generated {} items with a total area of {} for a {}x{} bin",
        instance.items.len(),
        instance.items.total_area(),
        bin.width,
        bin.height
    );
    Ok(instance)
}
