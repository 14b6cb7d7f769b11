use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::Shape;

/// Dimensions of the single bin in which all rectangles are packed. Constant for a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinSize {
    pub width: u32,
    pub height: u32,
}

impl BinSize {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "invalid BinSize, width: {width}, height: {height}"
        );
        BinSize { width, height }
    }

    pub fn try_new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "bin dimensions should be strictly positive, got {width}x{height}"
        );
        Ok(BinSize { width, height })
    }
}

impl Shape for BinSize {
    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
