use std::fmt::{Display, Formatter};

use crate::entities::Item;
use crate::geometry::BinSize;
use crate::geometry::geo_traits::{CollidesWith, Shape};

/// An axis-aligned rectangle derived from an [`Item`], anchored at its bottom-left corner.
///
/// `width` and `height` are the dimensions in the current orientation.
/// `x` and `y` only carry meaning once the rectangle has been placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Index of the originating item in the item set
    pub item_id: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Whether the rectangle is rotated by 90° with respect to its item
    pub rotated: bool,
}

impl Rectangle {
    pub fn new(item_id: usize, width: u32, height: u32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "invalid Rectangle, width: {width}, height: {height}"
        );
        Rectangle {
            item_id,
            x: 0,
            y: 0,
            width,
            height,
            rotated: false,
        }
    }

    /// Unplaced rectangle in the item's original orientation
    pub fn from_item(item: &Item) -> Self {
        Rectangle::new(item.id, item.width, item.height)
    }

    /// Swaps width and height, toggling `rotated`. Rotating twice is the identity.
    pub fn rotate(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotated = !self.rotated;
    }

    /// Copy of the rectangle moved to `(x, y)`
    pub fn at(self, x: u32, y: u32) -> Self {
        Rectangle { x, y, ..self }
    }

    pub fn x_max(&self) -> u32 {
        self.x + self.width
    }

    pub fn y_max(&self) -> u32 {
        self.y + self.height
    }

    /// Whether the rectangle, in its current orientation, fits inside an empty bin
    pub fn fits_in(&self, bin: &BinSize) -> bool {
        self.width <= bin.width && self.height <= bin.height
    }

    /// Whether the rectangle lies completely within the bin at its current position
    pub fn is_within(&self, bin: &BinSize) -> bool {
        self.x_max() <= bin.width && self.y_max() <= bin.height
    }

    /// `(x, y, width, height)`
    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl CollidesWith<Rectangle> for Rectangle {
    #[inline(always)]
    fn collides_with(&self, other: &Rectangle) -> bool {
        !(self.x_max() <= other.x
            || self.x >= other.x_max()
            || self.y_max() <= other.y
            || self.y >= other.y_max())
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Returns true if the interiors of `a` and `b` intersect. Shared edges do not count as overlap.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    a.collides_with(b)
}
