use crate::geometry::geo_traits::Shape;

/// Immutable specification of a rectangle to be packed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    /// Position of the item in its [`ItemSet`](crate::entities::ItemSet)
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

impl Shape for Item {
    fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
