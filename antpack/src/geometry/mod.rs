mod bin_size;
mod rectangle;

/// Traits shared by the geometric primitives
pub mod geo_traits;

#[doc(inline)]
pub use bin_size::BinSize;
#[doc(inline)]
pub use rectangle::Rectangle;
#[doc(inline)]
pub use rectangle::overlaps;
