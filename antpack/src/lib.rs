//! Building blocks for packing axis-aligned rectangles into a single bin.
//!
//! Items are immutable specifications, identified by their index in an [`entities::ItemSet`].
//! Everything that moves or rotates is a [`geometry::Rectangle`], a placement record derived from an item.

/// Geometric primitives and the overlap predicate
pub mod geometry;

/// Items, item sets, bins and layouts
pub mod entities;

/// Bottom-left placement search with rotation fallback
pub mod placement;

/// Scoring of (partial) packings
pub mod fitness;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
