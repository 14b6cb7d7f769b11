/// Trait for types that can detect collisions between `self` and `other` of type `T`.
/// Touching boundaries are not considered a collision.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Area of the interior of the shape
    fn area(&self) -> u64;
}
