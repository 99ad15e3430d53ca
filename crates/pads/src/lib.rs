pub mod bounds;
pub mod pad;
pub mod point;

pub use bounds::Bounds;
pub use pad::Pad;
pub use point::Point;
