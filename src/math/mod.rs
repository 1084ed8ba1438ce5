pub mod point;
pub mod color;

pub use point::Point;
pub use color::{Color, packed_to_css};
